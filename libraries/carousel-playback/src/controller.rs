//! Playback controller - core orchestration
//!
//! Composes the playlist, pending queue and history into a small state
//! machine:
//!
//! ```text
//!   Empty ──add_song──▶ Stopped ──play/next──▶ Playing ◀──play── Paused
//!                                                 │                 ▲
//!                                                 └──────pause──────┘
//! ```
//!
//! Song selection for `next_song` is queue first, then shuffle, then the
//! structurally next node in the playlist cycle.

use crate::{
    error::{Container, PlaybackError, Result},
    events::{EventSink, PlaybackEvent},
    history::History,
    playlist::{NodeId, Playlist},
    queue::PendingQueue,
    types::{PlaybackConfig, PlaybackState, Song},
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Central playback control
///
/// Owns the playlist, the "play next" queue, the play history and the
/// shuffle generator. Every operation reports its outcome to the sink `S`
/// and also returns it as a [`Result`]; a failed operation changes nothing.
pub struct PlaybackController<S: EventSink = ()> {
    // Containers
    playlist: Playlist,
    queue: PendingQueue,
    history: History,

    // State
    current: Option<NodeId>,
    paused: bool,
    shuffle: bool,

    rng: StdRng,
    sink: S,
}

impl<S: EventSink> PlaybackController<S> {
    /// Create a controller with default settings and an OS-seeded shuffle
    pub fn new(playlist: Playlist, sink: S) -> Self {
        Self::with_config(playlist, sink, &PlaybackConfig::default())
    }

    /// Create a controller from configuration
    pub fn with_config(playlist: Playlist, sink: S, config: &PlaybackConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut controller = Self::with_rng(playlist, sink, rng);
        controller.shuffle = config.shuffle;
        controller
    }

    /// Create a controller that draws shuffle picks from `rng`
    pub fn with_rng(playlist: Playlist, sink: S, rng: StdRng) -> Self {
        Self {
            playlist,
            queue: PendingQueue::new(),
            history: History::new(),
            current: None,
            paused: false,
            shuffle: false,
            rng,
            sink,
        }
    }

    // ===== Playback Control =====

    /// Start playback
    ///
    /// A queued song always wins. Otherwise the first song plays if nothing
    /// has played yet, a paused song resumes, and a playing song restarts.
    /// Returns the playlist index now playing.
    pub fn play(&mut self) -> Result<usize> {
        self.ensure_songs()?;

        if let Some(id) = self.take_queued()? {
            return self.start(id);
        }

        match self.current {
            None => {
                let head = self.playlist.id_at(0)?;
                self.start(head)
            }
            Some(id) if self.paused => {
                let (index, _) = self.lookup(id)?;
                self.paused = false;
                tracing::debug!(index, "Resumed playback");
                self.sink.emit(PlaybackEvent::Resumed { index });
                Ok(index)
            }
            Some(id) => self.start(id),
        }
    }

    /// Pause the playing song
    pub fn pause(&mut self) -> Result<()> {
        let state = self.state();
        let index = match (state, self.current_index()) {
            (PlaybackState::Playing, Some(index)) => index,
            _ => {
                self.sink.emit(PlaybackEvent::NothingToPause);
                return Err(PlaybackError::InvalidState(format!(
                    "cannot pause while {state:?}"
                )));
            }
        };

        self.paused = true;
        tracing::debug!(index, "Paused playback");
        self.sink.emit(PlaybackEvent::Paused { index });
        Ok(())
    }

    /// Skip to the next song
    ///
    /// Priority: queued song, then a random song when shuffling, then the
    /// song after the current one (wrapping at the end of the playlist).
    pub fn next_song(&mut self) -> Result<usize> {
        self.ensure_songs()?;

        let id = if let Some(id) = self.take_queued()? {
            id
        } else if self.shuffle {
            let index = self.rng.gen_range(0..self.playlist.len());
            tracing::debug!(index, "Shuffle pick");
            self.playlist.id_at(index)?
        } else {
            match self.current.and_then(|id| self.playlist.next(id)) {
                Some(next) => next,
                None => self.playlist.id_at(0)?,
            }
        };

        self.start(id)
    }

    /// Go back to the song played before the current one
    ///
    /// Unwinds one history entry. Going back never adds to history, so
    /// repeatedly stepping back and forth cannot grow it.
    pub fn previous_song(&mut self) -> Result<usize> {
        self.ensure_songs()?;

        let Some(index) = self.history.iter().nth(1) else {
            self.sink.emit(PlaybackEvent::NoPreviousSong);
            return Err(PlaybackError::InvalidState(
                "no previous song in history".to_string(),
            ));
        };
        let id = self.playlist.id_at(index)?;
        let (_, song) = self.lookup(id)?;

        self.history.pop()?;
        self.current = Some(id);
        self.paused = false;

        tracing::debug!(index, history_len = self.history.len(), "Stepped back");
        self.sink.emit(PlaybackEvent::NowPlaying { index, song });
        Ok(index)
    }

    /// Flip shuffle mode, returning the new setting
    pub fn toggle_shuffle(&mut self) -> bool {
        self.shuffle = !self.shuffle;
        tracing::debug!(enabled = self.shuffle, "Shuffle toggled");
        self.sink.emit(PlaybackEvent::ShuffleChanged {
            enabled: self.shuffle,
        });
        self.shuffle
    }

    // ===== Queue Management =====

    /// Request the song at `index` to play next
    pub fn add_to_queue(&mut self, index: usize) -> Result<()> {
        let len = self.playlist.len();
        let title = match self.playlist.get(index) {
            Ok(node) => node.song().title.clone(),
            Err(_) => {
                self.sink.emit(PlaybackEvent::InvalidIndex { index });
                return Err(PlaybackError::InvalidIndex { index, len });
            }
        };

        self.queue.enqueue(index);
        tracing::debug!(index, queue_len = self.queue.len(), "Queued song");
        self.sink.emit(PlaybackEvent::Queued { index, title });
        Ok(())
    }

    /// Drop the head of the queue without playing it
    ///
    /// Returns the playlist index that was removed.
    pub fn remove_from_queue(&mut self) -> Result<usize> {
        let index = match self.queue.peek() {
            Ok(index) => index,
            Err(err) => {
                self.sink.emit(PlaybackEvent::QueueEmpty);
                return Err(err);
            }
        };
        let title = self.playlist.get(index)?.song().title.clone();

        self.queue.dequeue()?;
        tracing::debug!(index, queue_len = self.queue.len(), "Removed queued song");
        self.sink.emit(PlaybackEvent::RemovedFromQueue { index, title });
        Ok(index)
    }

    // ===== Playlist =====

    /// Append a song to the playlist, returning its index
    ///
    /// Existing indices in the queue and history stay valid because the
    /// playlist only grows at the end.
    pub fn add_song(&mut self, song: Song) -> usize {
        self.playlist.append(song);
        self.playlist.len() - 1
    }

    // ===== State Queries =====

    pub fn state(&self) -> PlaybackState {
        if self.playlist.is_empty() {
            PlaybackState::Empty
        } else if self.current.is_none() {
            PlaybackState::Stopped
        } else if self.paused {
            PlaybackState::Paused
        } else {
            PlaybackState::Playing
        }
    }

    /// Playlist index of the current song
    pub fn current_index(&self) -> Option<usize> {
        self.current.and_then(|id| self.playlist.position(id))
    }

    pub fn current_song(&self) -> Option<&Song> {
        self.current.and_then(|id| self.playlist.song(id))
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffle
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn queue(&self) -> &PendingQueue {
        &self.queue
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    // ===== Internals =====

    fn ensure_songs(&mut self) -> Result<()> {
        if self.playlist.is_empty() {
            self.sink.emit(PlaybackEvent::PlaylistEmpty);
            return Err(PlaybackError::EmptyContainer(Container::Playlist));
        }
        Ok(())
    }

    /// Resolve and consume the queue head, if any
    ///
    /// The entry is only dequeued once it has resolved to a node.
    fn take_queued(&mut self) -> Result<Option<NodeId>> {
        let Ok(index) = self.queue.peek() else {
            return Ok(None);
        };
        let id = self.playlist.id_at(index)?;
        self.queue.dequeue()?;
        Ok(Some(id))
    }

    /// Make `id` the playing song and record it in history
    fn start(&mut self, id: NodeId) -> Result<usize> {
        let (index, song) = self.lookup(id)?;

        self.current = Some(id);
        self.paused = false;
        self.history.push(index);

        tracing::debug!(index, history_len = self.history.len(), "Now playing");
        self.sink.emit(PlaybackEvent::NowPlaying { index, song });
        Ok(index)
    }

    fn lookup(&self, id: NodeId) -> Result<(usize, Song)> {
        let len = self.playlist.len();
        self.playlist
            .position(id)
            .zip(self.playlist.song(id).cloned())
            .ok_or(PlaybackError::IndexOutOfRange { index: len, len })
    }
}
