//! Playback Events
//!
//! Every controller operation reports what happened as a [`PlaybackEvent`]
//! handed to an [`EventSink`]. The containers themselves never report
//! anything; callers decide where status lines go (console, log, test
//! buffer).

use crate::types::Song;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// A song started playing
    NowPlaying {
        /// Playlist index of the song
        index: usize,
        song: Song,
    },

    /// Paused song picked up again
    Resumed { index: usize },

    /// Playing song was paused
    Paused { index: usize },

    /// Pause requested while nothing was playing
    NothingToPause,

    /// Operation needed songs but the playlist has none
    PlaylistEmpty,

    /// Previous requested with no earlier song in history
    NoPreviousSong,

    /// Song added to the pending queue
    Queued { index: usize, title: String },

    /// Queue request rejected
    InvalidIndex { index: usize },

    /// Head of the pending queue dropped without playing it
    RemovedFromQueue { index: usize, title: String },

    /// Removal requested from an empty queue
    QueueEmpty,

    /// Shuffle flag flipped
    ShuffleChanged { enabled: bool },
}

impl fmt::Display for PlaybackEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackEvent::NowPlaying { song, .. } => write!(f, "Now Playing: {song}"),
            PlaybackEvent::Resumed { .. } => f.write_str("Resuming..."),
            PlaybackEvent::Paused { .. } => f.write_str("Playback paused"),
            PlaybackEvent::NothingToPause => f.write_str("Nothing to pause"),
            PlaybackEvent::PlaylistEmpty => f.write_str("Playlist is empty!"),
            PlaybackEvent::NoPreviousSong => f.write_str("No previous song to play!"),
            PlaybackEvent::Queued { title, .. } => {
                write!(f, "Song added to the queue: {title}")
            }
            PlaybackEvent::InvalidIndex { .. } => f.write_str("Invalid song index!"),
            PlaybackEvent::RemovedFromQueue { title, .. } => {
                write!(f, "Song removed from queue: {title}")
            }
            PlaybackEvent::QueueEmpty => f.write_str("The queue is empty!"),
            PlaybackEvent::ShuffleChanged { enabled } => write!(
                f,
                "Shuffle mode {}",
                if *enabled { "enabled" } else { "disabled" }
            ),
        }
    }
}

/// Destination for playback status events
pub trait EventSink {
    fn emit(&mut self, event: PlaybackEvent);
}

/// Discards every event
impl EventSink for () {
    fn emit(&mut self, _event: PlaybackEvent) {}
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: PlaybackEvent) {
        (**self).emit(event);
    }
}

/// Records events in order, for inspection after the fact
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Vec<PlaybackEvent>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[PlaybackEvent] {
        &self.events
    }

    pub fn last(&self) -> Option<&PlaybackEvent> {
        self.events.last()
    }

    /// Status lines rendered from the recorded events
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    /// Take all recorded events, leaving the sink empty
    pub fn drain(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for MemorySink {
    fn emit(&mut self, event: PlaybackEvent) {
        self.events.push(event);
    }
}

/// Writes each status line to the `tracing` log
///
/// Rejections (empty playlist, bad index, ...) go out at `warn`, everything
/// else at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: PlaybackEvent) {
        match event {
            PlaybackEvent::NothingToPause
            | PlaybackEvent::PlaylistEmpty
            | PlaybackEvent::NoPreviousSong
            | PlaybackEvent::InvalidIndex { .. }
            | PlaybackEvent::QueueEmpty => tracing::warn!("{}", event),
            _ => tracing::info!("{}", event),
        }
    }
}
