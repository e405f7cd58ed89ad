//! Carousel - Playback Control
//!
//! Playback control over a song collection, built from three linked
//! containers:
//! - Playlist: circular doubly-linked list of songs (wraps at the end)
//! - Pending queue: singly-linked FIFO of "play next" requests
//! - History: singly-linked stack of played songs, for "previous"
//!
//! [`PlaybackController`] composes them into a play/pause/next/previous
//! state machine with shuffle and queue management.
//!
//! # Architecture
//!
//! The containers are pure data structures: no I/O, no logging of status
//! lines. The controller reports every outcome as a [`PlaybackEvent`] to an
//! [`EventSink`] supplied by the caller, and shuffle draws from a seedable
//! generator owned by the controller so runs can be reproduced.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use carousel_playback::{MemorySink, PlaybackController, Playlist, Song};
//!
//! let playlist: Playlist = vec![
//!     Song::new("Song1", "Artist1", 200),
//!     Song::new("Song2", "Artist2", 180),
//!     Song::new("Song3", "Artist3", 210),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mut controller = PlaybackController::new(playlist, MemorySink::new());
//!
//! controller.play().unwrap();
//! controller.next_song().unwrap();
//! controller.previous_song().unwrap();
//!
//! assert_eq!(controller.current_index(), Some(0));
//! assert_eq!(
//!     controller.sink().lines()[1],
//!     "Now Playing: Song2 by Artist2 [180s]"
//! );
//! ```
//!
//! # Example: Queue and Shuffle
//!
//! ```rust
//! use carousel_playback::{PlaybackConfig, PlaybackController, Playlist, Song};
//!
//! let playlist: Playlist = (1..=4)
//!     .map(|i| Song::new(format!("Song{i}"), format!("Artist{i}"), 200))
//!     .collect();
//!
//! let config = PlaybackConfig { shuffle: true, seed: Some(1) };
//! let mut controller = PlaybackController::with_config(playlist, (), &config);
//!
//! // Queued songs pre-empt shuffle
//! controller.add_to_queue(3).unwrap();
//! assert_eq!(controller.next_song(), Ok(3));
//!
//! // Shuffle picks always land inside the playlist
//! let index = controller.next_song().unwrap();
//! assert!(index < 4);
//! ```

mod controller;
mod error;
mod events;
mod history;
mod playlist;
mod queue;
pub mod types;

// Public exports
pub use controller::PlaybackController;
pub use error::{Container, PlaybackError, Result};
pub use events::{EventSink, MemorySink, PlaybackEvent, TracingSink};
pub use history::{History, HistoryIter};
pub use playlist::{Iter, NodeId, Playlist, PlaylistNode};
pub use queue::{PendingQueue, QueueIter};
pub use types::{PlaybackConfig, PlaybackState, Song};
