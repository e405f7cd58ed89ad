//! Error types for playback control

use std::fmt;
use thiserror::Error;

/// Which container an operation found empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Playlist,
    Queue,
    History,
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Container::Playlist => "playlist",
            Container::Queue => "queue",
            Container::History => "history",
        };
        f.write_str(name)
    }
}

/// Playback errors
///
/// Every variant is recoverable. An operation that returns one of these has
/// left the playlist, queue and history exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// Read or remove requested from an empty container
    #[error("The {0} is empty")]
    EmptyContainer(Container),

    /// Playlist lookup outside `[0, len)`
    #[error("Index {index} out of range for playlist of {len} songs")]
    IndexOutOfRange { index: usize, len: usize },

    /// Song index rejected before it reached the queue
    #[error("Invalid song index {index} (playlist has {len} songs)")]
    InvalidIndex { index: usize, len: usize },

    /// Operation not allowed in the current playback state
    #[error("Invalid operation: {0}")]
    InvalidState(String),
}

impl PlaybackError {
    /// True for any of the empty-container failures
    pub fn is_empty_container(&self) -> bool {
        matches!(self, PlaybackError::EmptyContainer(_))
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
