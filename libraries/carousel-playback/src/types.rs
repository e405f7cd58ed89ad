//! Core types for playback control

use serde::{Deserialize, Serialize};
use std::fmt;

/// A song in the playlist
///
/// Plain value with no identity of its own; two songs with the same fields
/// are the same song.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Song {
    /// Song title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Length in whole seconds
    pub duration_secs: u32,
}

impl Song {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, duration_secs: u32) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            duration_secs,
        }
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} [{}s]", self.title, self.artist, self.duration_secs)
    }
}

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Playlist has no songs
    Empty,

    /// Songs available, nothing played yet
    Stopped,

    /// Current song is playing
    Playing,

    /// Current song is paused
    Paused,
}

/// Configuration for the playback controller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Start with shuffle enabled (default: false)
    pub shuffle: bool,

    /// Seed for the shuffle generator; `None` seeds from the OS
    pub seed: Option<u64>,
}
