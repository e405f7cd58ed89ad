//! Carousel command-line driver
//!
//! Loads songs and playback settings, then drives a
//! [`carousel_playback::PlaybackController`] through either the built-in
//! demonstration or a user-supplied command script.

pub mod commands;
pub mod config;
pub mod console;
pub mod error;

pub use commands::{demo_sections, execute, run_script, Command, ScriptSummary};
pub use config::CliConfig;
pub use console::{describe, ConsoleSink};
pub use error::{CliError, Result};
