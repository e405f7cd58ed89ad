/// CLI configuration
use crate::error::{CliError, Result};
use carousel_playback::{PlaybackConfig, Song};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no path is given
const DEFAULT_CONFIG_FILE: &str = "carousel.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default = "default_songs")]
    pub songs: Vec<Song>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            playback: PlaybackConfig::default(),
            songs: default_songs(),
        }
    }
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist. Without one, `carousel.toml` in the
    /// working directory is used if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with CAROUSEL_)
        settings = settings.add_source(
            config::Environment::with_prefix("CAROUSEL")
                .separator("_")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(position) = self.songs.iter().position(|s| s.title.trim().is_empty()) {
            return Err(CliError::Config(format!(
                "song #{} has an empty title",
                position + 1
            )));
        }

        Ok(())
    }
}

// Default values
fn default_songs() -> Vec<Song> {
    vec![
        Song::new("Song1", "Artist1", 200),
        Song::new("Song2", "Artist2", 180),
        Song::new("Song3", "Artist3", 210),
        Song::new("Song4", "Artist4", 240),
    ]
}
