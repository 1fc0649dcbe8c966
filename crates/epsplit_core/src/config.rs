//! Split configuration.
//!
//! All knobs for a split run, with serde defaults so a partial TOML
//! file (or none at all) yields the documented defaults. The CLI
//! layers its flags on top of whatever was loaded.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading a config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for one split run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Duration threshold in seconds separating main-content chapters
    /// from filler.
    #[serde(default = "default_threshold")]
    pub episode_chapter_threshold: f64,

    /// Trailing chapters appended to each episode past its boundary.
    #[serde(default = "default_additional_chapters")]
    pub additional_chapters: usize,

    /// Reserved. Accepted for compatibility, never consulted by the
    /// boundary scan.
    #[serde(default = "default_start_chapter")]
    pub start_chapter: usize,

    /// Season number used in output file names.
    #[serde(default = "default_season_num")]
    pub season_num: u32,

    /// Episode number assigned to the first derived episode.
    #[serde(default = "default_start_episode_num")]
    pub start_episode_num: u32,

    /// Series name used in output file names.
    #[serde(default)]
    pub series_name: String,
}

fn default_threshold() -> f64 {
    360.0
}

fn default_additional_chapters() -> usize {
    2
}

fn default_start_chapter() -> usize {
    1
}

fn default_season_num() -> u32 {
    1
}

fn default_start_episode_num() -> u32 {
    1
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            episode_chapter_threshold: default_threshold(),
            additional_chapters: default_additional_chapters(),
            start_chapter: default_start_chapter(),
            season_num: default_season_num(),
            start_episode_num: default_start_episode_num(),
            series_name: String::new(),
        }
    }
}

impl SplitConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(toml::from_str(&content)?)
    }
}
