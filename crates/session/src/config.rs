//! TOML configuration for the front end
//!
//! Every field has a default, so an empty file (or no file) is valid:
//!
//! ```toml
//! [session]
//! difficulty = "hard"
//! human = "O"
//! first = "X"
//! versus_computer = true
//!
//! [match]
//! num_games = 100
//! alternate_marks = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use ttt_core::Mark;

use crate::difficulty::Difficulty;
use crate::match_runner::MatchConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for an interactive session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Opponent strength; unknown labels fall back to easy
    pub difficulty: Difficulty,
    /// Mark played by the (first) human
    pub human: Mark,
    /// Mark that opens every round
    pub first: Mark,
    /// False for two humans sharing the board
    pub versus_computer: bool,
    /// Fixed seed for the opponent's random choices
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            human: Mark::X,
            first: Mark::X,
            versus_computer: true,
            seed: None,
        }
    }
}

/// Whole configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub session: SessionConfig,
    #[serde(rename = "match")]
    pub matches: MatchConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}
