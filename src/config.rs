//! Game configuration
//!
//! Layered with figment, later layers winning:
//! 1. Built-in defaults
//! 2. `Isekai.toml` (or the file given on the command line)
//! 3. `ISEKAI_*` environment variables (e.g. `ISEKAI_DB_PATH`, `ISEKAI_SEED`)

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::dungeon::Difficulty;

/// Default config file name
pub const CONFIG_FILE: &str = "Isekai.toml";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// SQLite save database; None = in-memory (nothing survives exit)
    pub db_path: Option<String>,
    /// Fixed RNG seed for reproducible sessions
    pub seed: Option<u64>,
    /// Difficulty label for dungeons entered from the shell
    pub difficulty: Difficulty,
    /// tracing filter used when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: Some("isekai_saves.db".to_string()),
            seed: None,
            difficulty: Difficulty::Medium,
            log_filter: "isekai=info".to_string(),
        }
    }
}

impl Config {
    /// Build the figment for `file` (defaults to `Isekai.toml`)
    pub fn figment(file: Option<&Path>) -> Figment {
        let file = file.unwrap_or_else(|| Path::new(CONFIG_FILE));
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed("ISEKAI_"))
    }

    /// Load configuration from defaults, file and environment
    pub fn load(file: Option<&Path>) -> Result<Self, figment::Error> {
        Self::figment(file).extract()
    }
}
