//! File-path configuration.
//!
//! Everything the app persists lives in one data directory, in three files
//! whose names are fixed for compatibility with existing installations:
//! `user_data.json`, `current_user.txt`, and `chair_yoga_poses.json`. The
//! default data directory is the working directory (the legacy flat
//! layout); a small TOML file can point the app elsewhere.
//!
//! Config file lookup order:
//! 1. explicit `--config` path (must exist and parse)
//! 2. `sukha.toml` in the working directory
//! 3. `sukha.toml` in the platform config directory
//!
//! A missing config file means defaults. A present file that fails to parse
//! is a hard error: a typo'd config silently falling back to defaults would
//! read and write user data in the wrong place.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Fixed store file names (legacy on-disk contract).
const USER_STORE_FILE: &str = "user_data.json";
const SESSION_FILE: &str = "current_user.txt";
const CATALOG_FILE: &str = "chair_yoga_poses.json";

/// Config file name searched for in the well-known locations.
const CONFIG_FILE: &str = "sukha.toml";

/// Resolved application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the user store, session file, and pose catalog.
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Load configuration. An `explicit` path (from `--config`) must exist;
    /// the well-known locations are optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::discover(),
        };
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config at {}", path.display()))?;
                let config = toml::from_str(&raw)
                    .with_context(|| format!("invalid config at {}", path.display()))?;
                tracing::debug!(path = %path.display(), "config loaded");
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    fn discover() -> Option<PathBuf> {
        let local = PathBuf::from(CONFIG_FILE);
        if local.exists() {
            return Some(local);
        }
        ProjectDirs::from("", "", "sukha")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .filter(|path| path.exists())
    }

    /// The account store file.
    pub fn user_store_path(&self) -> PathBuf {
        self.data_dir.join(USER_STORE_FILE)
    }

    /// The session file.
    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join(SESSION_FILE)
    }

    /// The read-only pose catalog.
    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join(CATALOG_FILE)
    }
}

// ── Tests ───────────────────────────────────────────────────────────
