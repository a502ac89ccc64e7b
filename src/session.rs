//! Current-user session file.
//!
//! A single plain-text file holds the username of the active user. Logout
//! blanks the file instead of deleting it, so "logged out" and "never logged
//! in" look different on disk but identical through this API: both read back
//! as no session.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed record of the single active session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a session handle for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record `username` as the active user.
    pub fn set_current_user(&self, username: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, username)?;
        tracing::debug!(username, "session recorded");
        Ok(())
    }

    /// The active user, if any. Missing file and blank content both mean
    /// no session.
    pub fn get_current_user(&self) -> std::io::Result<Option<String>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err),
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(trimmed.to_string()))
        }
    }

    /// End the session by blanking the file.
    pub fn clear_current_user(&self) -> std::io::Result<()> {
        std::fs::write(&self.path, "")?;
        tracing::debug!("session cleared");
        Ok(())
    }
}

// ── Tests ───────────────────────────────────────────────────────────
