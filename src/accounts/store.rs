//! Flat-file account store.
//!
//! One JSON object holds every account:
//!
//! ```json
//! {"maria": {"password": "<sha256 hex>", "notification_time": "7:30", "remember_me": true}}
//! ```
//!
//! ## Storage
//! The whole mapping is reloaded before every operation and rewritten after
//! every mutation. Writes overwrite the file in place with no atomic rename,
//! so a crash mid-write can leave a truncated store behind. Tolerable for a
//! single-user desktop app; revisit before any multi-process use.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced by the account store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying file I/O failure.
    #[error("account store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store file exists but does not parse as the expected mapping.
    /// Not folded into "empty store": the next mutation would rewrite the
    /// file and destroy every account it still holds.
    #[error("account store at {path:?} is not valid JSON: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The mapping could not be serialized back to JSON.
    #[error("account store serialization failed: {0}")]
    Encode(serde_json::Error),
}

/// A registered account, as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Unsalted SHA-256 digest of the password, lowercase hex.
    #[serde(rename = "password")]
    pub password_hash: String,
    /// Daily reminder time as unpadded "H:M", if the user set one.
    /// Serializes as `null` when unset, matching legacy store files.
    pub notification_time: Option<String>,
    /// Whether the login screen should remember this account.
    pub remember_me: bool,
}

/// The full persisted mapping of username → account.
pub type UserStore = BTreeMap<String, UserAccount>;

/// Flat-file account store. Holds only the path; all state lives on disk.
#[derive(Debug, Clone)]
pub struct AccountStore {
    path: PathBuf,
}

impl AccountStore {
    /// Create a store handle for the given file. The file itself is only
    /// touched by the individual operations.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ── Account Management ──────────────────────────────────────────

    /// Register a new account. Returns `false` (and writes nothing) when the
    /// username is already taken.
    pub fn register(
        &self,
        username: &str,
        password: &str,
        notification_time: Option<String>,
        remember_me: bool,
    ) -> Result<bool, StoreError> {
        let mut store = self.load()?;
        if store.contains_key(username) {
            tracing::warn!(username, "registration rejected: username already exists");
            return Ok(false);
        }

        store.insert(
            username.to_string(),
            UserAccount {
                password_hash: hash_password(password),
                notification_time,
                remember_me,
            },
        );
        self.save(&store)?;
        tracing::info!(username, "user registered");
        Ok(true)
    }

    /// Check a username/password pair against the store. `false` covers both
    /// unknown usernames and wrong passwords; callers get no distinction.
    pub fn verify(&self, username: &str, password: &str) -> Result<bool, StoreError> {
        let store = self.load()?;
        Ok(store
            .get(username)
            .is_some_and(|account| account.password_hash == hash_password(password)))
    }

    /// Set the daily reminder time for an account. Unknown usernames are
    /// logged and ignored: the only way to hit one is a session file naming
    /// a user the store no longer knows, and a settings save is not the
    /// place to fail over that.
    pub fn update_notification_time(
        &self,
        username: &str,
        hour: u32,
        minute: u32,
    ) -> Result<(), StoreError> {
        let mut store = self.load()?;
        match store.get_mut(username) {
            Some(account) => {
                account.notification_time = Some(format!("{hour}:{minute}"));
                self.save(&store)?;
                tracing::info!(username, hour, minute, "notification time updated");
            }
            None => {
                tracing::warn!(username, "notification time update for unknown user ignored");
            }
        }
        Ok(())
    }

    /// Look up a single account.
    pub fn get(&self, username: &str) -> Result<Option<UserAccount>, StoreError> {
        Ok(self.load()?.get(username).cloned())
    }

    // ── Persistence ─────────────────────────────────────────────────

    /// Read the whole mapping. A missing or empty file is an empty store;
    /// any other parse failure is surfaced as [`StoreError::Corrupt`].
    pub fn load(&self) -> Result<UserStore, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(UserStore::new()),
            Err(err) => return Err(err.into()),
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(UserStore::new());
        }
        serde_json::from_str(trimmed).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, store: &UserStore) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string(store).map_err(StoreError::Encode)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

// ── Cryptographic Helpers ───────────────────────────────────────────

/// Digest a password for storage: single unsalted SHA-256 round, hex-encoded.
/// Legacy store files hold digests in exactly this format.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

// ── Tests ───────────────────────────────────────────────────────────
