//! Read-only pose catalog.
//!
//! The catalog ships as a JSON array of pose objects. It is loaded in full
//! and never written back; a missing file yields an empty catalog so the app
//! still starts (with nothing to recommend) when the asset was not installed.

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Underlying file I/O failure (other than the file being absent).
    #[error("catalog I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file exists but is not a valid pose array.
    #[error("catalog at {path:?} is not valid JSON: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A single guided pose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    pub name: String,
    pub description: String,
    /// What the pose is good for, shown on the detail view.
    pub benefits: String,
    /// Optional demonstration video. Older catalog files omit the key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_link: Option<String>,
}

/// Load the pose catalog from `path`. A missing file is an empty catalog,
/// not an error; a present-but-unparseable file is surfaced loudly.
pub fn load(path: &Path) -> Result<Vec<Pose>, CatalogError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "pose catalog missing, starting empty");
            return Ok(Vec::new());
        }
        Err(err) => return Err(err.into()),
    };
    serde_json::from_str(&raw).map_err(|source| CatalogError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

// ── Tests ───────────────────────────────────────────────────────────
