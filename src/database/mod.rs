use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Snapshot;
use crate::utils::AppError;

/// JSON document on disk holding the users and tweets collections
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the whole document.
    ///
    /// A missing, unreadable or malformed file is an error; callers are
    /// expected to refuse to start rather than run on a partial snapshot.
    pub fn load(&self) -> Result<Snapshot, AppError> {
        let raw = fs::read_to_string(&self.path)?;
        let snapshot: Snapshot = serde_json::from_str(&raw)?;

        log::info!(
            "📂 Loaded {} ({} users, {} tweets)",
            self.path.display(),
            snapshot.users.len(),
            snapshot.tweets.len()
        );

        Ok(snapshot)
    }

    /// Overwrites the document with the full snapshot, pretty-printed with
    /// two-space indentation.
    pub fn flush(&self, snapshot: &Snapshot) -> Result<(), AppError> {
        let data = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, data)?;

        log::debug!("💾 Snapshot written to {}", self.path.display());

        Ok(())
    }
}
