// ==================== IN-MEMORY STORE ====================
// Owns the snapshot for the lifetime of the process. Every mutation is
// written through to the JSON document before the lock is released.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::database::JsonFile;
use crate::models::Snapshot;
use crate::utils::AppError;

pub struct Store {
    snapshot: Mutex<Snapshot>,
    file: JsonFile,
}

impl Store {
    /// Loads the document and wraps it in a store.
    pub fn open(file: JsonFile) -> Result<Self, AppError> {
        let snapshot = file.load()?;
        Ok(Self::with_snapshot(file, snapshot))
    }

    pub fn with_snapshot(file: JsonFile, snapshot: Snapshot) -> Self {
        Self {
            snapshot: Mutex::new(snapshot),
            file,
        }
    }

    /// Exclusive access to the snapshot. A poisoned lock is recovered.
    pub(crate) fn lock(&self) -> MutexGuard<'_, Snapshot> {
        self.snapshot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Writes the snapshot out. Failures are logged and swallowed: the
    /// in-memory state stays authoritative and the caller still succeeds.
    pub(crate) fn flush(&self, snapshot: &Snapshot) {
        match self.file.flush(snapshot) {
            Ok(()) => log::info!("💾 Saved {}", self.file.path().display()),
            Err(e) => log::error!(
                "❌ Failed to save {}: {} (keeping in-memory state)",
                self.file.path().display(),
                e
            ),
        }
    }

    /// Copy of the current state.
    #[cfg(test)]
    pub fn snapshot(&self) -> Snapshot {
        self.lock().clone()
    }
}
