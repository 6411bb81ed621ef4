//! Values matrix with hot-reload from disk.
//!
//! On each `current()` call we check the file's modified time and reload if changed.
//! A failed reload keeps the previous matrix; before the first successful load the
//! matrix is empty (every brand then scores neutral).

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
    time::SystemTime,
};
use tracing::{info, warn};

use crate::config::load_matrix_from;
use crate::model::ValuesMatrix;

/// Hot-reload wrapper: reloads when the matrix file mtime changes.
#[derive(Debug)]
pub struct HotReloadMatrix {
    path: PathBuf,
    inner: RwLock<State>,
}

#[derive(Debug)]
struct State {
    matrix: Arc<ValuesMatrix>,
    last_modified: Option<SystemTime>,
}

impl HotReloadMatrix {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            inner: RwLock::new(State {
                matrix: Arc::new(ValuesMatrix::default()),
                last_modified: None,
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the latest matrix, reloading if the file changed.
    pub fn current(&self) -> Arc<ValuesMatrix> {
        let mtime = match fs::metadata(&self.path).and_then(|m| m.modified()) {
            Ok(t) => t,
            // File missing: keep whatever we have.
            Err(_) => return self.read_state().matrix.clone(),
        };

        {
            let guard = self.read_state();
            if guard.last_modified == Some(mtime) {
                return guard.matrix.clone();
            }
        }

        // Slow path: reload with write lock.
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        // Double-check in case another caller already reloaded.
        if guard.last_modified != Some(mtime) {
            match load_matrix_from(&self.path) {
                Ok(m) => {
                    info!(path = %self.path.display(), values = m.len(), "values matrix reloaded");
                    guard.matrix = Arc::new(m);
                }
                Err(e) => {
                    warn!(path = %self.path.display(), error = ?e, "values matrix reload failed; keeping previous");
                }
            }
            // Remember the mtime either way so a broken file isn't re-parsed on every call.
            guard.last_modified = Some(mtime);
        }
        guard.matrix.clone()
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, State> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }
}
