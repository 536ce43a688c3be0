//! JSON file backed state store.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};

use super::{SessionState, StateStore};

/// Stores the session state as `<dir>/<key>.json`.
///
/// A missing file means no prior data. Writes go to a sibling temporary file
/// that is then renamed over the target, so a crash mid-write leaves the
/// previous state intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store for `key` inside `dir`.
    pub fn new<P: AsRef<Path>>(dir: P, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{key}.json")),
        }
    }

    /// The file the state is kept in.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> EngineResult<Option<SessionState>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let blob = fs::read_to_string(&self.path).map_err(|e| EngineError::StateReadError {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        SessionState::from_json(&blob).map(Some)
    }

    fn save(&self, state: &SessionState) -> EngineResult<()> {
        let path_str = self.path.display().to_string();
        let write_error = |message: String| EngineError::StateWriteError {
            path: path_str.clone(),
            message,
        };

        let blob = state.to_json().map_err(|e| write_error(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| write_error(e.to_string()))?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, blob).map_err(|e| write_error(e.to_string()))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| write_error(e.to_string()))
    }
}
