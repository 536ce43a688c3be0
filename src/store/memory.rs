//! In-memory state store.

use std::cell::RefCell;

use crate::error::{EngineError, EngineResult};

use super::{SessionState, StateStore};

/// Keeps the serialized state blob in memory, like a browser's key-value
/// storage would.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: RefCell<Option<String>>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with a raw blob, which need not be valid.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: RefCell::new(Some(blob.into())),
        }
    }

    /// The raw blob currently stored.
    pub fn blob(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> EngineResult<Option<SessionState>> {
        match self.blob.borrow().as_deref() {
            Some(blob) => SessionState::from_json(blob).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, state: &SessionState) -> EngineResult<()> {
        let blob = state.to_json().map_err(|e| EngineError::StateWriteError {
            path: "memory".to_string(),
            message: e.to_string(),
        })?;
        *self.blob.borrow_mut() = Some(blob);
        Ok(())
    }
}
