//! Session state persistence.
//!
//! The engine itself holds no state. A [`StateStore`] loads the persisted
//! [`SessionState`] once at startup and saves it after every change.
//! [`load_state`] and [`save_state`] wrap a store with the persistence
//! policy: failures are logged and swallowed, never surfaced to the user.

mod file;
mod memory;
mod state;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use state::SessionState;

use tracing::warn;

use crate::error::EngineResult;

/// A place the session state blob can be read from and written to.
pub trait StateStore {
    /// Reads the saved state. `Ok(None)` means nothing was saved yet.
    fn load(&self) -> EngineResult<Option<SessionState>>;

    /// Replaces the saved state.
    fn save(&self, state: &SessionState) -> EngineResult<()>;
}

/// Loads the saved state, treating any failure as "no prior data".
pub fn load_state<S: StateStore + ?Sized>(store: &S) -> Option<SessionState> {
    match store.load() {
        Ok(state) => state,
        Err(err) => {
            warn!(error = %err, "Discarding unreadable saved state");
            None
        }
    }
}

/// Saves the state on a best-effort basis, logging any failure.
pub fn save_state<S: StateStore + ?Sized>(store: &S, state: &SessionState) {
    if let Err(err) = store.save(state) {
        warn!(error = %err, "Failed to save state");
    }
}
