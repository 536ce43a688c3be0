//! The persisted session state blob.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AbsenceRecord, Crew};

/// What survives between sessions: the chosen crew and the absence set.
///
/// Missing fields fall back to their defaults, so a blob written by an
/// older version that lacks `absences` still loads.
///
/// # Example
///
/// ```
/// use shift_voucher::models::Crew;
/// use shift_voucher::store::SessionState;
///
/// let state = SessionState::from_json(r#"{"selectedCrew":"DOBRA_I"}"#).unwrap();
/// assert_eq!(state.selected_crew, Crew::A);
/// assert!(state.absences.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionState {
    /// The crew the user works in.
    #[serde(alias = "selectedDobra")]
    pub selected_crew: Crew,
    /// Recorded absences, in the order they were marked.
    pub absences: Vec<AbsenceRecord>,
}

impl SessionState {
    /// Parses a state blob.
    pub fn from_json(blob: &str) -> EngineResult<Self> {
        serde_json::from_str(blob).map_err(|e| EngineError::StateParseError {
            message: e.to_string(),
        })
    }

    /// Serializes the state to a blob.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
