//! Marking and unmarking absences.
//!
//! Absences form a set keyed by canonical date string. Toggling a date
//! removes its record if present and adds a default-kind record otherwise.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AbsenceRecord, date_key};

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleAction {
    /// A record was added.
    Marked,
    /// The existing record was removed.
    Unmarked,
}

/// The result of toggling an absence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsenceToggleResult {
    /// The updated absence set.
    pub absences: Vec<AbsenceRecord>,
    /// Whether the date was marked or unmarked.
    pub action: ToggleAction,
}

/// Returns true if an absence is recorded for `date`.
pub fn is_absent(absences: &[AbsenceRecord], date: NaiveDate) -> bool {
    let key = date_key(date);
    absences.iter().any(|a| a.date == key)
}

/// Toggles the absence on `date`, leaving `absences` untouched.
///
/// Every record carrying the date's key is removed, so a set that somehow
/// holds duplicates comes back clean.
///
/// # Example
///
/// ```
/// use shift_voucher::calculation::{toggle_absence, ToggleAction};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 3).unwrap();
///
/// let marked = toggle_absence(&[], date);
/// assert_eq!(marked.action, ToggleAction::Marked);
/// assert_eq!(marked.absences.len(), 1);
///
/// let unmarked = toggle_absence(&marked.absences, date);
/// assert_eq!(unmarked.action, ToggleAction::Unmarked);
/// assert!(unmarked.absences.is_empty());
/// ```
pub fn toggle_absence(absences: &[AbsenceRecord], date: NaiveDate) -> AbsenceToggleResult {
    let key = date_key(date);

    if absences.iter().any(|a| a.date == key) {
        AbsenceToggleResult {
            absences: absences.iter().filter(|a| a.date != key).cloned().collect(),
            action: ToggleAction::Unmarked,
        }
    } else {
        let mut updated = absences.to_vec();
        updated.push(AbsenceRecord::for_date(date));
        AbsenceToggleResult {
            absences: updated,
            action: ToggleAction::Marked,
        }
    }
}
