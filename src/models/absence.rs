//! Absence records and canonical date keys.
//!
//! Absences are keyed by a `YYYY-MM-DD` string built from the calendar date
//! alone. The key is the join between recorded absences and duty days, so a
//! stored key that does not parse is kept as-is and simply never matches.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Returns the canonical `YYYY-MM-DD` key of a date.
///
/// # Example
///
/// ```
/// use shift_voucher::models::date_key;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
/// assert_eq!(date_key(date), "2026-03-07");
/// ```
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parses a canonical date key, returning `None` when it is malformed.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()
}

/// The kind of a recorded absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AbsenceKind {
    /// Sick note or unexcused absence. The only kind produced by toggling.
    #[default]
    #[serde(rename = "ATESTADO_FALTA")]
    SickOrAbsent,
    /// Shift marked as worked.
    #[serde(rename = "TRABALHADO")]
    Worked,
}

/// A user-marked absence on one calendar day.
///
/// # Example
///
/// ```
/// use shift_voucher::models::{AbsenceKind, AbsenceRecord};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 3).unwrap();
/// let record = AbsenceRecord::for_date(date);
/// assert_eq!(record.date, "2026-01-03");
/// assert_eq!(record.kind, AbsenceKind::SickOrAbsent);
/// assert!(record.matches(date));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbsenceRecord {
    /// Canonical date key (`YYYY-MM-DD`).
    pub date: String,
    /// The kind of absence. Older saves call this field `type`.
    #[serde(default, alias = "type")]
    pub kind: AbsenceKind,
}

impl AbsenceRecord {
    /// Creates a record of the given kind.
    pub fn new(date: NaiveDate, kind: AbsenceKind) -> Self {
        Self {
            date: date_key(date),
            kind,
        }
    }

    /// Creates a record of the default kind.
    pub fn for_date(date: NaiveDate) -> Self {
        Self::new(date, AbsenceKind::default())
    }

    /// Returns true if this record is for `date`.
    pub fn matches(&self, date: NaiveDate) -> bool {
        self.date == date_key(date)
    }

    /// The calendar date of this record, if its key is well formed.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date_key(&self.date)
    }
}
