//! Crew and epoch models.
//!
//! The roster has two crews that alternate every calendar day. Which crew
//! works on a given day is anchored by an [`EpochAssignment`]: a date whose
//! crew is known.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One of the two alternating rotation groups.
///
/// Serialized with the names used on the printed roster.
///
/// # Example
///
/// ```
/// use shift_voucher::models::Crew;
///
/// assert_eq!(Crew::A.other(), Crew::B);
/// assert_eq!(Crew::B.to_string(), "Dobra II");
/// assert_eq!(serde_json::to_string(&Crew::A).unwrap(), "\"DOBRA_I\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Crew {
    /// Dobra I, shown in blue.
    #[serde(rename = "DOBRA_I")]
    A,
    /// Dobra II, shown in black.
    #[default]
    #[serde(rename = "DOBRA_II")]
    B,
}

impl Crew {
    /// Returns the crew that is off duty whenever `self` is on duty.
    pub fn other(self) -> Crew {
        match self {
            Crew::A => Crew::B,
            Crew::B => Crew::A,
        }
    }
}

impl std::fmt::Display for Crew {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Crew::A => write!(f, "Dobra I"),
            Crew::B => write!(f, "Dobra II"),
        }
    }
}

/// A date with a known crew on duty, used as the parity anchor of the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochAssignment {
    /// The anchor date.
    pub date: NaiveDate,
    /// The crew on duty on `date`.
    pub crew: Crew,
}

impl EpochAssignment {
    /// The roster in force: 1 January 2026 is worked by Dobra II.
    pub fn standard() -> Self {
        Self {
            date: NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid epoch date"),
            crew: Crew::B,
        }
    }
}

impl Default for EpochAssignment {
    fn default() -> Self {
        Self::standard()
    }
}
