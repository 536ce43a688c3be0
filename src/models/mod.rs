//! Core data models for the shift voucher engine.
//!
//! This module contains all the domain models used throughout the engine.

mod absence;
mod crew;
mod period;
mod summary;

pub use absence::{AbsenceKind, AbsenceRecord, date_key, parse_date_key};
pub use crew::{Crew, EpochAssignment};
pub use period::ViewedPeriod;
pub use summary::{CalendarDay, MonthCalendar, PayrollSummary};
