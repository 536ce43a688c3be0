//! Calculation logic for the shift voucher engine.
//!
//! This module contains the crew rotation, the voucher payroll
//! reconciliation, the absence toggle, and the month grid builder. Every
//! function here is pure: results depend only on the arguments.

mod absence_toggle;
mod calendar;
mod payroll;
mod roster;

pub use absence_toggle::{AbsenceToggleResult, ToggleAction, is_absent, toggle_absence};
pub use calendar::month_calendar;
pub use payroll::{absences_on_duty_days, compute_summary};
pub use roster::{crew_for_date, days_in_month, is_duty_day, shifts_in_month};
