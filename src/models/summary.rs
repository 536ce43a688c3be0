//! Result models for payroll and calendar views.
//!
//! This module contains the [`PayrollSummary`] produced for a viewed month
//! and the [`MonthCalendar`] cell model of a month grid.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Crew, ViewedPeriod};

/// The voucher reconciliation for one viewed month.
///
/// Voucher credit is paid one month ahead of the shifts it covers, while
/// absences are deducted one month behind. The summary therefore spans three
/// months: `prev_period`, `viewed` and `next_period`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// The month being viewed.
    pub viewed: ViewedPeriod,
    /// The crew the summary was computed for.
    pub crew: Crew,
    /// The amount paid per duty day.
    pub shift_rate: Decimal,
    /// The month whose shifts are credited.
    pub next_period: ViewedPeriod,
    /// The month whose absences are deducted.
    pub prev_period: ViewedPeriod,
    /// Number of duty days in `next_period`.
    pub next_period_shift_count: u32,
    /// `next_period_shift_count * shift_rate`.
    pub gross_credit: Decimal,
    /// Absences recorded on duty days of `prev_period`.
    pub deduction_count: u32,
    /// `deduction_count * shift_rate`.
    pub deduction_value: Decimal,
    /// `gross_credit - deduction_value`. Not clamped, may be negative.
    pub net_value: Decimal,
    /// Absences recorded on duty days of `viewed`; deducted next month.
    pub visible_month_absence_count: u32,
}

/// One day cell of a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// The day.
    pub date: NaiveDate,
    /// The crew on duty that day.
    pub crew_on_duty: Crew,
    /// Whether the viewing crew works that day.
    pub is_my_shift: bool,
    /// Whether an absence is recorded on one of the viewing crew's shifts.
    pub is_absence: bool,
}

/// A Sunday-first month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCalendar {
    /// The month shown.
    pub period: ViewedPeriod,
    /// The crew the grid is highlighted for.
    pub crew: Crew,
    /// Empty cells before day 1 (0 when the month starts on a Sunday).
    pub leading_blanks: u32,
    /// One cell per day, in order.
    pub days: Vec<CalendarDay>,
}

impl MonthCalendar {
    /// Cells the viewing crew works.
    pub fn my_shifts(&self) -> impl Iterator<Item = &CalendarDay> {
        self.days.iter().filter(|d| d.is_my_shift)
    }
}
