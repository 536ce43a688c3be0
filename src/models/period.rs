//! The viewed month.
//!
//! This module contains the [`ViewedPeriod`] type: the month whose calendar
//! and payroll summary are currently displayed.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month, identified by a zero-based month index and a year.
///
/// Navigation wraps across year boundaries.
///
/// # Example
///
/// ```
/// use shift_voucher::models::ViewedPeriod;
///
/// let december = ViewedPeriod::new(11, 2025);
/// assert_eq!(december.next(), ViewedPeriod::new(0, 2026));
/// assert_eq!(december.next().previous(), december);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewedPeriod {
    /// Month index, 0 (January) to 11 (December).
    pub month_index: u32,
    /// Calendar year.
    pub year: i32,
}

impl ViewedPeriod {
    /// Creates a period from a zero-based month index and a year.
    pub fn new(month_index: u32, year: i32) -> Self {
        Self { month_index, year }
    }

    /// The period that contains `date`.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_voucher::models::ViewedPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    /// assert_eq!(ViewedPeriod::containing(date), ViewedPeriod::new(9, 2026));
    /// ```
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            month_index: date.month0(),
            year: date.year(),
        }
    }

    /// The following month; December rolls over to January of the next year.
    pub fn next(self) -> Self {
        let month_index = (self.month_index + 1) % 12;
        let year = if month_index == 0 {
            self.year + 1
        } else {
            self.year
        };
        Self { month_index, year }
    }

    /// The preceding month; January rolls back to December of the previous year.
    pub fn previous(self) -> Self {
        if self.month_index == 0 {
            Self {
                month_index: 11,
                year: self.year - 1,
            }
        } else {
            Self {
                month_index: self.month_index - 1,
                year: self.year,
            }
        }
    }

    /// The first day of the month, or `None` if the month index is out of range.
    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month_index + 1, 1)
    }

    /// Returns true if `date` falls within this month.
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month_index
    }
}
