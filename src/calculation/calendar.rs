//! Month grid construction.
//!
//! Builds the cell model behind the calendar view: leading blanks for a
//! Sunday-first week, then one cell per day flagged with the crew on duty
//! and any recorded absence.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::models::{
    AbsenceRecord, CalendarDay, Crew, EpochAssignment, MonthCalendar, ViewedPeriod, date_key,
};

use super::roster::crew_for_date;

/// Builds the month grid of `period` as seen by `crew`.
///
/// Absences are only flagged on `crew`'s own duty days; a record on any
/// other day is not shown.
///
/// # Example
///
/// ```
/// use shift_voucher::calculation::month_calendar;
/// use shift_voucher::models::{Crew, EpochAssignment, ViewedPeriod};
///
/// // February 2026 starts on a Sunday
/// let calendar = month_calendar(
///     ViewedPeriod::new(1, 2026),
///     Crew::A,
///     &[],
///     &EpochAssignment::standard(),
/// );
/// assert_eq!(calendar.leading_blanks, 0);
/// assert_eq!(calendar.days.len(), 28);
/// assert!(calendar.days[0].is_my_shift);
/// ```
pub fn month_calendar(
    period: ViewedPeriod,
    crew: Crew,
    absences: &[AbsenceRecord],
    epoch: &EpochAssignment,
) -> MonthCalendar {
    let Some(first) = period.first_day() else {
        return MonthCalendar {
            period,
            crew,
            leading_blanks: 0,
            days: Vec::new(),
        };
    };

    let absent_keys: HashSet<&str> = absences.iter().map(|a| a.date.as_str()).collect();

    let days = first
        .iter_days()
        .take_while(|date| period.contains(*date))
        .map(|date: NaiveDate| {
            let crew_on_duty = crew_for_date(date, epoch);
            let is_my_shift = crew_on_duty == crew;
            CalendarDay {
                date,
                crew_on_duty,
                is_my_shift,
                is_absence: is_my_shift && absent_keys.contains(date_key(date).as_str()),
            }
        })
        .collect();

    MonthCalendar {
        period,
        crew,
        leading_blanks: first.weekday().num_days_from_sunday(),
        days,
    }
}
