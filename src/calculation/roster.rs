//! Crew rotation logic.
//!
//! The two crews alternate every calendar day, so the crew on duty is a
//! function of the parity of the day distance from the epoch. All arithmetic
//! is on [`NaiveDate`], which carries no time of day or timezone, so a date
//! can never shift by one across an offset change.

use chrono::NaiveDate;

use crate::models::{Crew, EpochAssignment, ViewedPeriod};

/// Determines which crew is on duty on `date`.
///
/// An even day distance from the epoch (in either direction) gives the
/// epoch crew, an odd distance gives the other crew.
///
/// # Example
///
/// ```
/// use shift_voucher::calculation::crew_for_date;
/// use shift_voucher::models::{Crew, EpochAssignment};
/// use chrono::NaiveDate;
///
/// let epoch = EpochAssignment::standard();
///
/// // 2026-01-01 is the epoch itself
/// let new_year = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// assert_eq!(crew_for_date(new_year, &epoch), Crew::B);
///
/// // 31 days later
/// let feb_1 = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
/// assert_eq!(crew_for_date(feb_1, &epoch), Crew::A);
///
/// // one day before
/// let new_years_eve = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
/// assert_eq!(crew_for_date(new_years_eve, &epoch), Crew::A);
/// ```
pub fn crew_for_date(date: NaiveDate, epoch: &EpochAssignment) -> Crew {
    let diff_days = date.signed_duration_since(epoch.date).num_days();
    if diff_days.abs() % 2 == 0 {
        epoch.crew
    } else {
        epoch.crew.other()
    }
}

/// Returns true if `crew` works on `date`.
pub fn is_duty_day(date: NaiveDate, crew: Crew, epoch: &EpochAssignment) -> bool {
    crew_for_date(date, epoch) == crew
}

/// Number of days in a month, leap years included.
///
/// Returns 0 for a month index outside 0–11.
pub fn days_in_month(month_index: u32, year: i32) -> u32 {
    let period = ViewedPeriod::new(month_index, year);
    match (period.first_day(), period.next().first_day()) {
        (Some(first), Some(next_first)) => next_first.signed_duration_since(first).num_days() as u32,
        _ => 0,
    }
}

/// Lists the days of a month worked by `crew`, in ascending order.
///
/// The month is given as a zero-based index. An out-of-range index yields an
/// empty list.
///
/// # Example
///
/// ```
/// use shift_voucher::calculation::shifts_in_month;
/// use shift_voucher::models::{Crew, EpochAssignment};
/// use chrono::Datelike;
///
/// let epoch = EpochAssignment::standard();
///
/// // February 2026 opens with Dobra I, so Dobra II has the even days
/// let shifts = shifts_in_month(1, 2026, Crew::B, &epoch);
/// assert_eq!(shifts.len(), 14);
/// assert_eq!(shifts[0].day(), 2);
/// assert_eq!(shifts[13].day(), 28);
/// ```
pub fn shifts_in_month(
    month_index: u32,
    year: i32,
    crew: Crew,
    epoch: &EpochAssignment,
) -> Vec<NaiveDate> {
    let period = ViewedPeriod::new(month_index, year);
    let Some(first) = period.first_day() else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|date| period.contains(*date))
        .filter(|date| is_duty_day(*date, crew, epoch))
        .collect()
}
