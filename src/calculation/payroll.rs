//! Meal-voucher payroll reconciliation.
//!
//! The voucher paid in a month credits the shifts of the *following* month
//! and deducts absences recorded in the *preceding* month. This module
//! computes that reconciliation for a viewed month.

use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{AbsenceRecord, Crew, EpochAssignment, PayrollSummary, ViewedPeriod, date_key};

use super::roster::shifts_in_month;

/// Counts the absence records that fall on `crew`'s duty days in `period`.
///
/// Records on days the crew does not work are ignored, as are records whose
/// date key is malformed.
pub fn absences_on_duty_days(
    period: ViewedPeriod,
    crew: Crew,
    absences: &[AbsenceRecord],
    epoch: &EpochAssignment,
) -> u32 {
    let duty_keys: HashSet<String> = shifts_in_month(period.month_index, period.year, crew, epoch)
        .into_iter()
        .map(date_key)
        .collect();

    absences
        .iter()
        .filter(|absence| duty_keys.contains(&absence.date))
        .count() as u32
}

/// Computes the voucher summary for a viewed month.
///
/// # Rules
///
/// - Gross credit: duty days in the next month × `shift_rate`
/// - Deduction: absences on duty days of the previous month × `shift_rate`
/// - Net: gross credit − deduction (may be negative)
/// - Visible month absences: absences on duty days of the viewed month,
///   which become the deduction once the window advances
///
/// # Example
///
/// ```
/// use shift_voucher::calculation::compute_summary;
/// use shift_voucher::models::{Crew, EpochAssignment, ViewedPeriod};
/// use rust_decimal::Decimal;
///
/// let summary = compute_summary(
///     ViewedPeriod::new(0, 2026),
///     Crew::B,
///     Decimal::from(90),
///     &[],
///     &EpochAssignment::standard(),
/// );
///
/// // 14 shifts in February 2026
/// assert_eq!(summary.next_period_shift_count, 14);
/// assert_eq!(summary.gross_credit, Decimal::from(1260));
/// assert_eq!(summary.net_value, Decimal::from(1260));
/// ```
pub fn compute_summary(
    viewed: ViewedPeriod,
    crew: Crew,
    shift_rate: Decimal,
    absences: &[AbsenceRecord],
    epoch: &EpochAssignment,
) -> PayrollSummary {
    let next_period = viewed.next();
    let next_period_shift_count =
        shifts_in_month(next_period.month_index, next_period.year, crew, epoch).len() as u32;
    let gross_credit = Decimal::from(next_period_shift_count) * shift_rate;

    let prev_period = viewed.previous();
    let deduction_count = absences_on_duty_days(prev_period, crew, absences, epoch);
    let deduction_value = Decimal::from(deduction_count) * shift_rate;

    let net_value = gross_credit - deduction_value;

    let visible_month_absence_count = absences_on_duty_days(viewed, crew, absences, epoch);

    debug!(
        month_index = viewed.month_index,
        year = viewed.year,
        crew = %crew,
        gross_credit = %gross_credit,
        deduction_count,
        net_value = %net_value,
        "Computed payroll summary"
    );

    PayrollSummary {
        viewed,
        crew,
        shift_rate,
        next_period,
        prev_period,
        next_period_shift_count,
        gross_credit,
        deduction_count,
        deduction_value,
        net_value,
        visible_month_absence_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rate() -> Decimal {
        Decimal::from(90)
    }

    fn epoch() -> EpochAssignment {
        EpochAssignment::standard()
    }

    /// Absences on every Dobra II shift of December 2025.
    fn december_absences() -> Vec<AbsenceRecord> {
        shifts_in_month(11, 2025, Crew::B, &epoch())
            .into_iter()
            .map(AbsenceRecord::for_date)
            .collect()
    }

    #[test]
    fn test_january_2026_gross_credit_for_crew_b() {
        let summary = compute_summary(ViewedPeriod::new(0, 2026), Crew::B, rate(), &[], &epoch());

        assert_eq!(summary.next_period, ViewedPeriod::new(1, 2026));
        assert_eq!(summary.prev_period, ViewedPeriod::new(11, 2025));
        assert_eq!(summary.next_period_shift_count, 14);
        assert_eq!(summary.gross_credit, Decimal::from(1260));
        assert_eq!(summary.deduction_count, 0);
        assert_eq!(summary.deduction_value, Decimal::ZERO);
        assert_eq!(summary.net_value, Decimal::from(1260));
        assert_eq!(summary.visible_month_absence_count, 0);
    }

    #[test]
    fn test_february_2026_gross_credit_covers_march() {
        // March 2026 opens with Dobra I, leaving Dobra II 15 days
        let summary = compute_summary(ViewedPeriod::new(1, 2026), Crew::B, rate(), &[], &epoch());
        assert_eq!(summary.next_period_shift_count, 15);
        assert_eq!(summary.gross_credit, Decimal::from(1350));

        let summary = compute_summary(ViewedPeriod::new(1, 2026), Crew::A, rate(), &[], &epoch());
        assert_eq!(summary.next_period_shift_count, 16);
    }

    #[test]
    fn test_december_credit_comes_from_next_year() {
        let summary = compute_summary(ViewedPeriod::new(11, 2026), Crew::B, rate(), &[], &epoch());
        assert_eq!(summary.next_period, ViewedPeriod::new(0, 2027));
        // 2027-01-01 is 365 days after the epoch, so Dobra I opens the month
        assert_eq!(summary.next_period_shift_count, 15);
    }

    #[test]
    fn test_previous_month_absences_are_deducted() {
        let absences = december_absences();
        assert_eq!(absences.len(), 15);

        let summary =
            compute_summary(ViewedPeriod::new(0, 2026), Crew::B, rate(), &absences, &epoch());

        assert_eq!(summary.deduction_count, 15);
        assert_eq!(summary.deduction_value, Decimal::from(1350));
        assert_eq!(summary.net_value, Decimal::from(-90));
    }

    #[test]
    fn test_absence_on_other_crew_day_is_ignored() {
        let absences = vec![AbsenceRecord::for_date(date(2026, 1, 2))];

        let summary =
            compute_summary(ViewedPeriod::new(0, 2026), Crew::B, rate(), &absences, &epoch());
        assert_eq!(summary.visible_month_absence_count, 0);

        let summary =
            compute_summary(ViewedPeriod::new(1, 2026), Crew::B, rate(), &absences, &epoch());
        assert_eq!(summary.deduction_count, 0);
    }

    #[test]
    fn test_absences_in_viewed_month_are_informational() {
        let absences = vec![
            AbsenceRecord::for_date(date(2026, 1, 3)),
            AbsenceRecord::for_date(date(2026, 1, 5)),
        ];

        let summary =
            compute_summary(ViewedPeriod::new(0, 2026), Crew::B, rate(), &absences, &epoch());
        assert_eq!(summary.visible_month_absence_count, 2);
        assert_eq!(summary.deduction_count, 0);

        let summary =
            compute_summary(ViewedPeriod::new(1, 2026), Crew::B, rate(), &absences, &epoch());
        assert_eq!(summary.deduction_count, 2);
        assert_eq!(summary.deduction_value, Decimal::from(180));
    }

    #[test]
    fn test_malformed_absence_keys_never_match() {
        let absences = vec![
            AbsenceRecord {
                date: "2025-12-2".to_string(),
                kind: Default::default(),
            },
            AbsenceRecord {
                date: String::new(),
                kind: Default::default(),
            },
        ];

        let summary =
            compute_summary(ViewedPeriod::new(0, 2026), Crew::B, rate(), &absences, &epoch());
        assert_eq!(summary.deduction_count, 0);
    }

    #[test]
    fn test_fractional_rate() {
        let shift_rate = Decimal::new(4550, 2); // 45.50
        let summary = compute_summary(ViewedPeriod::new(0, 2026), Crew::B, shift_rate, &[], &epoch());
        assert_eq!(summary.gross_credit, Decimal::new(63700, 2)); // 14 * 45.50
    }

    #[test]
    fn test_absences_on_duty_days_counts_only_period() {
        let absences = vec![
            AbsenceRecord::for_date(date(2026, 1, 1)),
            AbsenceRecord::for_date(date(2026, 2, 2)),
        ];
        let count = absences_on_duty_days(ViewedPeriod::new(0, 2026), Crew::B, &absences, &epoch());
        assert_eq!(count, 1);
    }
}
