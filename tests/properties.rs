//! Property tests for the roster and payroll rules.

use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashSet;

use shift_voucher::calculation::{
    compute_summary, crew_for_date, days_in_month, shifts_in_month, toggle_absence,
};
use shift_voucher::models::{AbsenceRecord, Crew, EpochAssignment, ViewedPeriod};

fn epoch() -> EpochAssignment {
    EpochAssignment::standard()
}

/// Any date within roughly 80 years either side of the epoch.
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (-30_000i64..30_000).prop_map(|offset| epoch().date + Duration::days(offset))
}

fn any_crew() -> impl Strategy<Value = Crew> {
    prop_oneof![Just(Crew::A), Just(Crew::B)]
}

fn any_period() -> impl Strategy<Value = ViewedPeriod> {
    (0u32..12, 1950i32..2100).prop_map(|(m, y)| ViewedPeriod::new(m, y))
}

fn any_absences() -> impl Strategy<Value = Vec<AbsenceRecord>> {
    prop::collection::vec(any_date(), 0..40).prop_map(|dates| {
        dates
            .into_iter()
            .fold(Vec::new(), |acc: Vec<AbsenceRecord>, d| {
                if acc.iter().any(|a| a.matches(d)) {
                    acc
                } else {
                    toggle_absence(&acc, d).absences
                }
            })
    })
}

fn as_set(absences: &[AbsenceRecord]) -> HashSet<AbsenceRecord> {
    absences.iter().cloned().collect()
}

proptest! {
    #[test]
    fn consecutive_days_alternate(d in any_date()) {
        let next = d + Duration::days(1);
        prop_assert_ne!(crew_for_date(d, &epoch()), crew_for_date(next, &epoch()));
    }

    #[test]
    fn roster_has_period_two(d in any_date()) {
        let later = d + Duration::days(2);
        prop_assert_eq!(crew_for_date(d, &epoch()), crew_for_date(later, &epoch()));
    }

    #[test]
    fn any_epoch_is_its_own_crew(d in any_date(), crew in any_crew()) {
        let epoch = EpochAssignment { date: d, crew };
        prop_assert_eq!(crew_for_date(d, &epoch), crew);
    }

    #[test]
    fn crews_partition_each_month(period in any_period()) {
        let a = shifts_in_month(period.month_index, period.year, Crew::A, &epoch());
        let b = shifts_in_month(period.month_index, period.year, Crew::B, &epoch());

        let a_set: HashSet<_> = a.iter().copied().collect();
        let b_set: HashSet<_> = b.iter().copied().collect();
        prop_assert!(a_set.is_disjoint(&b_set));

        let days = days_in_month(period.month_index, period.year) as usize;
        prop_assert_eq!(a.len() + b.len(), days);
        prop_assert!(a.len().abs_diff(b.len()) <= 1);

        let all: HashSet<u32> = a.iter().chain(b.iter()).map(|d| d.day()).collect();
        prop_assert_eq!(all, (1..=days as u32).collect::<HashSet<_>>());
    }

    #[test]
    fn toggle_is_its_own_inverse(absences in any_absences(), d in any_date()) {
        let once = toggle_absence(&absences, d);
        let twice = toggle_absence(&once.absences, d);
        prop_assert_ne!(once.action, twice.action);
        prop_assert_eq!(as_set(&twice.absences), as_set(&absences));
    }

    #[test]
    fn toggle_never_duplicates(absences in any_absences(), d in any_date()) {
        let result = toggle_absence(&absences, d);
        let keys: HashSet<&str> = result.absences.iter().map(|a| a.date.as_str()).collect();
        prop_assert_eq!(keys.len(), result.absences.len());
    }

    #[test]
    fn non_duty_absences_do_not_change_summary(
        period in any_period(),
        crew in any_crew(),
        absences in any_absences(),
        offset in 0u32..31,
    ) {
        let rate = Decimal::from(90);
        let before = compute_summary(period, crew, rate, &absences, &epoch());

        // Pick a day in the previous, viewed or next month that the crew does not work
        let window = [period.previous(), period, period.next()];
        let target = window[(offset % 3) as usize];
        let off_days = shifts_in_month(target.month_index, target.year, crew.other(), &epoch());
        let off_day = off_days[(offset as usize) % off_days.len()];

        let mut extended = absences.clone();
        if !extended.iter().any(|a| a.matches(off_day)) {
            extended.push(AbsenceRecord::for_date(off_day));
        }
        let after = compute_summary(period, crew, rate, &extended, &epoch());

        prop_assert_eq!(before, after);
    }

    #[test]
    fn net_is_gross_minus_deduction(
        period in any_period(),
        crew in any_crew(),
        absences in any_absences(),
    ) {
        let rate = Decimal::new(9050, 2);
        let summary = compute_summary(period, crew, rate, &absences, &epoch());
        prop_assert_eq!(summary.net_value, summary.gross_credit - summary.deduction_value);
        prop_assert_eq!(summary.deduction_value, Decimal::from(summary.deduction_count) * rate);
    }
}
