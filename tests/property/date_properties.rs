// Property-based tests for calendar arithmetic and focus navigation
// Checks the invariants that must hold for any date and any range

use chrono::{Datelike, NaiveDate, Weekday};
use date_picker::services::focus::FocusEngine;
use date_picker::utils::date::{
    add_days, add_months, clamp, end_of_week, parse_iso_date, print_iso_date, start_of_week,
};
use date_picker::DateRange;
use proptest::prelude::*;

/// Four-digit years only; ISO text cannot carry wider years.
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1900..2200i32, 1..=12u32, 1..=28u32)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn any_weekday() -> impl Strategy<Value = Weekday> {
    prop::sample::select(vec![
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ])
}

/// A range with both bounds set, min <= max.
fn any_range() -> impl Strategy<Value = DateRange> {
    (any_date(), 0..800i64)
        .prop_map(|(min, span)| DateRange::new(Some(min), Some(add_days(min, span))))
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Days(i64),
    Months(i32),
    Years(i32),
    StartOfWeek,
    EndOfWeek,
    JumpToMonth(i32),
    JumpToYear(i32),
}

fn any_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        prop::sample::select(vec![-7i64, -1, 1, 7]).prop_map(Step::Days),
        prop::sample::select(vec![-1i32, 1]).prop_map(Step::Months),
        prop::sample::select(vec![-1i32, 1]).prop_map(Step::Years),
        Just(Step::StartOfWeek),
        Just(Step::EndOfWeek),
        (0..12i32).prop_map(Step::JumpToMonth),
        (1890..2210i32).prop_map(Step::JumpToYear),
    ]
}

proptest! {
    /// Moving forward and back by the same number of days is lossless
    #[test]
    fn prop_add_days_round_trip(date in any_date(), days in -5000..5000i64) {
        prop_assert_eq!(add_days(add_days(date, days), -days), date);
    }

    /// Clamping twice changes nothing
    #[test]
    fn prop_clamp_is_idempotent(date in any_date(), range in any_range()) {
        let once = clamp(date, range.min, range.max);
        prop_assert_eq!(clamp(once, range.min, range.max), once);
        prop_assert!(range.contains(once));
    }

    /// Printed dates parse back to themselves
    #[test]
    fn prop_iso_round_trip(date in any_date()) {
        prop_assert_eq!(parse_iso_date(&print_iso_date(date)), Some(date));
    }

    /// Month arithmetic never lands past the end of the target month
    #[test]
    fn prop_add_months_keeps_or_shrinks_day(date in any_date(), months in -240..240i32) {
        let moved = add_months(date, months);
        prop_assert!(moved.day() <= date.day());
        let expected = date.year() * 12 + date.month0() as i32 + months;
        prop_assert_eq!(moved.year() * 12 + moved.month0() as i32, expected);
    }

    /// A week always spans seven days and starts on the configured weekday
    #[test]
    fn prop_week_bounds(date in any_date(), first_day in any_weekday()) {
        let start = start_of_week(date, first_day);
        let end = end_of_week(date, first_day);
        prop_assert_eq!(start.weekday(), first_day);
        prop_assert_eq!((end - start).num_days(), 6);
        prop_assert!(start <= date && date <= end);
    }

    /// No sequence of navigation steps escapes the allowed range
    #[test]
    fn prop_navigation_stays_in_range(
        start in any_date(),
        range in any_range(),
        first_day in any_weekday(),
        steps in prop::collection::vec(any_step(), 1..40),
    ) {
        let mut engine = FocusEngine::new(start, range, first_day);
        prop_assert!(range.contains(engine.focused_day()));

        for step in steps {
            match step {
                Step::Days(days) => engine.add_days(days),
                Step::Months(months) => engine.add_months(months),
                Step::Years(years) => engine.add_years(years),
                Step::StartOfWeek => engine.start_of_week(),
                Step::EndOfWeek => engine.end_of_week(),
                Step::JumpToMonth(month0) => engine.jump_to_month(month0),
                Step::JumpToYear(year) => engine.jump_to_year(year),
            }
            prop_assert!(range.contains(engine.focused_day()));
        }
    }
}
