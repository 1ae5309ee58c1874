// Unit tests for the date utility functions
// Parameterised over the calendar edge cases the picker depends on

use chrono::{NaiveDate, Weekday};
use date_picker::utils::date::{
    add_days, create_date, days_in_month, end_of_month, end_of_week, in_range, parse_iso_date,
    print_iso_date, set_month, set_year, start_of_week, weekday_from_index,
};
use test_case::test_case;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test_case(2021, 1 => 31 ; "january")]
#[test_case(2021, 2 => 28 ; "common february")]
#[test_case(2024, 2 => 29 ; "leap february")]
#[test_case(1900, 2 => 28 ; "century not leap")]
#[test_case(2000, 2 => 29 ; "four hundred leap")]
#[test_case(2021, 4 => 30 ; "april")]
#[test_case(2021, 12 => 31 ; "december")]
fn test_days_in_month(year: i32, month: u32) -> u32 {
    days_in_month(year, month)
}

#[test_case("2021-03-03" => Some((2021, 3, 3)) ; "plain")]
#[test_case("2024-02-29" => Some((2024, 2, 29)) ; "leap day")]
#[test_case("2021-02-30" => None ; "impossible day")]
#[test_case("2021-13-01" => None ; "month out of range")]
#[test_case("0000-01-01" => None ; "year zero")]
#[test_case("2021-3-3" => None ; "unpadded")]
#[test_case("2021/03/03" => None ; "wrong separator")]
#[test_case("" => None ; "empty")]
#[test_case("2021-03-03T00:00" => None ; "trailing time")]
fn test_parse_iso_date(text: &str) -> Option<(i32, u32, u32)> {
    use chrono::Datelike;
    parse_iso_date(text).map(|d| (d.year(), d.month(), d.day()))
}

#[test_case(ymd(2021, 3, 3) => "2021-03-03" ; "padded month and day")]
#[test_case(ymd(987, 11, 25) => "0987-11-25" ; "padded year")]
fn test_print_iso_date(date: NaiveDate) -> String {
    print_iso_date(date)
}

#[test]
fn test_five_digit_years_do_not_parse_back() {
    let far = ymd(10000, 1, 1);
    assert_eq!(print_iso_date(far), "10000-01-01");
    assert_eq!(parse_iso_date(&print_iso_date(far)), None);
    assert_eq!(parse_iso_date(&print_iso_date(ymd(9999, 12, 31))), Some(ymd(9999, 12, 31)));
}

#[test_case(ymd(2021, 1, 31), 1 => ymd(2021, 2, 28) ; "jan 31 to february")]
#[test_case(ymd(2024, 1, 31), 1 => ymd(2024, 2, 29) ; "jan 31 to leap february")]
#[test_case(ymd(2021, 3, 15), 12 => ymd(2022, 1, 15) ; "overflow into next year")]
#[test_case(ymd(2021, 3, 15), -1 => ymd(2020, 12, 15) ; "underflow into previous year")]
fn test_set_month(date: NaiveDate, month0: i32) -> NaiveDate {
    set_month(date, month0)
}

#[test_case(ymd(2024, 2, 29), 2025 => ymd(2025, 2, 28) ; "leap day into common year")]
#[test_case(ymd(2024, 2, 29), 2028 => ymd(2028, 2, 29) ; "leap day into leap year")]
fn test_set_year(date: NaiveDate, year: i32) -> NaiveDate {
    set_year(date, year)
}

#[test_case(Weekday::Mon => (ymd(2021, 3, 1), ymd(2021, 3, 7)) ; "monday first")]
#[test_case(Weekday::Sun => (ymd(2021, 2, 28), ymd(2021, 3, 6)) ; "sunday first")]
#[test_case(Weekday::Wed => (ymd(2021, 3, 3), ymd(2021, 3, 9)) ; "week starting on the day itself")]
fn test_week_bounds_of_wednesday(first_day: Weekday) -> (NaiveDate, NaiveDate) {
    let wednesday = ymd(2021, 3, 3);
    (
        start_of_week(wednesday, first_day),
        end_of_week(wednesday, first_day),
    )
}

#[test_case(None, None => true ; "open range")]
#[test_case(Some(ymd(2021, 3, 3)), None => true ; "on the minimum")]
#[test_case(None, Some(ymd(2021, 3, 2)) => false ; "after the maximum")]
#[test_case(Some(ymd(2021, 3, 4)), Some(ymd(2021, 4, 1)) => false ; "before the minimum")]
fn test_in_range(min: Option<NaiveDate>, max: Option<NaiveDate>) -> bool {
    in_range(ymd(2021, 3, 3), min, max)
}

#[test_case(0 => Some(Weekday::Sun))]
#[test_case(1 => Some(Weekday::Mon))]
#[test_case(6 => Some(Weekday::Sat))]
#[test_case(7 => None)]
fn test_weekday_from_index(index: u8) -> Option<Weekday> {
    weekday_from_index(index)
}

#[test]
fn test_create_date_rejects_invalid() {
    assert_eq!(create_date(2021, 2, 29), None);
    assert_eq!(create_date(0, 1, 1), None);
    assert_eq!(create_date(2021, 2, 28), Some(ymd(2021, 2, 28)));
}

#[test]
fn test_add_days_crosses_month_and_year() {
    assert_eq!(add_days(ymd(2020, 12, 31), 1), ymd(2021, 1, 1));
    assert_eq!(add_days(ymd(2021, 3, 1), -1), ymd(2021, 2, 28));
    assert_eq!(add_days(NaiveDate::MAX, 1), NaiveDate::MAX);
}

#[test]
fn test_end_of_month() {
    assert_eq!(end_of_month(ymd(2024, 2, 10)), ymd(2024, 2, 29));
}
