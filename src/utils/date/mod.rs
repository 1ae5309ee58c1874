// Date utility functions
// Pure calendar arithmetic on day-precision dates

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn is_same_day(date1: NaiveDate, date2: NaiveDate) -> bool {
    date1 == date2
}

/// Whether both dates fall in the same calendar month of the same year.
pub fn is_same_month(date1: NaiveDate, date2: NaiveDate) -> bool {
    date1.year() == date2.year() && date1.month() == date2.month()
}

/// Get the number of days in a given month (`month` is 1-based).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// Shift a date by `days`, saturating at the representable date range.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

/// Move a date to the given 0-based month index.
///
/// The index may overflow in either direction (`12` is January of the next
/// year, `-1` December of the previous one). The day of month is clamped to
/// the length of the target month, so Jan 31 moved to February lands on the
/// last day of February. An index that leaves the representable date range
/// returns `date` unchanged.
pub fn set_month(date: NaiveDate, month0: i32) -> NaiveDate {
    let Some(total_months) = date.year().checked_mul(12).and_then(|m| m.checked_add(month0))
    else {
        return date;
    };
    let new_year = total_months.div_euclid(12);
    if NaiveDate::from_ymd_opt(new_year, 1, 1).is_none() {
        return date;
    }
    let new_month = (total_months.rem_euclid(12) + 1) as u32;
    let day = date.day().min(days_in_month(new_year, new_month));
    NaiveDate::from_ymd_opt(new_year, new_month, day).unwrap_or(date)
}

/// Move a date to the given year, keeping month and clamping the day (Feb 29
/// becomes Feb 28 in a common year). Years chrono cannot represent return
/// `date` unchanged.
pub fn set_year(date: NaiveDate, year: i32) -> NaiveDate {
    if NaiveDate::from_ymd_opt(year, 1, 1).is_none() {
        return date;
    }
    let day = date.day().min(days_in_month(year, date.month()));
    NaiveDate::from_ymd_opt(year, date.month(), day).unwrap_or(date)
}

pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    match (date.month0() as i32).checked_add(months) {
        Some(month0) => set_month(date, month0),
        None => date,
    }
}

pub fn add_years(date: NaiveDate, years: i32) -> NaiveDate {
    match date.year().checked_add(years) {
        Some(year) => set_year(date, year),
        None => date,
    }
}

/// First day of the week containing `date`, where weeks begin on `first_day`.
pub fn start_of_week(date: NaiveDate, first_day: Weekday) -> NaiveDate {
    let offset = (7 + date.weekday().num_days_from_sunday() - first_day.num_days_from_sunday()) % 7;
    add_days(date, -(offset as i64))
}

/// Last day of the week containing `date`, where weeks begin on `first_day`.
pub fn end_of_week(date: NaiveDate, first_day: Weekday) -> NaiveDate {
    add_days(start_of_week(date, first_day), 6)
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(days_in_month(date.year(), date.month()))
        .unwrap_or(date)
}

/// Constrain `date` to the inclusive `[min, max]` range. A missing bound is
/// open on that side.
pub fn clamp(date: NaiveDate, min: Option<NaiveDate>, max: Option<NaiveDate>) -> NaiveDate {
    if let Some(min) = min {
        if date < min {
            return min;
        }
    }
    if let Some(max) = max {
        if date > max {
            return max;
        }
    }
    date
}

/// Inclusive range test. A missing bound is open on that side.
pub fn in_range(date: NaiveDate, min: Option<NaiveDate>, max: Option<NaiveDate>) -> bool {
    min.map_or(true, |min| date >= min) && max.map_or(true, |max| date <= max)
}

/// Build a date from a 1-based month, rejecting impossible calendar dates
/// (such as February 30th) and years before 1.
pub fn create_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if year < 1 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse strict `YYYY-MM-DD`. Anything else, including empty input, yields
/// `None`. Only years 1 through 9999 can be expressed.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }

    let all_digits = bytes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 4 && *i != 7)
        .all(|(_, b)| b.is_ascii_digit());
    if !all_digits {
        return None;
    }

    let year = value[0..4].parse().ok()?;
    let month = value[5..7].parse().ok()?;
    let day = value[8..10].parse().ok()?;
    create_date(year, month, day)
}

/// Zero-padded `YYYY-MM-DD`. Years past 9999 print with more than four
/// digits and do not parse back through [`parse_iso_date`].
pub fn print_iso_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Convert a `0 = Sunday .. 6 = Saturday` index into a weekday.
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}
