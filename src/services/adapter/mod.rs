//! Date adapter: pluggable parse/format strategy.
//!
//! The picker never assumes a text format beyond what the active adapter
//! provides. [`IsoDateAdapter`] is the default.

use chrono::NaiveDate;

use crate::utils::date::{create_date, parse_iso_date, print_iso_date};

/// Builds a date from `(year, month 1-12, day)`, returning `None` for
/// impossible calendar dates. Handed to adapters so they share the picker's
/// notion of a valid date.
pub type DateFactory = fn(i32, u32, u32) -> Option<NaiveDate>;

/// The factory passed to [`DateAdapter::parse`] by the picker.
pub const DATE_FACTORY: DateFactory = create_date;

#[cfg_attr(test, mockall::automock)]
pub trait DateAdapter {
    /// Parse user text into a date. Partial or malformed input yields `None`.
    fn parse(&self, text: &str, create_date: DateFactory) -> Option<NaiveDate>;

    fn format(&self, date: NaiveDate) -> String;
}

/// ISO-8601 `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoDateAdapter;

impl DateAdapter for IsoDateAdapter {
    fn parse(&self, text: &str, _create_date: DateFactory) -> Option<NaiveDate> {
        parse_iso_date(text)
    }

    fn format(&self, date: NaiveDate) -> String {
        print_iso_date(date)
    }
}

/// Day-first adapter (`DD.MM.YYYY`), accepting `.`, `/` or `-` separators
/// and unpadded day/month.
#[derive(Debug, Clone, Copy, Default)]
pub struct DayMonthYearAdapter;

impl DateAdapter for DayMonthYearAdapter {
    fn parse(&self, text: &str, create_date: DateFactory) -> Option<NaiveDate> {
        let parts: Vec<&str> = text.split(['.', '/', '-']).collect();
        let [day, month, year] = parts.as_slice() else {
            return None;
        };
        if year.len() != 4 {
            return None;
        }
        create_date(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
    }

    fn format(&self, date: NaiveDate) -> String {
        date.format("%d.%m.%Y").to_string()
    }
}
