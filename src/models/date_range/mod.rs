//! Allowed date range for the picker.
//!
//! Both bounds are optional and inclusive. A range whose `min` lies after its
//! `max` is a caller error; it is not rejected here and navigation against it
//! simply snaps to whichever bound is checked first.

use chrono::{Datelike, NaiveDate};

use crate::utils::date::{clamp, in_range, parse_iso_date};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        Self { min, max }
    }

    /// Unbounded on both sides.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Build a range from ISO `YYYY-MM-DD` text. Empty or malformed text
    /// leaves that side open.
    pub fn from_iso(min: &str, max: &str) -> Self {
        Self {
            min: parse_bound("min", min),
            max: parse_bound("max", max),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        in_range(date, self.min, self.max)
    }

    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        clamp(date, self.min, self.max)
    }

    /// True when `min` falls in the given month (0-based) of `year`.
    pub fn min_in_month(&self, year: i32, month0: u32) -> bool {
        self.min
            .is_some_and(|min| min.year() == year && min.month0() == month0)
    }

    /// True when `max` falls in the given month (0-based) of `year`.
    pub fn max_in_month(&self, year: i32, month0: u32) -> bool {
        self.max
            .is_some_and(|max| max.year() == year && max.month0() == month0)
    }
}

fn parse_bound(label: &str, text: &str) -> Option<NaiveDate> {
    if text.is_empty() {
        return None;
    }
    let parsed = parse_iso_date(text);
    if parsed.is_none() {
        log::warn!("Ignoring malformed {} date {:?}; treating bound as open", label, text);
    }
    parsed
}
