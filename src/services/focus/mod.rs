//! Focused-date engine.
//!
//! Owns the single navigable "focused day" cursor. Every mutation clamps the
//! result into the allowed [`DateRange`] before storing it, so the cursor is
//! never outside the range once constructed.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::date_range::DateRange;
use crate::utils::date::{self, clamp, end_of_month, set_month, set_year, start_of_month};

/// How far the year selector reaches either side of the selected year.
pub const YEAR_SPAN: i32 = 10;

#[derive(Debug, Clone)]
pub struct FocusEngine {
    focused: NaiveDate,
    range: DateRange,
    first_day_of_week: Weekday,
}

impl FocusEngine {
    pub fn new(initial: NaiveDate, range: DateRange, first_day_of_week: Weekday) -> Self {
        Self {
            focused: range.clamp(initial),
            range,
            first_day_of_week,
        }
    }

    /// Start on `value` when it is set and allowed, otherwise on `today`
    /// clamped into range.
    pub fn starting_at(
        value: Option<NaiveDate>,
        today: NaiveDate,
        range: DateRange,
        first_day_of_week: Weekday,
    ) -> Self {
        let initial = value.filter(|v| range.contains(*v)).unwrap_or(today);
        Self::new(initial, range, first_day_of_week)
    }

    pub fn focused_day(&self) -> NaiveDate {
        self.focused
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    /// Replace the allowed range; the focused day is re-clamped.
    pub fn set_range(&mut self, range: DateRange) {
        self.range = range;
        self.set_focused_day(self.focused);
    }

    pub fn set_first_day_of_week(&mut self, first_day_of_week: Weekday) {
        self.first_day_of_week = first_day_of_week;
    }

    pub fn set_focused_day(&mut self, day: NaiveDate) {
        let clamped = self.range.clamp(day);
        if clamped != self.focused {
            log::trace!("Focused day {} -> {}", self.focused, clamped);
        }
        self.focused = clamped;
    }

    pub fn add_days(&mut self, days: i64) {
        self.set_focused_day(date::add_days(self.focused, days));
    }

    pub fn add_months(&mut self, months: i32) {
        self.jump_to_month(self.focused.month0() as i32 + months);
    }

    pub fn add_years(&mut self, years: i32) {
        self.jump_to_year(self.focused.year() + years);
    }

    /// Move to the given 0-based month index (overflowing indices roll the
    /// year). Two-stage clamp: first into the target calendar month, then
    /// into the allowed range.
    pub fn jump_to_month(&mut self, month0: i32) {
        let month_start = set_month(start_of_month(self.focused), month0);
        let month_end = end_of_month(month_start);
        let shifted = set_month(self.focused, month0);
        self.set_focused_day(clamp(shifted, Some(month_start), Some(month_end)));
    }

    /// Move to the given year, keeping the month. Same two-stage clamp as
    /// [`jump_to_month`](Self::jump_to_month).
    pub fn jump_to_year(&mut self, year: i32) {
        let month_start = set_year(start_of_month(self.focused), year);
        let month_end = end_of_month(month_start);
        let shifted = set_year(self.focused, year);
        self.set_focused_day(clamp(shifted, Some(month_start), Some(month_end)));
    }

    pub fn start_of_week(&mut self) {
        self.set_focused_day(date::start_of_week(self.focused, self.first_day_of_week));
    }

    pub fn end_of_week(&mut self) {
        self.set_focused_day(date::end_of_week(self.focused, self.first_day_of_week));
    }

    /// 0-based month of the focused day.
    pub fn visible_month(&self) -> u32 {
        self.focused.month0()
    }

    pub fn visible_year(&self) -> i32 {
        self.focused.year()
    }

    /// Years offered by the year selector: ten either side of the selected
    /// value (or the focused day when nothing is selected), narrowed to the
    /// allowed range.
    pub fn selectable_year_range(&self, selected: Option<NaiveDate>) -> RangeInclusive<i32> {
        let anchor = selected.unwrap_or(self.focused).year();
        let mut min_year = anchor - YEAR_SPAN;
        let mut max_year = anchor + YEAR_SPAN;
        if let Some(min) = self.range.min {
            min_year = min_year.max(min.year());
        }
        if let Some(max) = self.range.max {
            max_year = max_year.min(max.year());
        }
        min_year..=max_year
    }

    /// The range minimum lies in the focused month, so there is nothing
    /// further back to show.
    pub fn is_prev_month_disabled(&self) -> bool {
        self.range.min_in_month(self.visible_year(), self.visible_month())
    }

    /// The range maximum lies in the focused month.
    pub fn is_next_month_disabled(&self) -> bool {
        self.range.max_in_month(self.visible_year(), self.visible_month())
    }
}
