//! Derived calendar view.
//!
//! Everything the presentation layer needs to draw the dialog, recomputed
//! from picker state on demand and never stored.

use std::ops::RangeInclusive;

use chrono::{NaiveDate, Weekday};

use crate::models::date_range::DateRange;
use crate::services::dispatcher::DatePicker;
use crate::utils::date::{
    add_days, end_of_month, end_of_week, in_range, is_same_day, is_same_month, start_of_month,
    start_of_week,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_focused: bool,
    /// Leading/trailing day from a neighbouring month.
    pub is_outside_month: bool,
    /// Outside the allowed range; selecting it does nothing.
    pub is_disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    pub is_open: bool,
    pub focused_day: NaiveDate,
    /// 0-based
    pub visible_month: u32,
    pub visible_year: i32,
    pub heading: String,
    pub year_range: RangeInclusive<i32>,
    pub prev_month_disabled: bool,
    pub next_month_disabled: bool,
    /// Weekday names starting at the configured first day of week.
    pub weekday_names: Vec<String>,
    pub weeks: Vec<[DayCell; 7]>,
    /// The committed value as formatted by the active adapter.
    pub display_text: String,
}

impl CalendarView {
    pub fn build(picker: &DatePicker) -> Self {
        let engine = picker.engine();
        let localization = &picker.config().localization;
        let focused_day = engine.focused_day();
        let visible_month = engine.visible_month();
        let visible_year = engine.visible_year();
        let selected = picker.value();

        Self {
            is_open: picker.is_open(),
            focused_day,
            visible_month,
            visible_year,
            heading: format!("{} {}", localization.month_name(visible_month), visible_year),
            year_range: engine.selectable_year_range(selected),
            prev_month_disabled: engine.is_prev_month_disabled(),
            next_month_disabled: engine.is_next_month_disabled(),
            weekday_names: localization
                .day_names_from(engine.first_day_of_week())
                .into_iter()
                .map(String::from)
                .collect(),
            weeks: month_grid(
                focused_day,
                selected,
                picker.today(),
                engine.range(),
                engine.first_day_of_week(),
            ),
            display_text: picker.selection().formatted(),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten()
    }

    pub fn focused_cell(&self) -> Option<&DayCell> {
        self.cells().find(|cell| cell.is_focused)
    }
}

/// Rows of seven days covering the focused month, padded out to whole weeks
/// with days from the neighbouring months.
pub fn month_grid(
    focused_day: NaiveDate,
    selected: Option<NaiveDate>,
    today: NaiveDate,
    range: DateRange,
    first_day_of_week: Weekday,
) -> Vec<[DayCell; 7]> {
    let first = start_of_week(start_of_month(focused_day), first_day_of_week);
    let last = end_of_week(end_of_month(focused_day), first_day_of_week);

    let mut weeks = Vec::with_capacity(6);
    let mut week_start = first;
    while week_start <= last {
        let week: [DayCell; 7] = std::array::from_fn(|offset| {
            let date = add_days(week_start, offset as i64);
            DayCell {
                date,
                is_today: is_same_day(date, today),
                is_selected: selected.is_some_and(|s| is_same_day(date, s)),
                is_focused: is_same_day(date, focused_day),
                is_outside_month: !is_same_month(date, focused_day),
                is_disabled: !in_range(date, range.min, range.max),
            }
        });
        weeks.push(week);
        week_start = add_days(week_start, 7);
    }
    weeks
}
