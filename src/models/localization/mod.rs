//! Localized text bundle.
//!
//! Labels, day names and month names consumed by the presentation layer.
//! The picker core only reads `month_names` (for the heading) and
//! `day_names` (for the weekday header); everything else is passed through.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizedText {
    pub button_label: String,
    pub placeholder: String,
    pub selected_date_message: String,
    pub prev_month_label: String,
    pub next_month_label: String,
    pub month_select_label: String,
    pub year_select_label: String,
    pub close_label: String,
    pub keyboard_instruction: String,
    pub calendar_heading: String,
    /// Sunday first
    pub day_names: [String; 7],
    pub month_names: [String; 12],
    pub month_names_short: [String; 12],
}

impl Default for LocalizedText {
    fn default() -> Self {
        Self::english()
    }
}

impl LocalizedText {
    pub fn english() -> Self {
        Self {
            button_label: "Choose date".to_string(),
            placeholder: String::new(),
            selected_date_message: "Selected date is".to_string(),
            prev_month_label: "Previous month".to_string(),
            next_month_label: "Next month".to_string(),
            month_select_label: "Month".to_string(),
            year_select_label: "Year".to_string(),
            close_label: "Close window".to_string(),
            keyboard_instruction: "You can use arrow keys to navigate dates".to_string(),
            calendar_heading: "Choose a date".to_string(),
            day_names: [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ]
            .map(String::from),
            month_names: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]
            .map(String::from),
            month_names_short: [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]
            .map(String::from),
        }
    }

    /// Day names reordered so the week starts on `first_day`.
    pub fn day_names_from(&self, first_day: Weekday) -> Vec<&str> {
        let start = first_day.num_days_from_sunday() as usize;
        (0..7)
            .map(|offset| self.day_names[(start + offset) % 7].as_str())
            .collect()
    }

    /// Full month name for a 0-based month index.
    pub fn month_name(&self, month0: u32) -> &str {
        &self.month_names[month0 as usize % 12]
    }

    /// Abbreviated month name for a 0-based month index.
    pub fn month_name_short(&self, month0: u32) -> &str {
        &self.month_names_short[month0 as usize % 12]
    }
}
