// Test fixtures - reusable test data
// Provides consistent pickers and dates across all test files

#![allow(dead_code)]

use chrono::NaiveDate;
use date_picker::services::dispatcher::{FixedClock, Key, KeyOrigin};
use date_picker::{DatePicker, PickerConfig, PickerInput};

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Wednesday, Mar 3, 2021
    pub fn wednesday_2021_03_03() -> NaiveDate {
        ymd(2021, 3, 3)
    }

    /// The single allowed day of the one-day range fixture
    pub fn jan_15_2020() -> NaiveDate {
        ymd(2020, 1, 15)
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        ymd(2024, 2, 29)
    }
}

/// Sample pickers for testing
pub mod pickers {
    use super::*;

    /// A picker whose clock is frozen on `today`.
    pub fn frozen(config: PickerConfig, today: NaiveDate) -> (DatePicker, FixedClock) {
        let clock = FixedClock::new(today);
        (DatePicker::with_clock(config, Box::new(clock)), clock)
    }

    /// Monday-first picker with no range, opened on `today`.
    pub fn open_on(today: NaiveDate) -> (DatePicker, FixedClock) {
        let (mut picker, clock) = frozen(PickerConfig::default(), today);
        picker.show();
        (picker, clock)
    }

    /// Only Jan 15, 2020 may be picked.
    pub fn single_day() -> PickerConfig {
        PickerConfig {
            min: "2020-01-15".to_string(),
            max: "2020-01-15".to_string(),
            ..PickerConfig::default()
        }
    }
}

/// Keyboard input helpers
pub mod keys {
    use super::*;

    pub fn grid(key: Key) -> PickerInput {
        PickerInput::Key {
            key,
            shift: false,
            origin: KeyOrigin::Grid,
        }
    }

    pub fn grid_shift(key: Key) -> PickerInput {
        PickerInput::Key {
            key,
            shift: true,
            origin: KeyOrigin::Grid,
        }
    }

    /// Every grid navigation key, with and without shift.
    pub fn all_navigation() -> Vec<PickerInput> {
        let keys = [
            Key::Left,
            Key::Right,
            Key::Up,
            Key::Down,
            Key::PageUp,
            Key::PageDown,
            Key::Home,
            Key::End,
        ];
        keys.iter()
            .flat_map(|key| [grid(*key), grid_shift(*key)])
            .collect()
    }
}
