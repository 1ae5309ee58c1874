//! Time source for the picker.

use std::time::Instant;

use chrono::NaiveDate;

use crate::utils::date;

pub trait Clock {
    /// Monotonic time used for scheduling focus hand-offs.
    fn now(&self) -> Instant;

    /// The calendar day considered "today".
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn today(&self) -> NaiveDate {
        date::today()
    }
}

/// A clock frozen at one instant and one day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub now: Instant,
    pub today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            now: Instant::now(),
            today,
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}
