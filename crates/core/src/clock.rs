// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Calendar date source for incident titles.

use chrono::NaiveDate;

/// Source of the current calendar date.
pub trait Clock: Clone + Send + Sync + 'static {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::Clock;
    use chrono::{Days, NaiveDate};
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Settable clock for tests. Clones share the same date.
    #[derive(Clone, Debug)]
    pub struct FakeClock {
        today: Arc<Mutex<NaiveDate>>,
    }

    impl Default for FakeClock {
        fn default() -> Self {
            Self::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default())
        }
    }

    impl FakeClock {
        pub fn new(today: NaiveDate) -> Self {
            Self {
                today: Arc::new(Mutex::new(today)),
            }
        }

        pub fn set(&self, today: NaiveDate) {
            *self.today.lock() = today;
        }

        /// Move the date forward by `days`; saturates at the calendar's end.
        pub fn advance_days(&self, days: u64) {
            let mut today = self.today.lock();
            if let Some(next) = today.checked_add_days(Days::new(days)) {
                *today = next;
            }
        }
    }

    impl Clock for FakeClock {
        fn today(&self) -> NaiveDate {
            *self.today.lock()
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeClock;

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
