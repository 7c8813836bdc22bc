//! Time source for "today" and the current week.
//!
//! The aggregation functions are deterministic for fixed inputs, so the
//! request handlers take the calendar date from an injected clock rather
//! than reading it inline. Production uses [`SystemClock`]; tests hold the
//! date fixed with [`FixedClock`].

use chrono::{Local, NaiveDate};

/// Provides the current local calendar date.
pub trait Clock: Send + Sync {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// A clock backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to a fixed date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    /// Creates a clock that always reports `date` as today.
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}
