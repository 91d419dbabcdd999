//! Wall-clock access for timestamps and the footer year.

use chrono::{DateTime, Datelike, Local, Utc};

/// Source of the current wall-clock time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar year in the user's local time zone.
    fn current_year(&self) -> i32;
}

/// The system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// A clock frozen at one instant, interpreted in UTC.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }

    fn current_year(&self) -> i32 {
        self.0.year()
    }
}
