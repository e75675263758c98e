//! Time source used for year validation, live-timing gating and health timestamps.

use chrono::{DateTime, Datelike, Utc};

/// Source of the current instant.
///
/// Injected into services so tests can pin "today" deterministically.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar year of [`Clock::now`].
    fn current_year(&self) -> i32 {
        self.now().year()
    }
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Midday on June 1st of `year`.
    ///
    /// # Panics
    ///
    /// Panics if `year` is outside chrono's representable range.
    pub fn at_year(year: i32) -> Self {
        use chrono::TimeZone;

        let instant = Utc
            .with_ymd_and_hms(year, 6, 1, 12, 0, 0)
            .single()
            .expect("valid calendar date");
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
