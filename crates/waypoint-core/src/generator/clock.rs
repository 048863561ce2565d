//! Time sources for plan generation.

use std::fmt;

use jiff::{civil::Date, tz::TimeZone, Timestamp};

/// Supplies the current instant.
///
/// Generation is deterministic apart from the start date and generation
/// timestamp, both of which come from the clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;

    /// The UTC calendar date of [`Clock::now`].
    fn today(&self) -> Date {
        self.now().to_zoned(TimeZone::UTC).date()
    }
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

impl fmt::Debug for dyn Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Clock({})", self.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_is_utc_date() {
        let clock = FixedClock("2024-03-31T23:30:00-05:00".parse().unwrap());
        assert_eq!(clock.today(), jiff::civil::date(2024, 4, 1));
    }
}
