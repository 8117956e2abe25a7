/*!
 * Clock
 * Source of arrival timestamps for inserted processes
 */

use super::types::Timestamp;
use time::OffsetDateTime;

/// Supplies the wall-clock time at which a command is dispatched
pub trait Clock {
    /// Current time in seconds since the Unix epoch
    fn now(&self) -> Timestamp;
}

/// System wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Timestamp {
        OffsetDateTime::now_utc().unix_timestamp()
    }
}

/// Clock frozen at a single instant
///
/// Used by tests and replays that need deterministic arrival times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> Timestamp {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(1_504_000_000);
        assert_eq!(clock.now(), 1_504_000_000);
        assert_eq!((&clock).now(), 1_504_000_000);
    }

    #[test]
    fn test_system_clock_after_epoch() {
        // 2017-01-01T00:00:00Z
        assert!(SystemClock.now() > 1_483_228_800);
    }
}
