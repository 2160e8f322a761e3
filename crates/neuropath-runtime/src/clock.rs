//! Wall-clock access for the engines.
//!
//! All timestamps come through a [`Clock`], so replaying the same calls
//! against a [`ManualClock`] yields byte-identical state and records.

use chrono::{DateTime, Duration, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    millis: AtomicI64,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            millis: AtomicI64::new(start.timestamp_millis()),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        self.millis.fetch_add(by.num_milliseconds(), Ordering::SeqCst);
    }

    pub fn set(&self, to: DateTime<Utc>) {
        self.millis.store(to.timestamp_millis(), Ordering::SeqCst);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(DateTime::<Utc>::UNIX_EPOCH)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let millis = self.millis.load(Ordering::SeqCst);
        DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}

/// Never let an entity's timestamp move backward.
pub(crate) fn monotonic(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    previous.max(now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::default();
        let t0 = clock.now();
        clock.advance(Duration::seconds(5));
        assert_eq!(clock.now() - t0, Duration::seconds(5));
    }

    #[test]
    fn monotonic_keeps_latest() {
        let clock = ManualClock::default();
        let early = clock.now();
        clock.advance(Duration::seconds(1));
        let late = clock.now();
        assert_eq!(monotonic(late, early), late);
        assert_eq!(monotonic(early, late), late);
    }
}
