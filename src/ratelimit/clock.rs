//! Time sources for the rate limiter.
//!
//! Timestamps are milliseconds since the Unix epoch. `SystemClock` reads the
//! wall clock; `ManualClock` lets tests move time explicitly.

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

/// Source of the current time in epoch milliseconds.
pub trait Clock: Send + Sync + Debug {
    /// Current time in milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock.
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        // Pre-epoch system time clamps to zero.
        Utc::now().timestamp_millis().max(0) as u64
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same underlying time, so a test can keep one handle and
/// give another to a limiter:
///
/// ```
/// use nebulaai_core::{Clock, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::new(1_000);
/// let shared = clock.clone();
///
/// clock.advance(Duration::from_millis(250));
/// assert_eq!(shared.now_millis(), 1_250);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    current_millis: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock starting at the given epoch milliseconds.
    pub fn new(start_millis: u64) -> Self {
        Self {
            current_millis: Arc::new(AtomicU64::new(start_millis)),
        }
    }

    /// Move the clock forward, saturating at `u64::MAX`.
    pub fn advance(&self, duration: Duration) {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        // The closure always returns `Some`, so the update cannot fail.
        let _ = self
            .current_millis
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                Some(current.saturating_add(millis))
            });
    }

    /// Set the clock to an absolute time.
    pub fn set(&self, millis: u64) {
        self.current_millis.store(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.current_millis.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock::new().now_millis() > 1_577_836_800_000);
    }

    #[test]
    fn test_system_clock_does_not_go_backwards() {
        let clock = SystemClock::new();
        let t1 = clock.now_millis();
        std::thread::sleep(Duration::from_millis(5));
        let t2 = clock.now_millis();

        assert!(t2 >= t1);
    }

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new(0);
        assert_eq!(clock.now_millis(), 0);

        clock.advance(Duration::from_secs(2));
        assert_eq!(clock.now_millis(), 2_000);

        clock.set(100);
        assert_eq!(clock.now_millis(), 100);
    }

    #[test]
    fn test_manual_clock_advance_saturates() {
        let clock = ManualClock::new(u64::MAX - 5);

        clock.advance(Duration::from_millis(10));
        assert_eq!(clock.now_millis(), u64::MAX);

        clock.set(0);
        clock.advance(Duration::MAX);
        assert_eq!(clock.now_millis(), u64::MAX);
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new(10);
        let other = clock.clone();

        other.advance(Duration::from_millis(5));
        assert_eq!(clock.now_millis(), 15);
    }
}
