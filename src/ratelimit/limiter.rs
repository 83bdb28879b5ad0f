//! Sliding-window rate limiter.

use std::collections::VecDeque;
use std::time::Duration;
use tracing::{debug, trace};

use super::clock::{Clock, SystemClock};
use crate::config::RateLimitConfig;

/// Admits at most `max_requests` operations in any trailing `window_ms`.
///
/// The window slides with "now" rather than resetting on fixed boundaries.
/// Timestamps of admitted operations are kept until an admission check finds
/// them older than the window.
///
/// Admission takes `&mut self`; share a limiter across threads only behind
/// your own lock.
///
/// # Example
/// ```
/// use nebulaai_core::{ManualClock, RateLimiter};
/// use std::time::Duration;
///
/// let clock = ManualClock::new(0);
/// let mut limiter = RateLimiter::with_clock(2, 1000, clock.clone());
///
/// assert!(limiter.can_make_request());
/// clock.advance(Duration::from_millis(100));
/// assert!(limiter.can_make_request());
/// clock.advance(Duration::from_millis(100));
/// assert!(!limiter.can_make_request());
/// assert_eq!(limiter.time_until_next_request(), 800);
///
/// clock.set(1001);
/// assert!(limiter.can_make_request());
/// ```
#[derive(Debug)]
pub struct RateLimiter<C: Clock = SystemClock> {
    /// Capacity per window
    max_requests: usize,
    /// Window length in milliseconds
    window_ms: u64,
    /// Epoch-millisecond timestamps of admitted, not yet pruned, requests
    requests: VecDeque<u64>,
    clock: C,
}

impl RateLimiter<SystemClock> {
    /// Create a limiter driven by the wall clock.
    ///
    /// Arguments are not validated: a zero `max_requests` rejects everything
    /// and a zero `window_ms` never remembers an admission.
    pub fn new(max_requests: usize, window_ms: u64) -> Self {
        Self::with_clock(max_requests, window_ms, SystemClock::new())
    }

    /// Create a wall-clock limiter from configuration.
    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(config.max_requests, config.window_ms)
    }
}

impl<C: Clock> RateLimiter<C> {
    /// Create a limiter reading time from `clock`.
    pub fn with_clock(max_requests: usize, window_ms: u64, clock: C) -> Self {
        Self {
            max_requests,
            window_ms,
            requests: VecDeque::with_capacity(max_requests.min(1024)),
            clock,
        }
    }

    /// Decide whether one more operation may proceed now.
    ///
    /// Expired entries are compacted first. On admission the current time is
    /// recorded; a rejected attempt records nothing.
    pub fn can_make_request(&mut self) -> bool {
        let now = self.clock.now_millis();
        self.compact(now);

        if self.requests.len() < self.max_requests {
            self.requests.push_back(now);
            trace!(
                now = now,
                recorded = self.requests.len(),
                max_requests = self.max_requests,
                "Request admitted"
            );
            true
        } else {
            debug!(
                now = now,
                max_requests = self.max_requests,
                window_ms = self.window_ms,
                "Rate limit exceeded"
            );
            false
        }
    }

    /// Milliseconds until a slot is expected to free up, or 0 if one is free.
    ///
    /// This does not compact. Entries that expired since the last
    /// [`can_make_request`](Self::can_make_request) still count toward
    /// capacity here, so the answer can lag until the next admission check.
    /// Once the oldest entry is older than the window the result is 0, never
    /// negative. Calling it never changes state.
    pub fn time_until_next_request(&self) -> u64 {
        if self.requests.len() < self.max_requests {
            return 0;
        }

        let Some(&oldest) = self.requests.iter().min() else {
            return 0;
        };

        let now = self.clock.now_millis() as i128;
        let remaining = self.window_ms as i128 - (now - oldest as i128);
        remaining.clamp(0, u64::MAX as i128) as u64
    }

    /// [`time_until_next_request`](Self::time_until_next_request) as a `Duration`.
    pub fn retry_after(&self) -> Duration {
        Duration::from_millis(self.time_until_next_request())
    }

    /// Number of timestamps currently recorded, including stale ones not yet
    /// compacted.
    pub fn recorded(&self) -> usize {
        self.requests.len()
    }

    /// Capacity per window.
    pub fn max_requests(&self) -> usize {
        self.max_requests
    }

    /// Window length in milliseconds.
    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Window length as a `Duration`.
    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }

    /// Drop every entry that is not strictly younger than the window.
    fn compact(&mut self, now: u64) {
        let window = self.window_ms as i128;
        let before = self.requests.len();

        // Entries stamped after `now` (clock moved backwards) have negative
        // age and are kept.
        self.requests
            .retain(|&stamp| (now as i128 - stamp as i128) < window);

        let pruned = before - self.requests.len();
        if pruned > 0 {
            trace!(
                pruned = pruned,
                remaining = self.requests.len(),
                "Compacted expired requests"
            );
        }
    }
}
