//! Fixed-window attempt throttle keyed by an identifier string.
//!
//! Each identifier gets a window that opens on its first recorded attempt.
//! Once the window has passed, the identifier is allowed again and the record
//! is reset lazily by the next `record_attempt`. Records are never evicted.
//!
//! `is_allowed` and `record_attempt` are separate calls; callers on a single
//! event loop check then record. `check_and_record` does both in one call.

use crate::clock::{Clock, SystemClock};
use crate::constants::{RATE_LIMIT_MAX_ATTEMPTS, RATE_LIMIT_WINDOW_SECS};
use fnv::FnvHashMap;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct RateLimitConfig {
    pub max_attempts: u32,
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_attempts: RATE_LIMIT_MAX_ATTEMPTS,
            window: Duration::from_secs(RATE_LIMIT_WINDOW_SECS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct AttemptRecord {
    count: u32,
    reset_at: Duration,
}

pub struct RateLimiter<C: Clock = SystemClock> {
    config: RateLimitConfig,
    clock: C,
    records: FnvHashMap<String, AttemptRecord>,
}

impl RateLimiter<SystemClock> {
    pub fn new(config: RateLimitConfig) -> Self {
        Self::with_clock(config, SystemClock::new())
    }
}

impl<C: Clock> RateLimiter<C> {
    pub fn with_clock(config: RateLimitConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            records: FnvHashMap::default(),
        }
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Live record for `id`, or `None` if absent or its window has passed.
    fn active(&self, id: &str) -> Option<AttemptRecord> {
        let now = self.clock.now();
        self.records
            .get(id)
            .copied()
            .filter(|rec| now <= rec.reset_at)
    }

    pub fn is_allowed(&self, id: &str) -> bool {
        match self.active(id) {
            Some(rec) => rec.count < self.config.max_attempts,
            None => true,
        }
    }

    pub fn record_attempt(&mut self, id: &str) {
        let now = self.clock.now();
        let window = self.config.window;
        let rec = self
            .records
            .entry(id.to_owned())
            .or_insert(AttemptRecord {
                count: 0,
                reset_at: now + window,
            });
        if now > rec.reset_at {
            rec.count = 0;
            rec.reset_at = now + window;
        }
        rec.count = rec.count.saturating_add(1);
        log::debug!(
            "[rate-limit] {} attempt {}/{}",
            id,
            rec.count,
            self.config.max_attempts
        );
    }

    pub fn remaining_attempts(&self, id: &str) -> u32 {
        match self.active(id) {
            Some(rec) => self.config.max_attempts.saturating_sub(rec.count),
            None => self.config.max_attempts,
        }
    }

    /// Time until `id` is allowed again; `None` when it is allowed now.
    pub fn retry_after(&self, id: &str) -> Option<Duration> {
        let rec = self.active(id)?;
        if rec.count < self.config.max_attempts {
            return None;
        }
        Some(rec.reset_at.saturating_sub(self.clock.now()))
    }

    /// Check then record in one call. Returns whether the attempt was allowed;
    /// refused attempts are not recorded.
    pub fn check_and_record(&mut self, id: &str) -> bool {
        if !self.is_allowed(id) {
            log::warn!("[rate-limit] {} blocked", id);
            return false;
        }
        self.record_attempt(id);
        true
    }

    pub fn clear(&mut self, id: &str) {
        self.records.remove(id);
    }

    /// Number of identifiers with a record, expired ones included.
    pub fn tracked(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn limiter() -> (RateLimiter<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let config = RateLimitConfig {
            max_attempts: 3,
            window: Duration::from_secs(60),
        };
        (RateLimiter::with_clock(config, clock.clone()), clock)
    }

    #[test]
    fn expired_record_resets_on_next_attempt() {
        let (mut rl, clock) = limiter();
        for _ in 0..3 {
            rl.record_attempt("a");
        }
        clock.advance(Duration::from_secs(61));
        rl.record_attempt("a");
        assert_eq!(rl.remaining_attempts("a"), 2);
        assert!(rl.is_allowed("a"));
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let (mut rl, clock) = limiter();
        for _ in 0..3 {
            rl.record_attempt("a");
        }
        clock.advance(Duration::from_secs(60));
        assert!(!rl.is_allowed("a"));
        clock.advance(Duration::from_millis(1));
        assert!(rl.is_allowed("a"));
    }

    #[test]
    fn retry_after_counts_down() {
        let (mut rl, clock) = limiter();
        assert_eq!(rl.retry_after("a"), None);
        for _ in 0..3 {
            rl.record_attempt("a");
        }
        clock.advance(Duration::from_secs(20));
        assert_eq!(rl.retry_after("a"), Some(Duration::from_secs(40)));
    }

    #[test]
    fn check_and_record_refuses_without_recording() {
        let (mut rl, _clock) = limiter();
        assert!(rl.check_and_record("a"));
        assert!(rl.check_and_record("a"));
        assert!(rl.check_and_record("a"));
        assert!(!rl.check_and_record("a"));
        assert_eq!(rl.remaining_attempts("a"), 0);
    }

    #[test]
    fn identifiers_are_independent() {
        let (mut rl, _clock) = limiter();
        for _ in 0..3 {
            rl.record_attempt("a");
        }
        assert!(!rl.is_allowed("a"));
        assert!(rl.is_allowed("b"));
        rl.clear("a");
        assert!(rl.is_allowed("a"));
        assert_eq!(rl.tracked(), 0);
    }
}
