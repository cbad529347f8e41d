//! Requests-per-second limiting.

use std::sync::{Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

/// Longest interval between two calls.
const MAX_INTERVAL: Duration = Duration::from_secs(3600);

/// Spaces calls at least `1 / rps` apart.
///
/// Thread-safe: each caller reserves the next free slot under the lock and
/// sleeps outside of it.
#[derive(Debug)]
pub(crate) struct RateLimiter {
    interval: Duration,
    next_slot: Mutex<Instant>,
}

impl RateLimiter {
    /// Create a limiter for `rps` requests per second.
    ///
    /// Returns `None` for non-positive or non-finite rates, which disable
    /// limiting. Rates below one request per hour are capped at one per hour.
    pub(crate) fn new(rps: f64) -> Option<Self> {
        if !rps.is_finite() || rps <= 0.0 {
            return None;
        }
        let interval = Duration::try_from_secs_f64(1.0 / rps)
            .map_or(MAX_INTERVAL, |interval| interval.min(MAX_INTERVAL));
        Some(Self {
            interval,
            next_slot: Mutex::new(Instant::now()),
        })
    }

    /// Block until the caller may send the next request.
    pub(crate) fn acquire(&self) {
        let wait = {
            let mut next_slot = self.next_slot.lock().unwrap_or_else(PoisonError::into_inner);
            let now = Instant::now();
            let slot = (*next_slot).max(now);
            *next_slot = slot + self.interval;
            slot - now
        };

        if !wait.is_zero() {
            debug!("Rate limit: waiting {:?}", wait);
            thread::sleep(wait);
        }
    }
}
