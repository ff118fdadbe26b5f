use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use rand::Rng;
use tracing::trace;

/// Upper bound for a simulated round trip.
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(800);

/// Emulates a slow remote service in front of the contact store.
///
/// The first call for a key sleeps for a random duration below `max_delay`;
/// repeat calls for the same key return immediately. Only the delay is
/// skipped, no data is kept here. An unkeyed call clears the seen-set so the
/// next lookups are slow again.
#[derive(Debug)]
pub struct LatencySimulator {
    seen: Mutex<HashSet<String>>,
    max_delay: Duration,
}

impl LatencySimulator {
    pub fn new(max_delay: Duration) -> Self {
        Self {
            seen: Mutex::new(HashSet::new()),
            max_delay,
        }
    }

    /// A simulator that never sleeps but still tracks seen keys.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn max_delay(&self) -> Duration {
        self.max_delay
    }

    pub fn reset(&self) {
        self.lock_seen().clear();
    }

    pub fn has_seen(&self, key: &str) -> bool {
        self.lock_seen().contains(key)
    }

    pub async fn simulate(&self, key: Option<&str>) {
        {
            let mut seen = self.lock_seen();

            match key {
                None => seen.clear(),
                Some(key) => {
                    if !seen.insert(key.to_string()) {
                        trace!(key, "latency skipped");
                        return;
                    }
                }
            }
        }

        let delay = self.pick_delay();
        trace!(?key, delay_ms = delay.as_millis() as u64, "simulating latency");

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn pick_delay(&self) -> Duration {
        let max_ms = self.max_delay.as_millis() as u64;
        if max_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rand::thread_rng().gen_range(0..max_ms))
    }

    // The set only holds flags, so a poisoned lock is still usable.
    fn lock_seen(&self) -> MutexGuard<'_, HashSet<String>> {
        self.seen.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LatencySimulator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DELAY)
    }
}
