//! Rate limiting for recomputation during pointer drags.

use std::time::{Duration, Instant};

/// Admits at most one recomputation per `min_interval`.
///
/// Time is passed in by the caller, so the throttle is deterministic
/// under test.
#[derive(Clone, Debug)]
pub struct RecomputeThrottle {
    min_interval: Duration,
    last: Option<Instant>,
}

impl RecomputeThrottle {
    /// Default interval between drag recomputations: 20 ms.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(20);

    /// Create a throttle that has not admitted anything yet.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last: None,
        }
    }

    /// Whether a recomputation is allowed at `now`. Records `now` as the
    /// last admitted instant when it is.
    pub fn admit(&mut self, now: Instant) -> bool {
        let allowed = match self.last {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.min_interval,
        };
        if allowed {
            self.last = Some(now);
        }
        allowed
    }

    /// Forget the last admitted instant.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// The configured interval.
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

impl Default for RecomputeThrottle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}
