//! In-memory rate limiter using governor crate.

use std::num::NonZeroU32;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use governor::clock::{Clock, DefaultClock};
use governor::state::keyed::DefaultKeyedStateStore;
use governor::{Quota, RateLimiter as GovernorRateLimiter};

use scribe_core::ports::{RateLimitError, RateLimitResult, RateLimiter};

type KeyedRateLimiter = GovernorRateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>;

/// In-memory rate limiter configuration.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests per window for one client.
    pub max_requests: u32,
    /// Window duration.
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 100,
            window: Duration::from_secs(60),
        }
    }
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_requests: std::env::var("RATE_LIMIT_MAX_REQUESTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_requests),
            window: std::env::var("RATE_LIMIT_WINDOW_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.window),
        }
    }
}

/// Per-client in-memory rate limiter using the GCRA algorithm.
///
/// Clients whose budget has fully recovered are swept at most once per window.
/// Note: Limits are per-process, not distributed across instances.
pub struct InMemoryRateLimiter {
    limiter: KeyedRateLimiter,
    config: RateLimitConfig,
    started: Instant,
    /// Milliseconds after `started` of the last sweep.
    last_sweep_ms: AtomicU64,
}

impl InMemoryRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let burst = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::with_period(config.window / burst.get())
            .unwrap_or_else(|| Quota::per_second(burst))
            .allow_burst(burst);

        Self {
            limiter: GovernorRateLimiter::keyed(quota),
            config,
            started: Instant::now(),
            last_sweep_ms: AtomicU64::new(0),
        }
    }

    /// Drop fully recovered clients once a window has passed since the last sweep.
    fn sweep_if_due(&self) {
        let now_ms = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let window_ms = u64::try_from(self.config.window.as_millis()).unwrap_or(u64::MAX);
        let last = self.last_sweep_ms.load(Ordering::Relaxed);

        if now_ms.saturating_sub(last) < window_ms {
            return;
        }
        // Only the caller that wins the swap sweeps.
        if self
            .last_sweep_ms
            .compare_exchange(last, now_ms, Ordering::AcqRel, Ordering::Relaxed)
            .is_ok()
        {
            self.limiter.retain_recent();
            tracing::debug!(tracked_clients = self.limiter.len(), "Swept rate limiter state");
        }
    }
}

#[async_trait]
impl RateLimiter for InMemoryRateLimiter {
    async fn check(&self, key: &str) -> Result<RateLimitResult, RateLimitError> {
        self.sweep_if_due();

        match self.limiter.check_key(&key.to_string()) {
            // governor does not expose the remaining budget; report the configured maximum.
            Ok(()) => Ok(RateLimitResult::allowed(
                self.config.max_requests,
                self.config.window,
            )),
            Err(not_until) => Ok(RateLimitResult::limited(
                not_until.wait_time_from(DefaultClock::default().now()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_limits_after_burst() {
        let limiter = InMemoryRateLimiter::new(RateLimitConfig {
            max_requests: 2,
            window: Duration::from_secs(60),
        });

        assert!(limiter.check("10.0.0.1").await.unwrap().allowed);
        assert!(limiter.check("10.0.0.1").await.unwrap().allowed);

        let third = limiter.check("10.0.0.1").await.unwrap();
        assert!(!third.allowed);
        assert!(third.reset_after > Duration::ZERO);
    }

    #[tokio::test]
    async fn test_clients_are_limited_independently() {
        let limiter = InMemoryRateLimiter::new(RateLimitConfig {
            max_requests: 1,
            window: Duration::from_secs(60),
        });

        assert!(limiter.check("a").await.unwrap().allowed);
        assert!(!limiter.check("a").await.unwrap().allowed);
        assert!(limiter.check("b").await.unwrap().allowed);
    }

    #[tokio::test]
    async fn test_recovered_clients_are_forgotten() {
        let limiter = InMemoryRateLimiter::new(RateLimitConfig {
            max_requests: 1,
            window: Duration::from_millis(200),
        });

        for i in 0..50 {
            limiter.check(&format!("10.0.0.{i}")).await.unwrap();
        }
        assert_eq!(limiter.limiter.len(), 50);

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(limiter.check("10.0.1.1").await.unwrap().allowed);

        assert_eq!(limiter.limiter.len(), 1);
    }
}
