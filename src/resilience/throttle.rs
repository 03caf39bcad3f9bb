use std::time::{Duration, Instant};
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub struct ThrottleSnapshot {
    pub min_interval_ms: u64,
    /// Time since the last dispatch passed the throttle (ms), if any has.
    pub last_dispatch_age_ms: Option<u64>,
    /// Wait a caller arriving now would incur (ms), if non-zero.
    pub estimated_wait_ms: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct ThrottleConfig {
    /// Minimum spacing between two dispatches. Zero disables throttling.
    pub min_interval: Duration,
}

impl ThrottleConfig {
    pub fn new() -> Self {
        Self {
            min_interval: Duration::from_millis(1000),
        }
    }

    pub fn with_min_interval(mut self, interval: Duration) -> Self {
        self.min_interval = interval;
        self
    }
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimum-interval request throttle.
///
/// - One clock shared by every caller of this instance
/// - Concurrent callers queue on the lock; release order is unspecified
/// - No timeout and no error path
pub struct RequestThrottle {
    cfg: ThrottleConfig,
    last: Mutex<Option<Instant>>,
}

impl RequestThrottle {
    pub fn new(cfg: ThrottleConfig) -> Self {
        Self {
            cfg,
            last: Mutex::new(None),
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.cfg.min_interval
    }

    fn remaining(&self, last: Option<Instant>, now: Instant) -> Duration {
        match last {
            Some(prev) => self
                .cfg
                .min_interval
                .saturating_sub(now.saturating_duration_since(prev)),
            None => Duration::ZERO,
        }
    }

    /// Wait until `min_interval` has passed since the previous `acquire`,
    /// then stamp the current time and return it.
    ///
    /// The lock is held across the sleep so a second caller measures its wait
    /// from the first caller's stamp, never from a stale one.
    pub async fn acquire(&self) -> Instant {
        let mut last = self.last.lock().await;
        let wait = self.remaining(*last, Instant::now());
        if !wait.is_zero() {
            tokio::time::sleep(wait).await;
        }
        let now = Instant::now();
        *last = Some(now);
        now
    }

    pub async fn snapshot(&self) -> ThrottleSnapshot {
        let last = *self.last.lock().await;
        let now = Instant::now();
        let wait = self.remaining(last, now);
        ThrottleSnapshot {
            min_interval_ms: self.cfg.min_interval.as_millis() as u64,
            last_dispatch_age_ms: last
                .map(|prev| now.saturating_duration_since(prev).as_millis() as u64),
            estimated_wait_ms: (!wait.is_zero()).then(|| wait.as_millis() as u64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn throttle(ms: u64) -> RequestThrottle {
        RequestThrottle::new(ThrottleConfig::new().with_min_interval(Duration::from_millis(ms)))
    }

    #[test]
    fn test_default_interval() {
        assert_eq!(ThrottleConfig::default().min_interval, Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_first_acquire_is_immediate() {
        let t = throttle(500);
        let start = Instant::now();
        t.acquire().await;
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_sequential_acquires_are_spaced() {
        let t = throttle(50);
        let mut stamps = Vec::new();
        for _ in 0..4 {
            stamps.push(t.acquire().await);
        }
        for pair in stamps.windows(2) {
            assert!(pair[1].duration_since(pair[0]) >= Duration::from_millis(50));
        }
    }

    #[tokio::test]
    async fn test_concurrent_acquires_are_spaced() {
        let t = Arc::new(throttle(40));
        let handles: Vec<_> = (0..5)
            .map(|_| {
                let t = t.clone();
                tokio::spawn(async move { t.acquire().await })
            })
            .collect();

        let mut stamps = Vec::new();
        for h in handles {
            stamps.push(h.await.unwrap());
        }
        stamps.sort();
        for pair in stamps.windows(2) {
            assert!(pair[1].duration_since(pair[0]) >= Duration::from_millis(40));
        }
    }

    #[tokio::test]
    async fn test_zero_interval_never_waits() {
        let t = throttle(0);
        let start = Instant::now();
        for _ in 0..10 {
            t.acquire().await;
        }
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_snapshot() {
        let t = throttle(200);
        let before = t.snapshot().await;
        assert_eq!(before.min_interval_ms, 200);
        assert!(before.last_dispatch_age_ms.is_none());
        assert!(before.estimated_wait_ms.is_none());

        t.acquire().await;
        let after = t.snapshot().await;
        assert!(after.last_dispatch_age_ms.is_some());
        assert!(after.estimated_wait_ms.unwrap_or(0) > 0);
    }
}
