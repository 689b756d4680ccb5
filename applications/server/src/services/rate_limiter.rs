/// Fixed-window request counting keyed by client identity
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

/// Outcome of counting one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed { remaining: u32 },
    Limited { retry_after: Duration },
}

/// Counter store with atomic increment-and-check
///
/// Implementations may live outside the process (a shared cache) as long as
/// counting and checking one request is a single atomic step.
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Count one request for `key` and decide whether it may proceed
    async fn hit(&self, key: &str) -> RateDecision;
}

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    count: u32,
}

/// In-process limiter; windows expire `window` after their first request
///
/// At most `max_keys` windows are tracked. A new key arriving at capacity
/// first sweeps expired windows, then evicts the oldest one.
#[derive(Debug)]
pub struct InMemoryRateLimiter {
    max_requests: u32,
    window: Duration,
    max_keys: usize,
    windows: Mutex<HashMap<String, Window>>,
}

/// Default bound on tracked client keys
pub const DEFAULT_MAX_KEYS: usize = 10_000;

impl InMemoryRateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            max_keys: DEFAULT_MAX_KEYS,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Bound the number of tracked keys (at least one)
    #[must_use]
    pub fn with_max_keys(mut self, max_keys: usize) -> Self {
        self.max_keys = max_keys.max(1);
        self
    }

    /// Number of keys currently tracked
    pub async fn tracked_keys(&self) -> usize {
        self.windows.lock().await.len()
    }
}

fn make_room(windows: &mut HashMap<String, Window>, now: Instant, window: Duration, max_keys: usize) {
    windows.retain(|_, w| now.duration_since(w.started) < window);

    while windows.len() >= max_keys {
        let oldest = windows
            .iter()
            .min_by_key(|(_, w)| w.started)
            .map(|(key, _)| key.clone());
        match oldest {
            Some(key) => windows.remove(&key),
            None => break,
        };
    }
}

#[async_trait]
impl RateLimiter for InMemoryRateLimiter {
    async fn hit(&self, key: &str) -> RateDecision {
        let now = Instant::now();
        let mut windows = self.windows.lock().await;

        if !windows.contains_key(key) && windows.len() >= self.max_keys {
            make_room(&mut windows, now, self.window, self.max_keys);
        }

        let entry = windows.entry(key.to_string()).or_insert(Window {
            started: now,
            count: 0,
        });
        if now.duration_since(entry.started) >= self.window {
            *entry = Window {
                started: now,
                count: 0,
            };
        }

        entry.count = entry.count.saturating_add(1);
        if entry.count > self.max_requests {
            let elapsed = now.duration_since(entry.started);
            return RateDecision::Limited {
                retry_after: self.window.saturating_sub(elapsed),
            };
        }

        RateDecision::Allowed {
            remaining: self.max_requests - entry.count,
        }
    }
}
