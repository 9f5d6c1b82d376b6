//! Per-client sliding-window rate limiting.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::config::RateLimitConfig;

/// Backing store for the request guard.
///
/// Built once at startup and shared by every request. A distributed
/// implementation can stand in for multi-instance deployments.
pub trait RateLimitStore: Send + Sync {
    /// Record an attempt for `client_id`; `false` means over the limit.
    fn check(&self, client_id: &str) -> bool;

    /// Drop records that no longer hold any timestamp inside the window.
    /// Returns the number of clients removed.
    fn sweep(&self) -> usize {
        0
    }
}

/// In-memory sliding window: at most `max_requests` accepted per client
/// within any trailing `window`.
pub struct SlidingWindowLimiter {
    records: DashMap<String, VecDeque<Instant>>,
    window: Duration,
    max_requests: usize,
}

impl SlidingWindowLimiter {
    pub fn new(window: Duration, max_requests: usize) -> Self {
        Self {
            records: DashMap::new(),
            window,
            max_requests,
        }
    }

    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(config.window(), config.max_requests)
    }

    /// Check against an explicit clock reading.
    ///
    /// The entry stays locked for the whole prune/compare/append, so
    /// concurrent attempts by one client are serialized.
    pub fn check_at(&self, client_id: &str, now: Instant) -> bool {
        let mut record = self.records.entry(client_id.to_string()).or_default();
        prune(&mut record, now, self.window);

        if record.len() >= self.max_requests {
            return false;
        }
        record.push_back(now);
        true
    }

    pub fn sweep_at(&self, now: Instant) -> usize {
        let before = self.records.len();
        self.records.retain(|_, record| {
            prune(record, now, self.window);
            !record.is_empty()
        });
        before.saturating_sub(self.records.len())
    }

    /// Number of client identifiers currently tracked.
    pub fn tracked_clients(&self) -> usize {
        self.records.len()
    }

    /// Accepted timestamps still held for `client_id`.
    pub fn recorded(&self, client_id: &str) -> usize {
        self.records.get(client_id).map_or(0, |r| r.len())
    }
}

impl RateLimitStore for SlidingWindowLimiter {
    fn check(&self, client_id: &str) -> bool {
        self.check_at(client_id, Instant::now())
    }

    fn sweep(&self) -> usize {
        self.sweep_at(Instant::now())
    }
}

/// Drop timestamps that have aged out of the window. Records are in
/// chronological order, so only the front needs inspecting.
fn prune(record: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&oldest) = record.front() {
        if now.saturating_duration_since(oldest) < window {
            break;
        }
        record.pop_front();
    }
}
