use std::time::{Duration, Instant};

/// Staleness policy: a value fetched at `fetched_at` is stale once `ttl` has
/// fully elapsed at `now`.
pub fn is_stale(now: Instant, fetched_at: Instant, ttl: Duration) -> bool {
    now.duration_since(fetched_at) >= ttl
}

/// A fetched value paired with its fetch time. Callers check staleness
/// explicitly at each use site instead of hiding the policy in the fetch.
#[derive(Debug, Clone)]
pub struct TtlCache<T> {
    entry: Option<(T, Instant)>,
    ttl: Duration,
}

impl<T> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self { entry: None, ttl }
    }

    /// The cached value, if present and still fresh at `now`.
    pub fn get(&self, now: Instant) -> Option<&T> {
        match &self.entry {
            Some((value, fetched_at)) if !is_stale(now, *fetched_at, self.ttl) => Some(value),
            _ => None,
        }
    }

    pub fn put(&mut self, value: T, fetched_at: Instant) {
        self.entry = Some((value, fetched_at));
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}
