use hostprobe_domain::QueryId;
use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out query ids taken from the wall clock in milliseconds.
///
/// Two requests landing in the same millisecond would collide on the raw
/// timestamp, so each id is `max(now_ms, previous + 1)`. Ids stay close to the
/// submission time and are strictly increasing for the life of the process.
pub struct QueryIdGenerator {
    last: AtomicU64,
}

impl QueryIdGenerator {
    pub fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    pub fn next(&self) -> QueryId {
        let now_ms = chrono::Utc::now().timestamp_millis().max(0) as u64;
        self.next_at(now_ms)
    }

    pub fn next_at(&self, now_ms: u64) -> QueryId {
        let mut current = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now_ms.max(current + 1);
            match self.last.compare_exchange_weak(
                current,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return QueryId(candidate),
                Err(observed) => current = observed,
            }
        }
    }
}

impl Default for QueryIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
