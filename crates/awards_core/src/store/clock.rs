//! Time source for store-assigned timestamps.

use chrono::{DateTime, Datelike, Utc};

/// Source of "now" in Unix epoch milliseconds.
///
/// `Send + Sync` keeps `AwardsStore` shareable behind a mutex.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> i64;
}

/// Wall clock backed by `chrono::Utc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock pinned to one instant. Useful for deterministic callers and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

/// UTC calendar year of an epoch-millisecond timestamp.
///
/// Out-of-range timestamps fall back to 1970.
pub fn utc_year(epoch_ms: i64) -> i32 {
    DateTime::<Utc>::from_timestamp_millis(epoch_ms)
        .map(|instant| instant.year())
        .unwrap_or(1970)
}
