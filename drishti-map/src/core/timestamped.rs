//! Generic timestamp wrapper.

use serde::{Deserialize, Serialize};

/// Generic timestamp wrapper for any data type.
///
/// Timestamps are in microseconds since epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timestamped<T> {
    /// The wrapped data
    pub data: T,
    /// Receipt timestamp in microseconds since epoch
    pub timestamp_us: u64,
}

impl<T> Timestamped<T> {
    /// Create a new timestamped value.
    #[inline]
    pub fn new(data: T, timestamp_us: u64) -> Self {
        Self { data, timestamp_us }
    }

    /// Age of this value at `now_us`.
    ///
    /// A timestamp ahead of `now_us` (clock skew between threads) counts as age zero.
    #[inline]
    pub fn age_us(&self, now_us: u64) -> u64 {
        now_us.saturating_sub(self.timestamp_us)
    }

    /// True if the value is older than `max_age_us` at `now_us`.
    #[inline]
    pub fn is_stale(&self, now_us: u64, max_age_us: u64) -> bool {
        self.age_us(now_us) > max_age_us
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_and_staleness() {
        let ts = Timestamped::new(42i32, 1_000);

        assert_eq!(ts.age_us(1_500), 500);
        assert!(!ts.is_stale(1_500, 500));
        assert!(ts.is_stale(1_501, 500));
    }

    #[test]
    fn test_future_timestamp_is_fresh() {
        let ts = Timestamped::new((), 2_000);
        assert_eq!(ts.age_us(1_000), 0);
        assert!(!ts.is_stale(1_000, 0));
    }
}
