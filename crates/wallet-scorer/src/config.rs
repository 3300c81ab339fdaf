//! Tunable constants for the scoring pipeline.

use chrono::Duration;
use std::time::Duration as StdDuration;

/// Immutable knobs for window extraction, rug detection, and aggregation.
///
/// Passed explicitly into the components that need it so the scoring core
/// stays testable in isolation from deployment specifics.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Price history considered before an entry.
    pub lookback: Duration,
    /// Price action considered after an entry.
    pub lookforward: Duration,
    /// Only tokens with trade activity inside this window are evaluated.
    pub recency_window: Duration,
    /// Cap on tokens evaluated per wallet, in upstream order.
    pub max_tokens: usize,
    /// Peak-to-current drawdown percentage that flags a rug.
    pub rug_threshold_pct: f64,
    /// Pause between per-token candle fetches (upstream rate limit).
    pub pace_delay: StdDuration,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            lookback: Duration::hours(8),
            lookforward: Duration::hours(24),
            recency_window: Duration::days(7),
            max_tokens: 30,
            rug_threshold_pct: 90.0,
            pace_delay: StdDuration::from_millis(100),
        }
    }
}

impl ScoringConfig {
    pub fn lookback_ms(&self) -> i64 {
        self.lookback.num_milliseconds()
    }

    pub fn lookforward_ms(&self) -> i64 {
        self.lookforward.num_milliseconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScoringConfig::default();
        assert_eq!(config.lookback_ms(), 8 * 60 * 60 * 1000);
        assert_eq!(config.lookforward_ms(), 24 * 60 * 60 * 1000);
        assert_eq!(config.max_tokens, 30);
        assert_eq!(config.rug_threshold_pct, 90.0);
    }
}
