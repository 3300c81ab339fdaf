//! Candle window extraction around a trade entry.

use alphalert_core::types::Candle;

/// Price extremes in the windows flanking one entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryWindow {
    pub before_min: f64,
    pub before_max: f64,
    pub after_min: f64,
    pub after_max: f64,
}

/// Partition `candles` around `entry_time` and take each side's extremes.
///
/// Before spans `[entry_time - lookback, entry_time)`, after spans
/// `(entry_time, entry_time + lookforward]`; the entry bar itself belongs to
/// neither. An empty side reports the entry price for both extremes so
/// downstream classification reads it as flat instead of inventing a move
/// from missing data.
pub fn extract_window(
    entry_price: f64,
    entry_time: i64,
    candles: &[Candle],
    lookback_ms: i64,
    lookforward_ms: i64,
) -> EntryWindow {
    let mut before_min = f64::INFINITY;
    let mut before_max = f64::NEG_INFINITY;
    let mut after_min = f64::INFINITY;
    let mut after_max = f64::NEG_INFINITY;

    for candle in candles {
        if candle.timestamp < entry_time && candle.timestamp >= entry_time - lookback_ms {
            before_min = before_min.min(candle.low);
            before_max = before_max.max(candle.high);
        } else if candle.timestamp > entry_time && candle.timestamp <= entry_time + lookforward_ms {
            after_min = after_min.min(candle.low);
            after_max = after_max.max(candle.high);
        }
    }

    if !before_min.is_finite() {
        before_min = entry_price;
        before_max = entry_price;
    }
    if !after_min.is_finite() {
        after_min = entry_price;
        after_max = entry_price;
    }

    EntryWindow {
        before_min,
        before_max,
        after_min,
        after_max,
    }
}
