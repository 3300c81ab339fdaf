//! Per-token evaluation: multiplier, rug detection, and entry scoring.

use crate::config::ScoringConfig;
use crate::context::{classify_after, classify_before, score_pair};
use crate::window::extract_window;
use alphalert_core::types::{Candle, TokenReport, TokenTrade};
use rust_decimal::prelude::ToPrimitive;

/// Outcome of evaluating one token.
#[derive(Debug, Clone)]
pub struct TokenEvaluation {
    pub report: TokenReport,
    /// Entry score, when one could be computed: candles present, at least
    /// one buy, and a positive average buy price. The aggregator replicates
    /// it once per buy into the wallet's score population.
    pub entry_score: Option<i8>,
}

/// Score one entry against the candles flanking it.
pub fn score_entry(
    entry_price: f64,
    entry_time: i64,
    candles: &[Candle],
    config: &ScoringConfig,
) -> i8 {
    let window = extract_window(
        entry_price,
        entry_time,
        candles,
        config.lookback_ms(),
        config.lookforward_ms(),
    );
    let before = classify_before(entry_price, window.before_min, window.before_max);
    let after = classify_after(entry_price, window.after_min, window.after_max);
    score_pair(before, after)
}

/// Evaluate one token's trade record against its candle series.
///
/// Pure over its inputs: wallet-level accumulation is the aggregator's job.
pub fn evaluate_token(
    trade: &TokenTrade,
    candles: &[Candle],
    config: &ScoringConfig,
) -> TokenEvaluation {
    let multiplier = {
        let buy_volume = trade.buy_volume.to_f64().unwrap_or(0.0);
        if buy_volume > 0.0 {
            let returned = (trade.sell_volume + trade.balance_usd)
                .to_f64()
                .unwrap_or(0.0);
            returned / buy_volume
        } else {
            0.0
        }
    };

    let is_rugged = detect_rug(candles, config.rug_threshold_pct);

    // The upstream conflates fills into one average price, so the entry
    // point is synthetic: the candle whose close sits nearest that average.
    let entry_score = if trade.buy_count > 0 && trade.buy_avg_price > 0.0 {
        closest_candle(candles, trade.buy_avg_price)
            .map(|entry| score_entry(trade.buy_avg_price, entry.timestamp, candles, config))
    } else {
        None
    };

    TokenEvaluation {
        report: TokenReport {
            symbol: if trade.symbol.is_empty() {
                "UNKNOWN".to_string()
            } else {
                trade.symbol.clone()
            },
            address: trade.address.clone(),
            buy_count: trade.buy_count,
            sell_count: trade.sell_count,
            score: entry_score.unwrap_or(0),
            pnl: trade.total_pnl,
            balance_usd: trade.balance_usd,
            multiplier,
            is_rugged,
            holding: trade.is_holding(),
        },
        entry_score,
    }
}

/// A token is rugged when its latest close sits at least `threshold_pct`
/// below the series peak. No candles means no verdict.
fn detect_rug(candles: &[Candle], threshold_pct: f64) -> bool {
    let Some(latest) = candles.iter().max_by_key(|c| c.timestamp) else {
        return false;
    };
    let peak = candles
        .iter()
        .map(|c| c.high)
        .fold(f64::NEG_INFINITY, f64::max);
    if peak <= 0.0 {
        return false;
    }
    let drop_pct = (peak - latest.close) / peak * 100.0;
    drop_pct >= threshold_pct
}

/// Candle whose close is numerically closest to `price`; the first
/// encountered wins ties.
fn closest_candle<'a>(candles: &'a [Candle], price: f64) -> Option<&'a Candle> {
    candles.iter().reduce(|best, candle| {
        if (candle.close - price).abs() < (best.close - price).abs() {
            candle
        } else {
            best
        }
    })
}
