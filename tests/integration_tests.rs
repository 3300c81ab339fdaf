//! Integration tests for component interactions.
//!
//! These tests drive the scoring pipeline end to end against a canned
//! market-data source and check the rendered output.

use alphalert_core::api::MarketDataSource;
use alphalert_core::types::{Candle, Chain, DevSummary, KolProfile, TokenTrade};
use alphalert_core::Result;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::time::Duration;
use wallet_scorer::{ScoringConfig, WalletScorer};

const HOUR_MS: i64 = 60 * 60 * 1000;
const WALLET: &str = "FCMXEqaSGdEHbufTCMBdG9kDd5MvU9tQmWqPn9yXF9qb";
const SOLD_ADDR: &str = "So1dLoserToken11111111111111111111111111111";
const HELD_ADDR: &str = "He1dWinnerToken1111111111111111111111111111";

/// In-memory stand-in for the upstream provider.
struct CannedSource {
    kol: Option<KolProfile>,
    dev: Option<DevSummary>,
    trades: Vec<TokenTrade>,
    candles: HashMap<String, Vec<Candle>>,
}

#[async_trait]
impl MarketDataSource for CannedSource {
    async fn wallet_profile(&self, _chain: Chain, _wallet: &str) -> Result<Option<KolProfile>> {
        Ok(self.kol.clone())
    }

    async fn dev_analysis(&self, _chain: Chain, _wallet: &str) -> Result<Option<DevSummary>> {
        Ok(self.dev.clone())
    }

    async fn trade_history(
        &self,
        _chain: Chain,
        _wallet: &str,
        limit: usize,
    ) -> Result<Vec<TokenTrade>> {
        let mut trades = self.trades.clone();
        trades.truncate(limit);
        Ok(trades)
    }

    async fn candles(&self, _chain: Chain, token: &str) -> Result<Vec<Candle>> {
        Ok(self.candles.get(token).cloned().unwrap_or_default())
    }
}

fn candle(timestamp: i64, high: f64, low: f64, close: f64) -> Candle {
    Candle {
        timestamp,
        open: close,
        high,
        low,
        close,
    }
}

/// Entry candle at close 1.0 followed by a 30% dump: (flat, dump) = -2.
fn dumping_candles(entry_time: i64) -> Vec<Candle> {
    vec![
        candle(entry_time, 1.02, 0.98, 1.0),
        candle(entry_time + HOUR_MS, 1.01, 0.70, 0.72),
    ]
}

/// Entry candle at close 1.0 followed by a 30% moon: (flat, moon) = +2.
fn mooning_candles(entry_time: i64) -> Vec<Candle> {
    vec![
        candle(entry_time, 1.02, 0.98, 1.0),
        candle(entry_time + HOUR_MS, 1.30, 0.99, 1.25),
    ]
}

/// Two qualifying tokens: one fully sold at a loss, one still held with
/// positive unrealized pnl.
fn two_token_source() -> CannedSource {
    let now = Utc::now().timestamp_millis();
    let entry_time = 100 * HOUR_MS;

    let sold = TokenTrade {
        address: SOLD_ADDR.to_string(),
        symbol: "LOSS".to_string(),
        buy_count: 2,
        sell_count: 2,
        buy_avg_price: 1.0,
        buy_volume: Decimal::new(200, 0),
        sell_volume: Decimal::new(120, 0),
        balance: 0.0,
        balance_usd: Decimal::ZERO,
        realized_pnl: Decimal::new(-80, 0),
        unrealized_pnl: Decimal::ZERO,
        total_pnl: Decimal::new(-80, 0),
        latest_time: now,
    };

    let held = TokenTrade {
        address: HELD_ADDR.to_string(),
        symbol: "BAGS".to_string(),
        buy_count: 1,
        sell_count: 0,
        buy_avg_price: 1.0,
        buy_volume: Decimal::new(100, 0),
        sell_volume: Decimal::ZERO,
        balance: 500.0,
        balance_usd: Decimal::new(310, 0),
        realized_pnl: Decimal::ZERO,
        unrealized_pnl: Decimal::new(210, 0),
        total_pnl: Decimal::new(210, 0),
        latest_time: now,
    };

    let mut candles = HashMap::new();
    candles.insert(SOLD_ADDR.to_string(), dumping_candles(entry_time));
    candles.insert(HELD_ADDR.to_string(), mooning_candles(entry_time));

    CannedSource {
        kol: Some(KolProfile {
            name: "degen".to_string(),
            twitter: Some("https://x.com/degen".to_string()),
        }),
        dev: None,
        trades: vec![sold, held],
        candles,
    }
}

fn fast_config() -> ScoringConfig {
    ScoringConfig {
        pace_delay: Duration::ZERO,
        ..ScoringConfig::default()
    }
}

#[tokio::test]
async fn test_two_token_wallet_end_to_end() {
    let scorer = WalletScorer::with_config(two_token_source(), fast_config());
    let report = scorer.score_wallet(WALLET, Chain::Solana).await.unwrap();

    assert_eq!(report.wallet, WALLET);
    assert_eq!(report.chain, Chain::Solana);
    assert_eq!(report.kol.as_ref().unwrap().name, "degen");
    assert!(report.dev.is_none());

    let stats = &report.stats;
    assert_eq!(stats.total_tokens, 2);
    assert_eq!(stats.held, 1);
    assert_eq!(stats.rugged, 0);
    assert_eq!(stats.realized_pnl, Decimal::new(-80, 0));
    assert_eq!(stats.unrealized_pnl, Decimal::new(210, 0));
    assert_eq!(stats.total_bags_value, Decimal::new(310, 0));

    // Population is the union of replicated per-buy scores:
    // LOSS contributes [-2, -2], BAGS contributes [2].
    assert_eq!(stats.total_buys, 3);
    assert!((stats.avg_score - (-2.0 - 2.0 + 2.0) / 3.0).abs() < 1e-9);

    // Every evaluated token lands in exactly one bucket.
    assert_eq!(stats.distribution.total(), stats.total_tokens);
    assert_eq!(stats.distribution.terrible, 1);
    assert_eq!(stats.distribution.excellent, 1);
}

#[tokio::test]
async fn test_report_renders_for_chat_and_terminal() {
    let scorer = WalletScorer::with_config(two_token_source(), fast_config());
    let report = scorer.score_wallet(WALLET, Chain::Solana).await.unwrap();

    let html = alphalert_bot::format_report(&report);
    assert!(html.contains(">FCMX...F9qb</a>"));
    assert!(html.contains("👑 KOL: degen"));
    assert!(html.contains("Tokens: 2 | Entries: 3"));
    // The held bag ranks above the sold loser.
    let bags = html.find(">BAGS</a>").unwrap();
    let loss = html.find(">LOSS</a>").unwrap();
    assert!(bags < loss);

    let ansi = alphalert_bot::html_to_ansi(&html);
    assert!(!ansi.contains("<a href"));
    assert!(!ansi.contains("<b>"));
    assert!(ansi.contains("\x1b[1mTop Tokens\x1b[0m"));
}

#[tokio::test]
async fn test_parsed_command_drives_scoring() {
    let command =
        alphalert_bot::parse_command(&format!("/score {} sol", WALLET)).expect("command parses");
    assert_eq!(command.chain.id(), 501);

    let scorer = WalletScorer::with_config(two_token_source(), fast_config());
    let report = scorer
        .score_wallet(&command.wallet, command.chain)
        .await
        .unwrap();
    assert_eq!(report.wallet, WALLET);
}
