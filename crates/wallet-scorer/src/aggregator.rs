//! Wallet-level scoring orchestration.
//!
//! Drives the fetch pipeline for one wallet and rolls per-token evaluations
//! into wallet statistics. Each invocation is independent and stateless;
//! per-token candle fetches run sequentially with a pacing delay as
//! backpressure against the upstream API.

use crate::config::ScoringConfig;
use crate::evaluator::evaluate_token;
use alphalert_core::api::MarketDataSource;
use alphalert_core::types::{Chain, WalletReport, WalletStats};
use alphalert_core::Result;
use chrono::Utc;
use tracing::{debug, info, warn};

/// Scores wallets end to end against a market-data source.
pub struct WalletScorer<S> {
    source: S,
    config: ScoringConfig,
}

impl<S: MarketDataSource> WalletScorer<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, ScoringConfig::default())
    }

    pub fn with_config(source: S, config: ScoringConfig) -> Self {
        Self { source, config }
    }

    /// Score one wallet: fetch profile and history, evaluate every
    /// qualifying token, and aggregate the results.
    ///
    /// Profile and trade-history failures abort the evaluation; dev-analysis
    /// and per-token candle failures degrade to neutral values. The result
    /// is always complete — partial reports are never produced.
    pub async fn score_wallet(&self, wallet: &str, chain: Chain) -> Result<WalletReport> {
        info!(wallet, chain = %chain, "scoring wallet");

        // Profile and dev status have no ordering dependency.
        let (kol, dev) = tokio::join!(
            self.source.wallet_profile(chain, wallet),
            self.source.dev_analysis(chain, wallet),
        );
        let kol = kol?;
        let dev = dev.unwrap_or_else(|e| {
            warn!(error = %e, "dev analysis failed, treating wallet as non-dev");
            None
        });

        let trades = self
            .source
            .trade_history(chain, wallet, self.config.max_tokens)
            .await?;

        let cutoff = Utc::now().timestamp_millis() - self.config.recency_window.num_milliseconds();
        let recent: Vec<_> = trades
            .into_iter()
            .filter(|t| t.latest_time >= cutoff)
            .collect();
        debug!(tokens = recent.len(), "tokens inside recency window");

        let mut stats = WalletStats {
            total_tokens: recent.len() as u32,
            ..WalletStats::default()
        };
        let mut score_population: Vec<i8> = Vec::new();
        let mut tokens = Vec::with_capacity(recent.len().min(self.config.max_tokens));

        for trade in recent.iter().take(self.config.max_tokens) {
            // A failed candle fetch neutralizes to an empty series for this
            // token only.
            let candles = self
                .source
                .candles(chain, &trade.address)
                .await
                .unwrap_or_default();

            let evaluation = evaluate_token(trade, &candles, &self.config);

            if let Some(score) = evaluation.entry_score {
                // One score per buy: all fills share the synthetic entry.
                score_population.extend(std::iter::repeat(score).take(trade.buy_count as usize));
            }

            stats.realized_pnl += trade.realized_pnl;
            stats.unrealized_pnl += trade.unrealized_pnl;
            if trade.is_holding() {
                stats.total_bags_value += trade.balance_usd;
                stats.held += 1;
            }
            if evaluation.report.is_rugged {
                stats.rugged += 1;
            }
            stats.distribution.record(evaluation.report.score);

            debug!(
                symbol = %evaluation.report.symbol,
                score = evaluation.report.score,
                candles = candles.len(),
                "evaluated token"
            );
            tokens.push(evaluation.report);

            tokio::time::sleep(self.config.pace_delay).await;
        }

        stats.total_buys = score_population.len() as u32;
        stats.avg_score = if score_population.is_empty() {
            0.0
        } else {
            score_population.iter().map(|&s| s as f64).sum::<f64>() / score_population.len() as f64
        };

        info!(
            tokens = stats.total_tokens,
            entries = stats.total_buys,
            avg_score = stats.avg_score,
            "wallet scored"
        );

        Ok(WalletReport {
            wallet: wallet.to_string(),
            chain,
            timestamp: Utc::now(),
            kol,
            dev,
            stats,
            tokens,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alphalert_core::types::{Candle, DevSummary, KolProfile, TokenTrade};
    use alphalert_core::Error;
    use mockall::mock;
    use mockall::predicate::eq;
    use rust_decimal::Decimal;
    use std::time::Duration as StdDuration;

    mock! {
        Source {}

        #[async_trait::async_trait]
        impl MarketDataSource for Source {
            async fn wallet_profile(
                &self,
                chain: Chain,
                wallet: &str,
            ) -> alphalert_core::Result<Option<KolProfile>>;
            async fn dev_analysis(
                &self,
                chain: Chain,
                wallet: &str,
            ) -> alphalert_core::Result<Option<DevSummary>>;
            async fn trade_history(
                &self,
                chain: Chain,
                wallet: &str,
                limit: usize,
            ) -> alphalert_core::Result<Vec<TokenTrade>>;
            async fn candles(
                &self,
                chain: Chain,
                token: &str,
            ) -> alphalert_core::Result<Vec<Candle>>;
        }
    }

    const HOUR_MS: i64 = 60 * 60 * 1000;
    const WALLET: &str = "FCMXEqaSGdEHbufTCMBdG9kDd5MvU9tQmWqPn9yXF9qb";

    fn test_config() -> ScoringConfig {
        ScoringConfig {
            pace_delay: StdDuration::ZERO,
            ..ScoringConfig::default()
        }
    }

    fn recent_trade(address: &str, symbol: &str, buy_count: u32) -> TokenTrade {
        TokenTrade {
            address: address.to_string(),
            symbol: symbol.to_string(),
            buy_count,
            sell_count: 0,
            buy_avg_price: 1.0,
            buy_volume: Decimal::new(100, 0),
            sell_volume: Decimal::ZERO,
            balance: 0.0,
            balance_usd: Decimal::ZERO,
            realized_pnl: Decimal::ZERO,
            unrealized_pnl: Decimal::ZERO,
            total_pnl: Decimal::ZERO,
            latest_time: Utc::now().timestamp_millis(),
        }
    }

    /// Candle pair that scores a 1.0-average entry as (flat, moon) = +2.
    fn mooning_candles() -> Vec<Candle> {
        let entry_time = 100 * HOUR_MS;
        vec![
            Candle {
                timestamp: entry_time,
                open: 1.0,
                high: 1.02,
                low: 0.98,
                close: 1.0,
            },
            Candle {
                timestamp: entry_time + HOUR_MS,
                open: 1.0,
                high: 1.3,
                low: 0.99,
                close: 1.25,
            },
        ]
    }

    fn quiet_profile(mock: &mut MockSource) {
        mock.expect_wallet_profile().returning(|_, _| Ok(None));
        mock.expect_dev_analysis().returning(|_, _| Ok(None));
    }

    #[tokio::test]
    async fn test_distribution_covers_every_token() {
        let mut mock = MockSource::new();
        quiet_profile(&mut mock);

        let scored = recent_trade("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA1", "MOON", 2);
        let unscored = recent_trade("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA2", "DEAD", 3);
        mock.expect_trade_history()
            .returning(move |_, _, _| Ok(vec![scored.clone(), unscored.clone()]));

        // First token gets candles, second token has none and lands in the
        // neutral bucket without contributing entries.
        mock.expect_candles()
            .with(
                eq(Chain::Solana),
                eq("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA1"),
            )
            .returning(|_, _| Ok(mooning_candles()));
        mock.expect_candles()
            .with(
                eq(Chain::Solana),
                eq("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA2"),
            )
            .returning(|_, _| Ok(vec![]));

        let scorer = WalletScorer::with_config(mock, test_config());
        let report = scorer.score_wallet(WALLET, Chain::Solana).await.unwrap();

        assert_eq!(report.stats.total_tokens, 2);
        assert_eq!(report.stats.distribution.total(), 2);
        assert_eq!(report.stats.distribution.excellent, 1);
        assert_eq!(report.stats.distribution.neutral, 1);
        // Only the scored token's buys enter the population: [2, 2].
        assert_eq!(report.stats.total_buys, 2);
        assert!((report.stats.avg_score - 2.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_held_and_pnl_accumulation() {
        let mut mock = MockSource::new();
        quiet_profile(&mut mock);

        // One token fully sold at a loss, one still held in profit.
        let mut sold = recent_trade("So1dToken1111111111111111111111111111111111", "LOSS", 1);
        sold.realized_pnl = Decimal::new(-7500, 2);
        sold.total_pnl = Decimal::new(-7500, 2);
        sold.sell_count = 1;

        let mut held = recent_trade("He1dToken1111111111111111111111111111111111", "BAGS", 2);
        held.balance = 1_000.0;
        held.balance_usd = Decimal::new(42_000, 2);
        held.unrealized_pnl = Decimal::new(31_000, 2);
        held.total_pnl = Decimal::new(31_000, 2);

        mock.expect_trade_history()
            .returning(move |_, _, _| Ok(vec![sold.clone(), held.clone()]));
        mock.expect_candles()
            .returning(|_, _| Ok(mooning_candles()));

        let scorer = WalletScorer::with_config(mock, test_config());
        let report = scorer.score_wallet(WALLET, Chain::Solana).await.unwrap();

        assert_eq!(report.stats.held, 1);
        assert_eq!(report.stats.rugged, 0);
        assert_eq!(report.stats.realized_pnl, Decimal::new(-7500, 2));
        assert_eq!(report.stats.unrealized_pnl, Decimal::new(31_000, 2));
        assert_eq!(report.stats.total_bags_value, Decimal::new(42_000, 2));
        // Population is [2] from the sold token plus [2, 2] from the held.
        assert_eq!(report.stats.total_buys, 3);
        assert!((report.stats.avg_score - 2.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_recency_filter_drops_stale_tokens() {
        let mut mock = MockSource::new();
        quiet_profile(&mut mock);

        let fresh = recent_trade("FreshToken111111111111111111111111111111111", "NEW", 1);
        let mut stale = recent_trade("Sta1eToken111111111111111111111111111111111", "OLD", 1);
        stale.latest_time = Utc::now().timestamp_millis() - 8 * 24 * HOUR_MS;
        let mut never = recent_trade("NeverToken111111111111111111111111111111111", "NIL", 1);
        never.latest_time = 0;

        mock.expect_trade_history()
            .returning(move |_, _, _| Ok(vec![fresh.clone(), stale.clone(), never.clone()]));
        mock.expect_candles().times(1).returning(|_, _| Ok(vec![]));

        let scorer = WalletScorer::with_config(mock, test_config());
        let report = scorer.score_wallet(WALLET, Chain::Solana).await.unwrap();

        assert_eq!(report.stats.total_tokens, 1);
        assert_eq!(report.tokens.len(), 1);
        assert_eq!(report.tokens[0].symbol, "NEW");
    }

    #[tokio::test]
    async fn test_optional_fetch_failures_degrade() {
        let mut mock = MockSource::new();
        mock.expect_wallet_profile().returning(|_, _| {
            Ok(Some(KolProfile {
                name: "degen".to_string(),
                twitter: None,
            }))
        });
        mock.expect_dev_analysis().returning(|_, _| {
            Err(Error::Api {
                message: "dev endpoint down".to_string(),
                code: Some(500),
            })
        });

        let trade = recent_trade("FreshToken111111111111111111111111111111111", "NEW", 1);
        mock.expect_trade_history()
            .returning(move |_, _, _| Ok(vec![trade.clone()]));
        mock.expect_candles().returning(|_, _| {
            Err(Error::Api {
                message: "candles down".to_string(),
                code: Some(500),
            })
        });

        let scorer = WalletScorer::with_config(mock, test_config());
        let report = scorer.score_wallet(WALLET, Chain::Solana).await.unwrap();

        // Dev failure reads as non-dev, candle failure as an unscored token.
        assert!(report.dev.is_none());
        assert_eq!(report.kol.unwrap().name, "degen");
        assert_eq!(report.stats.total_tokens, 1);
        assert_eq!(report.tokens[0].score, 0);
        assert_eq!(report.stats.total_buys, 0);
    }

    #[tokio::test]
    async fn test_required_fetch_failures_abort() {
        let mut mock = MockSource::new();
        mock.expect_wallet_profile().returning(|_, _| {
            Err(Error::Api {
                message: "HTTP 503".to_string(),
                code: Some(503),
            })
        });
        mock.expect_dev_analysis().returning(|_, _| Ok(None));

        let scorer = WalletScorer::with_config(mock, test_config());
        assert!(scorer.score_wallet(WALLET, Chain::Solana).await.is_err());
    }

    #[tokio::test]
    async fn test_trade_history_failure_aborts() {
        let mut mock = MockSource::new();
        quiet_profile(&mut mock);
        mock.expect_trade_history().returning(|_, _, _| {
            Err(Error::Api {
                message: "HTTP 503".to_string(),
                code: Some(503),
            })
        });

        let scorer = WalletScorer::with_config(mock, test_config());
        assert!(scorer.score_wallet(WALLET, Chain::Solana).await.is_err());
    }

    #[tokio::test]
    async fn test_max_tokens_cap_flows_to_history_fetch() {
        let mut mock = MockSource::new();
        quiet_profile(&mut mock);

        let a = recent_trade("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA1", "ONE", 1);
        let b = recent_trade("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA2", "TWO", 1);
        mock.expect_trade_history()
            .withf(|_, _, limit| *limit == 2)
            .returning(move |_, _, _| Ok(vec![a.clone(), b.clone()]));
        mock.expect_candles().times(2).returning(|_, _| Ok(vec![]));

        let config = ScoringConfig {
            max_tokens: 2,
            ..test_config()
        };
        let scorer = WalletScorer::with_config(mock, config);
        let report = scorer.score_wallet(WALLET, Chain::Solana).await.unwrap();
        assert_eq!(report.tokens.len(), 2);
    }
}
