//! Wallet scoring results.

use crate::types::{Chain, DevSummary, KolProfile};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Scoring outcome for one evaluated token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenReport {
    pub symbol: String,
    pub address: String,
    pub buy_count: u32,
    pub sell_count: u32,
    /// Entry quality score in {-2..2}; 0 when no entry could be scored.
    pub score: i8,
    /// Realized plus unrealized profit and loss.
    pub pnl: Decimal,
    /// USD value of the still-held balance.
    pub balance_usd: Decimal,
    /// Total value returned (sold + held) per unit invested; 0 when nothing
    /// was invested.
    pub multiplier: f64,
    /// Price collapsed at least 90% from its observed peak.
    pub is_rugged: bool,
    /// Wallet still holds a balance.
    pub holding: bool,
}

/// Per-token score distribution across the five quality buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDistribution {
    pub excellent: u32,
    pub good: u32,
    pub neutral: u32,
    pub poor: u32,
    pub terrible: u32,
}

impl ScoreDistribution {
    /// Record one token's score into its bucket.
    pub fn record(&mut self, score: i8) {
        match score {
            2 => self.excellent += 1,
            1 => self.good += 1,
            0 => self.neutral += 1,
            -1 => self.poor += 1,
            _ => self.terrible += 1,
        }
    }

    /// Total tokens recorded across all buckets.
    pub fn total(&self) -> u32 {
        self.excellent + self.good + self.neutral + self.poor + self.terrible
    }
}

/// Aggregate statistics over all evaluated tokens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalletStats {
    /// Tokens inside the recency window.
    pub total_tokens: u32,
    /// Buy entries contributing to the score population.
    pub total_buys: u32,
    /// Mean of the per-buy score population; 0 when no entries scored.
    pub avg_score: f64,
    pub distribution: ScoreDistribution,
    pub realized_pnl: Decimal,
    pub unrealized_pnl: Decimal,
    /// Summed USD value of currently-held bags.
    pub total_bags_value: Decimal,
    /// Tokens whose price collapsed from peak.
    pub rugged: u32,
    /// Tokens still held.
    pub held: u32,
}

/// Complete scoring result for one wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletReport {
    pub wallet: String,
    pub chain: Chain,
    pub timestamp: DateTime<Utc>,
    /// KOL profile tag, when the wallet carries one.
    pub kol: Option<KolProfile>,
    /// Token-deployer history, when the wallet has created tokens.
    pub dev: Option<DevSummary>,
    pub stats: WalletStats,
    /// Evaluated tokens in upstream order (most recent activity first).
    pub tokens: Vec<TokenReport>,
}
