//! Per-token trade-history records and wallet profile data.

use crate::de;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One token's aggregated trade history for a wallet, as reported upstream.
///
/// The upstream provider aggregates all fills per token: only counts, the
/// average buy price, and volume totals survive. Records are read-only once
/// fetched; missing numeric fields default to zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenTrade {
    /// Token contract address.
    #[serde(rename = "tokenContractAddress", default)]
    pub address: String,

    /// Token ticker symbol.
    #[serde(rename = "tokenSymbol", default)]
    pub symbol: String,

    /// Number of buy transactions.
    #[serde(rename = "totalTxBuy", default, deserialize_with = "de::u32_or_default")]
    pub buy_count: u32,

    /// Number of sell transactions.
    #[serde(rename = "totalTxSell", default, deserialize_with = "de::u32_or_default")]
    pub sell_count: u32,

    /// Volume-weighted average buy price.
    #[serde(rename = "buyAvgPrice", default, deserialize_with = "de::f64_or_default")]
    pub buy_avg_price: f64,

    /// Total USD spent buying.
    #[serde(rename = "buyVolume", default, deserialize_with = "de::decimal_or_default")]
    pub buy_volume: Decimal,

    /// Total USD received selling.
    #[serde(rename = "sellVolume", default, deserialize_with = "de::decimal_or_default")]
    pub sell_volume: Decimal,

    /// Current token balance, in token units.
    #[serde(default, deserialize_with = "de::f64_or_default")]
    pub balance: f64,

    /// USD value of the current balance.
    #[serde(rename = "balanceUsd", default, deserialize_with = "de::decimal_or_default")]
    pub balance_usd: Decimal,

    /// Realized profit and loss.
    #[serde(rename = "realizedPnl", default, deserialize_with = "de::decimal_or_default")]
    pub realized_pnl: Decimal,

    /// Unrealized profit and loss on the held balance.
    #[serde(rename = "unrealizedPnl", default, deserialize_with = "de::decimal_or_default")]
    pub unrealized_pnl: Decimal,

    /// Realized plus unrealized profit and loss.
    #[serde(rename = "totalPnl", default, deserialize_with = "de::decimal_or_default")]
    pub total_pnl: Decimal,

    /// Latest trade activity for this token, epoch milliseconds.
    #[serde(rename = "latestTime", default, deserialize_with = "de::i64_or_default")]
    pub latest_time: i64,
}

impl TokenTrade {
    /// Whether the wallet still holds a balance of this token.
    pub fn is_holding(&self) -> bool {
        self.balance > 0.0
    }
}

/// KOL tag attached to a wallet's upstream profile. Presence means the
/// wallet is tagged as a key opinion leader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KolProfile {
    pub name: String,
    pub twitter: Option<String>,
}

/// Summary of a wallet's token-deployer history. Presence means the wallet
/// has created at least one token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevSummary {
    pub token_count: u32,
    pub rug_count: u32,
    pub golden_dog_count: u32,
}
