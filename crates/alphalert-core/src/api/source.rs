//! Typed boundary to the upstream market-data provider.

use crate::types::{Candle, Chain, DevSummary, KolProfile, TokenTrade};
use crate::Result;
use async_trait::async_trait;

/// The four upstream queries the scoring pipeline consumes.
///
/// Profile and trade-history are required inputs: their failures propagate
/// and abort wallet scoring. Dev-analysis and candles are optional: the
/// aggregator degrades their failures to neutral values so one token's bad
/// data never aborts the whole evaluation.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// KOL tag for a wallet; `None` when the wallet is untagged.
    async fn wallet_profile(&self, chain: Chain, wallet: &str) -> Result<Option<KolProfile>>;

    /// Token-deployer summary; `None` when the wallet created no tokens.
    async fn dev_analysis(&self, chain: Chain, wallet: &str) -> Result<Option<DevSummary>>;

    /// Per-token trade history, newest activity first, capped at `limit`.
    async fn trade_history(
        &self,
        chain: Chain,
        wallet: &str,
        limit: usize,
    ) -> Result<Vec<TokenTrade>>;

    /// Recent candles for one token; empty when the upstream has none.
    async fn candles(&self, chain: Chain, token: &str) -> Result<Vec<Candle>>;
}
