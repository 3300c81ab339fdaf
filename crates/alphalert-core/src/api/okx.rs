//! OKX DEX market-data API client.
//!
//! Read-only client for the wallet PnL, dev-analysis, and candle endpoints.
//! Trade-history pagination paces itself between page requests to respect
//! the upstream rate limit; individual requests are never retried.

use crate::api::MarketDataSource;
use crate::config::MarketDataConfig;
use crate::de;
use crate::types::{Candle, Chain, DevSummary, KolProfile, TokenTrade};
use crate::{Error, Result};
use async_trait::async_trait;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration as StdDuration;
use tracing::{debug, warn};

/// Response envelope shared by all upstream endpoints. The business `code`
/// arrives as a number on most endpoints and as a numeric string on the
/// candle endpoint; zero means success.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default, deserialize_with = "de::i64_or_default")]
    code: i64,
    #[serde(default)]
    msg: Option<String>,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct ProfileData {
    /// Profile tag list; the scorer only looks for the `kol` entry.
    #[serde(rename = "t", default)]
    tags: Vec<ProfileTag>,
}

#[derive(Debug, Deserialize)]
struct ProfileTag {
    #[serde(rename = "k", default)]
    kind: String,
    #[serde(rename = "e")]
    extra: Option<TagExtra>,
}

#[derive(Debug, Deserialize)]
struct TagExtra {
    name: Option<String>,
    #[serde(rename = "kolTwitterLink")]
    kol_twitter_link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DevAnalysisData {
    #[serde(rename = "devAnalysisSummaryVO")]
    summary: Option<DevAnalysisSummary>,
}

#[derive(Debug, Deserialize)]
struct DevAnalysisSummary {
    #[serde(
        rename = "createdTokenCount",
        default,
        deserialize_with = "de::u32_or_default"
    )]
    created_token_count: u32,
    #[serde(
        rename = "ruggedTokenCount",
        default,
        deserialize_with = "de::u32_or_default"
    )]
    rugged_token_count: u32,
    #[serde(
        rename = "goldenDogCount",
        default,
        deserialize_with = "de::u32_or_default"
    )]
    golden_dog_count: u32,
}

#[derive(Debug, Deserialize)]
struct TokenListPage {
    #[serde(rename = "tokenList", default)]
    token_list: Vec<TokenTrade>,
    #[serde(rename = "hasNext", default)]
    has_next: bool,
    /// Upstream-supplied cursor for the next page.
    #[serde(default, deserialize_with = "de::i64_or_default")]
    offset: i64,
}

/// Client for the OKX DEX market-data API.
pub struct OkxClient {
    base_url: String,
    config: MarketDataConfig,
    http_client: reqwest::Client,
}

impl OkxClient {
    /// Default API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://web3.okx.com";

    const WALLET_PROFILE_PATH: &'static str =
        "/priapi/v1/dx/market/v2/pnl/wallet-profile/query/address/info";
    const TOKEN_LIST_PATH: &'static str = "/priapi/v1/dx/market/v2/pnl/token-list";
    const DEV_ANALYSIS_PATH: &'static str = "/priapi/v1/dx/market/v2/dev/analysis-list";
    const CANDLES_PATH: &'static str = "/priapi/v5/dex/token/market/dex-token-hlc-candles";

    pub fn new(config: MarketDataConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(StdDuration::from_secs(30))
            .connect_timeout(StdDuration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());
        Self {
            base_url,
            config,
            http_client,
        }
    }

    /// Fetch one enveloped endpoint response.
    ///
    /// Non-2xx statuses and transport errors map to `Error`; the envelope is
    /// returned with its business code intact for the caller to interpret.
    async fn get_envelope<T: DeserializeOwned>(&self, url: &str) -> Result<Envelope<T>> {
        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api {
                message: format!("HTTP {}", status),
                code: Some(status.as_u16() as i64),
            });
        }
        Ok(response.json().await?)
    }

    /// Cache-buster query parameter the upstream expects on every request.
    fn request_ts() -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[async_trait]
impl MarketDataSource for OkxClient {
    async fn wallet_profile(&self, chain: Chain, wallet: &str) -> Result<Option<KolProfile>> {
        let url = format!(
            "{}{}?chainId={}&walletAddress={}&t={}",
            self.base_url,
            Self::WALLET_PROFILE_PATH,
            chain.id(),
            wallet,
            Self::request_ts()
        );

        let envelope: Envelope<ProfileData> = self.get_envelope(&url).await?;
        if envelope.code != 0 {
            debug!(code = envelope.code, "wallet profile unavailable");
            return Ok(None);
        }

        let kol_tag = envelope
            .data
            .and_then(|d| d.tags.into_iter().find(|tag| tag.kind == "kol"));

        Ok(kol_tag.map(|tag| KolProfile {
            name: tag
                .extra
                .as_ref()
                .and_then(|e| e.name.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
            twitter: tag.extra.and_then(|e| e.kol_twitter_link),
        }))
    }

    async fn dev_analysis(&self, chain: Chain, wallet: &str) -> Result<Option<DevSummary>> {
        let url = format!(
            "{}{}?chainId={}&walletAddress={}&isDesc=true&sortBy=1&page=1&pageSize=1&filterRisk=false&filterUnmigrate=false&t={}",
            self.base_url,
            Self::DEV_ANALYSIS_PATH,
            chain.id(),
            wallet,
            Self::request_ts()
        );

        let envelope: Envelope<DevAnalysisData> = self.get_envelope(&url).await?;
        if envelope.code != 0 {
            return Ok(None);
        }

        // Zero created tokens means the wallet is not a deployer.
        match envelope.data.and_then(|d| d.summary) {
            Some(summary) if summary.created_token_count > 0 => Ok(Some(DevSummary {
                token_count: summary.created_token_count,
                rug_count: summary.rugged_token_count,
                golden_dog_count: summary.golden_dog_count,
            })),
            _ => Ok(None),
        }
    }

    async fn trade_history(
        &self,
        chain: Chain,
        wallet: &str,
        limit: usize,
    ) -> Result<Vec<TokenTrade>> {
        let mut tokens: Vec<TokenTrade> = Vec::new();
        let mut offset: i64 = 0;

        while tokens.len() < limit {
            let url = format!(
                "{}{}?walletAddress={}&chainId={}&isAsc=false&sortType=2&offset={}&limit={}&filterRisk=false&filterSmallBalance=false&filterEmptyBalance=false&t={}",
                self.base_url,
                Self::TOKEN_LIST_PATH,
                wallet,
                chain.id(),
                offset,
                self.config.page_size,
                Self::request_ts()
            );

            let envelope: Envelope<TokenListPage> = self.get_envelope(&url).await?;
            if envelope.code != 0 {
                warn!(
                    code = envelope.code,
                    msg = envelope.msg.as_deref().unwrap_or(""),
                    "trade-history page rejected, stopping pagination"
                );
                break;
            }
            let Some(page) = envelope.data else { break };

            debug!(
                page_tokens = page.token_list.len(),
                offset, "fetched trade-history page"
            );
            tokens.extend(page.token_list);

            if !page.has_next || tokens.len() >= limit {
                break;
            }
            offset = page.offset;

            tokio::time::sleep(StdDuration::from_millis(self.config.page_delay_ms)).await;
        }

        tokens.truncate(limit);
        Ok(tokens)
    }

    async fn candles(&self, chain: Chain, token: &str) -> Result<Vec<Candle>> {
        let url = format!(
            "{}{}?chainId={}&address={}&bar={}&limit={}&t={}",
            self.base_url,
            Self::CANDLES_PATH,
            chain.id(),
            token,
            self.config.candle_bar,
            self.config.candle_limit,
            Self::request_ts()
        );

        let envelope: Envelope<Vec<Candle>> = self.get_envelope(&url).await?;
        if envelope.code != 0 {
            debug!(code = envelope.code, token, "candle query rejected, treating as empty");
            return Ok(Vec::new());
        }
        Ok(envelope.data.unwrap_or_default())
    }
}
