//! Configuration management for the alphalert scorer.

use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub market_data: MarketDataConfig,
    pub alerts: AlertsConfig,
}

/// Upstream market-data API settings.
#[derive(Debug, Clone)]
pub struct MarketDataConfig {
    /// Base URL override for the upstream API.
    pub base_url: Option<String>,
    /// Candle bar size requested per token.
    pub candle_bar: String,
    /// Maximum candles requested per token.
    pub candle_limit: u32,
    /// Tokens fetched per trade-history page.
    pub page_size: u32,
    /// Delay between trade-history page requests (upstream rate limit).
    pub page_delay_ms: u64,
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            candle_bar: "15m".to_string(),
            candle_limit: 500,
            page_size: 20,
            page_delay_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AlertsConfig {
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            market_data: MarketDataConfig {
                base_url: env::var("MARKET_DATA_BASE_URL").ok(),
                page_delay_ms: env::var("MARKET_DATA_PAGE_DELAY_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(100),
                ..MarketDataConfig::default()
            },
            alerts: AlertsConfig {
                telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN").ok(),
                telegram_chat_id: env::var("TELEGRAM_CHAT_ID").ok(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_data_defaults() {
        let config = MarketDataConfig::default();
        assert_eq!(config.candle_bar, "15m");
        assert_eq!(config.candle_limit, 500);
        assert_eq!(config.page_size, 20);
        assert_eq!(config.page_delay_ms, 100);
        assert!(config.base_url.is_none());
    }
}
