//! Telegram boundary: update types, the send-message client, and the
//! `/score` update handler.
//!
//! The transport that delivers updates (webhook or polling) lives outside
//! this crate; this module only models the messages crossing the boundary.

use crate::command::parse_command;
use crate::format::format_report;
use alphalert_core::api::MarketDataSource;
use anyhow::Result;
use serde::Deserialize;
use wallet_scorer::WalletScorer;

const USAGE_TEXT: &str = "❌ <b>Invalid command</b>\n\nUsage: /score &lt;wallet&gt; &lt;chain&gt;\n\nChains: sol, eth, bsc, base\n\nExample:\n<code>/score FCMXEqaS...fTCMBd sol</code>";

/// An incoming Telegram update. Only message updates are handled.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: TelegramChat,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramChat {
    pub id: i64,
}

/// Thin client for the Telegram Bot API send side.
pub struct TelegramClient {
    token: String,
    http_client: reqwest::Client,
}

impl TelegramClient {
    pub fn new(token: String) -> Self {
        Self {
            token,
            http_client: reqwest::Client::new(),
        }
    }

    /// Send an HTML-formatted message, optionally as a reply.
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_to: Option<i64>,
    ) -> Result<()> {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.token);

        let mut body = serde_json::json!({
            "chat_id": chat_id,
            "text": text,
            "parse_mode": "HTML",
            "disable_web_page_preview": true,
        });
        if let Some(message_id) = reply_to {
            body["reply_to_message_id"] = serde_json::json!(message_id);
        }

        self.http_client.post(&url).json(&body).send().await?;

        tracing::debug!(chat_id, "sent Telegram message");
        Ok(())
    }
}

/// Handle one incoming update: parse the `/score` command, run the scorer,
/// and reply with the formatted report.
///
/// Non-`/score` messages are ignored. Scoring failures produce a generic
/// error reply carrying the underlying error text; partial reports are
/// never sent.
pub async fn handle_update<S: MarketDataSource>(
    update: Update,
    scorer: &WalletScorer<S>,
    telegram: &TelegramClient,
) -> Result<()> {
    let Some(message) = update.message else {
        return Ok(());
    };
    let Some(text) = message.text.as_deref().map(str::trim) else {
        return Ok(());
    };
    if !text.starts_with("/score") {
        return Ok(());
    }

    let chat_id = message.chat.id;
    let reply_to = Some(message.message_id);

    let Some(command) = parse_command(text) else {
        telegram.send_message(chat_id, USAGE_TEXT, reply_to).await?;
        return Ok(());
    };

    telegram
        .send_message(chat_id, "⏳ Scoring wallet...", reply_to)
        .await?;

    match scorer.score_wallet(&command.wallet, command.chain).await {
        Ok(report) => {
            telegram
                .send_message(chat_id, &format_report(&report), reply_to)
                .await?;
        }
        Err(e) => {
            tracing::warn!(error = %e, wallet = %command.wallet, "scoring failed");
            telegram
                .send_message(chat_id, &format!("❌ Error: {}", e), reply_to)
                .await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_deserializes_from_webhook_payload() {
        let update: Update = serde_json::from_str(
            r#"{
                "update_id": 12345,
                "message": {
                    "message_id": 7,
                    "chat": {"id": -100123, "type": "group"},
                    "text": "/score FCMXEqaSGdEHbufTCMBdG9kDd5MvU9tQmWqPn9yXF9qb sol"
                }
            }"#,
        )
        .unwrap();

        let message = update.message.unwrap();
        assert_eq!(message.message_id, 7);
        assert_eq!(message.chat.id, -100123);
        assert!(message.text.unwrap().starts_with("/score"));
    }

    #[test]
    fn test_update_without_message_deserializes() {
        let update: Update = serde_json::from_str(r#"{"update_id": 1}"#).unwrap();
        assert!(update.message.is_none());
    }
}
