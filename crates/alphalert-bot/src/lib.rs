//! Alphalert Bot
//!
//! Front ends for the wallet scorer: `/score` command parsing, report
//! formatting, and the Telegram send boundary. The binary in this crate is
//! the CLI entrypoint.

pub mod command;
pub mod format;
pub mod telegram;

pub use command::{parse_command, ScoreCommand};
pub use format::{
    format_amount, format_multiplier, format_report, html_to_ansi, quality_rating, score_icon,
};
pub use telegram::{handle_update, TelegramClient, Update};
