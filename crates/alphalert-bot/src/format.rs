//! Report rendering for chat and terminal output.

use alphalert_core::types::{TokenReport, WalletReport};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use std::cmp::Ordering;

/// Icon for a per-entry score: 🔵 +2, 🟢 +1, 🟡 0, 🟠 -1, 🔴 -2.
pub fn score_icon(score: i8) -> &'static str {
    if score >= 2 {
        "🔵"
    } else if score >= 1 {
        "🟢"
    } else if score >= 0 {
        "🟡"
    } else if score >= -1 {
        "🟠"
    } else {
        "🔴"
    }
}

/// Quality band for a wallet's average score.
pub fn quality_rating(avg_score: f64) -> &'static str {
    if avg_score >= 1.5 {
        "🔵 Excellent"
    } else if avg_score >= 0.5 {
        "🟢 Good"
    } else if avg_score >= -0.5 {
        "🟡 Neutral"
    } else if avg_score >= -1.5 {
        "🟠 Poor"
    } else {
        "🔴 Terrible"
    }
}

/// Format a signed dollar amount with K/M/B abbreviation.
pub fn format_amount(amount: f64) -> String {
    let sign = if amount >= 0.0 { "+" } else { "-" };
    let abs = amount.abs();

    if abs >= 1_000_000_000.0 {
        format!("{}${:.1}B", sign, abs / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{}${:.1}M", sign, abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{}${:.1}K", sign, abs / 1_000.0)
    } else if abs >= 1.0 {
        format!("{}${:.0}", sign, abs)
    } else {
        format!("{}${:.2}", sign, abs)
    }
}

/// Format a return multiplier.
///
/// Sub-1x returns display as the loss fraction (0.32x of capital back reads
/// "-0.68x"); gains abbreviate with K/M suffixes and shed decimals as the
/// magnitude grows.
pub fn format_multiplier(multiplier: f64) -> String {
    let multiplier = multiplier.max(0.0);

    if multiplier < 1.0 {
        return format!("{:.2}x", multiplier - 1.0);
    }

    if multiplier >= 1_000_000.0 {
        format!("{:.1}Mx", multiplier / 1_000_000.0)
    } else if multiplier >= 1_000.0 {
        format!("{:.1}Kx", multiplier / 1_000.0)
    } else if multiplier >= 100.0 {
        format!("{:.0}x", multiplier)
    } else if multiplier >= 10.0 {
        format!("{:.1}x", multiplier)
    } else {
        format!("{:.2}x", multiplier)
    }
}

/// Abbreviate a wallet address for display.
fn short_address(address: &str) -> String {
    if address.len() <= 8 {
        address.to_string()
    } else {
        format!("{}...{}", &address[..4], &address[address.len() - 4..])
    }
}

/// Order tokens for the ranking: held bags first by USD value, then sold
/// positions by profit.
fn ranked_tokens(tokens: &[TokenReport]) -> Vec<&TokenReport> {
    let mut ranked: Vec<&TokenReport> = tokens.iter().collect();
    ranked.sort_by(|a, b| match (a.holding, b.holding) {
        (true, true) => b.balance_usd.cmp(&a.balance_usd),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => b.pnl.cmp(&a.pnl),
    });
    ranked
}

/// Render a wallet report as a Telegram-HTML message.
pub fn format_report(report: &WalletReport) -> String {
    let explorer = report.chain.explorer();
    let stats = &report.stats;
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "Scored Wallet: <a href=\"{}\">{}</a>",
        explorer.wallet_url(&report.wallet),
        short_address(&report.wallet)
    ));

    if let Some(kol) = &report.kol {
        lines.push(format!("👑 KOL: {}", kol.name));
    }
    if let Some(dev) = &report.dev {
        lines.push(format!(
            "🛠 Dev: {} tokens, {} rugs",
            dev.token_count, dev.rug_count
        ));
    }

    lines.push(String::new());

    lines.push(format!(
        "Score: {:.2} {}",
        stats.avg_score,
        quality_rating(stats.avg_score)
    ));
    lines.push(format!(
        "Tokens: {} | Entries: {}",
        stats.total_tokens, stats.total_buys
    ));

    let dist = &stats.distribution;
    lines.push(format!(
        "🔵 {} | 🟢 {} | 🟡 {} | 🟠 {} | 🔴 {}",
        dist.excellent, dist.good, dist.neutral, dist.poor, dist.terrible
    ));

    lines.push(String::new());

    let realized = stats.realized_pnl.to_f64().unwrap_or(0.0);
    lines.push(format!("Realized PnL: {}", format_amount(realized)));

    let bags = stats.total_bags_value.to_f64().unwrap_or(0.0);
    if bags > 0.0 {
        lines.push(format!(
            "Holdings: {} ({} tokens)",
            format_amount(bags).trim_start_matches('+'),
            stats.held
        ));
    }

    if stats.rugged > 0 && stats.total_tokens > 0 {
        let rug_pct = stats.rugged as f64 / stats.total_tokens as f64 * 100.0;
        lines.push(format!(
            "Rugged: {}/{} ({:.0}%)",
            stats.rugged, stats.total_tokens, rug_pct
        ));
    } else {
        lines.push(format!("Rugged: 0/{}", stats.total_tokens));
    }

    lines.push(String::new());

    let top_tokens: Vec<&TokenReport> = ranked_tokens(&report.tokens).into_iter().take(5).collect();
    if !top_tokens.is_empty() {
        lines.push("<b>Top Tokens</b>".to_string());
        for token in top_tokens {
            let balance_usd = token.balance_usd.to_f64().unwrap_or(0.0);
            // Held tokens show their bag value; sold tokens show PnL.
            let value = if token.holding && balance_usd > 0.0 {
                format_amount(balance_usd).trim_start_matches('+').to_string()
            } else {
                format_amount(token.pnl.to_f64().unwrap_or(0.0))
            };
            let rug_marker = if token.is_rugged { " 💀" } else { "" };

            lines.push(format!(
                "{} <a href=\"{}\">{}</a>: {} 💰 {} ({}↗ | {}↘){}",
                score_icon(token.score),
                explorer.token_url(&token.address),
                token.symbol,
                value,
                format_multiplier(token.multiplier),
                token.buy_count,
                token.sell_count,
                rug_marker
            ));
        }
    }

    lines.join("\n")
}

static BOLD_OPEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<b>").expect("valid regex"));
static ITALIC_OPEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<i>").expect("valid regex"));
static CLOSE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"</(?:b|i)>").expect("valid regex"));
static CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?code>").expect("valid regex"));
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<a href="[^"]*">([^<]*)</a>"#).expect("valid regex"));

/// Down-convert a Telegram-HTML message to ANSI escapes for the terminal.
pub fn html_to_ansi(text: &str) -> String {
    let text = BOLD_OPEN_RE.replace_all(text, "\x1b[1m");
    let text = ITALIC_OPEN_RE.replace_all(&text, "\x1b[3m");
    let text = CLOSE_RE.replace_all(&text, "\x1b[0m");
    let text = CODE_RE.replace_all(&text, "");
    LINK_RE.replace_all(&text, "\x1b[4m$1\x1b[0m").into_owned()
}
