//! Alphalert CLI entrypoint.

use alphalert_bot::format::{format_report, html_to_ansi};
use alphalert_core::api::OkxClient;
use alphalert_core::config::Config;
use alphalert_core::types::Chain;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wallet_scorer::{ScoringConfig, WalletScorer};

/// Score a wallet's recent token entries against surrounding price action.
#[derive(Parser, Debug)]
#[command(name = "alphalert", version, about)]
struct Cli {
    /// Wallet address to score.
    wallet: String,

    /// Chain short name: sol, eth, bsc, or base.
    #[arg(default_value = "sol")]
    chain: String,

    /// Maximum tokens to evaluate.
    #[arg(long)]
    tokens: Option<usize>,

    /// Also print the raw report as JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "alphalert_bot=info,wallet_scorer=info,alphalert_core=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let chain: Chain = cli.chain.parse()?;

    let config = Config::from_env();
    let mut scoring = ScoringConfig::default();
    if let Some(tokens) = cli.tokens {
        scoring.max_tokens = tokens;
    }

    let source = OkxClient::new(config.market_data);
    let scorer = WalletScorer::with_config(source, scoring);

    let short = cli.wallet.get(..8).unwrap_or(&cli.wallet);
    println!("Scoring wallet {}... on {}\n", short, chain);

    let report = scorer.score_wallet(&cli.wallet, chain).await?;

    println!("{}", html_to_ansi(&format_report(&report)));

    if cli.json {
        println!("\n--- Raw JSON ---");
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
