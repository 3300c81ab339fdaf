//! Wallet Scorer
//!
//! Scores a wallet's trading quality by contextualizing each token entry
//! against the candles flanking it and aggregating per-entry scores into
//! wallet-level statistics.

pub mod aggregator;
pub mod config;
pub mod context;
pub mod evaluator;
pub mod window;

pub use aggregator::WalletScorer;
pub use config::ScoringConfig;
pub use context::{classify_after, classify_before, score_pair, AfterContext, BeforeContext};
pub use evaluator::{evaluate_token, score_entry, TokenEvaluation};
pub use window::{extract_window, EntryWindow};
