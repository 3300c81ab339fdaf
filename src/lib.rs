//! Alphalert: Wallet Trade-Quality Scorer
//!
//! This is the root crate that provides benchmark and integration-test
//! access to the internal modules. For actual functionality, use the
//! individual crates directly:
//!
//! - `alphalert-core`: shared types, configuration, market-data API client
//! - `wallet-scorer`: entry classification, token evaluation, wallet aggregation
//! - `alphalert-bot`: command parsing, report formatting, CLI and chat front ends

// Re-export for benchmarks
pub use alphalert_bot as bot;
pub use alphalert_core as core;
pub use wallet_scorer as scorer;
