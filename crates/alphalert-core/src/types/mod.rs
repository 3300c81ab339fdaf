//! Core domain types for the alphalert scorer.

pub mod candle;
pub mod chain;
pub mod report;
pub mod trade;

pub use candle::*;
pub use chain::*;
pub use report::*;
pub use trade::*;
