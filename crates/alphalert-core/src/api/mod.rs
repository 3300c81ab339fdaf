//! API clients for external services.

pub mod okx;
pub mod source;

pub use okx::OkxClient;
pub use source::MarketDataSource;
