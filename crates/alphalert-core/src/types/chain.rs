//! Supported chains and their explorer URL tables.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A chain supported by the upstream market-data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Solana,
    Ethereum,
    Bsc,
    Base,
}

/// Block-explorer URL prefixes for one chain.
#[derive(Debug, Clone, Copy)]
pub struct Explorer {
    pub name: &'static str,
    wallet_base: &'static str,
    token_base: &'static str,
}

impl Explorer {
    pub fn wallet_url(&self, address: &str) -> String {
        format!("{}{}", self.wallet_base, address)
    }

    pub fn token_url(&self, address: &str) -> String {
        format!("{}{}", self.token_base, address)
    }
}

impl Chain {
    /// Upstream numeric chain identifier.
    pub fn id(&self) -> u64 {
        match self {
            Chain::Solana => 501,
            Chain::Ethereum => 1,
            Chain::Bsc => 56,
            Chain::Base => 8453,
        }
    }

    /// Human-readable chain name.
    pub fn name(&self) -> &'static str {
        match self {
            Chain::Solana => "Solana",
            Chain::Ethereum => "Ethereum",
            Chain::Bsc => "BSC",
            Chain::Base => "Base",
        }
    }

    /// Block explorer for this chain.
    pub fn explorer(&self) -> Explorer {
        match self {
            Chain::Solana => Explorer {
                name: "Solscan",
                wallet_base: "https://solscan.io/account/",
                token_base: "https://solscan.io/token/",
            },
            Chain::Ethereum => Explorer {
                name: "Etherscan",
                wallet_base: "https://etherscan.io/address/",
                token_base: "https://etherscan.io/token/",
            },
            Chain::Bsc => Explorer {
                name: "BscScan",
                wallet_base: "https://bscscan.com/address/",
                token_base: "https://bscscan.com/token/",
            },
            Chain::Base => Explorer {
                name: "Basescan",
                wallet_base: "https://basescan.org/address/",
                token_base: "https://basescan.org/token/",
            },
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Chain {
    type Err = Error;

    /// Parse a chain from its short name or alias (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sol" | "solana" => Ok(Chain::Solana),
            "eth" | "ethereum" => Ok(Chain::Ethereum),
            "bsc" | "bnb" => Ok(Chain::Bsc),
            "base" => Ok(Chain::Base),
            other => Err(Error::UnknownChain(other.to_string())),
        }
    }
}
