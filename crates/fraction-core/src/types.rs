//! Core type definitions for Fraction

use serde::{Deserialize, Serialize};
use std::fmt;

/// Assets tracked by the protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Asset {
    /// Backing collateral token (USDC-style, 6 decimals)
    Collateral,
    /// The protocol's stable dollar token (18 decimals)
    Dollar,
    /// The protocol's seigniorage share token (18 decimals)
    Share,
}

impl Asset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Collateral => "collateral",
            Self::Dollar => "dollar",
            Self::Share => "share",
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
