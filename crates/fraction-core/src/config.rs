//! Configuration types for Fraction

use serde::{Deserialize, Serialize};

/// Pool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Decimals added to collateral amounts to reach 18-decimal accounting
    /// (12 for a 6-decimal USDC-style collateral)
    #[serde(default = "default_missing_decimals")]
    pub missing_decimals: u32,

    /// Slippage tolerance applied to quotes, scale 10^6 (1000 = 0.1%)
    #[serde(default = "default_slippage")]
    pub slippage: u128,
}

fn default_missing_decimals() -> u32 {
    12
}

fn default_slippage() -> u128 {
    1000
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            missing_decimals: default_missing_decimals(),
            slippage: default_slippage(),
        }
    }
}
