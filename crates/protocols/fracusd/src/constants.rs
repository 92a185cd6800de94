//! FracUSD Protocol Constants
//!
//! Token decimals and default protocol parameters.

/// Protocol parameters
pub mod params {
    /// Collateral token native decimals (USDC-style)
    pub const COLLATERAL_DECIMALS: u32 = 6;

    /// Dollar and share token decimals
    pub const DOLLAR_DECIMALS: u32 = 18;

    /// Decimals added to collateral amounts for 18-decimal accounting
    pub const MISSING_DECIMALS: u32 = DOLLAR_DECIMALS - COLLATERAL_DECIMALS;

    /// Default slippage tolerance, scale 10^6 (1000 = 0.1%)
    pub const DEFAULT_SLIPPAGE: u128 = 1000;

    /// Default minting fee, scale 10^6 (3000 = 0.3%)
    pub const DEFAULT_MINTING_FEE: u128 = 3000;

    /// Default redemption fee, scale 10^6 (4000 = 0.4%)
    pub const DEFAULT_REDEMPTION_FEE: u128 = 4000;
}
