//! FracUSD Quote Calculator
//!
//! Pure math functions for mint and redeem quotes.
//! No I/O, no async - just deterministic fixed-point calculations.
//!
//! # Units
//!
//! - Collateral amounts: native token units (6 decimals by default)
//! - Dollar and share amounts: 18-decimal units
//! - Prices: 6-decimal fixed point
//! - Ratios, fees, slippage: scale 10^6
//!
//! Every operation routes through `scaled_mul`/`scaled_div`; the
//! multiply-then-divide sequencing is load-bearing and must match the
//! on-chain contract exactly.

use fraction_core::math::{self, pow10, PRICE_PRECISION, RATIO_MAX, RATIO_PRECISION};
use fraction_core::{Error, MathError, ProtocolError};

use crate::state::PriceSnapshot;

/// Computed mint outputs
#[derive(Debug, Clone)]
pub struct MintQuote {
    /// Deposit value in 18-decimal dollar terms
    pub collateral_value: u128,
    /// Full dollar-denominated mint size implied by the TCR
    pub total_dollar_value: u128,
    /// Shares minted to cover the under-collateralized fraction
    pub share_out: u128,
    /// Dollars minted, after slippage tolerance
    pub dollar_out: u128,
}

/// Computed redeem outputs
#[derive(Debug, Clone)]
pub struct RedeemQuote {
    /// Redeemed value after fee and slippage, 18 decimals
    pub dollar_post_fee: u128,
    /// Shares returned for the under-collateralized fraction
    pub share_out: u128,
    /// Collateral returned, native token units
    pub collateral_out: u128,
}

/// Quote a mint: collateral in, dollars and shares out
///
/// The deposit is normalized to 18 decimals and valued at the oracle price,
/// then inflated by the target collateral ratio to the full mint size. When
/// the TCR is below 100% the shortfall is minted as shares; at exactly 100%
/// no shares are minted.
pub fn mint_quote(
    collateral_amount_in: u128,
    snapshot: &PriceSnapshot,
    slippage: u128,
    missing_decimals: u32,
) -> Result<MintQuote, Error> {
    if slippage >= RATIO_PRECISION {
        return Err(ProtocolError::InvalidAmount {
            message: format!("slippage tolerance {} is at or above 100%", slippage),
        }
        .into());
    }

    let normalized = collateral_amount_in
        .checked_mul(pow10(missing_decimals))
        .ok_or(MathError::Overflow)?;
    let collateral_value = math::scaled_mul(normalized, snapshot.collateral_price, PRICE_PRECISION)?;

    // Division by a zero TCR is undefined; reject before touching it
    if snapshot.tcr == 0 {
        return Err(ProtocolError::InvalidRatio {
            ratio: 0,
            context: "target collateral",
        }
        .into());
    }
    let total_dollar_value = math::scaled_div(collateral_value, snapshot.tcr, RATIO_PRECISION)?;

    let share_out = if snapshot.tcr < RATIO_MAX {
        math::scaled_div(
            total_dollar_value - collateral_value,
            snapshot.share_price,
            PRICE_PRECISION,
        )?
    } else {
        0
    };

    let slippage_cut = math::scaled_mul(total_dollar_value, slippage, RATIO_PRECISION)?;
    let dollar_out = math::scaled_div(
        total_dollar_value - slippage_cut,
        snapshot.dollar_price,
        PRICE_PRECISION,
    )?;

    Ok(MintQuote {
        collateral_value,
        total_dollar_value,
        share_out,
        dollar_out,
    })
}

/// Quote a redeem: dollars in, collateral and shares out
///
/// The redeemed value (after redemption fee and slippage) splits by the
/// effective collateral ratio: the backed fraction returns as collateral,
/// denormalized to native token units, and the rest returns as shares.
pub fn redeem_quote(
    dollar_amount_in: u128,
    snapshot: &PriceSnapshot,
    slippage: u128,
    missing_decimals: u32,
) -> Result<RedeemQuote, Error> {
    let fee_and_slippage = snapshot.redemption_fee + slippage;
    if fee_and_slippage >= RATIO_PRECISION {
        return Err(ProtocolError::InvalidAmount {
            message: format!(
                "redemption fee plus slippage {} is at or above 100%",
                fee_and_slippage
            ),
        }
        .into());
    }

    let fee_cut = math::scaled_mul(dollar_amount_in, fee_and_slippage, RATIO_PRECISION)?;
    let dollar_post_fee = dollar_amount_in - fee_cut;

    let collateral_fraction = math::scaled_mul(dollar_post_fee, snapshot.ecr, RATIO_MAX)?;
    let share_out = math::scaled_div(
        dollar_post_fee - collateral_fraction,
        snapshot.share_price,
        PRICE_PRECISION,
    )?;
    let collateral_value_out = math::scaled_div(
        collateral_fraction,
        snapshot.collateral_price,
        PRICE_PRECISION,
    )?;
    let collateral_out = collateral_value_out / pow10(missing_decimals);

    Ok(RedeemQuote {
        dollar_post_fee,
        share_out,
        collateral_out,
    })
}
