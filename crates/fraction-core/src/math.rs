//! Fixed-point arithmetic primitives
//!
//! All treasury and pool arithmetic routes through `scaled_mul` and
//! `scaled_div` so that rounding direction stays centralized and auditable.
//! Division is always floor division, and the multiply-before-divide order
//! must not be reordered: reordering changes rounding in ways that diverge
//! from on-chain results.
//!
//! # Scales
//!
//! - Prices and fees: 6-decimal fixed point, scale = `PRICE_PRECISION`
//! - Collateral ratios: `[0, RATIO_MAX]`, where `RATIO_MAX` = 100%
//! - Token amounts: 18-decimal integer units

use crate::errors::MathError;

/// Scale for prices and fee fractions (10^6)
pub const PRICE_PRECISION: u128 = 1_000_000;

/// Scale for collateral ratios (10^6)
pub const RATIO_PRECISION: u128 = 1_000_000;

/// Maximum collateral ratio, 10^6 = 100% fully collateralized
pub const RATIO_MAX: u128 = 1_000_000;

/// `10^n`, for decimal normalizers
pub fn pow10(n: u32) -> u128 {
    10u128.pow(n)
}

/// `a * b / scale` with checked multiply and floor division
pub fn scaled_mul(a: u128, b: u128, scale: u128) -> Result<u128, MathError> {
    if scale == 0 {
        return Err(MathError::DivisionByZero);
    }
    let product = a.checked_mul(b).ok_or(MathError::Overflow)?;
    Ok(product / scale)
}

/// `a * scale / b` with checked multiply and floor division
pub fn scaled_div(a: u128, b: u128, scale: u128) -> Result<u128, MathError> {
    if b == 0 {
        return Err(MathError::DivisionByZero);
    }
    let scaled = a.checked_mul(scale).ok_or(MathError::Overflow)?;
    Ok(scaled / b)
}
