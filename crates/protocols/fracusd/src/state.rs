//! FracUSD Protocol State
//!
//! Snapshot types and ratio derivation. A snapshot is captured once per
//! operation and never mutated, so a mint/redeem computation stays
//! self-consistent even if global state changes between blocks.

use fraction_core::math::{self, RATIO_MAX, RATIO_PRECISION};
use fraction_core::{Asset, Error, OracleError, ProtocolError};
use serde::{Deserialize, Serialize};

/// Immutable view of protocol state for one mint/redeem operation
///
/// Prices are 6-decimal fixed point; supplies and values are 18-decimal
/// integer units; ratios and fees are scale 10^6.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSnapshot {
    pub dollar_price: u128,
    pub share_price: u128,
    pub collateral_price: u128,
    pub dollar_total_supply: u128,
    /// Target collateral ratio (protocol policy)
    pub tcr: u128,
    /// Effective collateral ratio (measured backing)
    pub ecr: u128,
    /// Dollar-denominated value of all collateral held, 18 decimals
    pub global_collateral_value: u128,
    pub minting_fee: u128,
    pub redemption_fee: u128,
}

/// Oracle prices resolved before any arithmetic
#[derive(Debug, Clone)]
pub struct OraclePrices {
    pub dollar_price: u128,
    pub share_price: u128,
    pub collateral_price: u128,
}

/// Raw on-ledger aggregates used to assemble a snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreasuryData {
    pub dollar_total_supply: u128,
    pub global_collateral_value: u128,
    pub tcr: u128,
    pub minting_fee: u128,
    pub redemption_fee: u128,
}

/// Signed asset deltas to be applied atomically by the ledger
///
/// Negative = debit from the caller, positive = credit to the caller.
/// Never partially applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferPlan {
    pub collateral: i128,
    pub dollar: i128,
    pub share: i128,
}

impl TransferPlan {
    pub fn delta(&self, asset: Asset) -> i128 {
        match asset {
            Asset::Collateral => self.collateral,
            Asset::Dollar => self.dollar,
            Asset::Share => self.share,
        }
    }
}

/// Derive the effective collateral ratio from ledger aggregates
///
/// `ecr = global_collateral_value * RATIO_PRECISION / dollar_total_supply`,
/// capped at `RATIO_MAX`. Zero supply means nothing outstanding to back,
/// which reads as fully collateralized.
pub fn derive_ecr(global_collateral_value: u128, dollar_total_supply: u128) -> Result<u128, Error> {
    if dollar_total_supply == 0 {
        return Ok(RATIO_MAX);
    }
    let ecr = math::scaled_div(global_collateral_value, dollar_total_supply, RATIO_PRECISION)?;
    Ok(ecr.min(RATIO_MAX))
}

impl PriceSnapshot {
    /// Assemble a snapshot from oracle prices and ledger aggregates
    pub fn from_aggregates(prices: &OraclePrices, data: &TreasuryData) -> Result<Self, Error> {
        let ecr = derive_ecr(data.global_collateral_value, data.dollar_total_supply)?;

        let snapshot = Self {
            dollar_price: prices.dollar_price,
            share_price: prices.share_price,
            collateral_price: prices.collateral_price,
            dollar_total_supply: data.dollar_total_supply,
            tcr: data.tcr,
            ecr,
            global_collateral_value: data.global_collateral_value,
            minting_fee: data.minting_fee,
            redemption_fee: data.redemption_fee,
        };
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check snapshot invariants: all prices positive, ratios within
    /// `[0, RATIO_MAX]`, fees below 100%
    pub fn validate(&self) -> Result<(), Error> {
        for (asset, price) in [
            (Asset::Dollar, self.dollar_price),
            (Asset::Share, self.share_price),
            (Asset::Collateral, self.collateral_price),
        ] {
            if price == 0 {
                return Err(OracleError::InvalidPrice { asset, price }.into());
            }
        }
        if self.tcr > RATIO_MAX {
            return Err(ProtocolError::InvalidRatio {
                ratio: self.tcr,
                context: "target collateral",
            }
            .into());
        }
        if self.ecr > RATIO_MAX {
            return Err(ProtocolError::InvalidRatio {
                ratio: self.ecr,
                context: "effective collateral",
            }
            .into());
        }
        for fee in [self.minting_fee, self.redemption_fee] {
            if fee >= RATIO_PRECISION {
                return Err(ProtocolError::InvalidAmount {
                    message: format!("fee {} is at or above 100%", fee),
                }
                .into());
            }
        }
        Ok(())
    }
}
