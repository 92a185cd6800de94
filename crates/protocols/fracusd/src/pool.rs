//! FracUSD Pool Operations
//!
//! Validates mint/redeem requests, quotes them against a snapshot, enforces
//! the caller's slippage floors, and emits the transfer plan the ledger
//! applies atomically. Any failed check aborts the whole operation with no
//! plan emitted.

use fraction_core::{Asset, Error, MathError, PoolConfig, ProtocolError, Result};

use crate::calculator::{mint_quote, redeem_quote};
use crate::state::{PriceSnapshot, TransferPlan};

/// Request to mint dollars (and possibly shares) against collateral
#[derive(Debug, Clone)]
pub struct MintRequest {
    /// Collateral deposited, native token units, must be > 0
    pub collateral_amount_in: u128,
    /// Caller's floor on shares received
    pub min_share_out: u128,
    /// Caller's floor on dollars received
    pub min_dollar_out: u128,
}

/// Request to redeem dollars for collateral and shares
#[derive(Debug, Clone)]
pub struct RedeemRequest {
    /// Dollars redeemed, 18-decimal units, must be > 0
    pub dollar_amount_in: u128,
    /// Caller's floor on shares received
    pub min_share_out: u128,
    /// Caller's floor on collateral received, native token units
    pub min_collateral_out: u128,
}

/// The mint/redeem execution engine for one collateral pool
#[derive(Debug, Clone, Default)]
pub struct Pool {
    config: PoolConfig,
}

impl Pool {
    pub fn new(config: PoolConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Compute the transfer plan for a mint
    ///
    /// Debits the deposited collateral, credits the minted dollars (after
    /// slippage tolerance) and the shares covering the under-collateralized
    /// fraction of the target ratio.
    pub fn mint(&self, request: &MintRequest, snapshot: &PriceSnapshot) -> Result<TransferPlan> {
        if request.collateral_amount_in == 0 {
            return Err(ProtocolError::InvalidAmount {
                message: "collateral amount must be positive".into(),
            }
            .into());
        }
        snapshot.validate()?;

        let quote = mint_quote(
            request.collateral_amount_in,
            snapshot,
            self.config.slippage,
            self.config.missing_decimals,
        )?;
        tracing::debug!(
            collateral_in = request.collateral_amount_in,
            dollar_out = quote.dollar_out,
            share_out = quote.share_out,
            tcr = snapshot.tcr,
            "mint quoted"
        );

        check_floor(Asset::Share, quote.share_out, request.min_share_out)?;
        check_floor(Asset::Dollar, quote.dollar_out, request.min_dollar_out)?;

        Ok(TransferPlan {
            collateral: -to_delta(request.collateral_amount_in)?,
            dollar: to_delta(quote.dollar_out)?,
            share: to_delta(quote.share_out)?,
        })
    }

    /// Compute the transfer plan for a redeem
    ///
    /// Debits the redeemed dollars, credits the backed fraction as
    /// collateral and the remainder as shares, after fee and slippage.
    pub fn redeem(&self, request: &RedeemRequest, snapshot: &PriceSnapshot) -> Result<TransferPlan> {
        if request.dollar_amount_in == 0 {
            return Err(ProtocolError::InvalidAmount {
                message: "dollar amount must be positive".into(),
            }
            .into());
        }
        snapshot.validate()?;

        let quote = redeem_quote(
            request.dollar_amount_in,
            snapshot,
            self.config.slippage,
            self.config.missing_decimals,
        )?;
        tracing::debug!(
            dollar_in = request.dollar_amount_in,
            collateral_out = quote.collateral_out,
            share_out = quote.share_out,
            ecr = snapshot.ecr,
            "redeem quoted"
        );

        check_floor(Asset::Share, quote.share_out, request.min_share_out)?;
        check_floor(Asset::Collateral, quote.collateral_out, request.min_collateral_out)?;

        Ok(TransferPlan {
            dollar: -to_delta(request.dollar_amount_in)?,
            share: to_delta(quote.share_out)?,
            collateral: to_delta(quote.collateral_out)?,
        })
    }
}

fn check_floor(asset: Asset, computed: u128, minimum: u128) -> Result<()> {
    if computed < minimum {
        tracing::warn!(%asset, computed, minimum, "slippage floor not met");
        return Err(ProtocolError::SlippageExceeded {
            asset,
            minimum,
            computed,
        }
        .into());
    }
    Ok(())
}

fn to_delta(amount: u128) -> Result<i128> {
    i128::try_from(amount).map_err(|_| Error::from(MathError::Overflow))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fraction_core::math::RATIO_MAX;

    const ONE_COLLATERAL: u128 = 1_000_000;
    const ONE_DOLLAR: u128 = 1_000_000_000_000_000_000;

    fn sample_snapshot() -> PriceSnapshot {
        PriceSnapshot {
            dollar_price: 1_000_000,
            share_price: 400_000,
            collateral_price: 1_000_000,
            dollar_total_supply: 1_000 * ONE_DOLLAR,
            tcr: 900_000,
            ecr: 850_000,
            global_collateral_value: 850 * ONE_DOLLAR,
            minting_fee: 3000,
            redemption_fee: 4000,
        }
    }

    #[test]
    fn test_mint_emits_plan() {
        let pool = Pool::default();
        let request = MintRequest {
            collateral_amount_in: ONE_COLLATERAL,
            min_share_out: 0,
            min_dollar_out: 0,
        };
        let plan = pool.mint(&request, &sample_snapshot()).unwrap();

        assert_eq!(plan.collateral, -(ONE_COLLATERAL as i128));
        assert_eq!(plan.dollar, 1_110_000_000_000_000_000);
        assert_eq!(plan.share, 277_777_777_777_777_777);
    }

    #[test]
    fn test_mint_zero_amount_rejected() {
        let pool = Pool::default();
        let request = MintRequest {
            collateral_amount_in: 0,
            min_share_out: 0,
            min_dollar_out: 0,
        };
        let err = pool.mint(&request, &sample_snapshot()).unwrap_err();
        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_mint_slippage_gate_exact_boundary() {
        let pool = Pool::default();
        let snapshot = sample_snapshot();
        let base = MintRequest {
            collateral_amount_in: ONE_COLLATERAL,
            min_share_out: 0,
            min_dollar_out: 0,
        };
        let plan = pool.mint(&base, &snapshot).unwrap();

        // Floors at the true computed values still pass
        let exact = MintRequest {
            min_share_out: plan.share as u128,
            min_dollar_out: plan.dollar as u128,
            ..base.clone()
        };
        assert!(pool.mint(&exact, &snapshot).is_ok());

        // One unit above the true share output must fail, with no plan
        let over = MintRequest {
            min_share_out: plan.share as u128 + 1,
            ..base
        };
        let err = pool.mint(&over, &snapshot).unwrap_err();
        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::SlippageExceeded {
                asset: Asset::Share,
                ..
            })
        ));
    }

    #[test]
    fn test_mint_full_tcr_no_shares() {
        let pool = Pool::default();
        let snapshot = PriceSnapshot {
            tcr: RATIO_MAX,
            ecr: RATIO_MAX,
            ..sample_snapshot()
        };
        let request = MintRequest {
            collateral_amount_in: 7 * ONE_COLLATERAL,
            min_share_out: 0,
            min_dollar_out: 0,
        };
        let plan = pool.mint(&request, &snapshot).unwrap();
        assert_eq!(plan.share, 0);
    }

    #[test]
    fn test_redeem_emits_plan() {
        let pool = Pool::default();
        let request = RedeemRequest {
            dollar_amount_in: ONE_DOLLAR,
            min_share_out: 0,
            min_collateral_out: 0,
        };
        let plan = pool.redeem(&request, &sample_snapshot()).unwrap();

        assert_eq!(plan.dollar, -(ONE_DOLLAR as i128));
        assert_eq!(plan.share, 373_125_000_000_000_000);
        assert_eq!(plan.collateral, 845_750);
    }

    #[test]
    fn test_redeem_slippage_gate() {
        let pool = Pool::default();
        let snapshot = sample_snapshot();
        let request = RedeemRequest {
            dollar_amount_in: ONE_DOLLAR,
            min_share_out: 0,
            min_collateral_out: 845_751, // one unit above the true output
        };
        let err = pool.redeem(&request, &snapshot).unwrap_err();
        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::SlippageExceeded {
                asset: Asset::Collateral,
                ..
            })
        ));
    }

    #[test]
    fn test_redeem_zero_amount_rejected() {
        let pool = Pool::default();
        let request = RedeemRequest {
            dollar_amount_in: 0,
            min_share_out: 0,
            min_collateral_out: 0,
        };
        assert!(pool.redeem(&request, &sample_snapshot()).is_err());
    }

    #[test]
    fn test_invalid_snapshot_rejected_before_quoting() {
        let pool = Pool::default();
        let snapshot = PriceSnapshot {
            ecr: RATIO_MAX + 1,
            ..sample_snapshot()
        };
        let request = RedeemRequest {
            dollar_amount_in: ONE_DOLLAR,
            min_share_out: 0,
            min_collateral_out: 0,
        };
        let err = pool.redeem(&request, &snapshot).unwrap_err();
        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::InvalidRatio { .. })
        ));
    }

    #[test]
    fn test_mint_redeem_round_trip_scenario() {
        // Reference scenario: tcr = 100%, collateral price 1.00, deposit 1.0
        // collateral, then redeem 0.997 dollars on the same snapshot.
        let pool = Pool::default();
        let snapshot = PriceSnapshot {
            tcr: RATIO_MAX,
            ecr: RATIO_MAX,
            global_collateral_value: 1_000 * ONE_DOLLAR,
            ..sample_snapshot()
        };

        let mint = pool
            .mint(
                &MintRequest {
                    collateral_amount_in: ONE_COLLATERAL,
                    min_share_out: 0,
                    min_dollar_out: 0,
                },
                &snapshot,
            )
            .unwrap();
        assert_eq!(mint.share, 0);
        assert_eq!(mint.dollar, 999_000_000_000_000_000);

        let redeem = pool
            .redeem(
                &RedeemRequest {
                    dollar_amount_in: 997_000_000_000_000_000,
                    min_share_out: 0,
                    min_collateral_out: 0,
                },
                &snapshot,
            )
            .unwrap();
        assert_eq!(redeem.share, 0);
        assert_eq!(redeem.collateral, 992_015);
        assert!(redeem.collateral < ONE_COLLATERAL as i128);
    }
}
