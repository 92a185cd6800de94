//! FracUSD Protocol Engine
//!
//! This crate implements the pricing/ratio engine of the FracUSD
//! partially-collateralized algorithmic stablecoin.
//!
//! # Protocol Overview
//!
//! FracUSD is a fractional stablecoin backed by a mix of collateral and
//! protocol shares:
//! - Dollar: stable token pegged to 1 USD (18 decimals)
//! - Share: seigniorage token absorbing the under-collateralized fraction
//!
//! The target collateral ratio (TCR) governs how mints split between
//! collateral and shares; the effective collateral ratio (ECR) governs how
//! redemptions split between collateral and shares.
//!
//! # Features
//!
//! - Treasury state aggregation from oracle and ledger collaborators
//! - Deterministic fixed-point mint/redeem quote calculation
//! - Slippage-bounded transfer plans for atomic ledger application
//!
//! # Example
//!
//! ```ignore
//! use fracusd::{MintRequest, Pool, Treasury};
//!
//! let treasury = Treasury::new(oracle, ledger);
//! let snapshot = treasury.snapshot().await?;
//! let plan = Pool::default().mint(&request, &snapshot)?;
//! ledger.apply(&plan).await?;
//! ```

pub mod calculator;
pub mod constants;
pub mod pool;
pub mod state;
pub mod treasury;

pub use calculator::*;
pub use constants::*;
pub use pool::*;
pub use state::*;
pub use treasury::{Ledger, PriceFeed, Treasury};
