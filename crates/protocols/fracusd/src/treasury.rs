//! FracUSD Treasury
//!
//! Aggregates global protocol state into a `PriceSnapshot`: oracle prices
//! for all three assets plus the on-ledger supply and collateral aggregates.
//! The oracle reads are the only suspension points in the engine; they are
//! resolved before any arithmetic, and a failed read aborts the operation
//! with no partial computation.

use fraction_core::{Asset, LedgerError, OracleError, Result};

use crate::state::{OraclePrices, PriceSnapshot, TransferPlan, TreasuryData};

/// Price feed collaborator (the oracle)
#[allow(async_fn_in_trait)]
pub trait PriceFeed {
    /// Current price of `asset`, 6-decimal fixed point
    async fn price(&self, asset: Asset) -> std::result::Result<u128, OracleError>;
}

/// Ledger collaborator: the external system of record
///
/// Supplies the raw aggregates the treasury reads, and applies transfer
/// plans atomically - every delta commits or none do.
#[allow(async_fn_in_trait)]
pub trait Ledger {
    /// Current supply, collateral value, policy ratio, and fees
    async fn treasury_data(&self) -> std::result::Result<TreasuryData, LedgerError>;

    /// Apply all deltas of `plan` atomically, or reject the whole plan
    async fn apply(&self, plan: &TransferPlan) -> std::result::Result<(), LedgerError>;
}

/// Read-side aggregation of protocol state
#[derive(Debug, Clone)]
pub struct Treasury<O, L> {
    oracle: O,
    ledger: L,
}

impl<O: PriceFeed, L: Ledger> Treasury<O, L> {
    pub fn new(oracle: O, ledger: L) -> Self {
        Self { oracle, ledger }
    }

    /// Capture an immutable snapshot of protocol state
    ///
    /// Pure read, no side effects. Fails with an oracle error if any price
    /// cannot be resolved, before touching the ledger.
    pub async fn snapshot(&self) -> Result<PriceSnapshot> {
        let prices = OraclePrices {
            dollar_price: self.oracle.price(Asset::Dollar).await?,
            share_price: self.oracle.price(Asset::Share).await?,
            collateral_price: self.oracle.price(Asset::Collateral).await?,
        };
        let data = self.ledger.treasury_data().await?;

        let snapshot = PriceSnapshot::from_aggregates(&prices, &data)?;
        tracing::debug!(
            tcr = snapshot.tcr,
            ecr = snapshot.ecr,
            dollar_total_supply = snapshot.dollar_total_supply,
            "treasury snapshot captured"
        );
        Ok(snapshot)
    }
}
