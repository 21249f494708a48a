//! Supply conservation invariant checker.
//!
//! Mathematical invariant enforced after every settlement-grade mutation:
//! ```text
//! Σ(account balances) + Σ(escrow) + proceeds == Σ(funding)
//! ```
//!
//! Bids, evictions, refunds, settlement, and withdrawals only move native
//! value between accounts and pools — nothing inside the engine may mint
//! or burn it. If this invariant ever breaks, something has gone
//! catastrophically wrong.

use auctionhouse_types::{AuctionError, Result};

/// Tracks total value funded into the chain and validates conservation.
#[derive(Debug, Default)]
pub struct SupplyConservation {
    /// Total native value funded since genesis.
    funded: u128,
}

impl SupplyConservation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an external funding event.
    pub fn record_funding(&mut self, amount: u128) {
        self.funded += amount;
    }

    /// Expected total supply: everything ever funded.
    #[must_use]
    pub fn expected_supply(&self) -> u128 {
        self.funded
    }

    /// Verify the actual supply (accounts + escrow + proceeds) matches
    /// the expected supply.
    ///
    /// # Errors
    /// Returns [`AuctionError::SupplyInvariantViolation`] on a mismatch.
    pub fn verify(&self, accounts: u128, escrow: u128, proceeds: u128) -> Result<()> {
        let actual = accounts + escrow + proceeds;
        if actual != self.funded {
            return Err(AuctionError::SupplyInvariantViolation {
                reason: format!(
                    "actual supply {actual} != funded {} \
                     (accounts={accounts}, escrow={escrow}, proceeds={proceeds})",
                    self.funded,
                ),
            });
        }
        Ok(())
    }
}
