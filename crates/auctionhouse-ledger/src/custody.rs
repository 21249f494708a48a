//! Escrow custody for one round's active bids.
//!
//! Custody holds the native value attached to every active bid. Refunds
//! are pushed synchronously the moment a bid is evicted or removed; the
//! custody record is deleted *before* the outbound credit is issued, so
//! ledger and custody state are final when the transfer happens
//! (checks-effects-interactions). At settlement the whole escrow sweeps
//! into the proceeds pool in one move.

use std::collections::HashMap;

use auctionhouse_types::{AccountId, AuctionError, Result, RoundId};

use crate::chain::Chain;

/// Per-round escrow: `bidder → escrowed amount` plus a running total.
///
/// Invariant pre-settlement: `total() == sum of the round ledger amounts`.
#[derive(Debug)]
pub struct FundsCustody {
    round: RoundId,
    escrowed: HashMap<AccountId, u128>,
    total: u128,
}

impl FundsCustody {
    #[must_use]
    pub fn new(round: RoundId) -> Self {
        Self {
            round,
            escrowed: HashMap::new(),
            total: 0,
        }
    }

    /// Pull the attached value out of the bidder's account into escrow.
    ///
    /// # Errors
    /// Returns [`AuctionError::InsufficientFunds`] if the bidder cannot
    /// cover `amount`; nothing changes.
    pub fn escrow(&mut self, chain: &mut Chain, bidder: AccountId, amount: u128) -> Result<()> {
        chain.debit(&bidder, amount)?;
        *self.escrowed.entry(bidder).or_insert(0) += amount;
        self.total += amount;
        Ok(())
    }

    /// Escrow additional value for an existing bid.
    ///
    /// # Errors
    /// - [`AuctionError::Internal`] if no escrow record exists (ledger
    ///   and custody must agree)
    /// - [`AuctionError::InsufficientFunds`] if the bidder cannot cover
    ///   `delta`
    pub fn top_up(&mut self, chain: &mut Chain, bidder: AccountId, delta: u128) -> Result<()> {
        if !self.escrowed.contains_key(&bidder) {
            return Err(AuctionError::Internal(format!(
                "top_up without escrow record for {bidder} in {}",
                self.round
            )));
        }
        chain.debit(&bidder, delta)?;
        *self.escrowed.entry(bidder).or_insert(0) += delta;
        self.total += delta;
        Ok(())
    }

    /// Push the full recorded amount back to the bidder. The record is
    /// removed before the credit is issued; the refund equals exactly
    /// what was escrowed, no deduction.
    ///
    /// # Errors
    /// Returns [`AuctionError::Internal`] if no escrow record exists.
    pub fn refund(&mut self, chain: &mut Chain, bidder: &AccountId) -> Result<u128> {
        let amount = self
            .escrowed
            .remove(bidder)
            .ok_or_else(|| {
                AuctionError::Internal(format!(
                    "refund without escrow record for {bidder} in {}",
                    self.round
                ))
            })?;
        self.total -= amount;

        // State is final; the outbound transfer comes last.
        chain.credit(bidder, amount);
        tracing::debug!(round = self.round.0, bidder = %bidder.short(), amount, "Escrow refunded");
        Ok(amount)
    }

    /// Settlement sweep: drain every record and return the total, which
    /// the caller moves into the proceeds pool.
    pub fn sweep(&mut self) -> u128 {
        self.escrowed.clear();
        std::mem::take(&mut self.total)
    }

    /// Escrowed amount for a bidder (zero if none).
    #[must_use]
    pub fn escrowed_of(&self, bidder: &AccountId) -> u128 {
        self.escrowed.get(bidder).copied().unwrap_or(0)
    }

    /// Total value in escrow for this round.
    #[must_use]
    pub fn total(&self) -> u128 {
        self.total
    }
}
