//! Prize distribution: claimable rights per winner, per settled round.
//!
//! At settlement the engine publishes one [`PrizeRight`] per winning
//! ledger entry. Winners (or the minter on their behalf) later collect;
//! a claimed right is skipped by every subsequent count and claim, so a
//! right can pay out at most once.

use std::collections::HashMap;

use auctionhouse_types::{AccountId, AuctionError, Bid, PrizeId, PrizeRight, Result, RoundId};

/// Tracks every prize right ever awarded, indexed by owner.
#[derive(Debug, Default)]
pub struct PrizeDistributor {
    rights: HashMap<AccountId, Vec<PrizeRight>>,
}

impl PrizeDistributor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Materialize one right per winning entry of a settled round.
    /// Returns the number of rights created.
    pub fn publish(&mut self, round: RoundId, winners: &[Bid]) -> usize {
        for bid in winners {
            self.rights
                .entry(bid.bidder)
                .or_default()
                .push(PrizeRight::new(round, bid.bidder));
        }
        tracing::info!(round = round.0, count = winners.len(), "Prize rights published");
        winners.len()
    }

    /// Claim every outstanding right for `owner`, across all settled
    /// rounds. Returns the claimed right ids.
    ///
    /// # Errors
    /// Returns [`AuctionError::NoPrizesToCollect`] if the owner holds no
    /// unclaimed right; nothing changes.
    pub fn collect(&mut self, owner: &AccountId) -> Result<Vec<PrizeId>> {
        let rights = self
            .rights
            .get_mut(owner)
            .ok_or(AuctionError::NoPrizesToCollect(*owner))?;

        let mut claimed = Vec::new();
        for right in rights.iter_mut().filter(|r| !r.claimed) {
            right.mark_claimed()?;
            claimed.push(right.id);
        }
        if claimed.is_empty() {
            return Err(AuctionError::NoPrizesToCollect(*owner));
        }
        tracing::debug!(owner = %owner.short(), count = claimed.len(), "Prizes collected");
        Ok(claimed)
    }

    /// Number of unclaimed rights for an address. Read-only.
    #[must_use]
    pub fn unclaimed_count(&self, owner: &AccountId) -> usize {
        self.rights
            .get(owner)
            .map_or(0, |rights| rights.iter().filter(|r| !r.claimed).count())
    }

    /// Every right (claimed or not) held by an address.
    #[must_use]
    pub fn rights_of(&self, owner: &AccountId) -> &[PrizeRight] {
        self.rights.get(owner).map_or(&[], Vec::as_slice)
    }

    /// Total unclaimed rights across all owners.
    #[must_use]
    pub fn total_unclaimed(&self) -> usize {
        self.rights
            .values()
            .flat_map(|rights| rights.iter())
            .filter(|r| !r.claimed)
            .count()
    }
}
