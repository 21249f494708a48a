//! Claimable prize rights awarded to a settled round's winners.

use serde::{Deserialize, Serialize};

use crate::{AccountId, AuctionError, PrizeId, Result, RoundId};

/// A one-time entitlement created per winning ledger entry at settlement.
///
/// Claiming is one-way: once `claimed` is set the right is skipped by
/// every subsequent count and claim, so double-claiming is structurally
/// impossible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeRight {
    pub id: PrizeId,
    /// The settled round that awarded this right.
    pub round: RoundId,
    /// The winning bidder entitled to claim.
    pub owner: AccountId,
    pub claimed: bool,
}

impl PrizeRight {
    #[must_use]
    pub fn new(round: RoundId, owner: AccountId) -> Self {
        Self {
            id: PrizeId::new(),
            round,
            owner,
            claimed: false,
        }
    }

    /// Transition to claimed.
    ///
    /// # Errors
    /// Returns [`AuctionError::PrizeAlreadyClaimed`] on a repeat claim.
    pub fn mark_claimed(&mut self) -> Result<()> {
        if self.claimed {
            return Err(AuctionError::PrizeAlreadyClaimed(self.id));
        }
        self.claimed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_right_is_unclaimed() {
        let right = PrizeRight::new(RoundId(1), AccountId::from_index(1));
        assert!(!right.claimed);
    }

    #[test]
    fn claim_is_one_way() {
        let mut right = PrizeRight::new(RoundId(1), AccountId::from_index(1));
        right.mark_claimed().unwrap();
        assert!(right.claimed);

        let err = right.mark_claimed().unwrap_err();
        assert!(matches!(err, AuctionError::PrizeAlreadyClaimed(id) if id == right.id));
    }

    #[test]
    fn serde_roundtrip() {
        let right = PrizeRight::new(RoundId(4), AccountId::from_index(2));
        let json = serde_json::to_string(&right).unwrap();
        let back: PrizeRight = serde_json::from_str(&json).unwrap();
        assert_eq!(right, back);
    }
}
