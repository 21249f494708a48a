//! Settlement receipts and the winners-root commitment.
//!
//! Every settlement produces a receipt committing to the exact ordered
//! winner list via a SHA-256 root. Any observer holding the winner list
//! can recompute the root and verify the receipt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{AccountId, Bid, RoundId};

/// The immutable record of one round's settlement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementReceipt {
    /// The round that was settled.
    pub round: RoundId,
    /// Winning bids, best-first, exactly as frozen from the ledger.
    pub winners: Vec<Bid>,
    /// SHA-256 commitment over the ordered winner list.
    pub winners_root: [u8; 32],
    /// Escrow value that accrued to the proceeds pool (after incentive).
    pub proceeds: u128,
    /// Incentive paid to the settler.
    pub incentive: u128,
    /// Who triggered settlement.
    pub settler: AccountId,
    /// When settlement executed.
    pub settled_at: DateTime<Utc>,
}

impl SettlementReceipt {
    /// Recompute the winners root and compare against the stored one.
    #[must_use]
    pub fn verify(&self) -> bool {
        compute_winners_root(self.round, &self.winners) == self.winners_root
    }
}

/// SHA-256 commitment over an ordered winner list.
///
/// Format: domain tag, round id, then per winner
/// `bidder(20) || amount(16, le) || sequence(8, le)`.
#[must_use]
pub fn compute_winners_root(round: RoundId, winners: &[Bid]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"auctionhouse:winners_root:v1:");
    hasher.update(round.0.to_le_bytes());
    for bid in winners {
        hasher.update(bid.bidder.as_bytes());
        hasher.update(bid.amount.to_le_bytes());
        hasher.update(bid.sequence.to_le_bytes());
    }
    hasher.finalize().into()
}
