//! The bid record held in a round's winning ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AccountId, RoundId};

/// A single active bid. `amount` is in the smallest currency unit and is
/// fully escrowed for as long as the bid is active.
///
/// `sequence` is the round-local insertion counter: among equal amounts
/// the lower sequence ranks higher, so the latest equal-amount entry is
/// the one evicted at the capacity boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bid {
    /// The bidding account.
    pub bidder: AccountId,
    /// Escrowed amount in smallest currency units.
    pub amount: u128,
    /// The round this bid belongs to.
    pub round: RoundId,
    /// Round-local insertion order (tie-break key).
    pub sequence: u64,
    /// When the bid was first placed.
    pub placed_at: DateTime<Utc>,
}

impl Bid {
    #[must_use]
    pub fn new(bidder: AccountId, amount: u128, round: RoundId, sequence: u64) -> Self {
        Self {
            bidder,
            amount,
            round,
            sequence,
            placed_at: Utc::now(),
        }
    }

    /// Ranking key: higher amount first, earlier insertion first among
    /// equal amounts.
    #[must_use]
    pub fn ranks_above(&self, other: &Bid) -> bool {
        self.amount > other.amount
            || (self.amount == other.amount && self.sequence < other.sequence)
    }
}
