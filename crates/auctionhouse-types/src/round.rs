//! Round lifecycle types.
//!
//! Each round moves forward only:
//! **PENDING → OPEN → ENDED → SETTLED**
//!
//! PENDING rounds exist but do not accept bids. OPEN rounds accept bid
//! operations until the deadline block. ENDED is implicit: any call that
//! observes `height >= deadline` treats the round as ended without a
//! separate transition transaction. SETTLED is terminal.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four forward-only phases of an auction round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Round object exists, not yet accepting bids.
    Pending,
    /// Accepting bid operations until the deadline block.
    Open,
    /// Deadline reached; read-only until settlement.
    Ended,
    /// Winners published, incentive paid, proceeds locked. Terminal.
    Settled,
}

impl fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Open => write!(f, "OPEN"),
            Self::Ended => write!(f, "ENDED"),
            Self::Settled => write!(f, "SETTLED"),
        }
    }
}

impl RoundPhase {
    /// Whether bid-mutating operations are permitted in this phase.
    #[must_use]
    pub fn accepts_bids(self) -> bool {
        self == Self::Open
    }

    /// Whether settlement may run in this phase.
    #[must_use]
    pub fn settleable(self) -> bool {
        self == Self::Ended
    }
}
