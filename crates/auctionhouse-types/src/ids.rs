//! Identifiers used throughout the AuctionHouse engine.
//!
//! `AccountId` is a 20-byte address — the identity of bidders, role
//! holders, and engine components alike. `RoundId` is a monotonic
//! counter, `PrizeId` uses UUIDv7 for time-ordered lexicographic sorting.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// AccountId
// ---------------------------------------------------------------------------

/// A 20-byte account address identifying a bidder, role holder, or
/// engine component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AccountId(pub [u8; 20]);

impl AccountId {
    #[must_use]
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Deterministically derive a component address from a domain tag and
    /// a seed account. Used for engine-owned identities (runner, mint
    /// authority) so wiring is reproducible.
    #[must_use]
    pub fn derived(tag: &str, seed: &AccountId) -> Self {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(b"auctionhouse:account:v1:");
        hasher.update(tag.as_bytes());
        hasher.update(seed.0);
        let hash = hasher.finalize();
        let bytes: [u8; 20] = hash[..20].try_into().expect("SHA-256 produces 32 bytes");
        Self(bytes)
    }

    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Test-only address derived from a small index. Distinct indexes give
    /// distinct addresses.
    #[cfg(any(test, feature = "test-helpers"))]
    #[must_use]
    pub fn from_index(index: u64) -> Self {
        let mut bytes = [0u8; 20];
        bytes[12..].copy_from_slice(&index.to_be_bytes());
        Self(bytes)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

// ---------------------------------------------------------------------------
// RoundId
// ---------------------------------------------------------------------------

/// Monotonically increasing identifier for an auction round.
///
/// Round 1 is the first round; settlement of round `n` creates round `n+1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct RoundId(pub u64);

impl RoundId {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "round:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// PrizeId
// ---------------------------------------------------------------------------

/// Unique identifier for a claimable prize right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct PrizeId(pub Uuid);

impl PrizeId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for PrizeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PrizeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "prize:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
