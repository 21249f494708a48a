//! Error types for the AuctionHouse engine.
//!
//! All errors use the `AH_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Bid validation errors
//! - 2xx: Round lifecycle errors
//! - 3xx: Funds / custody errors
//! - 4xx: Prize errors
//! - 5xx: Authorization errors
//! - 8xx: Invariant violations
//! - 9xx: General / internal errors
//!
//! Every error aborts the whole call: a failed operation leaves ledger,
//! custody, and prize state exactly as before.

use thiserror::Error;

use crate::{AccountId, PrizeId, RoundId};

/// Central error enum for all AuctionHouse operations.
#[derive(Debug, Error)]
pub enum AuctionError {
    // =================================================================
    // Bid Validation Errors (1xx)
    // =================================================================
    /// The bid does not clear the current admission floor. While the
    /// ledger has free slots the floor is the reserve price; at capacity
    /// it is the lowest winning bid plus the minimum increment.
    #[error("AH_ERR_100: Bid {amount} is below the admission floor {floor}")]
    BidTooLow { amount: u128, floor: u128 },

    /// The caller holds no active bid in the current round.
    #[error("AH_ERR_101: No active bid for {0}")]
    NoActiveBid(AccountId),

    /// The caller already holds an active bid in the current round.
    #[error("AH_ERR_102: {0} already holds an active bid in this round")]
    BidAlreadyActive(AccountId),

    /// The bid failed basic validation (zero amount, zero increase).
    #[error("AH_ERR_103: Invalid bid: {reason}")]
    InvalidBid { reason: String },

    // =================================================================
    // Round Lifecycle Errors (2xx)
    // =================================================================
    /// The round deadline has passed (or the round is settled); no
    /// bid-mutating operation is permitted.
    #[error("AH_ERR_200: Auction has ended")]
    AuctionEnded,

    /// The round exists but has not been opened for bidding yet.
    #[error("AH_ERR_201: Auction has not started")]
    AuctionNotStarted,

    /// Settlement requires the deadline to have passed.
    #[error("AH_ERR_202: Auction has not ended yet")]
    NotEnded,

    /// The round was already settled (idempotency guard — the second call
    /// is a no-op failure, never a double payout).
    #[error("AH_ERR_203: {0} already settled")]
    AlreadySettled(RoundId),

    /// The operator pause switch is on.
    #[error("AH_ERR_204: Auction is paused")]
    Paused,

    /// A bid-mutating entry point was re-entered while already executing.
    #[error("AH_ERR_205: Reentrant call blocked")]
    ReentrantCall,

    // =================================================================
    // Funds / Custody Errors (3xx)
    // =================================================================
    /// The caller's account cannot cover the attached value.
    #[error("AH_ERR_300: Insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: u128, available: u128 },

    // =================================================================
    // Prize Errors (4xx)
    // =================================================================
    /// The address holds no unclaimed prize rights.
    #[error("AH_ERR_400: No prizes to collect for {0}")]
    NoPrizesToCollect(AccountId),

    /// The prize right was already claimed.
    #[error("AH_ERR_401: {0} already claimed")]
    PrizeAlreadyClaimed(PrizeId),

    /// A prize pool for this round was already opened.
    #[error("AH_ERR_402: Prize pool for {0} already open")]
    PrizePoolAlreadyOpen(RoundId),

    // =================================================================
    // Authorization Errors (5xx)
    // =================================================================
    /// The caller does not hold the Owner role.
    #[error("AH_ERR_500: Caller is not the owner")]
    NotOwner,

    /// The caller does not hold the Runner role.
    #[error("AH_ERR_501: Caller is not the auction runner")]
    NotRunner,

    /// The caller does not hold the Minter role.
    #[error("AH_ERR_502: Caller is not the minter")]
    NotMinter,

    // =================================================================
    // Invariant Violations (8xx)
    // =================================================================
    /// Native value was created or destroyed — critical safety alert.
    #[error("AH_ERR_800: Supply invariant violation: {reason}")]
    SupplyInvariantViolation { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error (ledger/custody disagreement).
    #[error("AH_ERR_900: Internal error: {0}")]
    Internal(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, AuctionError>;
