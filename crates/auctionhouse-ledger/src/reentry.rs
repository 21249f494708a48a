//! Reentrancy guard for bid-mutating entry points.
//!
//! Refunds are pushed to bidders synchronously mid-operation, and an
//! outbound value transfer is a point where the host can hand control
//! back to the recipient. Every entry point that can reach a transfer
//! takes the guard first and releases it on all exit paths; a nested
//! acquisition aborts the inner call.

use auctionhouse_types::{AuctionError, Result};

/// Exclusive lock scoped to one round's ledger + custody pair.
#[derive(Debug, Default)]
pub struct ReentrancyGuard {
    entered: bool,
}

impl ReentrancyGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the guard.
    ///
    /// # Errors
    /// Returns [`AuctionError::ReentrantCall`] if already held.
    pub fn enter(&mut self) -> Result<()> {
        if self.entered {
            return Err(AuctionError::ReentrantCall);
        }
        self.entered = true;
        Ok(())
    }

    /// Release the guard. Safe to call when not held.
    pub fn leave(&mut self) {
        self.entered = false;
    }

    #[must_use]
    pub fn is_entered(&self) -> bool {
        self.entered
    }
}
