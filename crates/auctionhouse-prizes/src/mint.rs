//! The minting authority collaborator.
//!
//! The authority is the companion that turns claimed prize rights into
//! actual assets. The engine's side of the contract is narrow: at
//! settlement the runner — and only the runner — opens a prize pool for
//! the round, committing to the winner list by its root. The authority's
//! own address doubles as the Minter identity used for delegated claims.
//!
//! What the authority mints is opaque here; only the pool bookkeeping is
//! load-bearing.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use auctionhouse_types::{AccountId, AuctionError, Result, RoundId};

/// One prize pool per settled round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrizePool {
    pub round: RoundId,
    /// SHA-256 commitment over the round's ordered winner list.
    pub winners_root: [u8; 32],
    /// Number of prize rights backing this pool.
    pub size: usize,
    pub opened_at: DateTime<Utc>,
}

/// Pool registry plus the identities that gate it.
#[derive(Debug)]
pub struct MintAuthority {
    /// May rewire the runner identity.
    owner: AccountId,
    /// The only identity permitted to open pools.
    auction_runner: AccountId,
    /// This authority's own address (the Minter identity).
    address: AccountId,
    pools: HashMap<RoundId, PrizePool>,
}

impl MintAuthority {
    #[must_use]
    pub fn new(owner: AccountId, auction_runner: AccountId, address: AccountId) -> Self {
        Self {
            owner,
            auction_runner,
            address,
            pools: HashMap::new(),
        }
    }

    /// Open the prize pool for a settled round.
    ///
    /// # Errors
    /// - [`AuctionError::NotRunner`] unless `caller` is the stored
    ///   auction runner identity
    /// - [`AuctionError::PrizePoolAlreadyOpen`] for a duplicate round
    pub fn new_prize_pool(
        &mut self,
        caller: &AccountId,
        round: RoundId,
        winners_root: [u8; 32],
        size: usize,
    ) -> Result<()> {
        if *caller != self.auction_runner {
            return Err(AuctionError::NotRunner);
        }
        if self.pools.contains_key(&round) {
            return Err(AuctionError::PrizePoolAlreadyOpen(round));
        }
        self.pools.insert(
            round,
            PrizePool {
                round,
                winners_root,
                size,
                opened_at: Utc::now(),
            },
        );
        tracing::info!(round = round.0, size, "Prize pool opened");
        Ok(())
    }

    /// Point the authority at a new runner identity. Owner-gated.
    ///
    /// # Errors
    /// Returns [`AuctionError::NotOwner`] for any other caller.
    pub fn update_auction_runner(&mut self, caller: &AccountId, runner: AccountId) -> Result<()> {
        if *caller != self.owner {
            return Err(AuctionError::NotOwner);
        }
        self.auction_runner = runner;
        Ok(())
    }

    /// The pool for a round, if opened.
    #[must_use]
    pub fn pool(&self, round: RoundId) -> Option<&PrizePool> {
        self.pools.get(&round)
    }

    /// Number of pools opened so far.
    #[must_use]
    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }

    /// This authority's address — the Minter identity.
    #[must_use]
    pub fn address(&self) -> AccountId {
        self.address
    }

    /// The runner identity currently allowed to open pools.
    #[must_use]
    pub fn auction_runner(&self) -> AccountId {
        self.auction_runner
    }
}
