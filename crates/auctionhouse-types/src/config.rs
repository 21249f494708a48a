//! Auction configuration: the mutable global record owned by the runner
//! and the immutable per-round snapshot.
//!
//! Rounds snapshot the config at creation time — later config changes
//! apply to future rounds only, never to a round already in flight.

use serde::{Deserialize, Serialize};

use crate::{AccountId, constants};

/// Global mutable configuration. Role identities gate who may mutate
/// what; the numeric parameters feed each new round's snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuctionConfig {
    /// Owner role: config, pause, withdraw.
    pub owner: AccountId,
    /// Runner role: opens rounds; also the identity the engine uses when
    /// opening prize pools on the mint authority.
    pub runner: AccountId,
    /// Minter role: may claim prizes on behalf of a third party.
    pub minter: AccountId,
    /// Round length in blocks (deadline = open height + duration).
    pub block_duration: u64,
    /// Admission floor while the ledger has free slots.
    pub reserve_price: u128,
    /// Required margin over the lowest winning bid once at capacity.
    pub min_bid_increment: u128,
    /// Paid to whoever triggers settlement, capped by the round's escrow.
    pub settle_incentive: u128,
}

impl AuctionConfig {
    /// Config with default parameters. The owner initially holds the
    /// Runner role as well; the minter is wired in by the facade.
    #[must_use]
    pub fn new(owner: AccountId, minter: AccountId) -> Self {
        Self {
            owner,
            runner: owner,
            minter,
            block_duration: constants::DEFAULT_BLOCK_DURATION,
            reserve_price: constants::DEFAULT_RESERVE_PRICE,
            min_bid_increment: constants::DEFAULT_MIN_BID_INCREMENT,
            settle_incentive: constants::DEFAULT_SETTLE_INCENTIVE,
        }
    }

    /// Snapshot the round-scoped parameters for a newly created round.
    #[must_use]
    pub fn round_params(&self) -> RoundParams {
        RoundParams {
            block_duration: self.block_duration,
            reserve_price: self.reserve_price,
            min_bid_increment: self.min_bid_increment,
            max_winning_bids: constants::MAX_WINNING_BIDS,
        }
    }
}

/// The per-round parameter snapshot taken at round creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundParams {
    pub block_duration: u64,
    pub reserve_price: u128,
    pub min_bid_increment: u128,
    pub max_winning_bids: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = AuctionConfig::new(AccountId::from_index(1), AccountId::from_index(2));
        assert_eq!(cfg.runner, cfg.owner);
        assert_eq!(cfg.block_duration, constants::DEFAULT_BLOCK_DURATION);
        assert_eq!(cfg.reserve_price, constants::DEFAULT_RESERVE_PRICE);
        assert_eq!(cfg.min_bid_increment, constants::DEFAULT_MIN_BID_INCREMENT);
    }

    #[test]
    fn snapshot_is_detached_from_config() {
        let mut cfg = AuctionConfig::new(AccountId::from_index(1), AccountId::from_index(2));
        let params = cfg.round_params();
        cfg.block_duration = 9_999;
        cfg.reserve_price = 1;
        assert_eq!(params.block_duration, constants::DEFAULT_BLOCK_DURATION);
        assert_eq!(params.reserve_price, constants::DEFAULT_RESERVE_PRICE);
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = AuctionConfig::new(AccountId::from_index(1), AccountId::from_index(2));
        let json = serde_json::to_string(&cfg).unwrap();
        let back: AuctionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.owner, back.owner);
        assert_eq!(cfg.settle_incentive, back.settle_incentive);
    }
}
