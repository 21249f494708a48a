//! # auctionhouse-prizes
//!
//! **Prize Plane**: claimable prize rights and the minting-authority
//! collaborator.
//!
//! ## Architecture
//!
//! Settlement hands a frozen winner list to this plane:
//! 1. The runner opens a [`PrizePool`] on the [`MintAuthority`],
//!    committing to the winner list by its SHA-256 root
//! 2. The [`PrizeDistributor`] materializes one [`PrizeRight`] per
//!    winning entry
//! 3. Winners collect directly, or the minter collects on their behalf
//!
//! A claimed right is skipped by every later count and claim — double
//! payout is structurally impossible.
//!
//! [`PrizeRight`]: auctionhouse_types::PrizeRight

pub mod distributor;
pub mod mint;

pub use distributor::PrizeDistributor;
pub use mint::{MintAuthority, PrizePool};
