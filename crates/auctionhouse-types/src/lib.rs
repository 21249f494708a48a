//! # auctionhouse-types
//!
//! Shared types, errors, and configuration for the **AuctionHouse**
//! ranked-bid auction engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AccountId`], [`RoundId`], [`PrizeId`]
//! - **Bid model**: [`Bid`]
//! - **Round model**: [`RoundPhase`]
//! - **Prize model**: [`PrizeRight`]
//! - **Configuration**: [`AuctionConfig`], [`RoundParams`]
//! - **Receipts**: [`SettlementReceipt`], [`compute_winners_root`]
//! - **Errors**: [`AuctionError`] with `AH_ERR_` prefix codes
//! - **Constants**: capacity, default prices and durations

pub mod bid;
pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod prize;
pub mod receipt;
pub mod round;

// Re-export all primary types at crate root for ergonomic imports:
//   use auctionhouse_types::{Bid, RoundPhase, AuctionError, ...};

pub use bid::*;
pub use config::*;
pub use error::*;
pub use ids::*;
pub use prize::*;
pub use receipt::*;
pub use round::*;

// Constants are accessed via `auctionhouse_types::constants::FOO`
// (not re-exported to avoid name collisions).
