//! # auctionhouse-ledger
//!
//! **Custody Plane**: the host chain model, the bounded ranked bid
//! ledger, escrow custody, and the safety guards around funds movement.
//!
//! ## Architecture
//!
//! The custody plane sits between the lifecycle engine and the host:
//! 1. **Chain**: block height + native account book (the host model)
//! 2. **BidLedger**: bounded rank-ordered winning set with eviction
//! 3. **FundsCustody**: per-round escrow; synchronous push refunds
//! 4. **ReentrancyGuard**: exclusive lock around transfer-bearing calls
//! 5. **SupplyConservation**: accounts + escrow + proceeds == funded
//!
//! ## Bid Flow
//!
//! ```text
//! engine → BidLedger.check_admission() → FundsCustody.escrow()
//!        → BidLedger.insert() → FundsCustody.refund(evicted)
//! ```
//!
//! State is finalized before any outbound transfer is issued.

pub mod chain;
pub mod conservation;
pub mod custody;
pub mod ledger;
pub mod reentry;

pub use chain::Chain;
pub use conservation::SupplyConservation;
pub use custody::FundsCustody;
pub use ledger::BidLedger;
pub use reentry::ReentrancyGuard;
