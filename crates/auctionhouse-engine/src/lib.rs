//! # auctionhouse-engine
//!
//! **Lifecycle Plane**: the round state machine, the auction runner, and
//! the transactional facade.
//!
//! ## Architecture
//!
//! 1. **auth**: role checks (Owner / Runner / Minter), evaluated fresh
//!    on every call
//! 2. **AuctionRound**: one ledger + custody pair under a derived-phase
//!    lifecycle (PENDING → OPEN → ENDED → SETTLED)
//! 3. **AuctionRunner**: global config owner, round factory,
//!    permissionless settlement with caller incentive
//! 4. **AuctionHouse**: the facade callers hit; wires the chain, the
//!    prize distributor, and the mint authority together
//!
//! ## Settlement Flow
//!
//! ```text
//! settle_auction → round.settle() → incentive payout → receipt
//!               → mint.new_prize_pool() → distributor.publish()
//!               → next round opened
//! ```

pub mod auth;
pub mod house;
pub mod round;
pub mod runner;

pub use house::AuctionHouse;
pub use round::AuctionRound;
pub use runner::AuctionRunner;
