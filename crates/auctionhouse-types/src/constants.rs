//! System-wide constants for the AuctionHouse engine.

/// Maximum number of winning bids held in a round's ledger.
pub const MAX_WINNING_BIDS: usize = 64;

/// One whole native coin in smallest currency units.
pub const COIN: u128 = 1_000_000_000_000_000_000;

/// Default round length in blocks.
pub const DEFAULT_BLOCK_DURATION: u64 = 1_800;

/// Default reserve price (0.01 coin): the admission floor while the
/// ledger has free slots.
pub const DEFAULT_RESERVE_PRICE: u128 = COIN / 100;

/// Default minimum increment over the lowest winning bid once the ledger
/// is at capacity (0.0001 coin).
pub const DEFAULT_MIN_BID_INCREMENT: u128 = COIN / 10_000;

/// Default incentive paid to whoever triggers settlement (0.001 coin).
pub const DEFAULT_SETTLE_INCENTIVE: u128 = COIN / 1_000;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "AuctionHouse";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_consistent() {
        assert_eq!(MAX_WINNING_BIDS, 64);
        assert!(DEFAULT_MIN_BID_INCREMENT < DEFAULT_RESERVE_PRICE);
        assert!(DEFAULT_SETTLE_INCENTIVE < DEFAULT_RESERVE_PRICE * 64);
    }
}
