//! Role checks shared by every privileged operation.
//!
//! Three independent roles, each a single stored identity compared
//! against the caller: Owner (config, pause, withdraw), Runner (opens
//! rounds), Minter (delegated prize claims). Checks read the config
//! fresh on every call — role changes take effect immediately.

use auctionhouse_types::{AccountId, AuctionConfig, AuctionError, Result};

/// Require the Owner role.
///
/// # Errors
/// Returns [`AuctionError::NotOwner`] for any other caller.
pub fn require_owner(config: &AuctionConfig, caller: &AccountId) -> Result<()> {
    if *caller != config.owner {
        return Err(AuctionError::NotOwner);
    }
    Ok(())
}

/// Require the Runner role.
///
/// # Errors
/// Returns [`AuctionError::NotRunner`] for any other caller.
pub fn require_runner(config: &AuctionConfig, caller: &AccountId) -> Result<()> {
    if *caller != config.runner {
        return Err(AuctionError::NotRunner);
    }
    Ok(())
}

/// Require the Minter role.
///
/// # Errors
/// Returns [`AuctionError::NotMinter`] for any other caller.
pub fn require_minter(config: &AuctionConfig, caller: &AccountId) -> Result<()> {
    if *caller != config.minter {
        return Err(AuctionError::NotMinter);
    }
    Ok(())
}
