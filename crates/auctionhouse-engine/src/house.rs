//! The auction house facade: the transactional surface callers hit.
//!
//! Ties the host chain, the runner, the prize distributor, and the mint
//! authority together. Every method is one atomic transaction — it fully
//! commits or fully reverts — mirroring a host that serializes calls and
//! rolls back failed ones.
//!
//! At settlement the house acts under its own engine identity to open
//! the round's prize pool on the mint authority, then publishes one
//! claimable right per winner to the distributor.

use auctionhouse_types::{
    AccountId, AuctionConfig, Bid, Result, RoundId, RoundPhase, SettlementReceipt,
};
use auctionhouse_ledger::{Chain, SupplyConservation};
use auctionhouse_prizes::{MintAuthority, PrizeDistributor};

use crate::auth;
use crate::runner::AuctionRunner;

/// The deployed auction system.
#[derive(Debug)]
pub struct AuctionHouse {
    chain: Chain,
    runner: AuctionRunner,
    distributor: PrizeDistributor,
    mint: MintAuthority,
    conservation: SupplyConservation,
    /// The engine's own identity — the only caller the mint authority
    /// accepts for `new_prize_pool`.
    engine_id: AccountId,
}

impl AuctionHouse {
    /// Deploy a fresh house. The owner initially holds the Runner role;
    /// the mint authority's derived address holds the Minter role.
    #[must_use]
    pub fn new(owner: AccountId) -> Self {
        let engine_id = AccountId::derived("auction-runner", &owner);
        let mint_address = AccountId::derived("mint-authority", &owner);
        let config = AuctionConfig::new(owner, mint_address);
        Self {
            chain: Chain::new(),
            runner: AuctionRunner::new(config),
            distributor: PrizeDistributor::new(),
            mint: MintAuthority::new(owner, engine_id, mint_address),
            conservation: SupplyConservation::new(),
            engine_id,
        }
    }

    // =================================================================
    // Host harness
    // =================================================================

    /// Credit an account from outside the system.
    pub fn fund(&mut self, account: AccountId, amount: u128) {
        self.chain.fund(account, amount);
        self.conservation.record_funding(amount);
    }

    /// Advance the block height.
    pub fn mine(&mut self, blocks: u64) {
        self.chain.mine(blocks);
    }

    #[must_use]
    pub fn height(&self) -> u64 {
        self.chain.height()
    }

    #[must_use]
    pub fn balance(&self, account: &AccountId) -> u128 {
        self.chain.balance(account)
    }

    // =================================================================
    // Round lifecycle
    // =================================================================

    /// Open the pending first round. Runner-gated.
    pub fn start_auction(&mut self, caller: &AccountId) -> Result<u64> {
        let height = self.chain.height();
        self.runner.start(caller, height)
    }

    /// Settle the ended round: pay the caller incentive, open the prize
    /// pool, publish rights, open the next round. Permissionless.
    pub fn settle_auction(&mut self, caller: AccountId) -> Result<SettlementReceipt> {
        let receipt = self.runner.settle(&mut self.chain, caller)?;
        self.mint.new_prize_pool(
            &self.engine_id,
            receipt.round,
            receipt.winners_root,
            receipt.winners.len(),
        )?;
        self.distributor.publish(receipt.round, &receipt.winners);
        Ok(receipt)
    }

    // =================================================================
    // Bid operations
    // =================================================================

    /// Place a bid with `value` attached. Returns the evicted bid when
    /// the caller displaced the lowest winning entry.
    pub fn add_bid(&mut self, caller: AccountId, value: u128) -> Result<Option<Bid>> {
        self.runner.add_bid(&mut self.chain, caller, value)
    }

    /// Top up the caller's active bid by `value`.
    pub fn increase_bid(&mut self, caller: AccountId, value: u128) -> Result<u128> {
        self.runner.increase_bid(&mut self.chain, caller, value)
    }

    /// Withdraw the caller's active bid; refunds in full.
    pub fn remove_bid(&mut self, caller: AccountId) -> Result<u128> {
        self.runner.remove_bid(&mut self.chain, caller)
    }

    // =================================================================
    // Prize claims
    // =================================================================

    /// Claim all of the caller's outstanding prize rights.
    pub fn collect_prizes(&mut self, caller: AccountId) -> Result<usize> {
        Ok(self.distributor.collect(&caller)?.len())
    }

    /// Claim on behalf of `target`. Minter-gated.
    pub fn collect_prizes_for(&mut self, caller: &AccountId, target: AccountId) -> Result<usize> {
        auth::require_minter(self.runner.config(), caller)?;
        Ok(self.distributor.collect(&target)?.len())
    }

    /// Unclaimed prize rights held by an address. Read-only.
    #[must_use]
    pub fn view_prizes_count(&self, account: &AccountId) -> usize {
        self.distributor.unclaimed_count(account)
    }

    // =================================================================
    // Owner-gated configuration
    // =================================================================

    pub fn set_block_duration(&mut self, caller: &AccountId, blocks: u64) -> Result<()> {
        self.runner.set_block_duration(caller, blocks)
    }

    pub fn set_reserve_price(&mut self, caller: &AccountId, price: u128) -> Result<()> {
        self.runner.set_reserve_price(caller, price)
    }

    pub fn set_min_bid_increment(&mut self, caller: &AccountId, increment: u128) -> Result<()> {
        self.runner.set_min_bid_increment(caller, increment)
    }

    pub fn set_settle_incentive(&mut self, caller: &AccountId, incentive: u128) -> Result<()> {
        self.runner.set_settle_incentive(caller, incentive)
    }

    /// Hand the Runner role to another identity.
    pub fn set_runner(&mut self, caller: &AccountId, runner: AccountId) -> Result<()> {
        self.runner.set_runner(caller, runner)
    }

    /// Hand the Minter role to another identity.
    pub fn set_minter(&mut self, caller: &AccountId, minter: AccountId) -> Result<()> {
        self.runner.set_minter(caller, minter)
    }

    /// Flip the pause switch. Returns the new state.
    pub fn toggle_paused(&mut self, caller: &AccountId) -> Result<bool> {
        self.runner.toggle_paused(caller)
    }

    /// Sweep accumulated proceeds to the owner.
    pub fn withdraw(&mut self, caller: &AccountId) -> Result<u128> {
        self.runner.withdraw(&mut self.chain, caller)
    }

    /// Re-point the mint authority at a new runner identity. Owner-gated
    /// on the authority itself.
    pub fn update_auction_runner(&mut self, caller: &AccountId, runner: AccountId) -> Result<()> {
        self.mint.update_auction_runner(caller, runner)
    }

    // =================================================================
    // Queries
    // =================================================================

    /// Id of the round currently in flight.
    #[must_use]
    pub fn auction_now(&self) -> RoundId {
        self.runner.auction_now()
    }

    /// The current round's deadline block, once opened.
    #[must_use]
    pub fn auction_end_time(&self) -> Option<u64> {
        self.runner.end_time()
    }

    /// The current round's phase at the current height.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.runner.phase(self.chain.height())
    }

    /// Direct access to the mint authority for collaborator assertions.
    #[must_use]
    pub fn mint_authority(&self) -> &MintAuthority {
        &self.mint
    }

    /// Mutable access to the mint authority — the collaborator surface
    /// external callers hit directly (its own gates still apply).
    pub fn mint_authority_mut(&mut self) -> &mut MintAuthority {
        &mut self.mint
    }

    #[must_use]
    pub fn runner(&self) -> &AuctionRunner {
        &self.runner
    }

    /// Verify that no native value was created or destroyed:
    /// accounts + escrow + proceeds must equal everything ever funded.
    ///
    /// # Errors
    /// Returns `SupplyInvariantViolation` on a mismatch.
    pub fn verify_supply(&self) -> Result<()> {
        self.conservation.verify(
            self.chain.total_in_accounts(),
            self.runner.round().custody().total(),
            self.runner.proceeds(),
        )
    }
}
