//! The auction runner: owner of the global config, factory for
//! successive rounds, and executor of permissionless settlement.
//!
//! Settlement sweeps the ended round's escrow, pays the caller incentive
//! out of it, accrues the remainder to the owner-withdrawable proceeds
//! pool, produces a [`SettlementReceipt`], and immediately opens the
//! next round from a fresh config snapshot. Round ids therefore advance
//! by exactly one per settlement.

use auctionhouse_types::{
    AccountId, AuctionConfig, Bid, Result, RoundId, RoundPhase, SettlementReceipt,
    compute_winners_root,
};
use auctionhouse_ledger::Chain;
use chrono::Utc;

use crate::auth;
use crate::round::AuctionRound;

/// Factory and owner of successive auction rounds.
#[derive(Debug)]
pub struct AuctionRunner {
    config: AuctionConfig,
    /// Operator switch; blocks new bids while on.
    paused: bool,
    /// The round currently accepting (or awaiting) bids.
    round: AuctionRound,
    /// Settled winning value awaiting the owner's withdrawal.
    proceeds: u128,
    /// One receipt per settled round, in order.
    receipts: Vec<SettlementReceipt>,
}

impl AuctionRunner {
    /// Create the runner with round 1 pending.
    #[must_use]
    pub fn new(config: AuctionConfig) -> Self {
        let round = AuctionRound::new(RoundId(1), config.round_params());
        Self {
            config,
            paused: false,
            round,
            proceeds: 0,
            receipts: Vec::new(),
        }
    }

    // =================================================================
    // Lifecycle
    // =================================================================

    /// Open the pending first round. Runner-gated; settlement opens
    /// every later round automatically.
    pub fn start(&mut self, caller: &AccountId, height: u64) -> Result<u64> {
        auth::require_runner(&self.config, caller)?;
        self.round.open(height)
    }

    /// Settle the ended round. Permissionless: whoever calls first is
    /// paid the incentive, capped by the round's swept escrow.
    pub fn settle(
        &mut self,
        chain: &mut Chain,
        caller: AccountId,
    ) -> Result<SettlementReceipt> {
        let height = chain.height();
        let (winners, swept) = self.round.settle(height)?;

        let incentive = self.config.settle_incentive.min(swept);
        let accrued = swept - incentive;
        self.proceeds += accrued;

        let receipt = SettlementReceipt {
            round: self.round.id(),
            winners_root: compute_winners_root(self.round.id(), &winners),
            winners,
            proceeds: accrued,
            incentive,
            settler: caller,
            settled_at: Utc::now(),
        };

        // Next round opens immediately from a fresh config snapshot.
        let next_id = self.round.id().next();
        let mut next = AuctionRound::new(next_id, self.config.round_params());
        next.open(height)?;
        self.round = next;
        self.receipts.push(receipt.clone());

        // Interactions last: incentive payout after all state is final.
        chain.credit(&caller, incentive);
        tracing::info!(
            round = receipt.round.0,
            winners = receipt.winners.len(),
            incentive,
            accrued,
            settler = %caller.short(),
            "Settlement complete"
        );
        Ok(receipt)
    }

    // =================================================================
    // Bid passthrough
    // =================================================================

    /// Place a new bid in the current round with `value` attached.
    pub fn add_bid(
        &mut self,
        chain: &mut Chain,
        bidder: AccountId,
        value: u128,
    ) -> Result<Option<Bid>> {
        self.round.add_bid(chain, self.paused, bidder, value)
    }

    /// Top up the caller's active bid by `value`.
    pub fn increase_bid(
        &mut self,
        chain: &mut Chain,
        bidder: AccountId,
        value: u128,
    ) -> Result<u128> {
        self.round.increase_bid(chain, bidder, value)
    }

    /// Withdraw the caller's active bid; refunds in full.
    pub fn remove_bid(&mut self, chain: &mut Chain, bidder: AccountId) -> Result<u128> {
        self.round.remove_bid(chain, bidder)
    }

    // =================================================================
    // Owner-gated configuration
    // =================================================================

    /// Round length for future rounds.
    pub fn set_block_duration(&mut self, caller: &AccountId, blocks: u64) -> Result<()> {
        auth::require_owner(&self.config, caller)?;
        self.config.block_duration = blocks;
        Ok(())
    }

    /// Admission floor for future rounds.
    pub fn set_reserve_price(&mut self, caller: &AccountId, price: u128) -> Result<()> {
        auth::require_owner(&self.config, caller)?;
        self.config.reserve_price = price;
        Ok(())
    }

    /// At-capacity margin for future rounds.
    pub fn set_min_bid_increment(&mut self, caller: &AccountId, increment: u128) -> Result<()> {
        auth::require_owner(&self.config, caller)?;
        self.config.min_bid_increment = increment;
        Ok(())
    }

    /// Settlement incentive for future settlements.
    pub fn set_settle_incentive(&mut self, caller: &AccountId, incentive: u128) -> Result<()> {
        auth::require_owner(&self.config, caller)?;
        self.config.settle_incentive = incentive;
        Ok(())
    }

    /// Hand the Runner role to another identity.
    pub fn set_runner(&mut self, caller: &AccountId, runner: AccountId) -> Result<()> {
        auth::require_owner(&self.config, caller)?;
        self.config.runner = runner;
        Ok(())
    }

    /// Hand the Minter role to another identity.
    pub fn set_minter(&mut self, caller: &AccountId, minter: AccountId) -> Result<()> {
        auth::require_owner(&self.config, caller)?;
        self.config.minter = minter;
        Ok(())
    }

    /// Flip the pause switch. Returns the new state.
    pub fn toggle_paused(&mut self, caller: &AccountId) -> Result<bool> {
        auth::require_owner(&self.config, caller)?;
        self.paused = !self.paused;
        tracing::info!(paused = self.paused, "Pause switch toggled");
        Ok(self.paused)
    }

    /// Sweep accumulated proceeds to the owner. Escrow belonging to
    /// unsettled bids is untouched; sweeping an empty pool is a zero
    /// transfer, not an error.
    pub fn withdraw(&mut self, chain: &mut Chain, caller: &AccountId) -> Result<u128> {
        auth::require_owner(&self.config, caller)?;
        let amount = std::mem::take(&mut self.proceeds);
        chain.credit(&self.config.owner, amount);
        tracing::info!(amount, "Proceeds withdrawn");
        Ok(amount)
    }

    // =================================================================
    // Queries
    // =================================================================

    /// Id of the round currently in flight.
    #[must_use]
    pub fn auction_now(&self) -> RoundId {
        self.round.id()
    }

    /// The current round's phase at the given height.
    #[must_use]
    pub fn phase(&self, height: u64) -> RoundPhase {
        self.round.phase(height)
    }

    /// The current round's deadline block, once opened.
    #[must_use]
    pub fn end_time(&self) -> Option<u64> {
        self.round.deadline()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn proceeds(&self) -> u128 {
        self.proceeds
    }

    #[must_use]
    pub fn receipts(&self) -> &[SettlementReceipt] {
        &self.receipts
    }

    #[must_use]
    pub fn round(&self) -> &AuctionRound {
        &self.round
    }

    #[must_use]
    pub fn config(&self) -> &AuctionConfig {
        &self.config
    }
}
