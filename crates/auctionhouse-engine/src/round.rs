//! One auction round: the ledger + custody pair under its lifecycle
//! state machine.
//!
//! The phase is derived, never stored: a round with a deadline behind
//! the current block height *is* ended, without a separate transition
//! transaction. Only `settled` is persisted, and it moves one way.
//!
//! Every bid-mutating entry point runs under the round's reentrancy
//! guard and follows checks-effects-interactions: validation first, then
//! ledger/custody mutation, and any outbound refund strictly last.

use auctionhouse_types::{AccountId, AuctionError, Bid, Result, RoundId, RoundParams, RoundPhase};
use auctionhouse_ledger::{BidLedger, Chain, FundsCustody, ReentrancyGuard};

/// A single round owning its winning ledger and escrow.
#[derive(Debug)]
pub struct AuctionRound {
    id: RoundId,
    /// Config snapshot taken at creation; later config changes do not
    /// reach this round.
    params: RoundParams,
    /// Absolute deadline block; `None` until the round is opened.
    deadline: Option<u64>,
    /// Monotonic: false → true, never back.
    settled: bool,
    ledger: BidLedger,
    custody: FundsCustody,
    reentry: ReentrancyGuard,
}

impl AuctionRound {
    #[must_use]
    pub fn new(id: RoundId, params: RoundParams) -> Self {
        Self {
            id,
            params,
            deadline: None,
            settled: false,
            ledger: BidLedger::new(
                id,
                params.max_winning_bids,
                params.reserve_price,
                params.min_bid_increment,
            ),
            custody: FundsCustody::new(id),
            reentry: ReentrancyGuard::new(),
        }
    }

    // =================================================================
    // Lifecycle
    // =================================================================

    /// Derived phase at the given block height.
    #[must_use]
    pub fn phase(&self, height: u64) -> RoundPhase {
        if self.settled {
            return RoundPhase::Settled;
        }
        match self.deadline {
            None => RoundPhase::Pending,
            Some(deadline) if height >= deadline => RoundPhase::Ended,
            Some(_) => RoundPhase::Open,
        }
    }

    /// Open the round: deadline = `height` + snapshot block duration.
    ///
    /// # Errors
    /// Returns [`AuctionError::Internal`] if the round was already opened.
    pub fn open(&mut self, height: u64) -> Result<u64> {
        if self.deadline.is_some() || self.settled {
            return Err(AuctionError::Internal(format!(
                "{} already opened",
                self.id
            )));
        }
        let deadline = height + self.params.block_duration;
        self.deadline = Some(deadline);
        tracing::info!(round = self.id.0, height, deadline, "Round opened");
        Ok(deadline)
    }

    /// Freeze the round: drain the winner list (best-first) and sweep
    /// the escrow. The caller distributes both.
    ///
    /// # Errors
    /// - [`AuctionError::AlreadySettled`] on a repeat call
    /// - [`AuctionError::NotEnded`] while the deadline has not passed
    pub fn settle(&mut self, height: u64) -> Result<(Vec<Bid>, u128)> {
        if self.settled {
            return Err(AuctionError::AlreadySettled(self.id));
        }
        if !self.phase(height).settleable() {
            return Err(AuctionError::NotEnded);
        }
        self.settled = true;
        let winners = self.ledger.drain_winners();
        let swept = self.custody.sweep();
        tracing::info!(
            round = self.id.0,
            winners = winners.len(),
            swept,
            "Round settled"
        );
        Ok((winners, swept))
    }

    // =================================================================
    // Bid operations
    // =================================================================

    /// Admit a new bid, escrowing the attached value; when the ledger is
    /// at capacity the displaced lowest bid is refunded on the spot.
    /// Returns the evicted bid, if any.
    pub fn add_bid(
        &mut self,
        chain: &mut Chain,
        paused: bool,
        bidder: AccountId,
        amount: u128,
    ) -> Result<Option<Bid>> {
        self.reentry.enter()?;
        let result = self.add_bid_inner(chain, paused, bidder, amount);
        self.reentry.leave();
        result
    }

    fn add_bid_inner(
        &mut self,
        chain: &mut Chain,
        paused: bool,
        bidder: AccountId,
        amount: u128,
    ) -> Result<Option<Bid>> {
        self.require_open(chain.height())?;
        if paused {
            return Err(AuctionError::Paused);
        }

        // Checks: admission is read-only, escrow may still fail cleanly.
        self.ledger.check_admission(&bidder, amount)?;
        self.custody.escrow(chain, bidder, amount)?;

        // Effects: ledger insert, eviction record removal.
        let evicted = self.ledger.insert(bidder, amount);
        tracing::debug!(
            round = self.id.0,
            bidder = %bidder.short(),
            amount,
            rank = self.ledger.len(),
            "Bid admitted"
        );

        // Interactions: push the displaced bidder's refund last.
        if let Some(ref evicted_bid) = evicted {
            tracing::debug!(
                round = self.id.0,
                bidder = %evicted_bid.bidder.short(),
                amount = evicted_bid.amount,
                "Bid evicted"
            );
            self.custody.refund(chain, &evicted_bid.bidder)?;
        }

        debug_assert_eq!(self.ledger.total_amount(), self.custody.total());
        Ok(evicted)
    }

    /// Top up the caller's active bid by `delta` and re-rank it. No
    /// admission floor re-check applies to an existing winner.
    pub fn increase_bid(
        &mut self,
        chain: &mut Chain,
        bidder: AccountId,
        delta: u128,
    ) -> Result<u128> {
        self.reentry.enter()?;
        let result = self.increase_bid_inner(chain, bidder, delta);
        self.reentry.leave();
        result
    }

    fn increase_bid_inner(
        &mut self,
        chain: &mut Chain,
        bidder: AccountId,
        delta: u128,
    ) -> Result<u128> {
        self.require_open(chain.height())?;
        if delta == 0 {
            return Err(AuctionError::InvalidBid {
                reason: "increase must be positive".to_string(),
            });
        }
        if !self.ledger.contains(&bidder) {
            return Err(AuctionError::NoActiveBid(bidder));
        }

        self.custody.top_up(chain, bidder, delta)?;
        let new_amount = self.ledger.increase(&bidder, delta)?;

        debug_assert_eq!(self.ledger.total_amount(), self.custody.total());
        Ok(new_amount)
    }

    /// Withdraw the caller's active bid; the full recorded amount is
    /// refunded and the slot freed.
    pub fn remove_bid(&mut self, chain: &mut Chain, bidder: AccountId) -> Result<u128> {
        self.reentry.enter()?;
        let result = self.remove_bid_inner(chain, bidder);
        self.reentry.leave();
        result
    }

    fn remove_bid_inner(&mut self, chain: &mut Chain, bidder: AccountId) -> Result<u128> {
        self.require_open(chain.height())?;

        // Effects: drop the ledger entry, then the custody record; the
        // refund credit is the final step inside `refund`.
        self.ledger.remove(&bidder)?;
        let refunded = self.custody.refund(chain, &bidder)?;

        debug_assert_eq!(self.ledger.total_amount(), self.custody.total());
        Ok(refunded)
    }

    fn require_open(&self, height: u64) -> Result<()> {
        match self.phase(height) {
            RoundPhase::Open => Ok(()),
            RoundPhase::Pending => Err(AuctionError::AuctionNotStarted),
            RoundPhase::Ended | RoundPhase::Settled => Err(AuctionError::AuctionEnded),
        }
    }

    // =================================================================
    // Queries
    // =================================================================

    #[must_use]
    pub fn id(&self) -> RoundId {
        self.id
    }

    #[must_use]
    pub fn params(&self) -> &RoundParams {
        &self.params
    }

    /// Absolute deadline block, once opened.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    #[must_use]
    pub fn ledger(&self) -> &BidLedger {
        &self.ledger
    }

    #[must_use]
    pub fn custody(&self) -> &FundsCustody {
        &self.custody
    }
}

#[cfg(test)]
mod tests {
    use auctionhouse_types::constants;

    use super::*;

    const RESERVE: u128 = 100;
    const INCREMENT: u128 = 10;

    fn params(capacity: usize, duration: u64) -> RoundParams {
        RoundParams {
            block_duration: duration,
            reserve_price: RESERVE,
            min_bid_increment: INCREMENT,
            max_winning_bids: capacity,
        }
    }

    fn open_round(capacity: usize) -> (AuctionRound, Chain) {
        let mut round = AuctionRound::new(RoundId(1), params(capacity, 100));
        let chain = Chain::new();
        round.open(chain.height()).unwrap();
        (round, chain)
    }

    fn funded(chain: &mut Chain, index: u64) -> AccountId {
        let account = AccountId::from_index(index);
        chain.fund(account, 1_000_000);
        account
    }

    #[test]
    fn phase_progression() {
        let mut round = AuctionRound::new(RoundId(1), params(4, 50));
        assert_eq!(round.phase(0), RoundPhase::Pending);

        round.open(10).unwrap();
        assert_eq!(round.phase(10), RoundPhase::Open);
        assert_eq!(round.phase(59), RoundPhase::Open);
        assert_eq!(round.phase(60), RoundPhase::Ended);

        round.settle(60).unwrap();
        assert_eq!(round.phase(60), RoundPhase::Settled);
    }

    #[test]
    fn double_open_fails() {
        let (mut round, chain) = open_round(4);
        let err = round.open(chain.height()).unwrap_err();
        assert!(matches!(err, AuctionError::Internal(_)));
    }

    #[test]
    fn bid_before_open_fails() {
        let mut round = AuctionRound::new(RoundId(1), params(4, 50));
        let mut chain = Chain::new();
        let alice = funded(&mut chain, 1);
        let err = round.add_bid(&mut chain, false, alice, RESERVE).unwrap_err();
        assert!(matches!(err, AuctionError::AuctionNotStarted));
    }

    #[test]
    fn bid_escrows_value() {
        let (mut round, mut chain) = open_round(4);
        let alice = funded(&mut chain, 1);

        round.add_bid(&mut chain, false, alice, 500).unwrap();
        assert_eq!(chain.balance(&alice), 999_500);
        assert_eq!(round.custody().escrowed_of(&alice), 500);
        assert_eq!(round.ledger().total_amount(), round.custody().total());
    }

    #[test]
    fn paused_blocks_add_bid() {
        let (mut round, mut chain) = open_round(4);
        let alice = funded(&mut chain, 1);
        let err = round.add_bid(&mut chain, true, alice, 500).unwrap_err();
        assert!(matches!(err, AuctionError::Paused));
        assert_eq!(chain.balance(&alice), 1_000_000);
    }

    #[test]
    fn eviction_refunds_displaced_bidder() {
        let (mut round, mut chain) = open_round(2);
        let alice = funded(&mut chain, 1);
        let bob = funded(&mut chain, 2);
        let carol = funded(&mut chain, 3);

        round.add_bid(&mut chain, false, alice, 200).unwrap();
        round.add_bid(&mut chain, false, bob, 300).unwrap();

        let evicted = round
            .add_bid(&mut chain, false, carol, 400)
            .unwrap()
            .expect("lowest bid should be evicted");
        assert_eq!(evicted.bidder, alice);

        // Alice is refunded in full, synchronously.
        assert_eq!(chain.balance(&alice), 1_000_000);
        assert_eq!(round.custody().escrowed_of(&alice), 0);
        assert_eq!(round.ledger().total_amount(), 700);
        assert_eq!(round.custody().total(), 700);
    }

    #[test]
    fn failed_admission_leaves_everything_unchanged() {
        let (mut round, mut chain) = open_round(1);
        let alice = funded(&mut chain, 1);
        let bob = funded(&mut chain, 2);

        round.add_bid(&mut chain, false, alice, 200).unwrap();
        let err = round.add_bid(&mut chain, false, bob, 200).unwrap_err();
        assert!(matches!(err, AuctionError::BidTooLow { .. }));

        assert_eq!(chain.balance(&bob), 1_000_000);
        assert_eq!(round.ledger().len(), 1);
        assert_eq!(round.custody().total(), 200);
    }

    #[test]
    fn insufficient_funds_leaves_ledger_unchanged() {
        let (mut round, mut chain) = open_round(4);
        let poor = AccountId::from_index(7);
        chain.fund(poor, 50);

        let err = round.add_bid(&mut chain, false, poor, RESERVE).unwrap_err();
        assert!(matches!(err, AuctionError::InsufficientFunds { .. }));
        assert!(round.ledger().is_empty());
        assert_eq!(chain.balance(&poor), 50);
    }

    #[test]
    fn increase_moves_funds_and_reranks() {
        let (mut round, mut chain) = open_round(4);
        let alice = funded(&mut chain, 1);
        let bob = funded(&mut chain, 2);

        round.add_bid(&mut chain, false, alice, 200).unwrap();
        round.add_bid(&mut chain, false, bob, 300).unwrap();

        let new_amount = round.increase_bid(&mut chain, alice, 200).unwrap();
        assert_eq!(new_amount, 400);
        assert_eq!(round.ledger().highest().unwrap().bidder, alice);
        assert_eq!(chain.balance(&alice), 999_600);
        assert_eq!(round.custody().escrowed_of(&alice), 400);
    }

    #[test]
    fn increase_without_bid_fails() {
        let (mut round, mut chain) = open_round(4);
        let alice = funded(&mut chain, 1);
        let err = round.increase_bid(&mut chain, alice, 100).unwrap_err();
        assert!(matches!(err, AuctionError::NoActiveBid(_)));
    }

    #[test]
    fn remove_refunds_full_amount() {
        let (mut round, mut chain) = open_round(4);
        let alice = funded(&mut chain, 1);

        round.add_bid(&mut chain, false, alice, 500).unwrap();
        round.increase_bid(&mut chain, alice, 250).unwrap();
        let refunded = round.remove_bid(&mut chain, alice).unwrap();

        assert_eq!(refunded, 750);
        assert_eq!(chain.balance(&alice), 1_000_000);
        assert!(round.ledger().is_empty());
        assert_eq!(round.custody().total(), 0);
    }

    #[test]
    fn ended_round_rejects_all_bid_mutations() {
        let (mut round, mut chain) = open_round(4);
        let alice = funded(&mut chain, 1);
        round.add_bid(&mut chain, false, alice, 500).unwrap();

        chain.mine(200); // past the deadline

        assert!(matches!(
            round.add_bid(&mut chain, false, alice, 900).unwrap_err(),
            AuctionError::AuctionEnded
        ));
        assert!(matches!(
            round.increase_bid(&mut chain, alice, 100).unwrap_err(),
            AuctionError::AuctionEnded
        ));
        assert!(matches!(
            round.remove_bid(&mut chain, alice).unwrap_err(),
            AuctionError::AuctionEnded
        ));
    }

    #[test]
    fn settle_requires_deadline_passed() {
        let (mut round, chain) = open_round(4);
        let err = round.settle(chain.height()).unwrap_err();
        assert!(matches!(err, AuctionError::NotEnded));
    }

    #[test]
    fn settle_freezes_winners_and_sweeps_escrow() {
        let (mut round, mut chain) = open_round(4);
        let alice = funded(&mut chain, 1);
        let bob = funded(&mut chain, 2);
        round.add_bid(&mut chain, false, alice, 200).unwrap();
        round.add_bid(&mut chain, false, bob, 300).unwrap();

        chain.mine(200);
        let (winners, swept) = round.settle(chain.height()).unwrap();

        assert_eq!(winners.len(), 2);
        assert_eq!(winners[0].bidder, bob, "winners are best-first");
        assert_eq!(swept, 500);
        assert!(round.is_settled());
        assert_eq!(round.custody().total(), 0);
    }

    #[test]
    fn double_settle_fails() {
        let (mut round, mut chain) = open_round(4);
        chain.mine(200);
        round.settle(chain.height()).unwrap();
        let err = round.settle(chain.height()).unwrap_err();
        assert!(matches!(err, AuctionError::AlreadySettled(r) if r == RoundId(1)));
    }

    #[test]
    fn default_capacity_matches_engine_constant() {
        let round = AuctionRound::new(
            RoundId(1),
            RoundParams {
                block_duration: 10,
                reserve_price: RESERVE,
                min_bid_increment: INCREMENT,
                max_winning_bids: constants::MAX_WINNING_BIDS,
            },
        );
        assert_eq!(round.params().max_winning_bids, 64);
    }
}
