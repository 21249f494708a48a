//! Authorization matrix: every privileged operation fails for a stranger
//! and succeeds for the role holder.

use auctionhouse_engine::AuctionHouse;
use auctionhouse_types::constants::COIN;
use auctionhouse_types::{AccountId, AuctionError, RoundId};

fn deploy() -> (AuctionHouse, AccountId, AccountId) {
    let owner = AccountId::from_index(1);
    let bad_actor = AccountId::from_index(66);
    let mut house = AuctionHouse::new(owner);
    house.fund(owner, 10 * COIN);
    house.fund(bad_actor, 10 * COIN);
    (house, owner, bad_actor)
}

#[test]
fn start_auction_requires_runner() {
    let (mut house, owner, bad_actor) = deploy();

    let err = house.start_auction(&bad_actor).unwrap_err();
    assert!(matches!(err, AuctionError::NotRunner));

    // The deployer initially holds the Runner role.
    house.start_auction(&owner).unwrap();
}

#[test]
fn new_prize_pool_requires_the_engine_runner_identity() {
    let (mut house, owner, bad_actor) = deploy();

    // Not even the owner may open pools directly on the collaborator.
    let err = house
        .mint_authority_mut()
        .new_prize_pool(&owner, RoundId(1), [0u8; 32], 64)
        .unwrap_err();
    assert!(matches!(err, AuctionError::NotRunner));

    let err = house
        .mint_authority_mut()
        .new_prize_pool(&bad_actor, RoundId(1), [0u8; 32], 64)
        .unwrap_err();
    assert!(matches!(err, AuctionError::NotRunner));
    assert_eq!(house.mint_authority().pool_count(), 0);
}

#[test]
fn update_auction_runner_requires_owner() {
    let (mut house, owner, bad_actor) = deploy();

    let err = house
        .update_auction_runner(&bad_actor, bad_actor)
        .unwrap_err();
    assert!(matches!(err, AuctionError::NotOwner));

    house.update_auction_runner(&owner, owner).unwrap();
    assert_eq!(house.mint_authority().auction_runner(), owner);
}

#[test]
fn set_block_duration_requires_owner() {
    let (mut house, owner, bad_actor) = deploy();

    let err = house.set_block_duration(&bad_actor, 1234).unwrap_err();
    assert!(matches!(err, AuctionError::NotOwner));

    house.set_block_duration(&owner, 1234).unwrap();
    assert_eq!(house.runner().config().block_duration, 1234);
}

#[test]
fn set_reserve_price_requires_owner() {
    let (mut house, owner, bad_actor) = deploy();

    let err = house.set_reserve_price(&bad_actor, 1234).unwrap_err();
    assert!(matches!(err, AuctionError::NotOwner));

    house.set_reserve_price(&owner, 1234).unwrap();
    assert_eq!(house.runner().config().reserve_price, 1234);
}

#[test]
fn set_min_bid_increment_requires_owner() {
    let (mut house, owner, bad_actor) = deploy();

    let err = house.set_min_bid_increment(&bad_actor, 1234).unwrap_err();
    assert!(matches!(err, AuctionError::NotOwner));

    house.set_min_bid_increment(&owner, 1234).unwrap();
    assert_eq!(house.runner().config().min_bid_increment, 1234);
}

#[test]
fn set_settle_incentive_requires_owner() {
    let (mut house, owner, bad_actor) = deploy();

    let err = house.set_settle_incentive(&bad_actor, 1234).unwrap_err();
    assert!(matches!(err, AuctionError::NotOwner));

    house.set_settle_incentive(&owner, 1234).unwrap();
    assert_eq!(house.runner().config().settle_incentive, 1234);
}

#[test]
fn toggle_paused_requires_owner() {
    let (mut house, owner, bad_actor) = deploy();

    let err = house.toggle_paused(&bad_actor).unwrap_err();
    assert!(matches!(err, AuctionError::NotOwner));

    assert!(house.toggle_paused(&owner).unwrap());
    assert!(!house.toggle_paused(&owner).unwrap());
}

#[test]
fn withdraw_requires_owner() {
    let (mut house, owner, bad_actor) = deploy();

    let err = house.withdraw(&bad_actor).unwrap_err();
    assert!(matches!(err, AuctionError::NotOwner));

    // Nothing settled yet: the owner sweeps an empty pool successfully.
    assert_eq!(house.withdraw(&owner).unwrap(), 0);
}

#[test]
fn delegated_prize_claim_requires_minter() {
    let (mut house, owner, bad_actor) = deploy();
    house.start_auction(&owner).unwrap();

    let err = house.collect_prizes_for(&bad_actor, bad_actor).unwrap_err();
    assert!(matches!(err, AuctionError::NotMinter));
}

#[test]
fn runner_role_can_be_reassigned_by_owner() {
    let owner = AccountId::from_index(1);
    let delegate = AccountId::from_index(2);
    let mut house = AuctionHouse::new(owner);

    // Hand over the Runner role before the round starts.
    let err = house.start_auction(&delegate).unwrap_err();
    assert!(matches!(err, AuctionError::NotRunner));

    house.set_runner(&owner, delegate).unwrap();
    house.start_auction(&delegate).unwrap();

    // Holding the Runner role grants no say over role assignment.
    assert!(matches!(
        house.set_runner(&delegate, owner).unwrap_err(),
        AuctionError::NotOwner
    ));
}
