// End-to-end runs of an auction from opening to payout.

mod common;

use common::{setup_auction, setup_test_env, START};
use simple_auction::{AuctionEndedEvent, AuctionError};
use soroban_sdk::{symbol_short, testutils::Events, vec, Address, IntoVal, Val, Vec};

#[test]
fn test_reference_auction() {
    let ctx = setup_test_env();

    // Opening state
    assert_eq!(ctx.client.beneficiary(), ctx.beneficiary);
    assert_eq!(ctx.client.auction_end_time(), START + 10);
    assert_eq!(ctx.client.highest_bidder(), None);
    assert_eq!(ctx.client.highest_bid(), 0);

    // Two bidders, each taking the lead in turn
    let bidder1 = ctx.bidder(100);
    let bidder2 = ctx.bidder(100);

    ctx.client.bid(&bidder1, &1);
    assert_eq!(ctx.client.highest_bid(), 1);

    ctx.client.bid(&bidder2, &2);
    assert_eq!(ctx.client.highest_bid(), 2);
    assert_eq!(ctx.client.highest_bidder(), Some(bidder2.clone()));
    assert_eq!(ctx.client.pending_returns(&bidder1), 1);

    // The outbid bidder takes their money back
    assert_eq!(ctx.client.withdraw(&bidder1), 1);
    assert_eq!(ctx.token.balance(&bidder1), 100);

    // Too early to close
    assert_eq!(
        ctx.client.try_end_auction(),
        Err(Ok(AuctionError::TooEarly))
    );

    // Twenty seconds later it can be closed, once
    ctx.advance_to(START + 20);
    ctx.client.end_auction();

    let expected: Vec<(Address, Vec<Val>, Val)> = vec![
        &ctx.env,
        (
            ctx.contract_id.clone(),
            (symbol_short!("AUC_END"),).into_val(&ctx.env),
            AuctionEndedEvent {
                winner: Some(bidder2.clone()),
                amount: 2,
                timestamp: START + 20,
            }
            .into_val(&ctx.env),
        ),
    ];
    assert_eq!(
        ctx.env.events().all().filter_by_contract(&ctx.contract_id),
        expected
    );

    let state = ctx.client.get_state();
    assert!(state.ended);
    assert_eq!(state.highest_bidder, Some(bidder2.clone()));
    assert_eq!(state.highest_bid, 2);
    assert_eq!(ctx.token.balance(&ctx.beneficiary), 2);
    assert_eq!(ctx.token.balance(&bidder2), 98);

    assert_eq!(
        ctx.client.try_end_auction(),
        Err(Ok(AuctionError::AlreadyEnded))
    );
}

#[test]
fn test_deployment_duration_is_seconds() {
    let ctx = setup_auction(86_400_000);

    assert_eq!(ctx.client.auction_end_time(), START + 86_400_000);
    assert_eq!(ctx.client.get_config().auction_end_time, START + 86_400_000);

    ctx.advance_to(START + 86_400_000);
    assert_eq!(ctx.client.time_left(), 0);
    assert_eq!(
        ctx.client.try_end_auction(),
        Err(Ok(AuctionError::TooEarly))
    );

    ctx.advance_to(START + 86_400_001);
    ctx.client.end_auction();
    assert!(ctx.client.ended());
}

#[test]
fn test_refunds_survive_the_end_of_the_auction() {
    let ctx = setup_test_env();
    let early = ctx.bidder(50);
    let late = ctx.bidder(50);

    ctx.client.bid(&early, &10);
    ctx.client.bid(&late, &11);

    ctx.advance_to(START + 11);
    ctx.client.end_auction();
    assert_eq!(
        ctx.client.try_bid(&early, &20),
        Err(Ok(AuctionError::AuctionEnded))
    );

    assert_eq!(ctx.client.withdraw(&early), 10);
    assert_eq!(ctx.token.balance(&early), 50);
    assert_eq!(ctx.token.balance(&ctx.contract_id), 0);
}

#[test]
fn test_winner_has_nothing_to_withdraw() {
    let ctx = setup_test_env();
    let winner = ctx.bidder(5);

    ctx.client.bid(&winner, &5);
    assert_eq!(ctx.client.withdraw(&winner), 0);

    ctx.advance_to(START + 11);
    ctx.client.end_auction();
    assert_eq!(ctx.client.withdraw(&winner), 0);
    assert_eq!(ctx.token.balance(&ctx.beneficiary), 5);
}

#[test]
fn test_bidder_can_raise_own_bid() {
    let ctx = setup_test_env();
    let bidder = ctx.bidder(20);

    ctx.client.bid(&bidder, &4);
    ctx.client.bid(&bidder, &9);

    assert_eq!(ctx.client.highest_bid(), 9);
    assert_eq!(ctx.client.pending_returns(&bidder), 4);
    assert_eq!(ctx.token.balance(&bidder), 7);
}
