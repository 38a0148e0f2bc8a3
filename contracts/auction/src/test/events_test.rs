use soroban_sdk::testutils::Events as _;
use soroban_sdk::Event as _;
use crate::events::{AuctionSettledEventData, BidRefundedEventData, FundsWithdrawnEventData};
use crate::test::{advance_ledger, setup_test, BID, DURATION, GRACE};

#[test]
fn test_outbid_publishes_refund_event() {
    let t = setup_test();
    let lot = t.start_default();
    t.client.bid(&t.bidder, &BID);
    t.client.bid(&t.rival, &(BID * 2));

    let expected = BidRefundedEventData {
        lot,
        bidder: t.bidder.clone(),
        amount: BID,
    }
    .to_xdr(&t.env, &t.client.address);
    assert!(t.env.events().all().events().contains(&expected));
}

#[test]
fn test_settlement_without_bids_publishes_no_winner() {
    let t = setup_test();
    let lot = t.start_default();
    advance_ledger(&t.env, DURATION);
    t.client.end_auction(&t.authority);

    let expected = AuctionSettledEventData {
        lot,
        winner: None,
        amount: 0,
    }
    .to_xdr(&t.env, &t.client.address);
    assert!(t.env.events().all().events().contains(&expected));
}

#[test]
fn test_withdraw_publishes_event() {
    let t = setup_test();
    let lot = t.start_default();
    t.client.bid(&t.bidder, &BID);
    advance_ledger(&t.env, GRACE + DURATION);
    t.client.withdraw(&t.bidder);

    let expected = FundsWithdrawnEventData {
        lot,
        bidder: t.bidder.clone(),
        amount: BID,
    }
    .to_xdr(&t.env, &t.client.address);
    assert!(t.env.events().all().events().contains(&expected));
}
