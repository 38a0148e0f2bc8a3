use soroban_sdk::{contractevent, Address};

/// Event emitted when the contract is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub authority: Address,
    pub payment_token: Address,
    pub grace_period: u64,
}

/// Event emitted when a new lot opens for bidding
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionStartedEventData {
    #[topic]
    pub lot: u64,
    pub nft: Address,
    pub token_id: u64,
    pub reserve_price: i128,
    pub end_time: u64,
}

/// Event emitted when a bid takes the lead
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEventData {
    #[topic]
    pub lot: u64,
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}

/// Event emitted when an outbid bidder gets their escrow back
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidRefundedEventData {
    #[topic]
    pub lot: u64,
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}

/// Event emitted when a refund to an outbid bidder could not be delivered
/// and is held for `reclaim`
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundPendingEventData {
    #[topic]
    pub lot: u64,
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}

/// Event emitted when the authority settles a lot
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionSettledEventData {
    #[topic]
    pub lot: u64,
    pub winner: Option<Address>,
    pub amount: i128,
}

/// Event emitted when the highest bidder reclaims escrow after the grace period
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawnEventData {
    #[topic]
    pub lot: u64,
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}
