use soroban_sdk::{contracttype, Address};

/// Lifecycle of a lot as stored on-chain.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AuctionStatus {
    /// Accepting bids until `end_time`, then awaiting settlement
    Open = 0,
    /// Asset delivered (or closed with no sale) and proceeds paid out
    Settled = 1,
    /// Highest bidder reclaimed escrow after the grace period
    Voided = 2,
}

/// Phase of the manager as observed at the current ledger time.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AuctionPhase {
    Idle = 0,
    Open = 1,
    Closed = 2,
    Settled = 3,
    Voided = 4,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionConfig {
    /// Only address allowed to list and settle lots
    pub authority: Address,
    /// Token bids are paid in
    pub payment_token: Address,
    /// Seconds after `end_time` before the highest bidder may withdraw
    pub grace_period: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub lot: u64,
    /// Custodian contract holding the listed asset
    pub nft: Address,
    pub token_id: u64,
    pub reserve_price: i128,
    pub start_time: u64,
    pub end_time: u64,
    pub highest_bid: i128,
    pub highest_bidder: Option<Address>,
    pub status: AuctionStatus,
}

impl Auction {
    pub fn phase(&self, now: u64) -> AuctionPhase {
        match self.status {
            AuctionStatus::Settled => AuctionPhase::Settled,
            AuctionStatus::Voided => AuctionPhase::Voided,
            AuctionStatus::Open if now < self.end_time => AuctionPhase::Open,
            AuctionStatus::Open => AuctionPhase::Closed,
        }
    }

    /// Amount a new bid must strictly exceed.
    pub fn min_bid_threshold(&self) -> i128 {
        self.highest_bid.max(self.reserve_price)
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bid {
    pub bidder: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    LotCounter,
    Auction,
    BidHistory,
    EscrowedFunds(Address),
    PendingRefund(Address),
}

/// Default withdrawal grace period (one day)
pub const DEFAULT_GRACE_PERIOD: u64 = 86_400;

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending instance storage
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
