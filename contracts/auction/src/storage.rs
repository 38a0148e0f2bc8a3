use crate::types::{
    Auction, AuctionConfig, Bid, DataKey, INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD,
    PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};
use soroban_sdk::{Address, Env, Vec};

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// CONFIG
// ============================================================================

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Option<AuctionConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &AuctionConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn increment_lot_counter(env: &Env) -> u64 {
    let counter: u64 = env
        .storage()
        .instance()
        .get(&DataKey::LotCounter)
        .unwrap_or(0)
        + 1;
    env.storage().instance().set(&DataKey::LotCounter, &counter);
    counter
}

// ============================================================================
// CURRENT LOT
// ============================================================================

pub fn get_auction(env: &Env) -> Option<Auction> {
    let key = DataKey::Auction;
    let auction = env.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        extend_persistent_ttl(env, &key);
    }
    auction
}

pub fn save_auction(env: &Env, auction: &Auction) {
    let key = DataKey::Auction;
    env.storage().persistent().set(&key, auction);
    extend_persistent_ttl(env, &key);
}

// ============================================================================
// BID HISTORY
// ============================================================================

pub fn get_bid_history(env: &Env) -> Vec<Bid> {
    let key = DataKey::BidHistory;
    let history = env
        .storage()
        .persistent()
        .get::<_, Vec<Bid>>(&key)
        .unwrap_or(Vec::new(env));
    if !history.is_empty() {
        extend_persistent_ttl(env, &key);
    }
    history
}

pub fn add_bid_to_history(env: &Env, bid: Bid) {
    let key = DataKey::BidHistory;
    let mut history = get_bid_history(env);
    history.push_back(bid);
    env.storage().persistent().set(&key, &history);
    extend_persistent_ttl(env, &key);
}

pub fn clear_bid_history(env: &Env) {
    env.storage().persistent().remove(&DataKey::BidHistory);
}

// ============================================================================
// ESCROW
// ============================================================================

pub fn get_escrowed_funds(env: &Env, bidder: &Address) -> i128 {
    let key = DataKey::EscrowedFunds(bidder.clone());
    let amount = env.storage().persistent().get::<_, i128>(&key);
    if amount.is_some() {
        extend_persistent_ttl(env, &key);
    }
    amount.unwrap_or(0)
}

pub fn set_escrowed_funds(env: &Env, bidder: &Address, amount: i128) {
    let key = DataKey::EscrowedFunds(bidder.clone());
    env.storage().persistent().set(&key, &amount);
    extend_persistent_ttl(env, &key);
}

pub fn remove_escrowed_funds(env: &Env, bidder: &Address) {
    let key = DataKey::EscrowedFunds(bidder.clone());
    env.storage().persistent().remove(&key);
}

// ============================================================================
// UNDELIVERED REFUNDS
// ============================================================================

pub fn get_pending_refund(env: &Env, bidder: &Address) -> i128 {
    let key = DataKey::PendingRefund(bidder.clone());
    let amount = env.storage().persistent().get::<_, i128>(&key);
    if amount.is_some() {
        extend_persistent_ttl(env, &key);
    }
    amount.unwrap_or(0)
}

pub fn add_pending_refund(env: &Env, bidder: &Address, amount: i128) {
    let key = DataKey::PendingRefund(bidder.clone());
    let total = get_pending_refund(env, bidder) + amount;
    env.storage().persistent().set(&key, &total);
    extend_persistent_ttl(env, &key);
}

pub fn remove_pending_refund(env: &Env, bidder: &Address) {
    let key = DataKey::PendingRefund(bidder.clone());
    env.storage().persistent().remove(&key);
}
