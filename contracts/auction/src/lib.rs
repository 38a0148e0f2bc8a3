#![no_std]

mod admin;
mod custodian;
mod errors;
mod events;
mod storage;
mod types;

pub use custodian::{AssetCustodian, AssetCustodianClient};
pub use errors::Error;
pub use types::{Auction, AuctionConfig, AuctionPhase, AuctionStatus, Bid, DEFAULT_GRACE_PERIOD};

use soroban_sdk::{contract, contractimpl, log, token, Address, Env, Vec};

use crate::events::*;

/// Single-lot NFT auction with token escrow.
///
/// The authority lists one asset at a time. Bids are escrowed in the payment
/// token and an outbid leader is refunded immediately, or can `reclaim` the
/// refund later if it could not be delivered. After the deadline the
/// authority settles, moving the asset to the winner and the winning bid to
/// itself. If settlement does not happen within the grace period, the highest
/// bidder can take their funds back, voiding the lot.
#[contract]
pub struct NftAuction;

#[contractimpl]
impl NftAuction {
    /// Initialize the auction manager.
    ///
    /// # Arguments
    /// * `authority` - Address allowed to start and settle auctions
    /// * `payment_token` - Token contract bids are paid in
    /// * `grace_period` - Seconds after the deadline before the highest bidder
    ///   may withdraw, defaults to one day
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    /// * `Error::InvalidGracePeriod` - If a zero grace period is given
    pub fn initialize(
        e: &Env,
        authority: Address,
        payment_token: Address,
        grace_period: Option<u64>,
    ) -> Result<(), Error> {
        if storage::has_config(e) {
            return Err(Error::AlreadyInitialized);
        }
        authority.require_auth();

        let grace_period = grace_period.unwrap_or(DEFAULT_GRACE_PERIOD);
        if grace_period == 0 {
            return Err(Error::InvalidGracePeriod);
        }

        let config = AuctionConfig {
            authority: authority.clone(),
            payment_token: payment_token.clone(),
            grace_period,
        };
        storage::set_config(e, &config);
        storage::extend_instance_ttl(e);

        InitializedEventData {
            authority,
            payment_token,
            grace_period,
        }
        .publish(e);

        Ok(())
    }

    /// List `token_id` of the `nft` collection for `duration` seconds.
    ///
    /// The authority must own the asset at listing time. Approval for the
    /// contract to move it is only needed by settlement.
    ///
    /// Returns the new lot number.
    pub fn start_auction(
        e: &Env,
        caller: Address,
        nft: Address,
        token_id: u64,
        duration: u64,
        reserve_price: i128,
    ) -> Result<u64, Error> {
        let config = admin::require_authority(e, &caller)?;

        if duration == 0 {
            return Err(Error::InvalidDuration);
        }
        if reserve_price < 0 {
            return Err(Error::InvalidReservePrice);
        }

        let now = e.ledger().timestamp();
        let end_time = now.checked_add(duration).ok_or(Error::InvalidDuration)?;

        // A closed lot with nothing escrowed can be replaced without settling.
        if let Some(previous) = storage::get_auction(e) {
            if previous.status == AuctionStatus::Open
                && (now < previous.end_time || previous.highest_bidder.is_some())
            {
                return Err(Error::AuctionStillActive);
            }
        }

        let custodian = AssetCustodianClient::new(e, &nft);
        match custodian.try_owner_of(&token_id) {
            Ok(Ok(owner)) if owner == config.authority => {}
            _ => return Err(Error::NotAssetOwner),
        }

        let lot = storage::increment_lot_counter(e);
        let auction = Auction {
            lot,
            nft: nft.clone(),
            token_id,
            reserve_price,
            start_time: now,
            end_time,
            highest_bid: 0,
            highest_bidder: None,
            status: AuctionStatus::Open,
        };
        storage::save_auction(e, &auction);
        storage::clear_bid_history(e);
        storage::extend_instance_ttl(e);

        AuctionStartedEventData {
            lot,
            nft,
            token_id,
            reserve_price,
            end_time,
        }
        .publish(e);

        Ok(lot)
    }

    /// Bid `amount` of the payment token on the current lot.
    ///
    /// The bid must be strictly greater than both the current high bid and
    /// the reserve. The funds move into escrow in the same call and the
    /// previous leader is refunded.
    pub fn bid(e: &Env, bidder: Address, amount: i128) -> Result<(), Error> {
        bidder.require_auth();

        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;
        let mut auction = storage::get_auction(e).ok_or(Error::AuctionNotFound)?;

        let now = e.ledger().timestamp();
        if auction.status != AuctionStatus::Open || now >= auction.end_time {
            return Err(Error::AuctionEnded);
        }
        if amount <= auction.min_bid_threshold() {
            return Err(Error::BidTooLow);
        }

        let previous = auction
            .highest_bidder
            .take()
            .map(|leader| (leader, auction.highest_bid));

        auction.highest_bid = amount;
        auction.highest_bidder = Some(bidder.clone());
        storage::save_auction(e, &auction);

        if let Some((leader, _)) = &previous {
            storage::remove_escrowed_funds(e, leader);
        }
        storage::set_escrowed_funds(e, &bidder, amount);
        storage::add_bid_to_history(
            e,
            Bid {
                bidder: bidder.clone(),
                amount,
                timestamp: now,
            },
        );
        storage::extend_instance_ttl(e);

        let token_client = token::TokenClient::new(e, &config.payment_token);
        let contract_address = e.current_contract_address();
        token_client.transfer(&bidder, &contract_address, &amount);

        // A leader that cannot receive the refund must not block higher bids.
        if let Some((leader, refund)) = previous {
            let refunded = token_client.try_transfer(&contract_address, &leader, &refund);
            if matches!(refunded, Ok(Ok(()))) {
                BidRefundedEventData {
                    lot: auction.lot,
                    bidder: leader,
                    amount: refund,
                }
                .publish(e);
            } else {
                log!(e, "refund to outbid leader failed, holding {}", refund);
                storage::add_pending_refund(e, &leader, refund);
                RefundPendingEventData {
                    lot: auction.lot,
                    bidder: leader,
                    amount: refund,
                }
                .publish(e);
            }
        }

        BidPlacedEventData {
            lot: auction.lot,
            bidder,
            amount,
        }
        .publish(e);

        Ok(())
    }

    /// Settle the current lot once its deadline has passed.
    ///
    /// The asset moves before any funds do. If the custodian rejects the
    /// transfer nothing changes and the authority may re-approve and retry.
    pub fn end_auction(e: &Env, caller: Address) -> Result<(), Error> {
        let config = admin::require_authority(e, &caller)?;
        let mut auction = storage::get_auction(e).ok_or(Error::AuctionNotFound)?;

        if auction.status != AuctionStatus::Open {
            return Err(Error::AlreadySettled);
        }
        if e.ledger().timestamp() < auction.end_time {
            return Err(Error::AuctionNotYetEnded);
        }

        let contract_address = e.current_contract_address();

        if let Some(winner) = &auction.highest_bidder {
            let custodian = AssetCustodianClient::new(e, &auction.nft);
            let transferred = custodian.try_transfer_from(
                &contract_address,
                &config.authority,
                winner,
                &auction.token_id,
            );
            if !matches!(transferred, Ok(Ok(()))) {
                log!(e, "custodian rejected transfer of token {}", auction.token_id);
                return Err(Error::AssetTransferFailed);
            }
        }

        auction.status = AuctionStatus::Settled;
        storage::save_auction(e, &auction);
        if let Some(winner) = &auction.highest_bidder {
            storage::remove_escrowed_funds(e, winner);
        }
        storage::extend_instance_ttl(e);

        let proceeds = match auction.highest_bidder {
            Some(_) => auction.highest_bid,
            None => 0,
        };
        if proceeds > 0 {
            let token_client = token::TokenClient::new(e, &config.payment_token);
            token_client.transfer(&contract_address, &config.authority, &proceeds);
        }

        AuctionSettledEventData {
            lot: auction.lot,
            winner: auction.highest_bidder,
            amount: proceeds,
        }
        .publish(e);

        Ok(())
    }

    /// Return the escrowed high bid to its bidder when the authority has not
    /// settled within the grace period. Voids the lot.
    pub fn withdraw(e: &Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();

        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;
        let mut auction = storage::get_auction(e).ok_or(Error::AuctionNotFound)?;

        if auction.highest_bidder.as_ref() != Some(&caller) {
            return Err(Error::Unauthorized);
        }
        match auction.status {
            AuctionStatus::Settled => return Err(Error::AlreadySettled),
            AuctionStatus::Voided => return Err(Error::NothingToWithdraw),
            AuctionStatus::Open => {}
        }
        let allowed_at = auction.end_time.saturating_add(config.grace_period);
        if e.ledger().timestamp() < allowed_at {
            return Err(Error::WithdrawalNotYetAllowed);
        }
        let amount = storage::get_escrowed_funds(e, &caller);
        if amount <= 0 {
            return Err(Error::NothingToWithdraw);
        }

        auction.status = AuctionStatus::Voided;
        storage::save_auction(e, &auction);
        storage::remove_escrowed_funds(e, &caller);
        storage::extend_instance_ttl(e);

        let token_client = token::TokenClient::new(e, &config.payment_token);
        token_client.transfer(&e.current_contract_address(), &caller, &amount);

        FundsWithdrawnEventData {
            lot: auction.lot,
            bidder: caller,
            amount,
        }
        .publish(e);

        Ok(amount)
    }

    /// Pull a refund that could not be delivered when the caller was outbid.
    ///
    /// Available at any time and independent of the current lot.
    pub fn reclaim(e: &Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();

        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;
        let amount = storage::get_pending_refund(e, &caller);
        if amount <= 0 {
            return Err(Error::NothingToWithdraw);
        }

        storage::remove_pending_refund(e, &caller);
        storage::extend_instance_ttl(e);

        let token_client = token::TokenClient::new(e, &config.payment_token);
        token_client.transfer(&e.current_contract_address(), &caller, &amount);

        let lot = storage::get_auction(e).map(|auction| auction.lot).unwrap_or(0);
        BidRefundedEventData {
            lot,
            bidder: caller,
            amount,
        }
        .publish(e);

        Ok(amount)
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn get_config(e: &Env) -> Result<AuctionConfig, Error> {
        storage::get_config(e).ok_or(Error::NotInitialized)
    }

    pub fn get_auction(e: &Env) -> Result<Auction, Error> {
        storage::get_auction(e).ok_or(Error::AuctionNotFound)
    }

    pub fn get_phase(e: &Env) -> AuctionPhase {
        match storage::get_auction(e) {
            Some(auction) => auction.phase(e.ledger().timestamp()),
            None => AuctionPhase::Idle,
        }
    }

    pub fn get_highest_bid(e: &Env) -> Result<(Option<Address>, i128), Error> {
        let auction = storage::get_auction(e).ok_or(Error::AuctionNotFound)?;
        Ok((auction.highest_bidder, auction.highest_bid))
    }

    pub fn get_bid_history(e: &Env) -> Vec<Bid> {
        storage::get_bid_history(e)
    }

    pub fn escrow_of(e: &Env, bidder: Address) -> i128 {
        storage::get_escrowed_funds(e, &bidder)
    }

    pub fn pending_refund_of(e: &Env, bidder: Address) -> i128 {
        storage::get_pending_refund(e, &bidder)
    }

    /// Earliest timestamp at which the highest bidder may withdraw.
    pub fn withdrawal_allowed_at(e: &Env) -> Result<u64, Error> {
        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;
        let auction = storage::get_auction(e).ok_or(Error::AuctionNotFound)?;
        Ok(auction.end_time.saturating_add(config.grace_period))
    }
}

#[cfg(test)]
mod test;
