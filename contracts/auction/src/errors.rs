use soroban_sdk::contracterror;

/// Error codes for the NFT auction contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has not been initialized
    NotInitialized = 1,
    /// Contract has already been initialized
    AlreadyInitialized = 2,
    /// Caller is not allowed to perform this operation
    Unauthorized = 3,
    /// Authority does not own the asset it tried to list
    NotAssetOwner = 4,
    /// No lot has been started yet
    AuctionNotFound = 5,
    /// Bidding window is closed
    AuctionEnded = 6,
    /// Bid does not exceed the current high bid and the reserve
    BidTooLow = 7,
    /// Settlement attempted before the deadline
    AuctionNotYetEnded = 8,
    /// Grace period after the deadline has not elapsed
    WithdrawalNotYetAllowed = 9,
    /// Custodian rejected the asset transfer
    AssetTransferFailed = 10,
    /// Lot is already settled or voided
    AlreadySettled = 11,
    /// No escrowed funds to return
    NothingToWithdraw = 12,
    /// Current lot still has bidding or escrow in progress
    AuctionStillActive = 13,
    /// Duration is zero or the deadline overflows
    InvalidDuration = 14,
    /// Reserve price is negative
    InvalidReservePrice = 15,
    /// Grace period of zero seconds
    InvalidGracePeriod = 16,
}
