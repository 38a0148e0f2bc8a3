use soroban_sdk::{contractclient, Address, Env};

/// Interface the auction expects from the NFT contract holding a listed asset.
///
/// `transfer_from` must reject the move unless `from` is `spender` or has
/// approved `spender` for `token_id`.
#[contractclient(name = "AssetCustodianClient")]
pub trait AssetCustodian {
    fn owner_of(env: Env, token_id: u64) -> Address;

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u64);
}
