pub mod events_test;

use crate::{NftAuction, NftAuctionClient};
use nft::{TestNft, TestNftClient};
use soroban_sdk::{
    testutils::{Address as _, IssuerFlags, Ledger},
    token, Address, Env,
};

pub const DURATION: u64 = 600;
pub const GRACE: u64 = 86_400;
pub const RESERVE: i128 = 10_000_000;
pub const BID: i128 = 20_000_000;
pub const INITIAL_BALANCE: i128 = 1_000_000_000;

pub struct TestSetup {
    pub env: Env,
    pub client: NftAuctionClient<'static>,
    pub nft: TestNftClient<'static>,
    pub token: token::TokenClient<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
    pub authority: Address,
    pub bidder: Address,
    pub rival: Address,
}

pub fn setup_test() -> TestSetup {
    setup_with_grace(None)
}

pub fn setup_with_grace(grace_period: Option<u64>) -> TestSetup {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(NftAuction, ());
    let client = NftAuctionClient::new(&env, &contract_id);

    let nft_id = env.register(TestNft, ());
    let nft = TestNftClient::new(&env, &nft_id);

    let authority = Address::generate(&env);
    let bidder = Address::generate(&env);
    let rival = Address::generate(&env);

    let token_issuer = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_issuer);
    token_contract.issuer().set_flag(IssuerFlags::RevocableFlag);
    let token = token::TokenClient::new(&env, &token_contract.address());
    let token_admin = token::StellarAssetClient::new(&env, &token_contract.address());

    token_admin.mint(&bidder, &INITIAL_BALANCE);
    token_admin.mint(&rival, &INITIAL_BALANCE);

    nft.mint(&authority);

    client.initialize(&authority, &token_contract.address(), &grace_period);

    TestSetup {
        env,
        client,
        nft,
        token,
        token_admin,
        authority,
        bidder,
        rival,
    }
}

impl TestSetup {
    /// Lists token #1 with the default duration and reserve.
    pub fn start_default(&self) -> u64 {
        self.client
            .start_auction(&self.authority, &self.nft.address, &1, &DURATION, &RESERVE)
    }

    pub fn approve_manager(&self, token_id: u64) {
        self.nft
            .approve(&self.authority, &self.client.address, &token_id);
    }
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp += seconds;
    });
}
