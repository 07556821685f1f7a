#![allow(dead_code)]

use simple_auction::{SimpleAuctionContract, SimpleAuctionContractClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env,
};

/// Ledger time the auctions in these tests are opened at.
pub const START: u64 = 1_700_000_000;

pub struct TestContext {
    pub env: Env,
    pub client: SimpleAuctionContractClient<'static>,
    pub contract_id: Address,
    pub token: token::Client<'static>,
    pub minter: token::StellarAssetClient<'static>,
    pub beneficiary: Address,
}

impl TestContext {
    /// A fresh address holding `balance` of the auction token.
    pub fn bidder(&self, balance: i128) -> Address {
        let bidder = Address::generate(&self.env);
        self.minter.mint(&bidder, &balance);
        bidder
    }

    pub fn advance_to(&self, timestamp: u64) {
        self.env.ledger().set_timestamp(timestamp);
    }
}

pub fn setup_auction(bidding_time: u64) -> TestContext {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START);

    let issuer = Address::generate(&env);
    let asset = env.register_stellar_asset_contract_v2(issuer);
    let token = token::Client::new(&env, &asset.address());
    let minter = token::StellarAssetClient::new(&env, &asset.address());

    let contract_id = env.register(SimpleAuctionContract, ());
    let client = SimpleAuctionContractClient::new(&env, &contract_id);

    let beneficiary = Address::generate(&env);
    client.initialize(&beneficiary, &asset.address(), &bidding_time);

    TestContext {
        env,
        client,
        contract_id,
        token,
        minter,
        beneficiary,
    }
}

/// The ten second auction the reference test suite runs against.
pub fn setup_test_env() -> TestContext {
    setup_auction(10)
}
