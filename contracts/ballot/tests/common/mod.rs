#![allow(dead_code)]

use ballot::{BallotContract, BallotContractClient};
use soroban_sdk::{testutils::Address as _, Address, BytesN, Env, Vec};

/// Proposal names used by the reference deployment.
pub const FIXTURE_NAMES: [&str; 5] = [
    "Michael Jackson's Thriller",
    "Loving Vincent",
    "Nobody",
    "Three Men and a Leg",
    "The Third Man",
];

pub struct TestContext {
    pub env: Env,
    pub client: BallotContractClient<'static>,
    pub chairperson: Address,
}

/// Encode a label the way the deployment does: raw bytes, zero-padded to 32.
pub fn proposal_name(env: &Env, label: &str) -> BytesN<32> {
    let mut buf = [0u8; 32];
    buf[..label.len()].copy_from_slice(label.as_bytes());
    BytesN::from_array(env, &buf)
}

pub fn proposal_names(env: &Env, labels: &[&str]) -> Vec<BytesN<32>> {
    let mut names = Vec::new(env);
    for label in labels {
        names.push_back(proposal_name(env, label));
    }
    names
}

pub fn setup_with_names(labels: &[&str]) -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(BallotContract, ());
    let client = BallotContractClient::new(&env, &contract_id);

    let chairperson = Address::generate(&env);
    client.initialize(&chairperson, &proposal_names(&env, labels));

    TestContext {
        env,
        client,
        chairperson,
    }
}

pub fn setup_test_env() -> TestContext {
    setup_with_names(&FIXTURE_NAMES)
}

/// Generate `count` addresses and give each of them the right to vote.
pub fn enfranchise(ctx: &TestContext, count: usize) -> std::vec::Vec<Address> {
    (0..count)
        .map(|_| {
            let voter = Address::generate(&ctx.env);
            ctx.client.give_right_to_vote(&ctx.chairperson, &voter);
            voter
        })
        .collect()
}
