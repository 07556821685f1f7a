use crate::{BallotConfig, BallotError, Proposal, Voter};
use common::ttl;
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Proposal(u32),
    Voter(Address),
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn config(env: &Env) -> Result<BallotConfig, BallotError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(BallotError::NotInitialized)
}

pub fn set_config(env: &Env, config: &BallotConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    ttl::extend_instance(env);
}

pub fn proposal(env: &Env, index: u32) -> Result<Proposal, BallotError> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(index))
        .ok_or(BallotError::InvalidProposal)
}

pub fn set_proposal(env: &Env, index: u32, proposal: &Proposal) {
    let key = DataKey::Proposal(index);
    env.storage().persistent().set(&key, proposal);
    ttl::extend_persistent(env, &key);
}

pub fn voter(env: &Env, voter: &Address) -> Voter {
    env.storage()
        .persistent()
        .get(&DataKey::Voter(voter.clone()))
        .unwrap_or_default()
}

pub fn set_voter(env: &Env, voter: &Address, record: &Voter) {
    let key = DataKey::Voter(voter.clone());
    env.storage().persistent().set(&key, record);
    ttl::extend_persistent(env, &key);
    ttl::extend_instance(env);
}
