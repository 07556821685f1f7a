use crate::{AuctionConfig, AuctionError, AuctionState};
use common::ttl;
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    State,
    PendingReturn(Address),
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn config(env: &Env) -> Result<AuctionConfig, AuctionError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(AuctionError::NotInitialized)
}

pub fn set_config(env: &Env, config: &AuctionConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    ttl::extend_instance(env);
}

pub fn state(env: &Env) -> Result<AuctionState, AuctionError> {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(AuctionError::NotInitialized)
}

pub fn set_state(env: &Env, state: &AuctionState) {
    env.storage().instance().set(&DataKey::State, state);
    ttl::extend_instance(env);
}

pub fn pending_return(env: &Env, bidder: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::PendingReturn(bidder.clone()))
        .unwrap_or(0)
}

/// A zero balance removes the entry.
pub fn set_pending_return(env: &Env, bidder: &Address, amount: i128) {
    let key = DataKey::PendingReturn(bidder.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &amount);
    ttl::extend_persistent(env, &key);
}
