use soroban_sdk::{Env, IntoVal, Val};

/// Ledgers closed per day at a five second close time.
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Entries are bumped once their remaining TTL drops under this.
pub const TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;
pub const TTL_EXTEND_TO: u32 = 120 * DAY_IN_LEDGERS;

/// Keeps the contract instance (and its instance storage) alive.
pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Bumps a persistent entry that has just been written or read.
pub fn extend_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
