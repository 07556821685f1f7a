use crate::{storage, BallotError};
use soroban_sdk::{Address, Env};

/// Longest chain, in hops past the named delegate, that `delegate` will walk.
pub const MAX_DELEGATION_DEPTH: u32 = 32;

/// Follow the delegation chain from `to` and return the first voter on it
/// that has not delegated further.
///
/// Fails with `SelfDelegation` if the chain leads back to `delegator`, and
/// with `DelegationTooDeep` past `MAX_DELEGATION_DEPTH` hops.
pub fn resolve_final_delegate(
    env: &Env,
    delegator: &Address,
    to: Address,
) -> Result<Address, BallotError> {
    if to == *delegator {
        return Err(BallotError::SelfDelegation);
    }

    let mut current = to;
    let mut hops = 0u32;
    while let Some(next) = storage::voter(env, &current).delegate {
        if next == *delegator {
            return Err(BallotError::SelfDelegation);
        }
        hops = hops.saturating_add(1);
        if hops > MAX_DELEGATION_DEPTH {
            return Err(BallotError::DelegationTooDeep);
        }
        current = next;
    }
    Ok(current)
}
