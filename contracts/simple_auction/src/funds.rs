use crate::AuctionError;
use soroban_sdk::{token, Address, Env};

/// Move `amount` of `token` between two addresses.
///
/// A refusal by the token contract comes back as `TransferFailed` instead of
/// aborting the whole invocation, so callers can restore their own
/// bookkeeping first.
pub fn transfer(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), AuctionError> {
    let client = token::Client::new(env, token);
    match client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(AuctionError::TransferFailed),
    }
}
