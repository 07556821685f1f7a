#![no_std]
mod events;
mod funds;
mod storage;

use common::ReentrancyGuard;
use soroban_sdk::{contract, contracterror, contractimpl, contracttype, log, Address, Env};

pub use events::{
    AuctionEndedEvent, AuctionInitializedEvent, HighestBidIncreasedEvent, WithdrawnEvent,
};

/// Auction parameters, fixed at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionConfig {
    /// Receives the winning bid when the auction is ended.
    pub beneficiary: Address,
    /// Token that bids are paid in.
    pub token: Address,
    /// Ledger timestamp (seconds) after which no bids are accepted.
    pub auction_end_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionState {
    pub highest_bidder: Option<Address>,
    pub highest_bid: i128,
    pub ended: bool,
}

#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum AuctionError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    AuctionEnded = 3,
    BidTooLow = 4,
    TooEarly = 5,
    AlreadyEnded = 6,
    TransferFailed = 7,
}

#[contract]
pub struct SimpleAuctionContract;

#[contractimpl]
impl SimpleAuctionContract {
    /// Open an auction that accepts bids for `bidding_time` seconds from now.
    ///
    /// The beneficiary signs the opening, so nobody else can claim a freshly
    /// deployed instance for themselves.
    pub fn initialize(
        env: Env,
        beneficiary: Address,
        token: Address,
        bidding_time: u64,
    ) -> Result<(), AuctionError> {
        if storage::has_config(&env) {
            return Err(AuctionError::AlreadyInitialized);
        }
        beneficiary.require_auth();

        let auction_end_time = env.ledger().timestamp().saturating_add(bidding_time);
        let config = AuctionConfig {
            beneficiary: beneficiary.clone(),
            token,
            auction_end_time,
        };
        storage::set_config(&env, &config);
        storage::set_state(
            &env,
            &AuctionState {
                highest_bidder: None,
                highest_bid: 0,
                ended: false,
            },
        );

        log!(&env, "auction opened", beneficiary, auction_end_time);
        events::publish_initialized(&env, beneficiary, auction_end_time);

        Ok(())
    }

    pub fn get_config(env: Env) -> Result<AuctionConfig, AuctionError> {
        storage::config(&env)
    }

    pub fn get_state(env: Env) -> Result<AuctionState, AuctionError> {
        storage::state(&env)
    }

    pub fn beneficiary(env: Env) -> Result<Address, AuctionError> {
        Ok(storage::config(&env)?.beneficiary)
    }

    pub fn token(env: Env) -> Result<Address, AuctionError> {
        Ok(storage::config(&env)?.token)
    }

    pub fn auction_end_time(env: Env) -> Result<u64, AuctionError> {
        Ok(storage::config(&env)?.auction_end_time)
    }

    pub fn highest_bidder(env: Env) -> Result<Option<Address>, AuctionError> {
        Ok(storage::state(&env)?.highest_bidder)
    }

    pub fn highest_bid(env: Env) -> Result<i128, AuctionError> {
        Ok(storage::state(&env)?.highest_bid)
    }

    pub fn ended(env: Env) -> Result<bool, AuctionError> {
        Ok(storage::state(&env)?.ended)
    }

    /// Amount `bidder` can reclaim through `withdraw`.
    pub fn pending_returns(env: Env, bidder: Address) -> Result<i128, AuctionError> {
        storage::config(&env)?;
        Ok(storage::pending_return(&env, &bidder))
    }

    /// Seconds of bidding left; 0 once the end time has passed.
    pub fn time_left(env: Env) -> Result<u64, AuctionError> {
        let config = storage::config(&env)?;
        Ok(config
            .auction_end_time
            .saturating_sub(env.ledger().timestamp()))
    }

    /// Place a bid of `amount` tokens, paid into the contract.
    ///
    /// The bid must beat the current highest bid. The bid it displaces is
    /// kept by the contract and credited to its bidder for withdrawal.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn bid(env: Env, bidder: Address, amount: i128) -> Result<(), AuctionError> {
        bidder.require_auth();

        let config = storage::config(&env)?;
        let mut state = storage::state(&env)?;

        if env.ledger().timestamp() > config.auction_end_time {
            return Err(AuctionError::AuctionEnded);
        }
        if amount <= state.highest_bid {
            return Err(AuctionError::BidTooLow);
        }

        funds::transfer(
            &env,
            &config.token,
            &bidder,
            &env.current_contract_address(),
            amount,
        )?;

        if let Some(previous) = state.highest_bidder.take() {
            let owed = storage::pending_return(&env, &previous) + state.highest_bid;
            storage::set_pending_return(&env, &previous, owed);
        }
        state.highest_bidder = Some(bidder.clone());
        state.highest_bid = amount;
        storage::set_state(&env, &state);

        log!(&env, "highest bid increased", bidder, amount);
        events::publish_highest_bid_increased(&env, bidder, amount);

        Ok(())
    }

    /// Pay out everything owed to `caller` for bids that were outbid.
    ///
    /// Returns the amount paid. Nothing owed is not an error and returns 0.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, AuctionError> {
        caller.require_auth();

        let config = storage::config(&env)?;
        let _guard = ReentrancyGuard::enter(&env);

        let amount = storage::pending_return(&env, &caller);
        if amount == 0 {
            return Ok(0);
        }

        // Cleared before the transfer; put back if the token refuses it.
        storage::set_pending_return(&env, &caller, 0);
        let paid = funds::transfer(
            &env,
            &config.token,
            &env.current_contract_address(),
            &caller,
            amount,
        );
        if let Err(err) = paid {
            storage::set_pending_return(&env, &caller, amount);
            log!(&env, "withdrawal refused by token", caller, amount);
            return Err(err);
        }

        log!(&env, "pending return withdrawn", caller, amount);
        events::publish_withdrawn(&env, caller, amount);

        Ok(amount)
    }

    /// Close the auction and pay the highest bid to the beneficiary.
    ///
    /// Callable by anyone once the end time has passed, exactly once.
    pub fn end_auction(env: Env) -> Result<(), AuctionError> {
        let config = storage::config(&env)?;
        let mut state = storage::state(&env)?;

        if env.ledger().timestamp() <= config.auction_end_time {
            return Err(AuctionError::TooEarly);
        }
        if state.ended {
            return Err(AuctionError::AlreadyEnded);
        }

        let _guard = ReentrancyGuard::enter(&env);

        state.ended = true;
        storage::set_state(&env, &state);
        events::publish_auction_ended(&env, state.highest_bidder.clone(), state.highest_bid);

        if state.highest_bid > 0 {
            funds::transfer(
                &env,
                &config.token,
                &env.current_contract_address(),
                &config.beneficiary,
                state.highest_bid,
            )?;
        }

        log!(&env, "auction ended", config.beneficiary, state.highest_bid);

        Ok(())
    }

    pub fn version() -> u32 {
        1
    }
}
