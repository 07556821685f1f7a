use soroban_sdk::{symbol_short, Address, Env};

/// Event published when the auction is opened.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionInitializedEvent {
    pub beneficiary: Address,
    pub auction_end_time: u64,
    pub timestamp: u64,
}

/// Event published whenever a bid takes the lead.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HighestBidIncreasedEvent {
    pub bidder: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Event published when an outbid bidder reclaims their funds.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub bidder: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Event published once, when the auction is closed. `winner` is empty if
/// nobody bid.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEndedEvent {
    pub winner: Option<Address>,
    pub amount: i128,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, beneficiary: Address, auction_end_time: u64) {
    let topics = (symbol_short!("INIT"), beneficiary.clone());
    let data = AuctionInitializedEvent {
        beneficiary,
        auction_end_time,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_highest_bid_increased(env: &Env, bidder: Address, amount: i128) {
    let topics = (symbol_short!("HBI_INC"), bidder.clone());
    let data = HighestBidIncreasedEvent {
        bidder,
        amount,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_withdrawn(env: &Env, bidder: Address, amount: i128) {
    let topics = (symbol_short!("WITHDRAW"), bidder.clone());
    let data = WithdrawnEvent {
        bidder,
        amount,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_auction_ended(env: &Env, winner: Option<Address>, amount: i128) {
    let topics = (symbol_short!("AUC_END"),);
    let data = AuctionEndedEvent {
        winner,
        amount,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
