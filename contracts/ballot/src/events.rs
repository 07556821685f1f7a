use soroban_sdk::{symbol_short, Address, Env};

/// Event published when the ballot is opened.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BallotInitializedEvent {
    pub chairperson: Address,
    pub proposal_count: u32,
    pub timestamp: u64,
}

/// Event published when the chairperson grants a right to vote.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RightGrantedEvent {
    pub voter: Address,
    pub timestamp: u64,
}

/// Event published when a voter hands their weight to another voter.
///
/// `proposal` is set when the delegate had already voted and the weight was
/// counted straight away.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DelegatedEvent {
    pub delegator: Address,
    pub delegate: Address,
    pub weight: u32,
    pub proposal: Option<u32>,
    pub timestamp: u64,
}

/// Event published when a vote is cast.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VotedEvent {
    pub voter: Address,
    pub proposal: u32,
    pub weight: u32,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, chairperson: Address, proposal_count: u32) {
    let topics = (symbol_short!("INIT"),);
    let data = BallotInitializedEvent {
        chairperson,
        proposal_count,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_right_granted(env: &Env, voter: Address) {
    let topics = (symbol_short!("RIGHT"), voter.clone());
    let data = RightGrantedEvent {
        voter,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_delegated(
    env: &Env,
    delegator: Address,
    delegate: Address,
    weight: u32,
    proposal: Option<u32>,
) {
    let topics = (
        symbol_short!("DELEGATE"),
        delegator.clone(),
        delegate.clone(),
    );
    let data = DelegatedEvent {
        delegator,
        delegate,
        weight,
        proposal,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_voted(env: &Env, voter: Address, proposal: u32, weight: u32) {
    let topics = (symbol_short!("VOTE"), voter.clone());
    let data = VotedEvent {
        voter,
        proposal,
        weight,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
