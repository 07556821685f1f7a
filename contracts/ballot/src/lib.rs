#![no_std]
mod delegation;
mod events;
mod storage;

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, log, Address, BytesN, Env, Vec,
};

pub use delegation::MAX_DELEGATION_DEPTH;
pub use events::{BallotInitializedEvent, DelegatedEvent, RightGrantedEvent, VotedEvent};

/// A named option on the ballot. The index in the ballot never changes.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    /// Fixed-width identifier, right-padded with zero bytes.
    pub name: BytesN<32>,
    pub vote_count: u32,
}

/// Per-address voting record.
///
/// Addresses that were never touched read back as the default record,
/// which carries no right to vote.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Voter {
    /// Votes this address casts; 0 means no right to vote.
    pub weight: u32,
    /// Set once the voter has either voted or delegated.
    pub voted: bool,
    /// The voter at the end of the chain this address delegated to.
    pub delegate: Option<Address>,
    /// Proposal index chosen by a direct vote.
    pub vote: Option<u32>,
}

/// Fixed at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BallotConfig {
    pub chairperson: Address,
    pub proposal_count: u32,
    pub created_at: u64,
}

#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum BallotError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    AlreadyVoted = 4,
    AlreadyHasRight = 5,
    NoRight = 6,
    InvalidProposal = 7,
    SelfDelegation = 8,
    DelegationTooDeep = 9,
    NoProposals = 10,
}

#[contract]
pub struct BallotContract;

#[contractimpl]
impl BallotContract {
    /// Open the ballot. The chairperson is the deploying caller and is the
    /// first voter, with weight 1.
    pub fn initialize(
        env: Env,
        chairperson: Address,
        proposal_names: Vec<BytesN<32>>,
    ) -> Result<(), BallotError> {
        if storage::has_config(&env) {
            return Err(BallotError::AlreadyInitialized);
        }
        chairperson.require_auth();

        if proposal_names.is_empty() {
            return Err(BallotError::NoProposals);
        }

        for (index, name) in (0u32..).zip(proposal_names.iter()) {
            storage::set_proposal(
                &env,
                index,
                &Proposal {
                    name,
                    vote_count: 0,
                },
            );
        }

        storage::set_voter(
            &env,
            &chairperson,
            &Voter {
                weight: 1,
                ..Voter::default()
            },
        );

        let config = BallotConfig {
            chairperson: chairperson.clone(),
            proposal_count: proposal_names.len(),
            created_at: env.ledger().timestamp(),
        };
        storage::set_config(&env, &config);

        log!(&env, "ballot opened", chairperson, config.proposal_count);
        events::publish_initialized(&env, chairperson, config.proposal_count);

        Ok(())
    }

    pub fn get_config(env: Env) -> Result<BallotConfig, BallotError> {
        storage::config(&env)
    }

    pub fn chairperson(env: Env) -> Result<Address, BallotError> {
        Ok(storage::config(&env)?.chairperson)
    }

    pub fn proposal_count(env: Env) -> Result<u32, BallotError> {
        Ok(storage::config(&env)?.proposal_count)
    }

    pub fn get_proposal(env: Env, index: u32) -> Result<Proposal, BallotError> {
        storage::config(&env)?;
        storage::proposal(&env, index)
    }

    /// All proposals in ballot order.
    pub fn get_proposals(env: Env) -> Result<Vec<Proposal>, BallotError> {
        let config = storage::config(&env)?;
        let mut proposals = Vec::new(&env);
        for index in 0..config.proposal_count {
            proposals.push_back(storage::proposal(&env, index)?);
        }
        Ok(proposals)
    }

    pub fn get_voter(env: Env, voter: Address) -> Result<Voter, BallotError> {
        storage::config(&env)?;
        Ok(storage::voter(&env, &voter))
    }

    /// Give `voter` the right to vote. Chairperson only.
    pub fn give_right_to_vote(
        env: Env,
        caller: Address,
        voter: Address,
    ) -> Result<(), BallotError> {
        caller.require_auth();

        let config = storage::config(&env)?;
        if caller != config.chairperson {
            return Err(BallotError::Unauthorized);
        }

        let mut record = storage::voter(&env, &voter);
        if record.voted {
            return Err(BallotError::AlreadyVoted);
        }
        if record.weight != 0 {
            return Err(BallotError::AlreadyHasRight);
        }

        record.weight = 1;
        storage::set_voter(&env, &voter, &record);

        log!(&env, "right to vote granted", voter);
        events::publish_right_granted(&env, voter);

        Ok(())
    }

    /// Hand the caller's weight to `to`.
    ///
    /// The chain starting at `to` is followed to its end. If that voter has
    /// already voted, the weight lands directly on their proposal; otherwise
    /// it is added to their weight for when they do vote.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn delegate(env: Env, caller: Address, to: Address) -> Result<(), BallotError> {
        caller.require_auth();
        storage::config(&env)?;

        let sender = storage::voter(&env, &caller);
        if sender.voted {
            return Err(BallotError::AlreadyVoted);
        }

        let target = delegation::resolve_final_delegate(&env, &caller, to)?;
        let mut delegate = storage::voter(&env, &target);
        let landed_on = match delegate.vote {
            Some(index) => {
                let mut proposal = storage::proposal(&env, index)?;
                proposal.vote_count += sender.weight;
                storage::set_proposal(&env, index, &proposal);
                Some(index)
            }
            None => {
                delegate.weight += sender.weight;
                storage::set_voter(&env, &target, &delegate);
                None
            }
        };

        storage::set_voter(
            &env,
            &caller,
            &Voter {
                voted: true,
                delegate: Some(target.clone()),
                ..sender.clone()
            },
        );

        log!(&env, "vote delegated", caller, target, sender.weight);
        events::publish_delegated(&env, caller, target, sender.weight, landed_on);

        Ok(())
    }

    /// Cast the caller's full weight for `proposal`.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn vote(env: Env, caller: Address, proposal: u32) -> Result<(), BallotError> {
        caller.require_auth();
        let config = storage::config(&env)?;

        let mut sender = storage::voter(&env, &caller);
        if sender.voted {
            return Err(BallotError::AlreadyVoted);
        }
        if sender.weight == 0 {
            return Err(BallotError::NoRight);
        }
        if proposal >= config.proposal_count {
            return Err(BallotError::InvalidProposal);
        }

        let mut chosen = storage::proposal(&env, proposal)?;
        chosen.vote_count += sender.weight;
        storage::set_proposal(&env, proposal, &chosen);

        sender.voted = true;
        sender.vote = Some(proposal);
        storage::set_voter(&env, &caller, &sender);

        log!(&env, "vote cast", caller, proposal, sender.weight);
        events::publish_voted(&env, caller, proposal, sender.weight);

        Ok(())
    }

    /// Index of the proposal with the most votes. Ties go to the lowest index.
    pub fn winning_proposal(env: Env) -> Result<u32, BallotError> {
        let config = storage::config(&env)?;

        let mut winning = 0u32;
        let mut winning_count = 0u32;
        for index in 0..config.proposal_count {
            let proposal = storage::proposal(&env, index)?;
            if proposal.vote_count > winning_count {
                winning_count = proposal.vote_count;
                winning = index;
            }
        }
        Ok(winning)
    }

    pub fn winner_name(env: Env) -> Result<BytesN<32>, BallotError> {
        let winning = Self::winning_proposal(env.clone())?;
        Ok(storage::proposal(&env, winning)?.name)
    }

    pub fn version() -> u32 {
        1
    }
}
