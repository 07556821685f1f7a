#![no_std]

//! Host-level helpers shared by the ledger contracts.
//!
//! Nothing in here knows about ballots or auctions; it only wraps storage
//! concerns of the Soroban host that every contract in the workspace has.

pub mod reentrancy_guard;
pub mod ttl;

pub use reentrancy_guard::{ReentrancyError, ReentrancyGuard};
