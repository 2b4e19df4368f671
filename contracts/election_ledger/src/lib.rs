#![no_std]
//! # Election Ledger Contract
//!
//! Deterministic state transitions for elections, candidates and votes, kept
//! in the contract's persistent storage. Each contract call is one ledger
//! transaction: a call that returns an error leaves no writes behind.
//!
//! ## Operations
//!
//! - `create_election` / `get_election` - election lifecycle
//! - `add_candidate` / `get_candidate` / `get_roster` - candidate registration
//! - `cast_vote` / `has_voted` / `get_vote` - vote recording, one vote per voter per election
//! - `get_results` - read-only projection, never fails
//! - `initialize` / `set_config` / `get_config` - overwrite policy for create operations
//!
//! Caller and creator ids are opaque strings; no operation checks them.

mod ballot;
mod candidate;
mod codec;
mod config;
mod contract;
mod election;
mod errors;
mod results;
mod storage;
mod types;

pub use contract::{ElectionLedgerContract, ElectionLedgerContractClient};
pub use errors::ElectionError;
pub use types::{
    CandidateRecord, CandidateResult, DataKey, ElectionRecord, LedgerConfig, OverwritePolicy,
    ResultView, VoteRecord, CANDIDATE_FIELD_COUNT, ELECTION_FIELD_COUNT, RECORD_VERSION,
    VOTE_FIELD_COUNT,
};
