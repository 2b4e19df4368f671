use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

use crate::{
    ballot, candidate, config, election,
    errors::ElectionError,
    results, storage,
    types::{CandidateRecord, ElectionRecord, LedgerConfig, ResultView, VoteRecord},
};

#[contract]
pub struct ElectionLedgerContract;

#[contractimpl]
impl ElectionLedgerContract {
    // ── Configuration ────────────────────────────────────────────────────────

    /// Initialize the contract with an admin address and configuration.
    /// Can only be called once. Election operations work without it, using
    /// `LedgerConfig::default()`.
    pub fn initialize(env: Env, admin: Address, config: LedgerConfig) -> Result<(), ElectionError> {
        config::initialize(&env, admin, config)
    }

    /// Replace the configuration. Requires the admin's authorization.
    pub fn set_config(env: Env, config: LedgerConfig) -> Result<(), ElectionError> {
        config::set_config(&env, config)
    }

    pub fn get_config(env: Env) -> Result<LedgerConfig, ElectionError> {
        config::get_config(&env)
    }

    // ── Election Lifecycle ───────────────────────────────────────────────────

    /// Create an election, open and with zero votes.
    ///
    /// # Arguments
    /// * `election_id` – Caller-chosen unique key
    /// * `title`       – Display title
    /// * `description` – Free text
    /// * `start_time`  – Opaque; published, not enforced
    /// * `end_time`    – Opaque; published, not enforced
    /// * `creator_id`  – Opaque; stored, never verified
    pub fn create_election(
        env: Env,
        election_id: String,
        title: String,
        description: String,
        start_time: String,
        end_time: String,
        creator_id: String,
    ) -> Result<(), ElectionError> {
        election::create_election(
            &env,
            election_id,
            title,
            description,
            start_time,
            end_time,
            creator_id,
        )
    }

    pub fn get_election(env: Env, election_id: String) -> Result<ElectionRecord, ElectionError> {
        election::get_election(&env, &election_id)
    }

    // ── Candidate Registration ───────────────────────────────────────────────

    /// Attach a candidate to an existing election.
    pub fn add_candidate(
        env: Env,
        election_id: String,
        candidate_id: String,
        name: String,
        caller_id: String,
    ) -> Result<(), ElectionError> {
        candidate::add_candidate(&env, election_id, candidate_id, name, caller_id)
    }

    pub fn get_candidate(
        env: Env,
        election_id: String,
        candidate_id: String,
    ) -> Result<CandidateRecord, ElectionError> {
        candidate::get_candidate(&env, &election_id, &candidate_id)
    }

    /// Candidate ids of an election in registration order.
    pub fn get_roster(env: Env, election_id: String) -> Result<Vec<String>, ElectionError> {
        storage::get_roster(&env, &election_id)
    }

    // ── Vote Recording ───────────────────────────────────────────────────────

    /// Record one vote and bump the candidate and election counters.
    /// A voter may vote at most once per election.
    pub fn cast_vote(
        env: Env,
        election_id: String,
        candidate_id: String,
        voter_id: String,
        timestamp: String,
    ) -> Result<(), ElectionError> {
        ballot::cast_vote(&env, election_id, candidate_id, voter_id, timestamp)
    }

    pub fn has_voted(env: Env, election_id: String, voter_id: String) -> bool {
        ballot::has_voted(&env, &election_id, &voter_id)
    }

    pub fn get_vote(env: Env, election_id: String, voter_id: String) -> Option<VoteRecord> {
        ballot::get_vote(&env, &election_id, &voter_id)
    }

    // ── Result Projection ────────────────────────────────────────────────────

    /// Current standing of an election. Never fails; see `ResultView::message`.
    pub fn get_results(env: Env, election_id: String) -> ResultView {
        results::get_results(&env, election_id)
    }
}
