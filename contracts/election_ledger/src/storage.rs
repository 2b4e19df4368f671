use soroban_sdk::{Address, Env, String, Val, Vec};

use crate::codec;
use crate::errors::ElectionError;
use crate::types::{CandidateRecord, DataKey, ElectionRecord, LedgerConfig, VoteRecord};

// ── Ledger TTL constants ─────────────────────────────────────────────────────
// At ~5s per ledger: 30 days ≈ 518,400 ledgers, 180 days ≈ 3,110,400 ledgers.
// Records are bumped back to 180 days whenever they drop under 30 days left.
const RECORD_TTL_THRESHOLD: u32 = 518_400;
const RECORD_TTL_LEDGERS: u32 = 3_110_400;
const INSTANCE_TTL_THRESHOLD: u32 = 518_400;
const INSTANCE_TTL_LEDGERS: u32 = 3_110_400;

fn put<V: soroban_sdk::IntoVal<Env, Val>>(env: &Env, key: &DataKey, value: &V) {
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, RECORD_TTL_THRESHOLD, RECORD_TTL_LEDGERS);
}

fn get_raw(env: &Env, key: &DataKey) -> Option<Val> {
    env.storage().persistent().get::<DataKey, Val>(key)
}

// ── Admin & Config ───────────────────────────────────────────────────────────

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_LEDGERS);
}

/// Stored configuration, or the default when none was ever set.
pub fn get_config(env: &Env) -> Result<LedgerConfig, ElectionError> {
    match env.storage().instance().get::<DataKey, Val>(&DataKey::Config) {
        Some(raw) => codec::decode_config(env, &raw).ok_or(ElectionError::StoreFailure),
        None => Ok(LedgerConfig::default()),
    }
}

pub fn set_config(env: &Env, config: &LedgerConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_LEDGERS);
}

// ── Elections ────────────────────────────────────────────────────────────────

pub fn has_election(env: &Env, election_id: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Election(election_id.clone()))
}

/// Undecoded election record; callers validate it through `codec`.
pub fn load_election(env: &Env, election_id: &String) -> Option<Val> {
    get_raw(env, &DataKey::Election(election_id.clone()))
}

pub fn save_election(env: &Env, election_id: &String, record: &ElectionRecord) {
    put(env, &DataKey::Election(election_id.clone()), record);
}

// ── Candidates ───────────────────────────────────────────────────────────────

pub fn has_candidate(env: &Env, election_id: &String, candidate_id: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Candidate(election_id.clone(), candidate_id.clone()))
}

pub fn load_candidate(env: &Env, election_id: &String, candidate_id: &String) -> Option<Val> {
    get_raw(
        env,
        &DataKey::Candidate(election_id.clone(), candidate_id.clone()),
    )
}

pub fn save_candidate(
    env: &Env,
    election_id: &String,
    candidate_id: &String,
    record: &CandidateRecord,
) {
    put(
        env,
        &DataKey::Candidate(election_id.clone(), candidate_id.clone()),
        record,
    );
}

// ── Roster ───────────────────────────────────────────────────────────────────

/// Candidate ids of an election in registration order; empty if none.
pub fn get_roster(env: &Env, election_id: &String) -> Result<Vec<String>, ElectionError> {
    match get_raw(env, &DataKey::Roster(election_id.clone())) {
        Some(raw) => codec::decode_roster(env, &raw).ok_or(ElectionError::StoreFailure),
        None => Ok(Vec::new(env)),
    }
}

pub fn save_roster(env: &Env, election_id: &String, roster: &Vec<String>) {
    put(env, &DataKey::Roster(election_id.clone()), roster);
}

// ── Votes ────────────────────────────────────────────────────────────────────

pub fn has_vote(env: &Env, election_id: &String, voter_id: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Vote(election_id.clone(), voter_id.clone()))
}

pub fn load_vote(env: &Env, election_id: &String, voter_id: &String) -> Option<Val> {
    get_raw(env, &DataKey::Vote(election_id.clone(), voter_id.clone()))
}

pub fn save_vote(env: &Env, record: &VoteRecord) {
    put(
        env,
        &DataKey::Vote(record.election_id.clone(), record.voter_id.clone()),
        record,
    );
}
