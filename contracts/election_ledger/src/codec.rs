//! Schema validation for stored records
//!
//! Records are written as `#[contracttype]` structs, which the host encodes
//! as a map from field-name symbols to values. Reads check that shape before
//! trusting it: field count and field names, record version, then the vote
//! counter, then the full struct. Each step maps onto a distinct
//! `ElectionError`. Names are checked before any struct conversion: the host
//! traps, rather than erroring, when unpacking a map with foreign keys.

use soroban_sdk::{Env, Map, String, Symbol, TryFromVal, Val, Vec};

use crate::errors::ElectionError;
use crate::types::{
    CandidateRecord, ElectionRecord, LedgerConfig, VoteRecord, CANDIDATE_FIELD_COUNT,
    ELECTION_FIELD_COUNT, RECORD_VERSION, VOTE_FIELD_COUNT,
};

const ELECTION_FIELDS: [&str; ELECTION_FIELD_COUNT as usize] = [
    "version",
    "election_id",
    "title",
    "description",
    "creator_id",
    "is_open",
    "total_votes",
];

const CANDIDATE_FIELDS: [&str; CANDIDATE_FIELD_COUNT as usize] =
    ["version", "candidate_id", "name", "votes", "is_active"];

const VOTE_FIELDS: [&str; VOTE_FIELD_COUNT as usize] =
    ["version", "election_id", "candidate_id", "voter_id", "timestamp"];

/// Field map holding exactly the schema's field names at the current version.
fn fields_of(env: &Env, raw: &Val, names: &[&str]) -> Option<Map<Symbol, Val>> {
    let fields = Map::<Symbol, Val>::try_from_val(env, raw).ok()?;
    if fields.len() as usize != names.len() {
        return None;
    }
    for name in names.iter() {
        if !fields.contains_key(Symbol::new(env, name)) {
            return None;
        }
    }
    let version = fields.get(Symbol::new(env, "version"))?;
    if u32::try_from_val(env, &version).ok()? != RECORD_VERSION {
        return None;
    }
    Some(fields)
}

fn counter(env: &Env, fields: &Map<Symbol, Val>, name: &str) -> Result<u32, ElectionError> {
    let raw = fields
        .get(Symbol::new(env, name))
        .ok_or(ElectionError::InvalidCounterEncoding)?;
    u32::try_from_val(env, &raw).map_err(|_| ElectionError::InvalidCounterEncoding)
}

pub fn decode_election(env: &Env, raw: &Val) -> Result<ElectionRecord, ElectionError> {
    let fields =
        fields_of(env, raw, &ELECTION_FIELDS).ok_or(ElectionError::CorruptElectionRecord)?;
    counter(env, &fields, "total_votes")?;
    ElectionRecord::try_from_val(env, raw).map_err(|_| ElectionError::CorruptElectionRecord)
}

pub fn decode_candidate(env: &Env, raw: &Val) -> Result<CandidateRecord, ElectionError> {
    let fields =
        fields_of(env, raw, &CANDIDATE_FIELDS).ok_or(ElectionError::CorruptCandidateRecord)?;
    counter(env, &fields, "votes")?;
    CandidateRecord::try_from_val(env, raw).map_err(|_| ElectionError::CorruptCandidateRecord)
}

pub fn decode_vote(env: &Env, raw: &Val) -> Option<VoteRecord> {
    fields_of(env, raw, &VOTE_FIELDS)?;
    VoteRecord::try_from_val(env, raw).ok()
}

pub fn decode_config(env: &Env, raw: &Val) -> Option<LedgerConfig> {
    let fields = Map::<Symbol, Val>::try_from_val(env, raw).ok()?;
    if fields.len() != 1 || !fields.contains_key(Symbol::new(env, "overwrite_policy")) {
        return None;
    }
    LedgerConfig::try_from_val(env, raw).ok()
}

/// Roster with every element checked, so later iteration cannot trap.
pub fn decode_roster(env: &Env, raw: &Val) -> Option<Vec<String>> {
    let roster = Vec::<String>::try_from_val(env, raw).ok()?;
    for candidate_id in roster.try_iter() {
        candidate_id.ok()?;
    }
    Some(roster)
}

pub fn increment(counter: u32) -> Result<u32, ElectionError> {
    counter.checked_add(1).ok_or(ElectionError::CounterOverflow)
}
