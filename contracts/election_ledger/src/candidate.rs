use soroban_sdk::{symbol_short, Env, String};

use crate::codec;
use crate::errors::ElectionError;
use crate::storage;
use crate::types::{CandidateRecord, OverwritePolicy, RECORD_VERSION};

/// Register a candidate under an existing election.
///
/// `caller_id` is recorded in the emitted event only; it is not checked
/// against the election's `creator_id`. Re-registering an id under the
/// `Overwrite` policy resets its `votes` to zero but keeps its roster slot.
pub fn add_candidate(
    env: &Env,
    election_id: String,
    candidate_id: String,
    name: String,
    caller_id: String,
) -> Result<(), ElectionError> {
    if !storage::has_election(env, &election_id) {
        return Err(ElectionError::ElectionNotFound);
    }

    let config = storage::get_config(env)?;
    if config.overwrite_policy == OverwritePolicy::Reject
        && storage::has_candidate(env, &election_id, &candidate_id)
    {
        return Err(ElectionError::CandidateAlreadyExists);
    }

    let mut roster = storage::get_roster(env, &election_id)?;

    let record = CandidateRecord {
        version: RECORD_VERSION,
        candidate_id: candidate_id.clone(),
        name,
        votes: 0,
        is_active: true,
    };
    storage::save_candidate(env, &election_id, &candidate_id, &record);

    if !roster.contains(&candidate_id) {
        roster.push_back(candidate_id.clone());
        storage::save_roster(env, &election_id, &roster);
    }

    env.events().publish(
        (symbol_short!("candidate"), symbol_short!("added")),
        (election_id, candidate_id, caller_id),
    );

    Ok(())
}

pub fn get_candidate(
    env: &Env,
    election_id: &String,
    candidate_id: &String,
) -> Result<CandidateRecord, ElectionError> {
    let raw = storage::load_candidate(env, election_id, candidate_id)
        .ok_or(ElectionError::CandidateNotFound)?;
    codec::decode_candidate(env, &raw)
}
