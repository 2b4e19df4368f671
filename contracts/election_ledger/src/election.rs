use soroban_sdk::{symbol_short, Env, String};

use crate::codec;
use crate::errors::ElectionError;
use crate::storage;
use crate::types::{ElectionRecord, OverwritePolicy, RECORD_VERSION};

/// Write a fresh election record: open, zero votes.
///
/// Under the default `Overwrite` policy an existing record with the same id is
/// replaced, discarding its accumulated `total_votes`. `start_time` and
/// `end_time` are accepted and published but never gate voting.
pub fn create_election(
    env: &Env,
    election_id: String,
    title: String,
    description: String,
    start_time: String,
    end_time: String,
    creator_id: String,
) -> Result<(), ElectionError> {
    let config = storage::get_config(env)?;
    if config.overwrite_policy == OverwritePolicy::Reject
        && storage::has_election(env, &election_id)
    {
        return Err(ElectionError::ElectionAlreadyExists);
    }

    let record = ElectionRecord {
        version: RECORD_VERSION,
        election_id: election_id.clone(),
        title,
        description,
        creator_id: creator_id.clone(),
        is_open: true,
        total_votes: 0,
    };
    storage::save_election(env, &election_id, &record);

    env.events().publish(
        (symbol_short!("election"), symbol_short!("created")),
        (election_id, creator_id, start_time, end_time),
    );

    Ok(())
}

pub fn get_election(env: &Env, election_id: &String) -> Result<ElectionRecord, ElectionError> {
    let raw = storage::load_election(env, election_id).ok_or(ElectionError::ElectionNotFound)?;
    codec::decode_election(env, &raw)
}
