use soroban_sdk::{Env, String, Vec};

use crate::codec;
use crate::storage;
use crate::types::{CandidateResult, ResultView};

const ELECTION_NOT_FOUND: &str = "Election not found";
const INVALID_ELECTION_DATA: &str = "Invalid election data";
const INVALID_ROSTER: &str = "Invalid candidate roster";

fn sentinel(env: &Env, election_id: String, message: &str) -> ResultView {
    ResultView {
        election_id,
        candidates: Vec::new(env),
        total_votes: 0,
        message: Some(String::from_str(env, message)),
    }
}

/// Project the current standing of an election.
///
/// Never fails: a missing or undecodable election, or an undecodable roster,
/// yields a sentinel view. Roster entries whose candidate record is missing
/// or corrupt are left out. `total_votes` is the election's own counter.
pub fn get_results(env: &Env, election_id: String) -> ResultView {
    let raw = match storage::load_election(env, &election_id) {
        Some(raw) => raw,
        None => return sentinel(env, election_id, ELECTION_NOT_FOUND),
    };
    let election = match codec::decode_election(env, &raw) {
        Ok(election) => election,
        Err(_) => return sentinel(env, election_id, INVALID_ELECTION_DATA),
    };
    let roster = match storage::get_roster(env, &election_id) {
        Ok(roster) => roster,
        Err(_) => return sentinel(env, election_id, INVALID_ROSTER),
    };

    let mut candidates = Vec::new(env);
    for candidate_id in roster.iter() {
        let Some(raw) = storage::load_candidate(env, &election_id, &candidate_id) else {
            continue;
        };
        let Ok(candidate) = codec::decode_candidate(env, &raw) else {
            continue;
        };
        candidates.push_back(CandidateResult {
            candidate_id: candidate.candidate_id,
            name: candidate.name,
            votes: candidate.votes,
        });
    }

    ResultView {
        election_id,
        candidates,
        total_votes: election.total_votes,
        message: None,
    }
}
