use soroban_sdk::{symbol_short, Env, String};

use crate::codec;
use crate::errors::ElectionError;
use crate::storage;
use crate::types::{CandidateRecord, ElectionRecord, VoteRecord, RECORD_VERSION};

/// The three writes of one accepted vote.
///
/// Built entirely from reads, so a rejected vote never stages anything.
struct VoteTransition {
    election_id: String,
    candidate_id: String,
    election: ElectionRecord,
    candidate: CandidateRecord,
    vote: VoteRecord,
}

impl VoteTransition {
    /// Validation runs in a fixed order; the first failure wins.
    fn plan(
        env: &Env,
        election_id: String,
        candidate_id: String,
        voter_id: String,
        timestamp: String,
    ) -> Result<Self, ElectionError> {
        let raw_election =
            storage::load_election(env, &election_id).ok_or(ElectionError::ElectionNotFound)?;

        if storage::has_vote(env, &election_id, &voter_id) {
            return Err(ElectionError::AlreadyVoted);
        }

        let raw_candidate = storage::load_candidate(env, &election_id, &candidate_id)
            .ok_or(ElectionError::CandidateNotFound)?;

        let mut candidate = codec::decode_candidate(env, &raw_candidate)?;
        candidate.votes = codec::increment(candidate.votes)?;

        let mut election = codec::decode_election(env, &raw_election)?;
        election.total_votes = codec::increment(election.total_votes)?;

        let vote = VoteRecord {
            version: RECORD_VERSION,
            election_id: election_id.clone(),
            candidate_id: candidate_id.clone(),
            voter_id,
            timestamp,
        };

        Ok(VoteTransition {
            election_id,
            candidate_id,
            election,
            candidate,
            vote,
        })
    }

    fn commit(self, env: &Env) {
        storage::save_candidate(env, &self.election_id, &self.candidate_id, &self.candidate);
        storage::save_election(env, &self.election_id, &self.election);
        storage::save_vote(env, &self.vote);

        env.events().publish(
            (symbol_short!("vote"), symbol_short!("cast")),
            (self.election_id, self.candidate_id, self.election.total_votes),
        );
    }
}

pub fn cast_vote(
    env: &Env,
    election_id: String,
    candidate_id: String,
    voter_id: String,
    timestamp: String,
) -> Result<(), ElectionError> {
    VoteTransition::plan(env, election_id, candidate_id, voter_id, timestamp)?.commit(env);
    Ok(())
}

pub fn has_voted(env: &Env, election_id: &String, voter_id: &String) -> bool {
    storage::has_vote(env, election_id, voter_id)
}

pub fn get_vote(env: &Env, election_id: &String, voter_id: &String) -> Option<VoteRecord> {
    let raw = storage::load_vote(env, election_id, voter_id)?;
    codec::decode_vote(env, &raw)
}
