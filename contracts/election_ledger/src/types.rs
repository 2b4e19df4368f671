use soroban_sdk::{contracttype, String, Vec};

/// Schema version written into every record
pub const RECORD_VERSION: u32 = 1;

/// Number of fields in an encoded `ElectionRecord`, `version` included
pub const ELECTION_FIELD_COUNT: u32 = 7;

/// Number of fields in an encoded `CandidateRecord`, `version` included
pub const CANDIDATE_FIELD_COUNT: u32 = 5;

/// Number of fields in an encoded `VoteRecord`, `version` included
pub const VOTE_FIELD_COUNT: u32 = 5;

/// An election, keyed by its caller-supplied id
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ElectionRecord {
    pub version: u32,
    pub election_id: String,
    pub title: String,
    pub description: String,
    /// Carried for reference only; never checked against callers
    pub creator_id: String,
    pub is_open: bool,
    /// Sum of `votes` over every candidate of this election
    pub total_votes: u32,
}

/// A candidate standing in one election
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CandidateRecord {
    pub version: u32,
    pub candidate_id: String,
    pub name: String,
    pub votes: u32,
    pub is_active: bool,
}

/// Immutable witness that a voter has voted in an election
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteRecord {
    pub version: u32,
    pub election_id: String,
    pub candidate_id: String,
    pub voter_id: String,
    /// Opaque, caller-supplied
    pub timestamp: String,
}

/// One line of a results projection
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CandidateResult {
    pub candidate_id: String,
    pub name: String,
    pub votes: u32,
}

/// Read-only summary of an election
///
/// `message` is set only on sentinel views, where `candidates` is empty and
/// `total_votes` is zero.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResultView {
    pub election_id: String,
    pub candidates: Vec<CandidateResult>,
    pub total_votes: u32,
    pub message: Option<String>,
}

/// What create operations do when the target record already exists
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OverwritePolicy {
    /// Replace the stored record, resetting its counter
    Overwrite,
    /// Fail with `ElectionAlreadyExists` / `CandidateAlreadyExists`
    Reject,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    pub overwrite_policy: OverwritePolicy,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig {
            overwrite_policy: OverwritePolicy::Overwrite,
        }
    }
}

/// Storage keys
#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Admin,
    Config,
    Election(String),
    // (election_id, candidate_id)
    Candidate(String, String),
    // (election_id, voter_id)
    Vote(String, String),
    // election_id -> candidate ids in registration order
    Roster(String),
}
