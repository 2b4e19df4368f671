//! Error codes for the election ledger contract
//!
//! Codes are stable: clients match on the numeric value carried by the
//! failed invocation, so variants are only ever appended.

use soroban_sdk::contracterror;

/// Failure of an election ledger operation
///
/// Every variant is terminal for the invocation that returned it; the host
/// discards all writes staged by that invocation.
/// - 1-3: Lookup and uniqueness failures
/// - 4-8: Stored data that no longer matches the record schema
/// - 9-12: Configuration and strict-mode failures
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum ElectionError {
    /// No election record under the given id
    ElectionNotFound = 1,

    /// No candidate record for the (election, candidate) pair
    CandidateNotFound = 2,

    /// A vote witness already exists for the (election, voter) pair
    AlreadyVoted = 3,

    /// Stored election record does not match the election schema
    CorruptElectionRecord = 4,

    /// Stored candidate record does not match the candidate schema
    CorruptCandidateRecord = 5,

    /// A vote counter could not be decoded as a non-negative integer
    InvalidCounterEncoding = 6,

    /// A bookkeeping entry read back from the store could not be decoded
    StoreFailure = 7,

    /// Incrementing a vote counter would exceed `u32::MAX`
    CounterOverflow = 8,

    /// Election id already taken (strict overwrite policy only)
    ElectionAlreadyExists = 9,

    /// Candidate id already taken in this election (strict overwrite policy only)
    CandidateAlreadyExists = 10,

    /// Contract admin and configuration were already set
    AlreadyInitialized = 11,

    /// Contract admin has not been set
    NotInitialized = 12,
}
