//! # Types
//!
//! Data structures shared by the Work Board entry points, storage and events.
//!
//! ## Terms / State split
//!
//! A [`Job`] is stored as two ledger entries:
//!
//! - [`JobTerms`]: written once by `add_job`, never mutated.
//! - [`JobState`]: rewritten by `add_proposal` and `complete_job`.
//!
//! Callers only ever see the reconstructed [`Job`].
//!
//! ## Status
//!
//! ```text
//! Open ──► Completed
//! ```
//!
//! `Completed` is terminal.

use soroban_sdk::{contracttype, Address, String};

/// Lifecycle status of a job.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum JobStatus {
    /// Accepting proposals.
    Open,
    /// A proposal was selected and the job reviewed.
    Completed,
}

/// Immutable job terms, written once when the job is posted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JobTerms {
    pub id: u64,
    pub creator: Address,
    pub payment: u128,
    pub description_hash: String,
}

/// Mutable job state.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JobState {
    pub status: JobStatus,
    pub worker: Option<Address>,
    pub proposal_count: u32,
}

impl JobState {
    pub fn open() -> Self {
        Self {
            status: JobStatus::Open,
            worker: None,
            proposal_count: 0,
        }
    }
}

/// A posted job as returned by `get_job_by_id`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Job {
    /// Sequential identifier, starting at 0.
    pub id: u64,
    /// Address that posted the job. Only it may complete the job.
    pub creator: Address,
    /// Offered payment, always non-zero.
    pub payment: u128,
    /// Content address (e.g. IPFS hash) of the job description.
    pub description_hash: String,
    pub status: JobStatus,
    /// Proposer of the selected proposal; `None` while the job is open.
    pub worker: Option<Address>,
    pub proposal_count: u32,
}

impl Job {
    pub fn from_parts(terms: JobTerms, state: JobState) -> Self {
        Self {
            id: terms.id,
            creator: terms.creator,
            payment: terms.payment,
            description_hash: terms.description_hash,
            status: state.status,
            worker: state.worker,
            proposal_count: state.proposal_count,
        }
    }
}

/// A bid to work on a job. Its index in the job's proposal list is its id.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub proposer: Address,
    pub description_hash: String,
}

/// Review left by a job's creator when completing the job.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Review {
    pub id: u64,
    pub job_id: u64,
    pub rating: u32,
    pub comment_hash: String,
}
