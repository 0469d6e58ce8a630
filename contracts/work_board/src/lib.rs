//! # Work Board Contract
//!
//! A small on-ledger job marketplace. Participants post paid jobs, other
//! participants submit proposals, and the job creator completes the job by
//! selecting a proposal and leaving a review.
//!
//! | Phase      | Entry Point(s)                                        |
//! |------------|-------------------------------------------------------|
//! | Posting    | [`WorkBoard::add_job`]                                |
//! | Bidding    | [`WorkBoard::add_proposal`]                           |
//! | Completion | [`WorkBoard::complete_job`]                           |
//! | Queries    | `get_amount_of_jobs`, `get_job_by_id`, `get_proposals_by_id`, `get_amount_of_reviews`, `get_review_by_id` |
//!
//! ## Architecture
//!
//! Storage access is delegated to [`storage`] and event emission to
//! [`events`]. Every entry point validates all of its inputs before the first
//! storage write, so a call that returns an [`Error`] leaves the ledger
//! untouched.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String, Vec};

pub mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;

use storage::{
    get_and_increment_job_id, get_and_increment_review_id, job_count, load_job,
    load_job_state, load_job_terms, load_proposals, load_review, review_count, save_job,
    save_job_state, save_proposals, save_review, MAX_PROPOSALS_PER_JOB, MIN_HASH_LENGTH,
};
pub use types::{Job, JobStatus, Proposal, Review};
use types::{JobState, JobTerms};

/// Error codes returned by the contract.
///
/// A missing review reports `NotFound` like a missing job; 106 is unused.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotFound         = 100,
    InvalidValue     = 101,
    InvalidHash      = 102,
    NoProposals      = 103,
    ListFull         = 104,
    Forbidden        = 105,
    AlreadyCompleted = 107,
}

/// Content addresses are only checked for length.
fn require_valid_hash(hash: &String) -> Result<(), Error> {
    if hash.len() < MIN_HASH_LENGTH {
        return Err(Error::InvalidHash);
    }
    Ok(())
}

#[contract]
pub struct WorkBoard;

#[contractimpl]
impl WorkBoard {
    // ─────────────────────────────────────────────────────────
    // Jobs
    // ─────────────────────────────────────────────────────────

    /// Post a new job paying `payment`, described by `description_hash`.
    ///
    /// Returns the new job id.
    pub fn add_job(
        env: Env,
        creator: Address,
        payment: u128,
        description_hash: String,
    ) -> Result<u64, Error> {
        creator.require_auth();

        require_valid_hash(&description_hash)?;
        if payment == 0 {
            return Err(Error::InvalidValue);
        }

        let id = get_and_increment_job_id(&env);
        let terms = JobTerms {
            id,
            creator: creator.clone(),
            payment,
            description_hash,
        };
        save_job(&env, &terms, &JobState::open());

        events::emit_job_added(&env, id, creator, payment);
        Ok(id)
    }

    /// Number of jobs ever posted.
    pub fn get_amount_of_jobs(env: Env) -> u64 {
        job_count(&env)
    }

    /// The job posted under `job_id`.
    pub fn get_job_by_id(env: Env, job_id: u64) -> Result<Job, Error> {
        load_job(&env, job_id)
    }

    // ─────────────────────────────────────────────────────────
    // Proposals
    // ─────────────────────────────────────────────────────────

    /// Submit a proposal to work on `job_id`.
    ///
    /// The job's creator may not propose on their own job, a completed job
    /// takes no more proposals, and a job holds at most
    /// `MAX_PROPOSALS_PER_JOB` proposals. Returns the proposal index.
    pub fn add_proposal(
        env: Env,
        proposer: Address,
        job_id: u64,
        description_hash: String,
    ) -> Result<u32, Error> {
        proposer.require_auth();

        let terms = load_job_terms(&env, job_id)?;
        let mut state = load_job_state(&env, job_id)?;

        require_valid_hash(&description_hash)?;
        if proposer == terms.creator {
            return Err(Error::Forbidden);
        }
        if state.status == JobStatus::Completed {
            return Err(Error::AlreadyCompleted);
        }

        let mut proposals = load_proposals(&env, job_id);
        if proposals.len() >= MAX_PROPOSALS_PER_JOB {
            return Err(Error::ListFull);
        }

        let index = proposals.len();
        proposals.push_back(Proposal {
            proposer: proposer.clone(),
            description_hash,
        });
        state.proposal_count = proposals.len();

        save_proposals(&env, job_id, &proposals);
        save_job_state(&env, job_id, &state);

        events::emit_proposal_added(&env, job_id, index, proposer);
        Ok(index)
    }

    /// All proposals for `job_id`, in submission order.
    pub fn get_proposals_by_id(env: Env, job_id: u64) -> Result<Vec<Proposal>, Error> {
        load_job_terms(&env, job_id)?;
        let proposals = load_proposals(&env, job_id);
        if proposals.is_empty() {
            return Err(Error::NoProposals);
        }
        Ok(proposals)
    }

    // ─────────────────────────────────────────────────────────
    // Completion & reviews
    // ─────────────────────────────────────────────────────────

    /// Complete `job_id` by selecting the proposal at `proposal_index` and
    /// reviewing its work.
    ///
    /// Only the job's creator may complete it, and only once. The selected
    /// proposer becomes the job's worker. Returns the new review id.
    pub fn complete_job(
        env: Env,
        caller: Address,
        job_id: u64,
        proposal_index: u32,
        rating: u32,
        comment_hash: String,
    ) -> Result<u64, Error> {
        caller.require_auth();

        let terms = load_job_terms(&env, job_id)?;
        let mut state = load_job_state(&env, job_id)?;
        let selected = load_proposals(&env, job_id)
            .get(proposal_index)
            .ok_or(Error::NotFound)?;

        if caller != terms.creator {
            return Err(Error::Forbidden);
        }
        if state.status == JobStatus::Completed {
            return Err(Error::AlreadyCompleted);
        }
        require_valid_hash(&comment_hash)?;

        let review_id = get_and_increment_review_id(&env);
        save_review(
            &env,
            &Review {
                id: review_id,
                job_id,
                rating,
                comment_hash,
            },
        );

        state.status = JobStatus::Completed;
        state.worker = Some(selected.proposer.clone());
        save_job_state(&env, job_id, &state);

        events::emit_job_completed(&env, job_id, review_id, selected.proposer, rating);
        Ok(review_id)
    }

    /// Number of reviews ever left.
    pub fn get_amount_of_reviews(env: Env) -> u64 {
        review_count(&env)
    }

    /// The review stored under `review_id`.
    pub fn get_review_by_id(env: Env, review_id: u64) -> Result<Review, Error> {
        load_review(&env, review_id)
    }
}
