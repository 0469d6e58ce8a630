//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by the Work Board.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key           | Type  | Description                         |
//! |---------------|-------|-------------------------------------|
//! | `JobCount`    | `u64` | Number of jobs; next job id         |
//! | `ReviewCount` | `u64` | Number of reviews; next review id   |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                 | Type            | Description                    |
//! |---------------------|-----------------|--------------------------------|
//! | `JobTerms(id)`      | `JobTerms`      | Immutable job terms            |
//! | `JobState(id)`      | `JobState`      | Mutable job state              |
//! | `Proposals(job_id)` | `Vec<Proposal>` | Proposals in submission order  |
//! | `Review(id)`        | `Review`        | Immutable review               |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! The `load_*` helpers return [`Error::NotFound`] for missing entries so the
//! entry points can propagate with `?`.

use soroban_sdk::{contracttype, Env, Vec};

use crate::types::{Job, JobState, JobTerms, Proposal, Review};
use crate::Error;

// ── Limits ───────────────────────────────────────────────────────────

/// Maximum number of proposals a single job accepts.
pub const MAX_PROPOSALS_PER_JOB: u32 = 20;

/// Minimum length of a content-address hash (a CIDv0 IPFS hash is 46 chars).
pub const MIN_HASH_LENGTH: u32 = 46;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Job counter (Instance).
    JobCount,
    /// Review counter (Instance).
    ReviewCount,
    /// Immutable job terms keyed by job id (Persistent).
    JobTerms(u64),
    /// Mutable job state keyed by job id (Persistent).
    JobState(u64),
    /// Proposal list keyed by job id (Persistent).
    Proposals(u64),
    /// Review keyed by review id (Persistent).
    Review(u64),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn read_counter(env: &Env, key: &DataKey) -> u64 {
    env.storage().instance().get(key).unwrap_or(0)
}

/// Reads, increments and stores a counter.
/// Returns the pre-increment value, which is the id to assign.
fn get_and_increment(env: &Env, key: &DataKey) -> u64 {
    bump_instance(env);
    let current = read_counter(env, key);
    env.storage().instance().set(key, &(current + 1));
    current
}

pub fn job_count(env: &Env) -> u64 {
    read_counter(env, &DataKey::JobCount)
}

pub fn review_count(env: &Env) -> u64 {
    read_counter(env, &DataKey::ReviewCount)
}

pub fn get_and_increment_job_id(env: &Env) -> u64 {
    get_and_increment(env, &DataKey::JobCount)
}

pub fn get_and_increment_review_id(env: &Env) -> u64 {
    get_and_increment(env, &DataKey::ReviewCount)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Save the terms and initial state of a newly posted job.
pub fn save_job(env: &Env, terms: &JobTerms, state: &JobState) {
    let terms_key = DataKey::JobTerms(terms.id);
    env.storage().persistent().set(&terms_key, terms);
    bump_persistent(env, &terms_key);
    save_job_state(env, terms.id, state);
}

/// Load the full `Job` by combining terms and state.
pub fn load_job(env: &Env, id: u64) -> Result<Job, Error> {
    let terms = load_job_terms(env, id)?;
    let state = load_job_state(env, id)?;
    Ok(Job::from_parts(terms, state))
}

pub fn load_job_terms(env: &Env, id: u64) -> Result<JobTerms, Error> {
    let key = DataKey::JobTerms(id);
    let terms: JobTerms = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::NotFound)?;
    bump_persistent(env, &key);
    Ok(terms)
}

pub fn load_job_state(env: &Env, id: u64) -> Result<JobState, Error> {
    let key = DataKey::JobState(id);
    let state: JobState = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::NotFound)?;
    bump_persistent(env, &key);
    Ok(state)
}

pub fn save_job_state(env: &Env, id: u64, state: &JobState) {
    let key = DataKey::JobState(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

/// Load the proposals of a job. A job without proposals has no entry yet,
/// which reads as an empty list.
pub fn load_proposals(env: &Env, job_id: u64) -> Vec<Proposal> {
    let key = DataKey::Proposals(job_id);
    match env.storage().persistent().get(&key) {
        Some(proposals) => {
            bump_persistent(env, &key);
            proposals
        }
        None => Vec::new(env),
    }
}

pub fn save_proposals(env: &Env, job_id: u64, proposals: &Vec<Proposal>) {
    let key = DataKey::Proposals(job_id);
    env.storage().persistent().set(&key, proposals);
    bump_persistent(env, &key);
}

pub fn save_review(env: &Env, review: &Review) {
    let key = DataKey::Review(review.id);
    env.storage().persistent().set(&key, review);
    bump_persistent(env, &key);
}

pub fn load_review(env: &Env, id: u64) -> Result<Review, Error> {
    let key = DataKey::Review(id);
    let review: Review = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::NotFound)?;
    bump_persistent(env, &key);
    Ok(review)
}
