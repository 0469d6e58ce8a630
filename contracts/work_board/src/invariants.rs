#![allow(dead_code)]

extern crate std;

use soroban_sdk::Vec;

use crate::storage::MAX_PROPOSALS_PER_JOB;
use crate::types::{Job, JobStatus, Proposal, Review};

/// INV-1: Job payment must always be positive.
pub fn assert_payment_positive(job: &Job) {
    assert!(
        job.payment > 0,
        "INV-1 violated: job {} has zero payment",
        job.id
    );
}

/// INV-2: A job has a worker exactly when it is completed.
pub fn assert_worker_matches_status(job: &Job) {
    match job.status {
        JobStatus::Open => assert!(
            job.worker.is_none(),
            "INV-2 violated: open job {} has a worker",
            job.id
        ),
        JobStatus::Completed => assert!(
            job.worker.is_some(),
            "INV-2 violated: completed job {} has no worker",
            job.id
        ),
    }
}

/// INV-3: Job ids are sequential starting from 0.
pub fn assert_sequential_job_ids(jobs: &[Job]) {
    for (i, job) in jobs.iter().enumerate() {
        assert_eq!(
            job.id, i as u64,
            "INV-3 violated: expected job id {}, got {}",
            i, job.id
        );
    }
}

/// INV-4: Review ids are sequential starting from 0.
pub fn assert_sequential_review_ids(reviews: &[Review]) {
    for (i, review) in reviews.iter().enumerate() {
        assert_eq!(
            review.id, i as u64,
            "INV-4 violated: expected review id {}, got {}",
            i, review.id
        );
    }
}

/// INV-5: Status only moves forward: Open -> Completed.
pub fn assert_valid_status_transition(from: &JobStatus, to: &JobStatus) {
    let valid = matches!(
        (from, to),
        (JobStatus::Open, JobStatus::Open)
            | (JobStatus::Open, JobStatus::Completed)
            | (JobStatus::Completed, JobStatus::Completed)
    );

    assert!(
        valid,
        "INV-5 violated: invalid status transition from {:?} to {:?}",
        from, to
    );
}

/// INV-6: Terms written at posting never change.
pub fn assert_job_immutable_fields(original: &Job, current: &Job) {
    assert_eq!(original.id, current.id, "INV-6 violated: job id changed");
    assert_eq!(
        original.creator, current.creator,
        "INV-6 violated: job creator changed"
    );
    assert_eq!(
        original.payment, current.payment,
        "INV-6 violated: job payment changed"
    );
    assert_eq!(
        original.description_hash, current.description_hash,
        "INV-6 violated: job description_hash changed"
    );
}

/// INV-7: `proposal_count` mirrors the stored list, which never exceeds the
/// limit and never contains the creator.
pub fn assert_proposals_consistent(job: &Job, proposals: &Vec<Proposal>) {
    assert_eq!(
        job.proposal_count,
        proposals.len(),
        "INV-7 violated: job {} proposal_count {} != {} stored",
        job.id,
        job.proposal_count,
        proposals.len()
    );
    assert!(
        proposals.len() <= MAX_PROPOSALS_PER_JOB,
        "INV-7 violated: job {} holds {} proposals",
        job.id,
        proposals.len()
    );
    for proposal in proposals.iter() {
        assert_ne!(
            proposal.proposer, job.creator,
            "INV-7 violated: creator proposed on own job {}",
            job.id
        );
    }
}

/// INV-8: A review references a completed job.
pub fn assert_review_references_completed_job(review: &Review, job: &Job) {
    assert_eq!(
        review.job_id, job.id,
        "INV-8 violated: review {} checked against wrong job",
        review.id
    );
    assert_eq!(
        job.status,
        JobStatus::Completed,
        "INV-8 violated: review {} references open job {}",
        review.id,
        job.id
    );
}

/// Run all stateless job invariants.
pub fn assert_all_job_invariants(job: &Job) {
    assert_payment_positive(job);
    assert_worker_matches_status(job);
}
