//! # Events
//!
//! Every successful mutation publishes one event. Topics are
//! `(symbol, job_id)`; data is one of the structs below.
//!
//! | Topic       | Data            |
//! |-------------|-----------------|
//! | `job_added` | [`JobAdded`]      |
//! | `proposed`  | [`ProposalAdded`] |
//! | `completed` | [`JobCompleted`]  |

use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JobAdded {
    pub job_id: u64,
    pub creator: Address,
    pub payment: u128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalAdded {
    pub job_id: u64,
    pub proposal_index: u32,
    pub proposer: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JobCompleted {
    pub job_id: u64,
    pub review_id: u64,
    pub worker: Address,
    pub rating: u32,
}

pub fn emit_job_added(env: &Env, job_id: u64, creator: Address, payment: u128) {
    env.events().publish(
        (symbol_short!("job_added"), job_id),
        JobAdded {
            job_id,
            creator,
            payment,
        },
    );
}

pub fn emit_proposal_added(env: &Env, job_id: u64, proposal_index: u32, proposer: Address) {
    env.events().publish(
        (symbol_short!("proposed"), job_id),
        ProposalAdded {
            job_id,
            proposal_index,
            proposer,
        },
    );
}

pub fn emit_job_completed(env: &Env, job_id: u64, review_id: u64, worker: Address, rating: u32) {
    env.events().publish(
        (symbol_short!("completed"), job_id),
        JobCompleted {
            job_id,
            review_id,
            worker,
            rating,
        },
    );
}
