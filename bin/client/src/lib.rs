#![doc = include_str!("../README.md")]
#![warn(missing_debug_implementations, missing_docs, unreachable_pub, rustdoc::all)]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

extern crate alloc;

pub mod errors;

mod tasks;
pub use tasks::{DerivationRequest, DerivationResult, TaskExecutor};

mod interop;
pub use interop::{
    derive_optimistic_block, parse_agreed_state, run, state_transition, validate_claim,
    DerivedBlock,
};

pub mod replay;
pub use replay::{RecordedDerivation, ReplayTaskExecutor};

pub mod fixture;
pub use fixture::{execute, Fixture};

#[cfg(test)]
mod test_utils;
