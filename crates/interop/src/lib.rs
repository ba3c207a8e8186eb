#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(any(test, feature = "arbitrary")), no_std)]

extern crate alloc;

mod constants;
pub use constants::{
    INVALID_TRANSITION, INVALID_TRANSITION_HASH, OUTPUT_ROOT_VERSION_V0, SUPER_ROOT_VERSION_V1,
    TRANSITION_STATE_VERSION,
};

mod errors;
pub use errors::{OutputRootError, SuperRootError, SuperRootResult};

mod super_root;
pub use super_root::{OutputRootWithChain, SuperRoot, SuperRootV1};

mod transition;
pub use transition::{OptimisticBlock, TransitionState};

mod output_root;
pub use output_root::OutputRootV0;
