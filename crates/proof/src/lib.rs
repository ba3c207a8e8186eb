#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[macro_use]
extern crate tracing;

pub mod errors;

pub mod config;
pub use config::{target_block_number, ConfigRegistry};

pub mod boot;
pub use boot::BootInfo;

mod hint;
pub use hint::HintType;

mod oracle;
pub use oracle::{L1Oracle, L2Oracle, OracleL1Oracle, OracleL2Oracle};

mod caching_oracle;
pub use caching_oracle::CachingOracle;

mod blocking_runtime;
pub use blocking_runtime::block_on;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
