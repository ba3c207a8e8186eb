//! Error types for the step program.

use alloc::boxed::Box;
use alloy_primitives::B256;
use superstep_interop::SuperRootError;
use superstep_proof::errors::{ConfigError, OracleProviderError, TargetBlockError};
use thiserror::Error;

/// An opaque error returned by a [TaskExecutor].
///
/// [TaskExecutor]: crate::TaskExecutor
pub type TaskError = Box<dyn core::error::Error + Send + Sync>;

/// An error that can occur while computing a step of the interop program.
#[derive(Error, Debug)]
pub enum InteropProgramError {
    /// The computed commitment does not match the claimed commitment.
    #[error("Invalid claim. Claimed {claimed}, computed {computed}")]
    InvalidClaim {
        /// The claimed post-state commitment.
        claimed: B256,
        /// The computed post-state commitment.
        computed: B256,
    },
    /// The agreed state or its super root carries an unsupported version byte.
    #[error("Incorrect output root type: {0}")]
    IncorrectOutputRootType(u8),
    /// The super root of the agreed state could not be decoded.
    #[error("invalid super root: {0}")]
    MalformedSuperRoot(SuperRootError),
    /// The step counter does not index a chain of the super root.
    #[error("Step {step} is out of range for a super root with {chains} chains")]
    StepOutOfRange {
        /// The step counter of the agreed state.
        step: u64,
        /// The number of chains in the super root.
        chains: usize,
    },
    /// A chain configuration is missing.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The target block number could not be computed.
    #[error("Failed to calculate target block: {0}")]
    TargetBlock(#[from] TargetBlockError),
    /// The derivation of a chain's block failed.
    #[error("Derivation failed: {0}")]
    Derivation(TaskError),
    /// An error occurred in the oracle provider.
    #[error(transparent)]
    OracleProvider(#[from] OracleProviderError),
}

/// A [Result] alias for the [InteropProgramError] type.
pub type InteropProgramResult<T> = Result<T, InteropProgramError>;
