//! Errors for the `superstep-preimage` crate.

use alloc::string::String;
use thiserror::Error;

/// A [PreimageOracleError] is an enum that describes the ways a preimage read or a hint write can
/// fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreimageOracleError {
    /// The preimage key is invalid.
    #[error("Invalid preimage key.")]
    InvalidPreimageKey,
    /// Key not found.
    #[error("Key not found.")]
    KeyNotFound,
    /// Buffer length mismatch.
    #[error("Buffer length mismatch. Expected {0}, got {1}.")]
    BufferLengthMismatch(usize, usize),
    /// Other errors.
    #[error("Error in preimage oracle: {0}")]
    Other(String),
}

/// A [Result] type for the [PreimageOracleError] enum.
pub type PreimageOracleResult<T> = Result<T, PreimageOracleError>;
