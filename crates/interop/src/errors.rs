//! Error types for the `superstep-interop` crate.

use alloy_primitives::U256;
use thiserror::Error;

/// An error type for the [SuperRoot] struct's deserialization.
///
/// [SuperRoot]: crate::SuperRoot
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuperRootError {
    /// The encoded super root is empty.
    #[error("Empty super root encoding")]
    Empty,
    /// Unknown super root version byte
    #[error("Unknown super root version byte: {0}")]
    UnknownVersion(u8),
    /// Unexpected encoded super root length
    #[error("Unexpected encoded super root length: {0}")]
    UnexpectedLength(usize),
    /// A chain ID does not fit into 64 bits.
    #[error("Chain ID {0} exceeds 64 bits")]
    ChainIdOverflow(U256),
}

/// A [Result] alias for the [SuperRootError] type.
pub type SuperRootResult<T> = core::result::Result<T, SuperRootError>;

/// An error type for [OutputRootV0] deserialization.
///
/// [OutputRootV0]: crate::OutputRootV0
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutputRootError {
    /// The output root preimage is not 128 bytes long.
    #[error("Unexpected output root preimage length: {0}")]
    UnexpectedLength(usize),
    /// The output root version is not supported.
    #[error("Unsupported output root version")]
    UnsupportedVersion,
}
