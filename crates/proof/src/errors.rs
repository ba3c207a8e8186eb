//! Error types for the proof SDK.

use alloy_primitives::{B256, U256};
use superstep_interop::OutputRootError;
use superstep_preimage::errors::PreimageOracleError;
use thiserror::Error;

/// Error from an oracle-backed provider.
#[derive(Error, Debug)]
pub enum OracleProviderError {
    /// Preimage oracle error.
    #[error("Preimage oracle error: {0}")]
    Preimage(PreimageOracleError),
    /// Error decoding or encoding RLP.
    #[error("RLP error: {0}")]
    Rlp(alloy_rlp::Error),
    /// Slice conversion error.
    #[error("Slice conversion error: {0}")]
    SliceConversion(core::array::TryFromSliceError),
    /// Serde error.
    #[error("Serde error: {0}")]
    Serde(serde_json::Error),
    /// The oracle served an empty preimage for a commitment.
    #[error("Empty preimage for commitment {0}")]
    EmptyPreimage(B256),
    /// A transition state preimage carries an unknown version byte.
    #[error("Unknown transition state version: {0}")]
    UnknownStateVersion(u8),
    /// A preimage had bytes left over after decoding.
    #[error("Preimage has {0} trailing bytes")]
    TrailingBytes(usize),
    /// An output root preimage could not be decoded.
    #[error("Output root error: {0}")]
    OutputRoot(OutputRootError),
}

/// Error resolving a configuration from the [ConfigRegistry].
///
/// [ConfigRegistry]: crate::ConfigRegistry
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// No rollup config is registered for the chain.
    #[error("no rollup config available for chain ID {0}")]
    MissingRollupConfig(u64),
    /// No L2 chain config is registered for the chain.
    #[error("no chain config available for chain ID {0}")]
    MissingChainConfig(u64),
    /// A super root names a chain ID that no rollup config can be registered for.
    #[error("no rollup config available for chain ID {0}")]
    UnknownChainId(U256),
}

/// Error computing the block number that corresponds to a timestamp.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetBlockError {
    /// The timestamp is before the L2 genesis of the chain.
    #[error("timestamp {timestamp} is before the L2 genesis time {genesis}")]
    BeforeGenesis {
        /// The requested timestamp.
        timestamp: u64,
        /// The L2 genesis timestamp.
        genesis: u64,
    },
    /// The rollup config has a zero block time.
    #[error("rollup config has a zero block time")]
    ZeroBlockTime,
}
