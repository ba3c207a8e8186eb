//! The L1 and L2 data sources of a step, and their [CommsClient] backed implementations.

use crate::{errors::OracleProviderError, HintType};
use alloc::{boxed::Box, sync::Arc, vec, vec::Vec};
use alloy_primitives::B256;
use alloy_rlp::Decodable;
use async_trait::async_trait;
use superstep_interop::{
    OutputRootV0, TransitionState, SUPER_ROOT_VERSION_V1, TRANSITION_STATE_VERSION,
};
use superstep_preimage::{CommsClient, PreimageKey, PreimageKeyType};

/// Read-only access to L1 data, by content hash.
#[async_trait]
pub trait L1Oracle {
    /// Fetches the keccak256 preimage of the given hash from L1.
    async fn preimage(&self, hash: B256) -> Result<Vec<u8>, OracleProviderError>;
}

/// Read-only access to the agreed superchain state and to per-chain L2 data.
#[async_trait]
pub trait L2Oracle {
    /// Resolves a commitment to its [TransitionState] form.
    ///
    /// A commitment to a bare super root resolves to a transition state at step 0 with no pending
    /// progress, so callers never need to tell the two apart.
    async fn transition_state_by_root(
        &self,
        root: B256,
    ) -> Result<TransitionState, OracleProviderError>;

    /// Fetches the preimage of a chain's output root.
    async fn output_by_root(
        &self,
        chain_id: u64,
        root: B256,
    ) -> Result<OutputRootV0, OracleProviderError>;

    /// Fetches the keccak256 preimage of the given hash from a chain's L2 data.
    async fn preimage(&self, chain_id: u64, hash: B256) -> Result<Vec<u8>, OracleProviderError>;
}

/// A [CommsClient] backed [L1Oracle] implementation.
#[derive(Debug, Clone)]
pub struct OracleL1Oracle<T: CommsClient> {
    /// The preimage oracle client.
    oracle: Arc<T>,
}

impl<T: CommsClient> OracleL1Oracle<T> {
    /// Creates a new [OracleL1Oracle] from the given oracle client.
    pub const fn new(oracle: Arc<T>) -> Self {
        Self { oracle }
    }
}

#[async_trait]
impl<T: CommsClient + Send + Sync> L1Oracle for OracleL1Oracle<T> {
    async fn preimage(&self, hash: B256) -> Result<Vec<u8>, OracleProviderError> {
        self.oracle
            .write(&HintType::L1Preimage.encode_with(&[hash.as_slice()]))
            .await
            .map_err(OracleProviderError::Preimage)?;
        self.oracle
            .get(PreimageKey::new(*hash, PreimageKeyType::Keccak256))
            .await
            .map_err(OracleProviderError::Preimage)
    }
}

/// A [CommsClient] backed [L2Oracle] implementation.
#[derive(Debug, Clone)]
pub struct OracleL2Oracle<T: CommsClient> {
    /// The preimage oracle client.
    oracle: Arc<T>,
}

impl<T: CommsClient> OracleL2Oracle<T> {
    /// Creates a new [OracleL2Oracle] from the given oracle client.
    pub const fn new(oracle: Arc<T>) -> Self {
        Self { oracle }
    }
}

#[async_trait]
impl<T: CommsClient + Send + Sync> L2Oracle for OracleL2Oracle<T> {
    async fn transition_state_by_root(
        &self,
        root: B256,
    ) -> Result<TransitionState, OracleProviderError> {
        self.oracle
            .write(&HintType::AgreedPreState.encode_with(&[root.as_slice()]))
            .await
            .map_err(OracleProviderError::Preimage)?;
        let preimage = self
            .oracle
            .get(PreimageKey::new(*root, PreimageKeyType::Keccak256))
            .await
            .map_err(OracleProviderError::Preimage)?;

        match preimage.first() {
            None => Err(OracleProviderError::EmptyPreimage(root)),
            Some(&SUPER_ROOT_VERSION_V1) => {
                trace!(target: "oracle", "Agreed state {root} is a super root");
                Ok(TransitionState::new(preimage.into(), vec![], 0))
            }
            Some(&TRANSITION_STATE_VERSION) => {
                let mut buf = preimage.as_slice();
                let transition_state =
                    TransitionState::decode(&mut buf).map_err(OracleProviderError::Rlp)?;
                if !buf.is_empty() {
                    return Err(OracleProviderError::TrailingBytes(buf.len()));
                }
                Ok(transition_state)
            }
            Some(&version) => Err(OracleProviderError::UnknownStateVersion(version)),
        }
    }

    async fn output_by_root(
        &self,
        chain_id: u64,
        root: B256,
    ) -> Result<OutputRootV0, OracleProviderError> {
        self.oracle
            .write(
                &HintType::L2OutputRoot
                    .encode_with(&[root.as_slice(), chain_id.to_be_bytes().as_slice()]),
            )
            .await
            .map_err(OracleProviderError::Preimage)?;
        let preimage = self
            .oracle
            .get(PreimageKey::new(*root, PreimageKeyType::Keccak256))
            .await
            .map_err(OracleProviderError::Preimage)?;

        OutputRootV0::decode(&preimage).map_err(OracleProviderError::OutputRoot)
    }

    async fn preimage(&self, chain_id: u64, hash: B256) -> Result<Vec<u8>, OracleProviderError> {
        self.oracle
            .write(
                &HintType::L2Preimage
                    .encode_with(&[hash.as_slice(), chain_id.to_be_bytes().as_slice()]),
            )
            .await
            .map_err(OracleProviderError::Preimage)?;
        self.oracle
            .get(PreimageKey::new(*hash, PreimageKeyType::Keccak256))
            .await
            .map_err(OracleProviderError::Preimage)
    }
}
