//! Scripted [L1Oracle] and [L2Oracle] implementations for tests.

use crate::{errors::OracleProviderError, L1Oracle, L2Oracle};
use alloc::{boxed::Box, collections::BTreeMap, vec::Vec};
use alloy_primitives::B256;
use async_trait::async_trait;
use core::sync::atomic::{AtomicUsize, Ordering};
use superstep_interop::{OutputRootV0, TransitionState};
use superstep_preimage::errors::PreimageOracleError;

/// An [L1Oracle] that holds no preimages and counts every request.
#[derive(Debug, Default)]
pub struct TestL1Oracle {
    calls: AtomicUsize,
}

impl TestL1Oracle {
    /// Returns the number of requests served, including failed ones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl L1Oracle for TestL1Oracle {
    async fn preimage(&self, _: B256) -> Result<Vec<u8>, OracleProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(OracleProviderError::Preimage(PreimageOracleError::KeyNotFound))
    }
}

/// An [L2Oracle] that serves transition states and output roots from maps, and counts every
/// request. It holds no other preimages.
#[derive(Debug, Default)]
pub struct TestL2Oracle {
    transition_states: BTreeMap<B256, TransitionState>,
    outputs: BTreeMap<B256, OutputRootV0>,
    calls: AtomicUsize,
}

impl TestL2Oracle {
    /// Registers the [TransitionState] that `root` resolves to.
    pub fn with_transition_state(mut self, root: B256, transition_state: TransitionState) -> Self {
        self.transition_states.insert(root, transition_state);
        self
    }

    /// Adds an output root preimage, keyed by its hash.
    pub fn with_output(mut self, output: OutputRootV0) -> Self {
        self.outputs.insert(output.hash(), output);
        self
    }

    /// Returns the number of requests served, including failed ones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl L2Oracle for TestL2Oracle {
    async fn transition_state_by_root(
        &self,
        root: B256,
    ) -> Result<TransitionState, OracleProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.transition_states
            .get(&root)
            .cloned()
            .ok_or(OracleProviderError::Preimage(PreimageOracleError::KeyNotFound))
    }

    async fn output_by_root(
        &self,
        _: u64,
        root: B256,
    ) -> Result<OutputRootV0, OracleProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outputs
            .get(&root)
            .copied()
            .ok_or(OracleProviderError::Preimage(PreimageOracleError::KeyNotFound))
    }

    async fn preimage(&self, _: u64, _: B256) -> Result<Vec<u8>, OracleProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(OracleProviderError::Preimage(PreimageOracleError::KeyNotFound))
    }
}
