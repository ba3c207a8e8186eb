//! The [TaskExecutor] seam, behind which the derivation of a single chain's block runs.

use crate::errors::TaskError;
use alloc::boxed::Box;
use alloy_eips::BlockNumHash;
use alloy_genesis::ChainConfig;
use alloy_primitives::B256;
use async_trait::async_trait;
use op_alloy_genesis::RollupConfig;
use serde::{Deserialize, Serialize};
use superstep_proof::{L1Oracle, L2Oracle};

/// The inputs of a single chain's derivation.
#[derive(Debug, Clone, Copy)]
pub struct DerivationRequest<'a> {
    /// The rollup config of the chain.
    pub rollup_config: &'a RollupConfig,
    /// The L2 chain config of the chain.
    pub chain_config: &'a ChainConfig,
    /// The trusted L1 head.
    pub l1_head: B256,
    /// The agreed output root of the chain, which derivation starts from.
    pub agreed_output_root: B256,
    /// The number of the block that derivation must produce.
    pub claimed_block_number: u64,
}

/// The outcome of a single chain's derivation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivationResult {
    /// The head that derivation reached. Below the claimed block number when the L1 data did not
    /// reach far enough.
    pub head: BlockNumHash,
    /// The hash of the derived block.
    pub block_hash: B256,
    /// The output root of the derived block.
    pub output_root: B256,
}

/// Runs the derivation of a single chain's block on behalf of the step program.
#[async_trait]
pub trait TaskExecutor {
    /// Derives the block requested by `request`, reading L1 and L2 data through the given oracles.
    async fn run_derivation<L1, L2>(
        &self,
        request: DerivationRequest<'_>,
        l1: &L1,
        l2: &L2,
    ) -> Result<DerivationResult, TaskError>
    where
        L1: L1Oracle + Send + Sync,
        L2: L2Oracle + Send + Sync;
}
