//! A [TaskExecutor] that replays recorded derivation results.

use crate::{
    errors::TaskError,
    tasks::{DerivationRequest, DerivationResult, TaskExecutor},
};
use alloc::{boxed::Box, collections::BTreeMap};
use alloy_primitives::B256;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use superstep_proof::{L1Oracle, L2Oracle};
use thiserror::Error;
use tracing::debug;

/// A derivation result recorded for one chain, together with the inputs it answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedDerivation {
    /// The L2 chain ID.
    pub chain_id: u64,
    /// The agreed output root that derivation started from.
    pub agreed_output_root: B256,
    /// The block number that derivation was asked to produce.
    pub claimed_block_number: u64,
    /// The recorded outcome.
    pub result: DerivationResult,
}

/// An error raised while replaying a recorded derivation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReplayError {
    /// No derivation was recorded for the request.
    #[error("missing derivation: chain {chain_id}, {agreed_output_root} to {claimed_block_number}")]
    MissingDerivation {
        /// The L2 chain ID.
        chain_id: u64,
        /// The agreed output root of the request.
        agreed_output_root: B256,
        /// The claimed block number of the request.
        claimed_block_number: u64,
    },
    /// The recorded output root commits to a different block than the recorded block hash.
    #[error("recorded output root commits to block {committed}, expected {recorded}")]
    BlockHashMismatch {
        /// The block hash recorded with the derivation.
        recorded: B256,
        /// The block hash the output root commits to.
        committed: B256,
    },
}

/// A deterministic [TaskExecutor] serving recorded derivation results, keyed by chain ID, agreed
/// output root and claimed block number.
#[derive(Debug, Clone, Default)]
pub struct ReplayTaskExecutor {
    derivations: BTreeMap<(u64, B256, u64), DerivationResult>,
}

impl ReplayTaskExecutor {
    /// Creates a new [ReplayTaskExecutor] from recorded derivations. A later record for the same
    /// request replaces an earlier one.
    pub fn new(derivations: impl IntoIterator<Item = RecordedDerivation>) -> Self {
        let derivations = derivations
            .into_iter()
            .map(|d| ((d.chain_id, d.agreed_output_root, d.claimed_block_number), d.result))
            .collect();
        Self { derivations }
    }

    /// Returns the number of recorded derivations.
    pub fn len(&self) -> usize {
        self.derivations.len()
    }

    /// Returns `true` if no derivation is recorded.
    pub fn is_empty(&self) -> bool {
        self.derivations.is_empty()
    }
}

#[async_trait]
impl TaskExecutor for ReplayTaskExecutor {
    async fn run_derivation<L1, L2>(
        &self,
        request: DerivationRequest<'_>,
        _: &L1,
        l2: &L2,
    ) -> Result<DerivationResult, TaskError>
    where
        L1: L1Oracle + Send + Sync,
        L2: L2Oracle + Send + Sync,
    {
        let chain_id = request.rollup_config.l2_chain_id;

        // Derivation starts from the agreed output, so it must be available.
        let agreed = l2.output_by_root(chain_id, request.agreed_output_root).await?;
        debug!(
            target: "replay",
            chain_id,
            agreed_block = %agreed.block_hash,
            "Resolved agreed output root"
        );

        let result = self
            .derivations
            .get(&(chain_id, request.agreed_output_root, request.claimed_block_number))
            .copied()
            .ok_or(ReplayError::MissingDerivation {
                chain_id,
                agreed_output_root: request.agreed_output_root,
                claimed_block_number: request.claimed_block_number,
            })?;

        if result.head.number >= request.claimed_block_number {
            let derived = l2.output_by_root(chain_id, result.output_root).await?;
            if derived.block_hash != result.block_hash {
                return Err(ReplayError::BlockHashMismatch {
                    recorded: result.block_hash,
                    committed: derived.block_hash,
                }
                .into());
            }
        }

        Ok(result)
    }
}
