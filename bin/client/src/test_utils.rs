//! Test fixtures for the step program: boot information, a scripted [TaskExecutor] and a
//! subscriber layer that collects traces.

use crate::{
    errors::TaskError,
    tasks::{DerivationRequest, DerivationResult, TaskExecutor},
};
use alloc::{boxed::Box, format, string::String, sync::Arc, vec::Vec};
use alloy_eips::BlockNumHash;
use alloy_genesis::ChainConfig;
use alloy_primitives::B256;
use async_trait::async_trait;
use op_alloy_genesis::{ChainGenesis, RollupConfig};
use spin::Mutex;
use superstep_proof::{BootInfo, ConfigRegistry, L1Oracle, L2Oracle};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{layer::Context, Layer};

/// Boot information over chains with a genesis at block 0, time 0 and a block time of 1.
///
/// The claimed L2 timestamp is 11, one past the timestamp of the test super roots.
pub(crate) fn boot_info(agreed_pre_state: B256, chain_ids: &[u64]) -> BootInfo {
    let rollup_configs = chain_ids.iter().map(|id| RollupConfig {
        genesis: ChainGenesis {
            l2: BlockNumHash { number: 0, hash: B256::repeat_byte(0x0e) },
            l2_time: 0,
            ..Default::default()
        },
        block_time: 1,
        l2_chain_id: *id,
        ..Default::default()
    });
    let chain_configs =
        chain_ids.iter().map(|id| ChainConfig { chain_id: *id, ..Default::default() });

    BootInfo {
        l1_head: B256::repeat_byte(0x1f),
        agreed_pre_state,
        claimed_post_state: B256::ZERO,
        claimed_l2_timestamp: 11,
        configs: ConfigRegistry::new(rollup_configs, chain_configs),
    }
}

/// The parts of a [DerivationRequest] a [ScriptedTaskExecutor] records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordedRequest {
    pub(crate) chain_id: u64,
    pub(crate) l1_head: B256,
    pub(crate) agreed_output_root: B256,
    pub(crate) claimed_block_number: u64,
}

/// A [TaskExecutor] that answers every derivation with the same scripted outcome.
#[derive(Debug)]
pub(crate) struct ScriptedTaskExecutor {
    outcome: Result<DerivationResult, String>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedTaskExecutor {
    /// Derivation reaches `head_number`, producing the given block.
    pub(crate) const fn succeeding(head_number: u64, block_hash: B256, output_root: B256) -> Self {
        Self {
            outcome: Ok(DerivationResult {
                head: BlockNumHash { number: head_number, hash: block_hash },
                block_hash,
                output_root,
            }),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Derivation fails with `message`.
    pub(crate) fn failing(message: &str) -> Self {
        Self { outcome: Err(message.into()), requests: Mutex::new(Vec::new()) }
    }

    /// The requests received so far.
    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl TaskExecutor for ScriptedTaskExecutor {
    async fn run_derivation<L1, L2>(
        &self,
        request: DerivationRequest<'_>,
        _: &L1,
        _: &L2,
    ) -> Result<DerivationResult, TaskError>
    where
        L1: L1Oracle + Send + Sync,
        L2: L2Oracle + Send + Sync,
    {
        self.requests.lock().push(RecordedRequest {
            chain_id: request.rollup_config.l2_chain_id,
            l1_head: request.l1_head,
            agreed_output_root: request.agreed_output_root,
            claimed_block_number: request.claimed_block_number,
        });
        self.outcome.clone().map_err(TaskError::from)
    }
}

/// Traces collected by a [CollectingLayer], with their levels.
#[derive(Debug, Default, Clone)]
pub(crate) struct TraceStorage(Arc<Mutex<Vec<(Level, String)>>>);

impl TraceStorage {
    /// Returns the collected traces at `level`.
    pub(crate) fn get_by_level(&self, level: Level) -> Vec<String> {
        self.0
            .lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

/// A subscriber layer that pushes every event into a [TraceStorage].
#[derive(Debug)]
pub(crate) struct CollectingLayer {
    storage: TraceStorage,
}

impl CollectingLayer {
    pub(crate) const fn new(storage: TraceStorage) -> Self {
        Self { storage }
    }
}

impl<S: Subscriber> Layer<S> for CollectingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = *event.metadata().level();
        self.storage.0.lock().push((level, format!("{event:?}")));
    }
}
