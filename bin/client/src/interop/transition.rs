//! Optimistic derivation of the next block of a single chain.

use crate::{
    errors::{InteropProgramError, InteropProgramResult},
    DerivationRequest, TaskExecutor,
};
use superstep_interop::{OptimisticBlock, SuperRootV1, TransitionState};
use superstep_proof::{target_block_number, BootInfo, L1Oracle, L2Oracle};
use tracing::{info, warn};

/// The outcome of deriving a chain's next block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedBlock {
    /// The block was derived.
    Block(OptimisticBlock),
    /// The L1 data available under the trusted L1 head does not reach the block.
    L1HeadReached,
}

/// Derives the block that the chain at index `transition_state.step` of `super_root` must produce
/// at the timestamp following the super root.
///
/// The caller guarantees that the step indexes a chain of the super root.
pub async fn derive_optimistic_block<L1, L2, T>(
    boot: &BootInfo,
    l1: &L1,
    l2: &L2,
    tasks: &T,
    super_root: &SuperRootV1,
    transition_state: &TransitionState,
) -> InteropProgramResult<DerivedBlock>
where
    L1: L1Oracle + Send + Sync,
    L2: L2Oracle + Send + Sync,
    T: TaskExecutor + Send + Sync,
{
    let chain = usize::try_from(transition_state.step)
        .ok()
        .and_then(|step| super_root.output_roots.get(step))
        .ok_or(InteropProgramError::StepOutOfRange {
            step: transition_state.step,
            chains: super_root.output_roots.len(),
        })?;

    let rollup_config = boot.configs.rollup_config(chain.chain_id)?;
    let chain_config = boot.configs.chain_config(chain.chain_id)?;

    // The next timestamp wraps like the on-chain uint64 arithmetic.
    let claimed_block_number =
        target_block_number(rollup_config, super_root.timestamp.wrapping_add(1))?;

    info!(
        target: "client_interop",
        chain_id = chain.chain_id,
        agreed_output_root = %chain.output_root,
        claimed_block_number,
        "Deriving optimistic block"
    );

    let request = DerivationRequest {
        rollup_config,
        chain_config,
        l1_head: boot.l1_head,
        agreed_output_root: chain.output_root,
        claimed_block_number,
    };
    let derived =
        tasks.run_derivation(request, l1, l2).await.map_err(InteropProgramError::Derivation)?;

    if derived.head.number < claimed_block_number {
        warn!(
            target: "client_interop",
            chain_id = chain.chain_id,
            head = derived.head.number,
            claimed_block_number,
            "L1 head reached before the claimed block"
        );
        return Ok(DerivedBlock::L1HeadReached);
    }

    Ok(DerivedBlock::Block(OptimisticBlock::new(derived.block_hash, derived.output_root)))
}
