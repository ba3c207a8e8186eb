//! Single step of the superchain state transition.

use crate::{errors::InteropProgramResult, TaskExecutor};
use alloy_primitives::B256;
use superstep_interop::{TransitionState, INVALID_TRANSITION_HASH};
use superstep_proof::{BootInfo, L1Oracle, L2Oracle};
use tracing::info;

mod claim;
pub use claim::validate_claim;

mod pre_state;
pub use pre_state::parse_agreed_state;

mod transition;
pub use transition::{derive_optimistic_block, DerivedBlock};

/// Runs a single step of the interop program, logging the boot information and, if
/// `validate_claim` is set, checking the computed commitment against the claimed post-state.
///
/// Returns the computed post-state commitment.
pub async fn run<L1, L2, T>(
    boot: &BootInfo,
    l1: &L1,
    l2: &L2,
    tasks: &T,
    validate_claim: bool,
) -> InteropProgramResult<B256>
where
    L1: L1Oracle + Send + Sync,
    L2: L2Oracle + Send + Sync,
    T: TaskExecutor + Send + Sync,
{
    info!(target: "client_interop", ?boot, "Interop program bootstrapped");

    let computed = state_transition(boot, l1, l2, tasks).await?;
    info!(target: "client_interop", %computed, "Computed post-state commitment");

    if validate_claim {
        self::validate_claim(boot.claimed_post_state, computed)?;
    }
    Ok(computed)
}

/// Computes the commitment that follows the agreed pre-state.
///
/// An agreed pre-state that is already invalid stays invalid, without touching either oracle.
/// While chains of the super root are pending, the chain at the current step is derived and its
/// block appended to the pending progress. Past the last chain, only the step advances.
pub async fn state_transition<L1, L2, T>(
    boot: &BootInfo,
    l1: &L1,
    l2: &L2,
    tasks: &T,
) -> InteropProgramResult<B256>
where
    L1: L1Oracle + Send + Sync,
    L2: L2Oracle + Send + Sync,
    T: TaskExecutor + Send + Sync,
{
    if boot.agreed_pre_state == INVALID_TRANSITION_HASH {
        info!(target: "client_interop", "Agreed pre-state is invalid, short-circuiting");
        return Ok(INVALID_TRANSITION_HASH);
    }

    let (transition_state, super_root) = parse_agreed_state(boot.agreed_pre_state, l2).await?;
    let step = transition_state.step;
    let mut pending_progress = transition_state.pending_progress.clone();

    if step < super_root.output_roots.len() as u64 {
        match derive_optimistic_block(boot, l1, l2, tasks, &super_root, &transition_state).await? {
            DerivedBlock::Block(block) => pending_progress.push(block),
            DerivedBlock::L1HeadReached => return Ok(INVALID_TRANSITION_HASH),
        }
    } else {
        info!(
            target: "client_interop",
            step,
            "Transition state is saturated, advancing the step without derivation"
        );
    }

    Ok(TransitionState::new(transition_state.super_root, pending_progress, step + 1).hash())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        errors::InteropProgramError,
        test_utils::{boot_info, CollectingLayer, ScriptedTaskExecutor, TraceStorage},
    };
    use alloy_primitives::b256;
    use superstep_interop::{OptimisticBlock, OutputRootWithChain, SuperRoot, SuperRootV1};
    use superstep_proof::test_utils::{TestL1Oracle, TestL2Oracle};
    use tracing::Level;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    /// A super root at timestamp 10 over the given chains, with output roots filled with `fill`.
    fn super_root(chains: &[(u64, u8)]) -> SuperRootV1 {
        let output_roots = chains
            .iter()
            .map(|(id, fill)| OutputRootWithChain::new(*id, B256::repeat_byte(*fill)))
            .collect();
        SuperRootV1::new(10, output_roots)
    }

    fn step_zero(super_root: &SuperRootV1) -> TransitionState {
        TransitionState::new(SuperRoot::V1(super_root.clone()).encoded().into(), vec![], 0)
    }

    fn derived_block() -> OptimisticBlock {
        OptimisticBlock::new(B256::repeat_byte(0x11), B256::repeat_byte(0x22))
    }

    /// A task executor whose derivation reaches `head`, producing [derived_block].
    fn tasks_reaching(head: u64) -> ScriptedTaskExecutor {
        let block = derived_block();
        ScriptedTaskExecutor::succeeding(head, block.block_hash, block.output_root)
    }

    #[tokio::test]
    async fn test_invalid_pre_state_is_absorbing() {
        let boot = boot_info(INVALID_TRANSITION_HASH, &[1]);
        let (l1, l2) = (TestL1Oracle::default(), TestL2Oracle::default());
        let tasks = ScriptedTaskExecutor::failing("unreachable");

        let computed = state_transition(&boot, &l1, &l2, &tasks).await.unwrap();
        assert_eq!(computed, INVALID_TRANSITION_HASH);
        assert_eq!(l1.calls(), 0);
        assert_eq!(l2.calls(), 0);
        assert!(tasks.requests().is_empty());
    }

    #[tokio::test]
    async fn test_single_chain_progress() {
        const EXPECTED: B256 =
            b256!("837fc7e3fadf55b6ba232a436c7419c7aee8849985f32fb7cb609062bda68a25");

        let super_root = super_root(&[(1, 0xaa)]);
        let agreed = super_root.hash();
        let l2 = TestL2Oracle::default().with_transition_state(agreed, step_zero(&super_root));
        let tasks = tasks_reaching(11);
        let boot = boot_info(agreed, &[1]);

        let computed =
            state_transition(&boot, &TestL1Oracle::default(), &l2, &tasks).await.unwrap();
        assert_eq!(computed, EXPECTED);
        let encoded = SuperRoot::V1(super_root).encoded().into();
        let expected = TransitionState::new(encoded, vec![derived_block()], 1);
        assert_eq!(computed, expected.hash());
        assert_eq!(tasks.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_single_chain_l1_head_reached() {
        let super_root = super_root(&[(1, 0xaa)]);
        let agreed = super_root.hash();
        let l2 = TestL2Oracle::default().with_transition_state(agreed, step_zero(&super_root));
        let tasks = tasks_reaching(10);
        let boot = boot_info(agreed, &[1]);

        let computed =
            state_transition(&boot, &TestL1Oracle::default(), &l2, &tasks).await.unwrap();
        assert_eq!(computed, INVALID_TRANSITION_HASH);
    }

    #[tokio::test]
    async fn test_progress_appends_to_existing_progress() {
        let super_root = super_root(&[(1, 0xaa), (2, 0xbb)]);
        let agreed_state = TransitionState::new(
            SuperRoot::V1(super_root.clone()).encoded().into(),
            vec![OptimisticBlock::new(B256::repeat_byte(0x01), B256::repeat_byte(0x02))],
            1,
        );
        let agreed = agreed_state.hash();
        let l2 = TestL2Oracle::default().with_transition_state(agreed, agreed_state.clone());
        let tasks = tasks_reaching(11);
        let boot = boot_info(agreed, &[1, 2]);

        let computed =
            state_transition(&boot, &TestL1Oracle::default(), &l2, &tasks).await.unwrap();

        let mut expected_progress = agreed_state.pending_progress.clone();
        expected_progress.push(derived_block());
        let expected = TransitionState::new(agreed_state.super_root, expected_progress, 2);
        assert_eq!(computed, expected.hash());

        // The second chain of the super root is the one derived at step 1.
        let requests = tasks.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].chain_id, 2);
        assert_eq!(requests[0].agreed_output_root, B256::repeat_byte(0xbb));
    }

    #[tokio::test]
    async fn test_saturated_state_only_advances_step() {
        const AGREED: B256 =
            b256!("d10a3f74428bcfb4a539d7026ea855e6a23933a8c96cd1ba253af72c17232940");
        const EXPECTED: B256 =
            b256!("d9d5c245d29ec8762d6a2f59bb8012eb221e8f40102b735b8eb86d9bba29c71b");

        let super_root = super_root(&[(1, 0xaa), (2, 0xbb)]);
        let agreed_state = TransitionState::new(
            SuperRoot::V1(super_root).encoded().into(),
            vec![
                OptimisticBlock::new(B256::repeat_byte(0x11), B256::repeat_byte(0x22)),
                OptimisticBlock::new(B256::repeat_byte(0x33), B256::repeat_byte(0x44)),
            ],
            2,
        );
        assert_eq!(agreed_state.hash(), AGREED);

        let l1 = TestL1Oracle::default();
        let l2 = TestL2Oracle::default().with_transition_state(AGREED, agreed_state);
        let tasks = ScriptedTaskExecutor::failing("unreachable");
        let boot = boot_info(AGREED, &[1, 2]);

        let computed = state_transition(&boot, &l1, &l2, &tasks).await.unwrap();
        assert_eq!(computed, EXPECTED);
        assert_eq!(l1.calls(), 0);
        assert_eq!(l2.calls(), 1);
        assert!(tasks.requests().is_empty());
    }

    #[tokio::test]
    async fn test_padding_step_past_saturation() {
        let super_root = super_root(&[(1, 0xaa)]);
        let agreed_state = TransitionState::new(
            SuperRoot::V1(super_root).encoded().into(),
            vec![derived_block()],
            5,
        );
        let agreed = agreed_state.hash();
        let l2 = TestL2Oracle::default().with_transition_state(agreed, agreed_state.clone());
        let tasks = ScriptedTaskExecutor::failing("unreachable");
        let boot = boot_info(agreed, &[1]);

        let computed =
            state_transition(&boot, &TestL1Oracle::default(), &l2, &tasks).await.unwrap();
        let expected =
            TransitionState::new(agreed_state.super_root, agreed_state.pending_progress, 6);
        assert_eq!(computed, expected.hash());
    }

    #[tokio::test]
    async fn test_version_gate() {
        let super_root = super_root(&[(1, 0xaa)]);
        let mut agreed_state = step_zero(&super_root);
        agreed_state.version = 0x00;
        let l2 =
            TestL2Oracle::default().with_transition_state(B256::repeat_byte(0x42), agreed_state);
        let tasks = ScriptedTaskExecutor::failing("unreachable");
        let boot = boot_info(B256::repeat_byte(0x42), &[1]);

        let err =
            state_transition(&boot, &TestL1Oracle::default(), &l2, &tasks).await.unwrap_err();
        assert!(matches!(err, InteropProgramError::IncorrectOutputRootType(0x00)));
        assert!(tasks.requests().is_empty());
    }

    #[tokio::test]
    async fn test_deterministic_commitment() {
        let super_root = super_root(&[(1, 0xaa), (2, 0xbb)]);
        let agreed = super_root.hash();
        let boot = boot_info(agreed, &[1, 2]);

        let mut commitments = Vec::new();
        for _ in 0..2 {
            let l2 = TestL2Oracle::default().with_transition_state(agreed, step_zero(&super_root));
            let tasks = tasks_reaching(11);
            let computed =
                state_transition(&boot, &TestL1Oracle::default(), &l2, &tasks).await.unwrap();
            commitments.push(computed);
        }
        assert_eq!(commitments[0], commitments[1]);
    }

    #[tokio::test]
    async fn test_run_validates_claim() {
        let super_root = super_root(&[(1, 0xaa)]);
        let agreed = super_root.hash();
        let expected = TransitionState::new(
            SuperRoot::V1(super_root.clone()).encoded().into(),
            vec![derived_block()],
            1,
        )
        .hash();
        let l2 = TestL2Oracle::default().with_transition_state(agreed, step_zero(&super_root));
        let l1 = TestL1Oracle::default();

        // Matching claim.
        let mut boot = boot_info(agreed, &[1]);
        boot.claimed_post_state = expected;
        let tasks = tasks_reaching(11);
        assert_eq!(run(&boot, &l1, &l2, &tasks, true).await.unwrap(), expected);

        // Mismatched claim.
        boot.claimed_post_state = INVALID_TRANSITION_HASH;
        let err = run(&boot, &l1, &l2, &tasks, true).await.unwrap_err();
        assert!(matches!(
            err,
            InteropProgramError::InvalidClaim { claimed, computed }
                if claimed == INVALID_TRANSITION_HASH && computed == expected
        ));

        // Mismatched claim without validation.
        assert_eq!(run(&boot, &l1, &l2, &tasks, false).await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_run_logs_bootstrap() {
        let trace_store: TraceStorage = Default::default();
        let layer = CollectingLayer::new(trace_store.clone());
        let _guard = tracing_subscriber::Registry::default().with(layer).set_default();

        let boot = boot_info(INVALID_TRANSITION_HASH, &[1]);
        let tasks = ScriptedTaskExecutor::failing("unreachable");
        let computed =
            run(&boot, &TestL1Oracle::default(), &TestL2Oracle::default(), &tasks, false)
                .await
                .unwrap();
        assert_eq!(computed, INVALID_TRANSITION_HASH);

        let infos = trace_store.get_by_level(Level::INFO);
        assert!(infos.iter().any(|log| log.contains("Interop program bootstrapped")));
        assert!(infos.iter().any(|log| log.contains(&boot.l1_head.to_string())));
    }
}
