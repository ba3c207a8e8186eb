//! Resolution of the agreed pre-state commitment.

use crate::errors::{InteropProgramError, InteropProgramResult};
use alloy_primitives::B256;
use superstep_interop::{
    SuperRoot, SuperRootError, SuperRootV1, TransitionState, TRANSITION_STATE_VERSION,
};
use superstep_proof::{
    errors::{ConfigError, OracleProviderError},
    L2Oracle,
};

/// Resolves the agreed pre-state commitment into its [TransitionState] and the [SuperRootV1] that
/// the transition started from.
///
/// A bare super root commitment resolves to a transition state at step 0, so both shapes of the
/// agreed pre-state pass through the same checks.
pub async fn parse_agreed_state<L2>(
    agreed_pre_state: B256,
    l2: &L2,
) -> InteropProgramResult<(TransitionState, SuperRootV1)>
where
    L2: L2Oracle + Send + Sync,
{
    let transition_state =
        l2.transition_state_by_root(agreed_pre_state).await.map_err(|e| match e {
            OracleProviderError::UnknownStateVersion(version) => {
                InteropProgramError::IncorrectOutputRootType(version)
            }
            e => InteropProgramError::OracleProvider(e),
        })?;
    if transition_state.version() != TRANSITION_STATE_VERSION {
        return Err(InteropProgramError::IncorrectOutputRootType(transition_state.version()));
    }

    let super_root = SuperRoot::decode(&transition_state.super_root).map_err(|e| match e {
        SuperRootError::UnknownVersion(version) => {
            InteropProgramError::IncorrectOutputRootType(version)
        }
        // No rollup config can exist for a chain ID wider than 64 bits.
        SuperRootError::ChainIdOverflow(chain_id) => {
            InteropProgramError::Config(ConfigError::UnknownChainId(chain_id))
        }
        e => InteropProgramError::MalformedSuperRoot(e),
    })?;

    match super_root {
        SuperRoot::V1(super_root) => Ok((transition_state, super_root)),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::sync::Arc;
    use alloy_primitives::{Bytes, U256};
    use superstep_interop::{OptimisticBlock, OutputRootWithChain};
    use superstep_preimage::MemoryOracle;
    use superstep_proof::{test_utils::TestL2Oracle, OracleL2Oracle};

    fn super_root() -> SuperRootV1 {
        SuperRootV1::new(10, vec![OutputRootWithChain::new(1, B256::repeat_byte(0xaa))])
    }

    #[tokio::test]
    async fn test_parse_step_zero() {
        let root = super_root().hash();
        let l2 = TestL2Oracle::default().with_transition_state(
            root,
            TransitionState::new(SuperRoot::V1(super_root()).encoded().into(), vec![], 0),
        );

        let (transition_state, parsed) = parse_agreed_state(root, &l2).await.unwrap();
        assert_eq!(transition_state.step, 0);
        assert!(transition_state.pending_progress.is_empty());
        assert_eq!(parsed, super_root());
        assert_eq!(l2.calls(), 1);
    }

    #[tokio::test]
    async fn test_parse_intermediate_state() {
        let transition_state = TransitionState::new(
            SuperRoot::V1(super_root()).encoded().into(),
            vec![OptimisticBlock::new(B256::repeat_byte(0x11), B256::repeat_byte(0x22))],
            1,
        );
        let root = transition_state.hash();
        let l2 = TestL2Oracle::default().with_transition_state(root, transition_state.clone());

        let (parsed_state, parsed_root) = parse_agreed_state(root, &l2).await.unwrap();
        assert_eq!(parsed_state, transition_state);
        assert_eq!(parsed_root, super_root());
    }

    #[tokio::test]
    async fn test_parse_rejects_transition_state_version() {
        let mut transition_state =
            TransitionState::new(SuperRoot::V1(super_root()).encoded().into(), vec![], 1);
        transition_state.version = 0x07;
        let l2 = TestL2Oracle::default().with_transition_state(B256::ZERO, transition_state);

        assert!(matches!(
            parse_agreed_state(B256::ZERO, &l2).await.unwrap_err(),
            InteropProgramError::IncorrectOutputRootType(0x07)
        ));
    }

    #[tokio::test]
    async fn test_parse_rejects_super_root_version() {
        let mut encoded = SuperRoot::V1(super_root()).encoded();
        encoded[0] = 0x02;
        let l2 = TestL2Oracle::default()
            .with_transition_state(B256::ZERO, TransitionState::new(encoded.into(), vec![], 0));

        assert!(matches!(
            parse_agreed_state(B256::ZERO, &l2).await.unwrap_err(),
            InteropProgramError::IncorrectOutputRootType(0x02)
        ));
    }

    #[tokio::test]
    async fn test_parse_rejects_unknown_state_version() {
        let oracle = MemoryOracle::default();
        let root = oracle.insert_keccak256(vec![0x07, 0x01, 0x02, 0x03]);
        let l2 = OracleL2Oracle::new(Arc::new(oracle));

        assert!(matches!(
            parse_agreed_state(root, &l2).await.unwrap_err(),
            InteropProgramError::IncorrectOutputRootType(0x07)
        ));
    }

    #[tokio::test]
    async fn test_parse_rejects_wide_chain_id() {
        let mut encoded = SuperRoot::V1(super_root()).encoded();
        encoded[9] = 0x01;
        let l2 = TestL2Oracle::default()
            .with_transition_state(B256::ZERO, TransitionState::new(encoded.into(), vec![], 0));

        let err = parse_agreed_state(B256::ZERO, &l2).await.unwrap_err();
        assert!(matches!(
            err,
            InteropProgramError::Config(ConfigError::UnknownChainId(id))
                if id == (U256::from(1) << 248usize) + U256::from(1)
        ));
        assert!(err.to_string().starts_with("no rollup config available for chain ID "));
    }

    #[tokio::test]
    async fn test_parse_rejects_malformed_super_root() {
        let l2 = TestL2Oracle::default().with_transition_state(
            B256::ZERO,
            TransitionState::new(Bytes::from_static(&[0x01, 0x00, 0x00]), vec![], 0),
        );

        let err = parse_agreed_state(B256::ZERO, &l2).await.unwrap_err();
        assert!(matches!(
            err,
            InteropProgramError::MalformedSuperRoot(SuperRootError::UnexpectedLength(3))
        ));
        assert!(err.to_string().starts_with("invalid super root: "));
    }

    #[tokio::test]
    async fn test_parse_propagates_oracle_error() {
        let l2 = TestL2Oracle::default();
        assert!(matches!(
            parse_agreed_state(B256::ZERO, &l2).await.unwrap_err(),
            InteropProgramError::OracleProvider(_)
        ));
    }
}
