//! Constants for the superchain commitment formats.

use alloy_primitives::{b256, B256};

/// The version byte of a [SuperRootV1] encoding.
///
/// [SuperRootV1]: crate::SuperRootV1
pub const SUPER_ROOT_VERSION_V1: u8 = 1;

/// The version byte of an intermediate [TransitionState] encoding.
///
/// [TransitionState]: crate::TransitionState
pub const TRANSITION_STATE_VERSION: u8 = 255;

/// The version of an [OutputRootV0] preimage, occupying the first 32 bytes of the preimage.
///
/// [OutputRootV0]: crate::OutputRootV0
pub const OUTPUT_ROOT_VERSION_V0: B256 = B256::ZERO;

/// The literal whose hash marks an invalid transition.
pub const INVALID_TRANSITION: &[u8] = b"invalid";

/// The commitment for an invalid transition, `keccak256("invalid")`. Once a step resolves to this
/// commitment, every following step resolves to it as well.
pub const INVALID_TRANSITION_HASH: B256 =
    b256!("ffd7db0f9d5cdeb49c4c9eba649d4dc6d852d64671e65488e57f58584992ac68");

#[cfg(test)]
mod test {
    use super::*;
    use alloy_primitives::keccak256;

    #[test]
    fn test_invalid_transition_hash() {
        assert_eq!(keccak256(INVALID_TRANSITION), INVALID_TRANSITION_HASH);
    }
}
