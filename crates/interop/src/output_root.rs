//! The [OutputRootV0] type.

use crate::{errors::OutputRootError, OUTPUT_ROOT_VERSION_V0};
use alloy_primitives::{keccak256, B256};

/// The [OutputRootV0] is the preimage of a single chain's output root commitment.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(any(feature = "arbitrary", test), derive(arbitrary::Arbitrary))]
pub struct OutputRootV0 {
    /// The state root of the L2 block.
    pub state_root: B256,
    /// The storage root of the `L2ToL1MessagePasser` predeploy.
    pub message_passer_storage_root: B256,
    /// The hash of the L2 block.
    pub block_hash: B256,
}

impl OutputRootV0 {
    /// The encoded length of an [OutputRootV0] preimage.
    pub const ENCODED_LENGTH: usize = 128;

    /// Create a new [OutputRootV0].
    pub const fn new(
        state_root: B256,
        message_passer_storage_root: B256,
        block_hash: B256,
    ) -> Self {
        Self { state_root, message_passer_storage_root, block_hash }
    }

    /// Returns the preimage of the output root.
    pub fn encode(&self) -> [u8; Self::ENCODED_LENGTH] {
        let mut buf = [0u8; Self::ENCODED_LENGTH];
        buf[..32].copy_from_slice(OUTPUT_ROOT_VERSION_V0.as_slice());
        buf[32..64].copy_from_slice(self.state_root.as_slice());
        buf[64..96].copy_from_slice(self.message_passer_storage_root.as_slice());
        buf[96..].copy_from_slice(self.block_hash.as_slice());
        buf
    }

    /// Decodes an [OutputRootV0] from its preimage.
    pub fn decode(buf: &[u8]) -> Result<Self, OutputRootError> {
        if buf.len() != Self::ENCODED_LENGTH {
            return Err(OutputRootError::UnexpectedLength(buf.len()));
        }
        if buf[..32] != OUTPUT_ROOT_VERSION_V0[..] {
            return Err(OutputRootError::UnsupportedVersion);
        }

        Ok(Self {
            state_root: B256::from_slice(&buf[32..64]),
            message_passer_storage_root: B256::from_slice(&buf[64..96]),
            block_hash: B256::from_slice(&buf[96..]),
        })
    }

    /// Returns the output root commitment, the [keccak256] hash of the preimage.
    pub fn hash(&self) -> B256 {
        keccak256(self.encode())
    }
}
