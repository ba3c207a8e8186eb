//! This module contains the [HintType] enum.

use alloc::{string::String, vec::Vec};
use alloy_primitives::hex;
use core::fmt::Display;

/// The [HintType] enum is used to specify the type of hint that was sent to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HintType {
    /// A hint that specifies the preimage of the agreed upon pre-state claim.
    AgreedPreState,
    /// A hint that specifies the preimage of an L2 output root, by chain ID.
    L2OutputRoot,
    /// A hint that specifies a keccak256 preimage on layer 1.
    L1Preimage,
    /// A hint that specifies a keccak256 preimage on layer 2, by chain ID.
    L2Preimage,
}

impl HintType {
    /// Encodes the hint type as a string.
    pub fn encode_with(&self, data: &[&[u8]]) -> String {
        let concatenated = hex::encode(data.iter().copied().flatten().copied().collect::<Vec<_>>());
        alloc::format!("{} {}", self, concatenated)
    }
}

impl From<HintType> for &str {
    fn from(value: HintType) -> Self {
        match value {
            HintType::AgreedPreState => "agreed-pre-state",
            HintType::L2OutputRoot => "l2-output-root",
            HintType::L1Preimage => "l1-preimage",
            HintType::L2Preimage => "l2-preimage",
        }
    }
}

impl Display for HintType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s: &str = (*self).into();
        write!(f, "{}", s)
    }
}
