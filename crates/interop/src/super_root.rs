//! The [SuperRoot] type.
//!
//! Represents a snapshot of the state of the superchain at a given integer timestamp.

use crate::{
    errors::{SuperRootError, SuperRootResult},
    SUPER_ROOT_VERSION_V1,
};
use alloc::vec::Vec;
use alloy_primitives::{keccak256, B256, U256};
use alloy_rlp::BufMut;

/// The encoded length of the version byte and timestamp of a [SuperRootV1].
const SUPER_ROOT_V1_PREFIX_LENGTH: usize = 1 + 8;

/// The encoded length of a single [OutputRootWithChain].
const OUTPUT_ROOT_WITH_CHAIN_LENGTH: usize = 32 + 32;

/// The [SuperRoot] is the versioned snapshot of the superchain at a given timestamp. The leading
/// byte of the encoding selects the variant; unknown versions are rejected rather than defaulted.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(any(feature = "arbitrary", test), derive(arbitrary::Arbitrary))]
pub enum SuperRoot {
    /// Version 1 of the super root encoding.
    V1(SuperRootV1),
}

impl SuperRoot {
    /// Returns the version byte of the [SuperRoot].
    pub const fn version(&self) -> u8 {
        match self {
            Self::V1(_) => SUPER_ROOT_VERSION_V1,
        }
    }

    /// Decodes a [SuperRoot] from its full encoding, dispatching on the version byte.
    pub fn decode(buf: &[u8]) -> SuperRootResult<Self> {
        let Some(&version) = buf.first() else {
            return Err(SuperRootError::Empty);
        };

        match version {
            SUPER_ROOT_VERSION_V1 => SuperRootV1::decode(buf).map(Self::V1),
            _ => Err(SuperRootError::UnknownVersion(version)),
        }
    }

    /// Encode the [SuperRoot] into the given buffer.
    pub fn encode(&self, out: &mut dyn BufMut) {
        match self {
            Self::V1(super_root) => super_root.encode(out),
        }
    }

    /// Returns the encoded length of the [SuperRoot].
    pub fn encoded_length(&self) -> usize {
        match self {
            Self::V1(super_root) => super_root.encoded_length(),
        }
    }

    /// Returns the encoding of the [SuperRoot] as a new buffer.
    pub fn encoded(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_length());
        self.encode(&mut buf);
        buf
    }

    /// Hashes the encoded [SuperRoot] using [keccak256].
    pub fn hash(&self) -> B256 {
        keccak256(self.encoded())
    }
}

impl From<SuperRootV1> for SuperRoot {
    fn from(super_root: SuperRootV1) -> Self {
        Self::V1(super_root)
    }
}

/// Version 1 of the super root: a timestamp and the output roots of every chain in the dependency
/// set, in a fixed order.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(any(feature = "arbitrary", test), derive(arbitrary::Arbitrary))]
pub struct SuperRootV1 {
    /// The timestamp of the superchain snapshot, in seconds.
    pub timestamp: u64,
    /// The chain IDs and output root commitments of all chains within the dependency set.
    pub output_roots: Vec<OutputRootWithChain>,
}

impl SuperRootV1 {
    /// Create a new [SuperRootV1] with the given timestamp and output roots.
    pub fn new(timestamp: u64, mut output_roots: Vec<OutputRootWithChain>) -> Self {
        // Guarantee that the output roots are sorted by chain ID.
        output_roots.sort_by_key(|r| r.chain_id);
        Self { timestamp, output_roots }
    }

    /// Decodes a [SuperRootV1] from its full encoding, including the version byte.
    ///
    /// The encoding must hold at least one output root.
    pub fn decode(buf: &[u8]) -> SuperRootResult<Self> {
        let Some(&version) = buf.first() else {
            return Err(SuperRootError::Empty);
        };
        if version != SUPER_ROOT_VERSION_V1 {
            return Err(SuperRootError::UnknownVersion(version));
        }

        if buf.len() < SUPER_ROOT_V1_PREFIX_LENGTH + OUTPUT_ROOT_WITH_CHAIN_LENGTH ||
            (buf.len() - SUPER_ROOT_V1_PREFIX_LENGTH) % OUTPUT_ROOT_WITH_CHAIN_LENGTH != 0
        {
            return Err(SuperRootError::UnexpectedLength(buf.len()));
        }

        let mut timestamp = [0u8; 8];
        timestamp.copy_from_slice(&buf[1..SUPER_ROOT_V1_PREFIX_LENGTH]);

        let output_roots = buf[SUPER_ROOT_V1_PREFIX_LENGTH..]
            .chunks_exact(OUTPUT_ROOT_WITH_CHAIN_LENGTH)
            .map(|chunk| {
                let (chain_id, output_root) = chunk.split_at(32);

                // The chain ID is encoded as a uint256, but only 64 bit chain IDs are supported.
                if chain_id[..24].iter().any(|b| *b != 0) {
                    return Err(SuperRootError::ChainIdOverflow(U256::from_be_slice(chain_id)));
                }
                let mut id = [0u8; 8];
                id.copy_from_slice(&chain_id[24..]);

                Ok(OutputRootWithChain::new(u64::from_be_bytes(id), B256::from_slice(output_root)))
            })
            .collect::<SuperRootResult<Vec<_>>>()?;

        Ok(Self { timestamp: u64::from_be_bytes(timestamp), output_roots })
    }

    /// Encode the [SuperRootV1] into the given buffer.
    pub fn encode(&self, out: &mut dyn BufMut) {
        out.put_u8(SUPER_ROOT_VERSION_V1);

        out.put_u64(self.timestamp);
        for output_root in &self.output_roots {
            out.put_slice(U256::from(output_root.chain_id).to_be_bytes::<32>().as_slice());
            out.put_slice(output_root.output_root.as_slice());
        }
    }

    /// Returns the encoded length of the [SuperRootV1].
    pub fn encoded_length(&self) -> usize {
        SUPER_ROOT_V1_PREFIX_LENGTH + OUTPUT_ROOT_WITH_CHAIN_LENGTH * self.output_roots.len()
    }

    /// Hashes the encoded [SuperRootV1] using [keccak256].
    pub fn hash(&self) -> B256 {
        let mut buf = Vec::with_capacity(self.encoded_length());
        self.encode(&mut buf);
        keccak256(&buf)
    }
}

/// A wrapper around an output root hash with the chain ID it belongs to.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(any(feature = "arbitrary", test), derive(arbitrary::Arbitrary))]
pub struct OutputRootWithChain {
    /// The chain ID of the output root.
    pub chain_id: u64,
    /// The output root hash.
    pub output_root: B256,
}

impl OutputRootWithChain {
    /// Create a new [OutputRootWithChain] with the given chain ID and output root hash.
    pub const fn new(chain_id: u64, output_root: B256) -> Self {
        Self { chain_id, output_root }
    }
}
