//! The [TransitionState] and [OptimisticBlock] types.
//!
//! A [TransitionState] is a super-structure of the [SuperRoot] that represents the progress of a
//! pending superchain state transition from one [SuperRoot] to the next.
//!
//! [SuperRoot]: crate::SuperRoot

use crate::TRANSITION_STATE_VERSION;
use alloc::vec::Vec;
use alloy_primitives::{keccak256, Bytes, B256};
use alloy_rlp::{Buf, BufMut, Decodable, Encodable, Header, RlpDecodable, RlpEncodable};

/// The [TransitionState] is the agreed super root plus the blocks that have been optimistically
/// derived on top of it so far.
///
/// The super root is held in its encoded form. It is only decoded once the version of the
/// [TransitionState] itself has been checked.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(any(feature = "arbitrary", test), derive(arbitrary::Arbitrary))]
pub struct TransitionState {
    /// The version byte of the encoding.
    pub version: u8,
    /// The encoded super root that the pending transition started from.
    pub super_root: Bytes,
    /// The progress that has been made in the pending superchain state transition.
    pub pending_progress: Vec<OptimisticBlock>,
    /// The step number of the pending superchain state transition.
    pub step: u64,
}

impl TransitionState {
    /// Create a new intermediate [TransitionState] with the given super root encoding, pending
    /// progress, and step number.
    pub const fn new(super_root: Bytes, pending_progress: Vec<OptimisticBlock>, step: u64) -> Self {
        Self { version: TRANSITION_STATE_VERSION, super_root, pending_progress, step }
    }

    /// Returns the version byte of the [TransitionState].
    pub const fn version(&self) -> u8 {
        self.version
    }

    /// Hashes the encoded [TransitionState] using [keccak256].
    pub fn hash(&self) -> B256 {
        let mut buf = Vec::with_capacity(self.length());
        self.encode(&mut buf);
        keccak256(&buf)
    }

    /// The length of the RLP list payload, excluding the version byte and the list header.
    fn payload_length(&self) -> usize {
        self.super_root.length() + self.pending_progress.length() + self.step.length()
    }
}

impl Encodable for TransitionState {
    fn encode(&self, out: &mut dyn BufMut) {
        out.put_u8(self.version);

        Header { list: true, payload_length: self.payload_length() }.encode(out);
        self.super_root.encode(out);
        self.pending_progress.encode(out);
        self.step.encode(out);
    }

    fn length(&self) -> usize {
        let payload_length = self.payload_length();
        1 + alloy_rlp::length_of_length(payload_length) + payload_length
    }
}

impl Decodable for TransitionState {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        if buf.is_empty() {
            return Err(alloy_rlp::Error::InputTooShort);
        }

        // The version byte is carried through as-is; callers decide which versions they accept.
        let version = buf[0];
        buf.advance(1);

        let header = Header::decode(buf)?;
        if !header.list {
            return Err(alloy_rlp::Error::UnexpectedString);
        }
        let remaining = buf.len();
        if remaining < header.payload_length {
            return Err(alloy_rlp::Error::InputTooShort);
        }

        let super_root = Bytes::decode(buf)?;
        let pending_progress = Vec::<OptimisticBlock>::decode(buf)?;
        let step = u64::decode(buf)?;

        let consumed = remaining - buf.len();
        if consumed != header.payload_length {
            return Err(alloy_rlp::Error::ListLengthMismatch {
                expected: header.payload_length,
                got: consumed,
            });
        }

        Ok(Self { version, super_root, pending_progress, step })
    }
}

/// A chain's block that has been derived, but not yet checked against the rest of the superchain.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, RlpEncodable, RlpDecodable)]
#[cfg_attr(any(feature = "arbitrary", test), derive(arbitrary::Arbitrary))]
pub struct OptimisticBlock {
    /// The hash of the derived block.
    pub block_hash: B256,
    /// The output root of the derived block.
    pub output_root: B256,
}

impl OptimisticBlock {
    /// Create a new [OptimisticBlock] with the given block hash and output root hash.
    pub const fn new(block_hash: B256, output_root: B256) -> Self {
        Self { block_hash, output_root }
    }
}
