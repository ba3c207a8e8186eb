//! Contains the [MemoryOracle], a preimage oracle backed by an in-memory map.

use crate::{
    errors::{PreimageOracleError, PreimageOracleResult},
    HintWriterClient, PreimageKey, PreimageOracleClient,
};
use alloc::{boxed::Box, collections::BTreeMap, string::String, sync::Arc, vec::Vec};
use alloy_primitives::{keccak256, B256};
use async_trait::async_trait;
use spin::Mutex;
use tracing::trace;

/// A [PreimageOracleClient] and [HintWriterClient] that serves preimages out of a prebuilt map.
///
/// Hints are recorded but otherwise ignored, since every preimage is available up front. Clones
/// share the same map and hint log.
#[derive(Debug, Clone, Default)]
pub struct MemoryOracle {
    preimages: Arc<Mutex<BTreeMap<PreimageKey, Vec<u8>>>>,
    hints: Arc<Mutex<Vec<String>>>,
}

impl MemoryOracle {
    /// Creates a new [MemoryOracle] from a prebuilt preimage map.
    pub fn new(preimages: BTreeMap<PreimageKey, Vec<u8>>) -> Self {
        Self { preimages: Arc::new(Mutex::new(preimages)), hints: Default::default() }
    }

    /// Inserts a preimage under the given key, replacing any previous value.
    pub fn insert(&self, key: PreimageKey, value: Vec<u8>) {
        self.preimages.lock().insert(key, value);
    }

    /// Inserts a preimage under its keccak256 key, returning the full digest.
    pub fn insert_keccak256(&self, value: Vec<u8>) -> B256 {
        let digest = keccak256(&value);
        self.insert(PreimageKey::new_keccak256(*digest), value);
        digest
    }

    /// Returns the number of preimages held by the oracle.
    pub fn len(&self) -> usize {
        self.preimages.lock().len()
    }

    /// Returns `true` if the oracle holds no preimages.
    pub fn is_empty(&self) -> bool {
        self.preimages.lock().is_empty()
    }

    /// Returns the hints written to the oracle so far, in order.
    pub fn hints(&self) -> Vec<String> {
        self.hints.lock().clone()
    }
}

#[async_trait]
impl PreimageOracleClient for MemoryOracle {
    async fn get(&self, key: PreimageKey) -> PreimageOracleResult<Vec<u8>> {
        trace!(target: "memory_oracle", "Reading preimage for key {key}");
        self.preimages.lock().get(&key).cloned().ok_or(PreimageOracleError::KeyNotFound)
    }

    async fn get_exact(&self, key: PreimageKey, buf: &mut [u8]) -> PreimageOracleResult<()> {
        let preimages = self.preimages.lock();
        let value = preimages.get(&key).ok_or(PreimageOracleError::KeyNotFound)?;
        if value.len() != buf.len() {
            return Err(PreimageOracleError::BufferLengthMismatch(buf.len(), value.len()));
        }
        buf.copy_from_slice(value.as_slice());
        Ok(())
    }
}

#[async_trait]
impl HintWriterClient for MemoryOracle {
    async fn write(&self, hint: &str) -> PreimageOracleResult<()> {
        trace!(target: "memory_oracle", "Received hint \"{hint}\"");
        self.hints.lock().push(hint.into());
        Ok(())
    }
}
