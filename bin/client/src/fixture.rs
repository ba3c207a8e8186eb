//! Recorded step fixtures, and their replay through the preimage oracle.

use crate::{
    errors::InteropProgramError,
    replay::{RecordedDerivation, ReplayTaskExecutor},
};
use alloc::{sync::Arc, vec::Vec};
use alloy_primitives::{Bytes, B256};
use serde::{Deserialize, Serialize};
use superstep_preimage::{errors::PreimageOracleError, MemoryOracle, PreimageKey};
use superstep_proof::{
    errors::OracleProviderError, BootInfo, CachingOracle, OracleL1Oracle, OracleL2Oracle,
};
use thiserror::Error;
use tracing::info;

/// The number of preimages held by the caching oracle during a replay.
pub const ORACLE_LRU_SIZE: usize = 1024;

/// A preimage served to the step, under its rendered key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreimageEntry {
    /// The 32-byte preimage key, type byte first.
    pub key: B256,
    /// The preimage.
    pub value: Bytes,
}

/// Everything needed to re-run one step: the boot information, the preimages the oracle serves
/// and the recorded derivation results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    /// The boot information, served to the step through the local preimage keys.
    pub boot: BootInfo,
    /// The non-local preimages.
    #[serde(default)]
    pub preimages: Vec<PreimageEntry>,
    /// The recorded derivation results.
    #[serde(default)]
    pub derivations: Vec<RecordedDerivation>,
}

/// An error raised while replaying a [Fixture].
#[derive(Error, Debug)]
pub enum FixtureError {
    /// A preimage key carries an unknown type byte.
    #[error("invalid preimage key {0}: {1}")]
    InvalidPreimageKey(B256, PreimageOracleError),
    /// The boot information could not be served or loaded.
    #[error(transparent)]
    OracleProvider(#[from] OracleProviderError),
    /// The step failed.
    #[error(transparent)]
    Program(#[from] InteropProgramError),
}

impl Fixture {
    /// Builds a [MemoryOracle] serving the fixture's preimages and the boot information's local
    /// keys.
    pub fn oracle(&self) -> Result<MemoryOracle, FixtureError> {
        let oracle = MemoryOracle::default();
        for PreimageEntry { key, value } in &self.preimages {
            let preimage_key = PreimageKey::try_from(key.0)
                .map_err(|e| FixtureError::InvalidPreimageKey(*key, e))?;
            oracle.insert(preimage_key, value.to_vec());
        }
        for (key, value) in self.boot.local_preimages()? {
            oracle.insert(key, value);
        }
        Ok(oracle)
    }

    /// Builds a [ReplayTaskExecutor] over the recorded derivations.
    pub fn tasks(&self) -> ReplayTaskExecutor {
        ReplayTaskExecutor::new(self.derivations.iter().cloned())
    }
}

/// Replays the step recorded in `fixture`, returning the computed post-state commitment.
///
/// The boot information is loaded back through the oracle, as the step program would read it.
pub async fn execute(fixture: &Fixture, validate_claim: bool) -> Result<B256, FixtureError> {
    let memory = fixture.oracle()?;
    info!(
        target: "client_interop",
        preimages = memory.len(),
        derivations = fixture.derivations.len(),
        "Seeded preimage oracle from fixture"
    );

    let oracle = Arc::new(CachingOracle::new(ORACLE_LRU_SIZE, memory.clone(), memory));
    let boot = BootInfo::load(oracle.as_ref()).await?;
    let l1 = OracleL1Oracle::new(oracle.clone());
    let l2 = OracleL2Oracle::new(oracle);

    Ok(crate::run(&boot, &l1, &l2, &fixture.tasks(), validate_claim).await?)
}
