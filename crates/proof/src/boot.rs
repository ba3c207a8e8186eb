//! This module contains the prologue phase of the step program, pulling in the boot information
//! through the `PreimageOracle` ABI as local keys.

use crate::{errors::OracleProviderError, ConfigRegistry};
use alloc::vec::Vec;
use alloy_genesis::ChainConfig;
use alloy_primitives::{B256, U256};
use op_alloy_genesis::RollupConfig;
use serde::{Deserialize, Serialize};
use superstep_preimage::{PreimageKey, PreimageOracleClient};

/// The local key ident for the L1 head hash.
pub const L1_HEAD_KEY: U256 = U256::from_be_slice(&[1]);

/// The local key ident for the agreed superchain pre-state commitment.
pub const AGREED_PRE_STATE_KEY: U256 = U256::from_be_slice(&[2]);

/// The local key ident for the claimed superchain post-state commitment.
pub const CLAIMED_POST_STATE_KEY: U256 = U256::from_be_slice(&[3]);

/// The local key ident for the L2 claim timestamp.
pub const L2_CLAIM_TIMESTAMP_KEY: U256 = U256::from_be_slice(&[4]);

/// The local key ident for the JSON array of L2 chain configs.
pub const L2_CHAIN_CONFIGS_KEY: U256 = U256::from_be_slice(&[5]);

/// The local key ident for the JSON array of rollup configs.
pub const L2_ROLLUP_CONFIGS_KEY: U256 = U256::from_be_slice(&[6]);

/// The boot information for the step program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BootInfo {
    /// The L1 head hash containing the safe L2 chain data that may reproduce the post-state.
    pub l1_head: B256,
    /// The agreed upon superchain pre-state commitment.
    pub agreed_pre_state: B256,
    /// The claimed (disputed) superchain post-state commitment.
    pub claimed_post_state: B256,
    /// The L2 claim timestamp.
    pub claimed_l2_timestamp: u64,
    /// The configurations of every chain in the dependency set.
    pub configs: ConfigRegistry,
}

impl BootInfo {
    /// Load the boot information from the preimage oracle.
    ///
    /// ## Takes
    /// - `oracle`: The preimage oracle reader.
    ///
    /// ## Returns
    /// - `Ok(BootInfo)`: The boot information.
    /// - `Err(_)`: Failed to load the boot information.
    pub async fn load<O>(oracle: &O) -> Result<Self, OracleProviderError>
    where
        O: PreimageOracleClient + Send + Sync,
    {
        let mut l1_head: B256 = B256::ZERO;
        oracle
            .get_exact(PreimageKey::new_local(L1_HEAD_KEY.to()), l1_head.as_mut())
            .await
            .map_err(OracleProviderError::Preimage)?;

        let mut agreed_pre_state: B256 = B256::ZERO;
        oracle
            .get_exact(PreimageKey::new_local(AGREED_PRE_STATE_KEY.to()), agreed_pre_state.as_mut())
            .await
            .map_err(OracleProviderError::Preimage)?;

        let mut claimed_post_state: B256 = B256::ZERO;
        oracle
            .get_exact(
                PreimageKey::new_local(CLAIMED_POST_STATE_KEY.to()),
                claimed_post_state.as_mut(),
            )
            .await
            .map_err(OracleProviderError::Preimage)?;

        let claimed_l2_timestamp = u64::from_be_bytes(
            oracle
                .get(PreimageKey::new_local(L2_CLAIM_TIMESTAMP_KEY.to()))
                .await
                .map_err(OracleProviderError::Preimage)?
                .as_slice()
                .try_into()
                .map_err(OracleProviderError::SliceConversion)?,
        );

        let ser_chain_cfgs = oracle
            .get(PreimageKey::new_local(L2_CHAIN_CONFIGS_KEY.to()))
            .await
            .map_err(OracleProviderError::Preimage)?;
        let chain_configs: Vec<ChainConfig> =
            serde_json::from_slice(&ser_chain_cfgs).map_err(OracleProviderError::Serde)?;

        let ser_rollup_cfgs = oracle
            .get(PreimageKey::new_local(L2_ROLLUP_CONFIGS_KEY.to()))
            .await
            .map_err(OracleProviderError::Preimage)?;
        let rollup_configs: Vec<RollupConfig> =
            serde_json::from_slice(&ser_rollup_cfgs).map_err(OracleProviderError::Serde)?;

        debug!(
            target: "boot_loader",
            rollup_configs = rollup_configs.len(),
            chain_configs = chain_configs.len(),
            "Loaded chain configurations"
        );

        Ok(Self {
            l1_head,
            agreed_pre_state,
            claimed_post_state,
            claimed_l2_timestamp,
            configs: ConfigRegistry::new(rollup_configs, chain_configs),
        })
    }

    /// Renders the boot information as the local preimages that [BootInfo::load] reads back.
    pub fn local_preimages(&self) -> Result<Vec<(PreimageKey, Vec<u8>)>, OracleProviderError> {
        let chain_configs = self.configs.chain_configs().collect::<Vec<_>>();
        let rollup_configs = self.configs.rollup_configs().collect::<Vec<_>>();

        Ok(alloc::vec![
            (PreimageKey::new_local(L1_HEAD_KEY.to()), self.l1_head.to_vec()),
            (PreimageKey::new_local(AGREED_PRE_STATE_KEY.to()), self.agreed_pre_state.to_vec()),
            (PreimageKey::new_local(CLAIMED_POST_STATE_KEY.to()), self.claimed_post_state.to_vec()),
            (
                PreimageKey::new_local(L2_CLAIM_TIMESTAMP_KEY.to()),
                self.claimed_l2_timestamp.to_be_bytes().to_vec(),
            ),
            (
                PreimageKey::new_local(L2_CHAIN_CONFIGS_KEY.to()),
                serde_json::to_vec(&chain_configs).map_err(OracleProviderError::Serde)?,
            ),
            (
                PreimageKey::new_local(L2_ROLLUP_CONFIGS_KEY.to()),
                serde_json::to_vec(&rollup_configs).map_err(OracleProviderError::Serde)?,
            ),
        ])
    }
}
