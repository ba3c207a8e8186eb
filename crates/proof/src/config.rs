//! Chain configuration for the superchain step program.
//!
//! Each chain in the dependency set is described by an op-node [RollupConfig], which carries the
//! genesis and block time that [target_block_number] maps a timestamp with, and an L2
//! [ChainConfig] for execution.

use crate::errors::{ConfigError, TargetBlockError};
use alloc::collections::BTreeMap;
use alloy_genesis::ChainConfig;
use op_alloy_genesis::RollupConfig;
use serde::{Deserialize, Serialize};

/// Returns the number of the L2 block of `config`'s chain with the given timestamp.
pub const fn target_block_number(
    config: &RollupConfig,
    timestamp: u64,
) -> Result<u64, TargetBlockError> {
    if config.block_time == 0 {
        return Err(TargetBlockError::ZeroBlockTime);
    }
    if timestamp < config.genesis.l2_time {
        return Err(TargetBlockError::BeforeGenesis { timestamp, genesis: config.genesis.l2_time });
    }

    let blocks_since_genesis = (timestamp - config.genesis.l2_time) / config.block_time;
    Ok(config.genesis.l2.number + blocks_since_genesis)
}

/// A registry of the configurations of every chain in the dependency set, keyed by chain ID.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigRegistry {
    rollup_configs: BTreeMap<u64, RollupConfig>,
    chain_configs: BTreeMap<u64, ChainConfig>,
}

impl ConfigRegistry {
    /// Builds a [ConfigRegistry] from lists of rollup and chain configs. Later entries for the same
    /// chain ID replace earlier ones.
    pub fn new(
        rollup_configs: impl IntoIterator<Item = RollupConfig>,
        chain_configs: impl IntoIterator<Item = ChainConfig>,
    ) -> Self {
        Self {
            rollup_configs: rollup_configs.into_iter().map(|cfg| (cfg.l2_chain_id, cfg)).collect(),
            chain_configs: chain_configs.into_iter().map(|cfg| (cfg.chain_id, cfg)).collect(),
        }
    }

    /// Returns the [RollupConfig] of the given chain.
    pub fn rollup_config(&self, chain_id: u64) -> Result<&RollupConfig, ConfigError> {
        self.rollup_configs.get(&chain_id).ok_or(ConfigError::MissingRollupConfig(chain_id))
    }

    /// Returns the L2 [ChainConfig] of the given chain.
    pub fn chain_config(&self, chain_id: u64) -> Result<&ChainConfig, ConfigError> {
        self.chain_configs.get(&chain_id).ok_or(ConfigError::MissingChainConfig(chain_id))
    }

    /// Returns all rollup configs, in ascending chain ID order.
    pub fn rollup_configs(&self) -> impl Iterator<Item = &RollupConfig> {
        self.rollup_configs.values()
    }

    /// Returns all L2 chain configs, in ascending chain ID order.
    pub fn chain_configs(&self) -> impl Iterator<Item = &ChainConfig> {
        self.chain_configs.values()
    }
}
