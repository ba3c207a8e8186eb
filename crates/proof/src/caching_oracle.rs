//! Contains the [CachingOracle], which is a wrapper around a [PreimageOracleClient] and
//! [HintWriterClient] that stores a configurable number of responses in an [LruCache] for quick
//! retrieval.

use alloc::{boxed::Box, sync::Arc, vec::Vec};
use async_trait::async_trait;
use core::num::NonZeroUsize;
use lru::LruCache;
use spin::Mutex;
use superstep_preimage::{
    errors::PreimageOracleResult, HintWriterClient, PreimageKey, PreimageOracleClient,
};

/// A wrapper around a [PreimageOracleClient] and [HintWriterClient] that stores a configurable
/// number of responses in an [LruCache] for quick retrieval.
#[derive(Debug, Clone)]
pub struct CachingOracle<OR, HW>
where
    OR: PreimageOracleClient,
    HW: HintWriterClient,
{
    /// The spin-locked cache that stores the responses from the oracle.
    cache: Arc<Mutex<LruCache<PreimageKey, Vec<u8>>>>,
    /// Oracle reader type.
    oracle_reader: OR,
    /// Hint writer type.
    hint_writer: HW,
}

impl<OR, HW> CachingOracle<OR, HW>
where
    OR: PreimageOracleClient,
    HW: HintWriterClient,
{
    /// Creates a new [CachingOracle] that wraps the given oracle reader and hint writer, and
    /// stores up to `cache_size` responses in the cache. A zero `cache_size` holds one response.
    pub fn new(cache_size: usize, oracle_reader: OR, hint_writer: HW) -> Self {
        let cache_size = NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::MIN);
        Self { cache: Arc::new(Mutex::new(LruCache::new(cache_size))), oracle_reader, hint_writer }
    }

    /// Returns the number of responses currently held in the cache.
    pub fn cached(&self) -> usize {
        self.cache.lock().len()
    }
}

#[async_trait]
impl<OR, HW> PreimageOracleClient for CachingOracle<OR, HW>
where
    OR: PreimageOracleClient + Sync,
    HW: HintWriterClient + Sync,
{
    async fn get(&self, key: PreimageKey) -> PreimageOracleResult<Vec<u8>> {
        if let Some(value) = self.cache.lock().get(&key) {
            return Ok(value.clone());
        }

        let value = self.oracle_reader.get(key).await?;
        self.cache.lock().put(key, value.clone());
        Ok(value)
    }

    async fn get_exact(&self, key: PreimageKey, buf: &mut [u8]) -> PreimageOracleResult<()> {
        if let Some(value) = self.cache.lock().get(&key) {
            if value.len() == buf.len() {
                buf.copy_from_slice(value.as_slice());
                return Ok(());
            }
        }

        // The reader enforces the buffer length, so only exact reads enter the cache.
        self.oracle_reader.get_exact(key, buf).await?;
        self.cache.lock().put(key, buf.to_vec());
        Ok(())
    }
}

#[async_trait]
impl<OR, HW> HintWriterClient for CachingOracle<OR, HW>
where
    OR: PreimageOracleClient + Sync,
    HW: HintWriterClient + Sync,
{
    async fn write(&self, hint: &str) -> PreimageOracleResult<()> {
        self.hint_writer.write(hint).await
    }
}
