use crate::accumulators::{BatchAccumulator, StreamAccumulator};
use crate::config::StatsConfig;
use crate::pool::SharedPool;
use log::warn;
use std::sync::OnceLock;

static BATCH_POOL: OnceLock<SharedPool<BatchAccumulator>> = OnceLock::new();
static STREAM_POOL: OnceLock<SharedPool<StreamAccumulator>> = OnceLock::new();

/// Process-wide pool of batch accumulators.
pub fn batch_pool() -> &'static SharedPool<BatchAccumulator> {
    BATCH_POOL.get_or_init(SharedPool::new)
}

/// Process-wide pool of stream accumulators.
pub fn stream_pool() -> &'static SharedPool<StreamAccumulator> {
    STREAM_POOL.get_or_init(SharedPool::new)
}

fn configure<T: Default>(cell: &OnceLock<SharedPool<T>>, config: &StatsConfig) -> bool {
    cell.set(SharedPool::from_config(config)).is_ok()
}

/// Sizes both process-wide pools from `config.pool_capacity`.
///
/// Only takes effect before the first call to [`batch_pool`] or
/// [`stream_pool`]; returns `false` when either pool was already initialised.
pub fn configure_global_pools(config: &StatsConfig) -> bool {
    let batch = configure(&BATCH_POOL, config);
    let stream = configure(&STREAM_POOL, config);
    if !(batch && stream) {
        warn!(
            "global pools already initialised; capacity {} not applied to all",
            config.pool_capacity
        );
    }
    batch && stream
}
