pub mod accumulators;
pub mod config;
pub mod error;
pub mod metrics;
pub mod pool;
pub mod summary;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use accumulators::{Accumulator, BatchAccumulator, StreamAccumulator, Streaks};
pub use config::StatsConfig;
pub use error::{ConfigError, StatsError};
pub use metrics::{CorrelationMethod, DistanceMetric};
pub use pool::{ObjectSource, SharedPool, Unpooled};
pub use summary::Summary;
