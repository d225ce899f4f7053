use crate::metrics::{CorrelationMethod, DistanceMetric};
use thiserror::Error;

/// Contract violations raised by pairwise operations.
///
/// Undefined results (empty or mismatched inputs) are not errors; they are
/// reported as `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("{operation} needs the original insertion order to be retained")]
    OriginalNotRetained { operation: &'static str },

    #[error("distance not implemented: {0}")]
    UnsupportedDistance(DistanceMetric),

    #[error("correlation not implemented: {0}")]
    UnsupportedCorrelation(CorrelationMethod),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}
