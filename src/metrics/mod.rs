mod correlation_method;
mod distance_metric;

pub use correlation_method::CorrelationMethod;
pub use distance_metric::DistanceMetric;
