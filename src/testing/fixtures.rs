//! Reference datasets with known statistics.

/// Population covariance with [`COVARIANCE_Y`] is `4.191666666666666`.
pub const COVARIANCE_X: [f64; 6] = [1.0, 2.0, 3.5, 3.7, 8.0, 12.0];
pub const COVARIANCE_Y: [f64; 6] = [0.5, 1.0, 2.1, 3.4, 3.4, 4.0];

/// Shorter than the covariance pair.
pub const SHORT_SERIES: [f64; 3] = [10.0, -51.2, 8.0];

/// Two positive-run maxima of 3 and a non-positive run of 3.
pub const STREAK_SERIES: [f64; 8] = [1.0, 2.0, -1.0, -1.0, -1.0, 1.0, 1.0, 1.0];
