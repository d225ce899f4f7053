use crate::accumulators::{Accumulator, BatchAccumulator};
use crate::error::StatsError;
use crate::metrics::{CorrelationMethod, DistanceMetric};
use log::debug;

/// Pairwise statistics between two index-aligned batch accumulators.
///
/// Both sides must retain their insertion order; a missing copy, or an
/// unimplemented metric/method, is an `Err`. Empty or differently sized
/// datasets give `Ok(NaN)`.
impl BatchAccumulator {
    /// Common length of both datasets, if non-zero and equal.
    #[inline]
    fn aligned_len(&self, other: &Self) -> Option<usize> {
        let n = self.len();
        (n != 0 && n == other.len()).then_some(n)
    }

    /// Distance to `other`.
    ///
    /// `Euclidean` is `Σ(xᵢ - yᵢ)² / n²` (no square root) and `Manhattan` is
    /// `Σ|xᵢ - yᵢ| / n`. `Chebyshev` is rejected.
    pub fn distance_to(&self, other: &Self, metric: DistanceMetric) -> Result<f64, StatsError> {
        let term: fn(f64, f64) -> f64 = match metric {
            DistanceMetric::Euclidean => |x, y| (x - y) * (x - y),
            DistanceMetric::Manhattan => |x, y| (x - y).abs(),
            DistanceMetric::Chebyshev => {
                debug!("distance requested with unsupported metric {metric}");
                return Err(StatsError::UnsupportedDistance(metric));
            }
        };
        let xs = self.retained_original("distance_to")?;
        let ys = other.retained_original("distance_to")?;
        let Some(n) = self.aligned_len(other) else {
            return Ok(f64::NAN);
        };

        let total: f64 = xs.iter().zip(ys).map(|(&x, &y)| term(x, y)).sum();
        let n = n as f64;
        Ok(match metric {
            DistanceMetric::Euclidean => total / (n * n),
            _ => total / n,
        })
    }

    /// Population covariance `Σ(xᵢ - x̄)(yᵢ - ȳ) / n`, over insertion order.
    pub fn covariance_population(&self, other: &Self) -> Result<f64, StatsError> {
        let xs = self.retained_original("covariance_population")?;
        let ys = other.retained_original("covariance_population")?;
        let Some(n) = self.aligned_len(other) else {
            return Ok(f64::NAN);
        };

        let mx = self.mean();
        let my = other.mean();
        let ss: f64 = xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| (y - my) * (x - mx))
            .sum();
        Ok(ss / n as f64)
    }

    pub fn correlation(&self, other: &Self, method: CorrelationMethod) -> Result<f64, StatsError> {
        match method {
            CorrelationMethod::Pearson => self.correlation_pearson(other),
            _ => {
                debug!("correlation requested with unsupported method {method}");
                Err(StatsError::UnsupportedCorrelation(method))
            }
        }
    }

    /// `0.0` when either side has no spread.
    fn correlation_pearson(&self, other: &Self) -> Result<f64, StatsError> {
        self.retained_original("correlation")?;
        other.retained_original("correlation")?;
        if self.aligned_len(other).is_none() {
            return Ok(f64::NAN);
        }

        let dev_self = self.standard_deviation_population();
        let dev_other = other.standard_deviation_population();
        if dev_self == 0.0 || dev_other == 0.0 {
            return Ok(0.0);
        }
        Ok(self.covariance_population(other)? / (dev_self * dev_other))
    }
}
