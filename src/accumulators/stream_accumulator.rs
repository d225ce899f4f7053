use crate::accumulators::{Accumulator, Streaks};
use crate::pool::{ObjectSource, stream_pool};

/// Constant-memory accumulator.
///
/// Keeps a running sum, bounds, streaks and Welford's mean / sum of squared
/// deviations. Nothing is retained, so percentiles and pairwise statistics are
/// only available on [`BatchAccumulator`](crate::accumulators::BatchAccumulator).
///
/// Queries do not special-case small counts and follow IEEE 754 arithmetic:
/// with no observations `mean` is `NaN`, `variance` is `-0.0` and the bounds
/// are `(+inf, -inf)`; with a single observation `variance` is `NaN`. Treat
/// both as undefined.
#[derive(Debug, Clone)]
pub struct StreamAccumulator {
    sum: f64,
    min: f64,
    max: f64,
    observation_count: f64,
    running_mean: f64,
    running_sum_squared_deviation: f64,
    initialized: bool,
    streaks: Streaks,
}

impl Default for StreamAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamAccumulator {
    pub fn new() -> Self {
        StreamAccumulator {
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            observation_count: 0.0,
            running_mean: 0.0,
            running_sum_squared_deviation: 0.0,
            initialized: false,
            streaks: Streaks::new(),
        }
    }

    /// Takes an instance from `pool` and resets it to the empty state.
    pub fn from_pool<P>(pool: &P) -> Self
    where
        P: ObjectSource<Self> + ?Sized,
    {
        let mut acc = pool.acquire();
        acc.reset();
        acc
    }

    /// [`from_pool`](Self::from_pool) on the process-wide pool.
    pub fn pooled() -> Self {
        Self::from_pool(stream_pool())
    }

    pub fn release_to<P>(self, pool: &P)
    where
        P: ObjectSource<Self> + ?Sized,
    {
        pool.release(self);
    }

    /// Returns the instance to the process-wide pool.
    pub fn release(self) {
        self.release_to(stream_pool());
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn observation_count(&self) -> f64 {
        self.observation_count
    }

    /// Welford estimate of the mean.
    #[inline]
    pub fn running_mean(&self) -> f64 {
        self.running_mean
    }

    #[inline]
    pub fn positive_count(&self) -> usize {
        self.streaks.positive_count()
    }

    #[inline]
    pub fn max_positive_streak(&self) -> usize {
        self.streaks.max_positive_streak()
    }

    #[inline]
    pub fn max_negative_streak(&self) -> usize {
        self.streaks.max_negative_streak()
    }
}

impl Accumulator for StreamAccumulator {
    fn append(&mut self, value: f64) {
        self.sum += value;
        self.streaks.observe(value);
        self.observation_count += 1.0;

        if !self.initialized {
            self.initialized = true;
            self.running_mean = value;
            self.min = value;
            self.max = value;
            return;
        }

        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
        // The deviation update needs both the old and the new mean.
        let new_mean = self.running_mean + (value - self.running_mean) / self.observation_count;
        self.running_sum_squared_deviation += (value - self.running_mean) * (value - new_mean);
        self.running_mean = new_mean;
    }

    #[inline]
    fn len(&self) -> usize {
        self.observation_count as usize
    }

    #[inline]
    fn sum(&self) -> f64 {
        self.sum
    }

    #[inline]
    fn mean(&self) -> f64 {
        self.sum / self.observation_count
    }

    #[inline]
    fn variance(&self) -> f64 {
        self.running_sum_squared_deviation / (self.observation_count - 1.0)
    }

    #[inline]
    fn standard_deviation(&self) -> f64 {
        self.variance().sqrt()
    }

    #[inline]
    fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    #[inline]
    fn streaks(&self) -> &Streaks {
        &self.streaks
    }
}

impl Extend<f64> for StreamAccumulator {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for v in iter {
            self.append(v);
        }
    }
}
