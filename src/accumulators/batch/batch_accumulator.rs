use crate::accumulators::{Accumulator, Streaks};
use crate::config::StatsConfig;
use crate::error::StatsError;
use crate::pool::{ObjectSource, batch_pool};
use log::{debug, trace};
use std::cmp::Ordering;
use std::sync::OnceLock;

/// Ascending order with every `NaN` ahead of all numbers, whatever its sign.
fn nan_first(a: &f64, b: &f64) -> Ordering {
    a.partial_cmp(b)
        .unwrap_or_else(|| b.is_nan().cmp(&a.is_nan()))
}

/// Memoized moments. Cleared on every append.
#[derive(Debug, Default, Clone)]
struct Moments {
    mean: OnceLock<f64>,
    variance: OnceLock<f64>,
    population_variance: OnceLock<f64>,
    standard_deviation: OnceLock<f64>,
    standard_deviation_population: OnceLock<f64>,
}

/// Accumulator that retains every observation.
///
/// `sum`, bounds and streaks are maintained on insertion. Mean, variances and
/// standard deviations are computed on first read and memoized until the next
/// [`append`](Accumulator::append). Percentiles sort the working copy in
/// place; when the accumulator is built with `retain_original`, a second copy
/// keeps insertion order for the pairwise operations.
///
/// Undefined results (e.g. the mean of nothing) are reported as `NaN`.
#[derive(Debug, Clone)]
pub struct BatchAccumulator {
    values: Vec<f64>,
    original: Vec<f64>,
    retain_original: bool,
    count: usize,
    sum: f64,
    min: f64,
    max: f64,
    streaks: Streaks,
    sorted: bool,
    moments: Moments,
}

impl Default for BatchAccumulator {
    fn default() -> Self {
        Self::new(false)
    }
}

impl BatchAccumulator {
    pub fn new(retain_original: bool) -> Self {
        BatchAccumulator {
            values: Vec::new(),
            original: Vec::new(),
            retain_original,
            count: 0,
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            streaks: Streaks::new(),
            sorted: false,
            moments: Moments::default(),
        }
    }

    pub fn with_values(values: &[f64], retain_original: bool) -> Self {
        let mut acc = Self::new(retain_original);
        acc.values.reserve(values.len());
        if retain_original {
            acc.original.reserve(values.len());
        }
        acc.append_many(values);
        acc
    }

    pub fn with_config(config: &StatsConfig) -> Self {
        Self::new(config.retain_original)
    }

    /// Takes an instance from `pool` and resets it to the empty state.
    pub fn from_pool<P>(pool: &P, retain_original: bool) -> Self
    where
        P: ObjectSource<Self> + ?Sized,
    {
        let mut acc = pool.acquire();
        acc.reset(retain_original);
        acc
    }

    pub fn from_pool_with_values<P>(pool: &P, values: &[f64], retain_original: bool) -> Self
    where
        P: ObjectSource<Self> + ?Sized,
    {
        let mut acc = Self::from_pool(pool, retain_original);
        acc.append_many(values);
        acc
    }

    /// [`from_pool`](Self::from_pool) on the process-wide pool.
    pub fn pooled(retain_original: bool) -> Self {
        Self::from_pool(batch_pool(), retain_original)
    }

    pub fn release_to<P>(self, pool: &P)
    where
        P: ObjectSource<Self> + ?Sized,
    {
        pool.release(self);
    }

    /// Returns the instance to the process-wide pool.
    pub fn release(self) {
        self.release_to(batch_pool());
    }

    /// Returns to the empty state. Allocations are kept for reuse.
    pub fn reset(&mut self, retain_original: bool) {
        self.values.clear();
        self.original.clear();
        self.retain_original = retain_original;
        self.count = 0;
        self.sum = 0.0;
        self.min = f64::INFINITY;
        self.max = f64::NEG_INFINITY;
        self.streaks.reset();
        self.sorted = false;
        self.moments = Moments::default();
    }

    #[inline]
    pub fn retains_original(&self) -> bool {
        self.retain_original
    }

    /// Working copy of the observations. Sorted ascending once a percentile
    /// has been queried.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Observations in insertion order.
    pub fn original(&self) -> Result<&[f64], StatsError> {
        self.retained_original("original")
    }

    pub(super) fn retained_original(&self, operation: &'static str) -> Result<&[f64], StatsError> {
        if self.retain_original {
            Ok(&self.original)
        } else {
            debug!("{operation} called on an accumulator without original order");
            Err(StatsError::OriginalNotRetained { operation })
        }
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

    /// Sum of squared deviations from the mean.
    fn squared_deviations(&self) -> f64 {
        let m = self.mean();
        self.values.iter().map(|&x| (x - m) * (x - m)).sum()
    }

    /// Population variance: `Σ(x - mean)² / n`.
    pub fn population_variance(&self) -> f64 {
        if self.count == 0 {
            return f64::NAN;
        }
        *self
            .moments
            .population_variance
            .get_or_init(|| self.squared_deviations() / self.count as f64)
    }

    pub fn standard_deviation_population(&self) -> f64 {
        if self.count == 0 {
            return f64::NAN;
        }
        *self
            .moments
            .standard_deviation_population
            .get_or_init(|| self.population_variance().sqrt())
    }

    fn ensure_sorted(&mut self) {
        if self.sorted {
            return;
        }
        trace!("sorting {} values", self.count);
        self.values.sort_by(nan_first);
        self.sorted = true;
    }

    /// Percentile for `p` in `[0, 1]`.
    ///
    /// `p <= 0` yields the minimum and `p >= 1` the maximum. Otherwise the
    /// rank is `p * (n - 1)`; a fractional rank returns the midpoint of the two
    /// neighbouring values rather than interpolating by the fraction.
    pub fn percentile(&mut self, p: f64) -> f64 {
        if self.count == 0 || p.is_nan() {
            return f64::NAN;
        }
        if p <= 0.0 {
            return self.min;
        }
        if p >= 1.0 {
            return self.max;
        }
        self.ensure_sorted();

        let index = p * (self.count - 1) as f64;
        let lower = index.floor();
        if index == lower {
            self.values[lower as usize]
        } else {
            (self.values[lower as usize] + self.values[index.ceil() as usize]) / 2.0
        }
    }
}

impl Accumulator for BatchAccumulator {
    fn append(&mut self, value: f64) {
        self.values.push(value);
        if self.retain_original {
            self.original.push(value);
        }
        self.count += 1;
        self.sum += value;
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
        self.streaks.observe(value);
        self.sorted = false;
        self.moments = Moments::default();
    }

    #[inline]
    fn len(&self) -> usize {
        self.count
    }

    /// Sum in insertion order; `0.0` when empty.
    #[inline]
    fn sum(&self) -> f64 {
        self.sum
    }

    fn mean(&self) -> f64 {
        if self.count == 0 {
            return f64::NAN;
        }
        *self
            .moments
            .mean
            .get_or_init(|| self.sum / self.count as f64)
    }

    /// `NaN` when empty; `0.0` for a single observation.
    fn variance(&self) -> f64 {
        match self.count {
            0 => f64::NAN,
            1 => 0.0,
            n => *self
                .moments
                .variance
                .get_or_init(|| self.squared_deviations() / (n - 1) as f64),
        }
    }

    fn standard_deviation(&self) -> f64 {
        match self.count {
            0 => f64::NAN,
            1 => 0.0,
            _ => *self
                .moments
                .standard_deviation
                .get_or_init(|| self.variance().sqrt()),
        }
    }

    fn bounds(&self) -> (f64, f64) {
        if self.count == 0 {
            (f64::NAN, f64::NAN)
        } else {
            (self.min, self.max)
        }
    }

    #[inline]
    fn streaks(&self) -> &Streaks {
        &self.streaks
    }
}

impl Extend<f64> for BatchAccumulator {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for v in iter {
            self.append(v);
        }
    }
}
