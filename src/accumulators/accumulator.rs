use crate::accumulators::Streaks;
use crate::summary::Summary;

/// Statistical contract shared by the batch and streaming accumulators.
///
/// Implementations accept values through [`append`](Accumulator::append) and
/// expose descriptive statistics over everything seen so far. Queries on an
/// empty accumulator describe an undefined result; see each implementation for
/// the exact sentinel it produces.
pub trait Accumulator {
    /// Incorporates a new observation.
    fn append(&mut self, value: f64);

    fn append_many(&mut self, values: &[f64]) {
        for &v in values {
            self.append(v);
        }
    }

    /// Number of observations.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn sum(&self) -> f64;

    /// Arithmetic mean.
    fn mean(&self) -> f64;

    /// Sample variance (Bessel-corrected).
    fn variance(&self) -> f64;

    /// Sample standard deviation.
    fn standard_deviation(&self) -> f64;

    /// `(min, max)` over all observations.
    fn bounds(&self) -> (f64, f64);

    fn streaks(&self) -> &Streaks;

    fn summary(&self) -> Summary {
        let (min, max) = self.bounds();
        let streaks = self.streaks();
        Summary {
            count: self.len(),
            sum: self.sum(),
            mean: self.mean(),
            variance: self.variance(),
            standard_deviation: self.standard_deviation(),
            min,
            max,
            positive_count: streaks.positive_count(),
            max_positive_streak: streaks.max_positive_streak(),
            max_negative_streak: streaks.max_negative_streak(),
        }
    }
}
