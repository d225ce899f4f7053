use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

/// Point-in-time snapshot of an accumulator's statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub variance: f64,
    pub standard_deviation: f64,
    pub min: f64,
    pub max: f64,
    pub positive_count: usize,
    pub max_positive_streak: usize,
    pub max_negative_streak: usize,
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "n={}, sum={:.6}, mean={:.6}, var={:.6}, sd={:.6}, min={:.6}, max={:.6}, pos={}, streak+={}, streak-={}",
            self.count,
            self.sum,
            self.mean,
            self.variance,
            self.standard_deviation,
            self.min,
            self.max,
            self.positive_count,
            self.max_positive_streak,
            self.max_negative_streak
        )
    }
}
