/// Sign-run bookkeeping shared by both accumulators.
///
/// A value `> 0` counts as positive. Everything else (zero, negatives, `NaN`)
/// counts as a non-positive observation and extends the negative streak.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Streaks {
    positive_count: usize,
    max_positive_streak: usize,
    max_negative_streak: usize,
    current_positive_streak: usize,
    current_negative_streak: usize,
}

impl Streaks {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn observe(&mut self, value: f64) {
        if value > 0.0 {
            self.positive_count += 1;
            self.current_positive_streak += 1;
            self.current_negative_streak = 0;
            self.max_positive_streak = self.max_positive_streak.max(self.current_positive_streak);
        } else {
            self.current_negative_streak += 1;
            self.current_positive_streak = 0;
            self.max_negative_streak = self.max_negative_streak.max(self.current_negative_streak);
        }
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Number of strictly positive observations.
    #[inline]
    pub fn positive_count(&self) -> usize {
        self.positive_count
    }

    /// Longest run of consecutive positive observations.
    #[inline]
    pub fn max_positive_streak(&self) -> usize {
        self.max_positive_streak
    }

    /// Longest run of consecutive non-positive observations.
    #[inline]
    pub fn max_negative_streak(&self) -> usize {
        self.max_negative_streak
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observed(values: &[f64]) -> Streaks {
        let mut s = Streaks::new();
        for &v in values {
            s.observe(v);
        }
        s
    }

    #[test]
    fn mixed_runs() {
        let s = observed(&[1.0, 2.0, -1.0, -1.0, -1.0, 1.0, 1.0, 1.0]);
        assert_eq!(s.positive_count(), 5);
        assert_eq!(s.max_positive_streak(), 3);
        assert_eq!(s.max_negative_streak(), 3);
    }

    #[test]
    fn zero_breaks_a_positive_run() {
        let s = observed(&[1.0, 1.0, 0.0, 0.0, 1.0]);
        assert_eq!(s.positive_count(), 3);
        assert_eq!(s.max_positive_streak(), 2);
        assert_eq!(s.max_negative_streak(), 2);
    }

    #[test]
    fn nan_counts_as_non_positive() {
        let s = observed(&[f64::NAN, 3.0]);
        assert_eq!(s.positive_count(), 1);
        assert_eq!(s.max_negative_streak(), 1);
    }

    #[test]
    fn max_never_below_current() {
        let mut s = Streaks::new();
        for v in [1.0, -2.0, 3.0, 4.0, -5.0, -6.0, -7.0, 8.0] {
            s.observe(v);
            assert!(s.max_positive_streak >= s.current_positive_streak);
            assert!(s.max_negative_streak >= s.current_negative_streak);
        }
    }

    #[test]
    fn reset_clears_everything() {
        let mut s = observed(&[1.0, -1.0]);
        s.reset();
        assert_eq!(s, Streaks::default());
    }
}
