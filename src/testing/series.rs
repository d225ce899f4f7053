use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Reproducible series of `len` values in `[-100, 100)`.
pub fn random_series(seed: u64, len: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(-100.0..100.0)).collect()
}

/// Like [`random_series`], shifted by `offset` to stress cancellation.
pub fn offset_series(seed: u64, len: usize, offset: f64) -> Vec<f64> {
    random_series(seed, len)
        .into_iter()
        .map(|v| v + offset)
        .collect()
}
