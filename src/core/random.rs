//! # Random Sources
//!
//! The generator never calls `rand` directly. It asks a `RandomSource` for
//! uniform values in `[0, 1)` and turns them into choices itself, so a test
//! can script the exact sequence of draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A uniform random generator over `[0, 1)`.
pub trait RandomSource {
    /// Returns the next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Picks an index in `0..len` as `floor(v * len)`.
    ///
    /// `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        let index = (self.next_f64() * len as f64) as usize;
        // Guards against sources that hand back exactly 1.0
        index.min(len - 1)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Production source backed by `StdRng`.
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Replays a fixed list of values, wrapping around when exhausted.
///
/// Counts every draw so callers can assert whether randomness was consumed.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: usize,
    draws: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "SequenceRandom needs at least one value");
        Self {
            values,
            cursor: 0,
            draws: 0,
        }
    }

    /// Total number of values handed out so far.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Appends more values to replay after the current ones.
    pub fn extend(&mut self, values: impl IntoIterator<Item = f64>) {
        self.values.extend(values);
    }
}

impl RandomSource for SequenceRandom {
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        self.draws += 1;
        value
    }
}
