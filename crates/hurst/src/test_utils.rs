//! Deterministic series generators for tests and benchmarks
//!
//! xorshift64 uniforms turned into Gaussians by Box–Muller, so expected values
//! are reproducible on every platform without pulling a RNG crate.

use std::f64::consts::PI;

/// Seeded Gaussian sample source
#[derive(Debug, Clone)]
pub struct SeriesGenerator {
    state: u64,
}

impl SeriesGenerator {
    /// Create a generator; a zero seed is replaced by a fixed non-zero constant
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform sample in the open interval (0, 1)
    pub fn uniform(&mut self) -> f64 {
        ((self.next_u64() >> 11) as f64 + 0.5) / (1u64 << 53) as f64
    }

    /// Standard normal sample
    pub fn gaussian(&mut self) -> f64 {
        let u1 = self.uniform();
        let u2 = self.uniform();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }
}

/// i.i.d. standard normal samples
pub fn white_noise(len: usize, seed: u64) -> Vec<f64> {
    let mut generator = SeriesGenerator::new(seed);
    (0..len).map(|_| generator.gaussian()).collect()
}

/// Cumulative sum of white noise
pub fn random_walk(len: usize, seed: u64) -> Vec<f64> {
    drifting_walk(len, 0.0, seed)
}

/// Cumulative sum of white noise shifted by `drift` per step
pub fn drifting_walk(len: usize, drift: f64, seed: u64) -> Vec<f64> {
    let mut generator = SeriesGenerator::new(seed);
    let mut level = 0.0;
    (0..len)
        .map(|_| {
            level += drift + generator.gaussian();
            level
        })
        .collect()
}
