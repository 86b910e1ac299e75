//! Common test utilities

#![allow(dead_code)]

use nalgebra::DMatrix;

/// Simple deterministic pseudo-random number generator (LCG)
///
/// Linear Congruential Generator for reproducible random numbers in tests.
/// Uses the common parameters: a = 1664525, c = 1013904223 (from Numerical Recipes)
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate next f64 in range [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // Map to [0, 1) using upper 48 bits
        ((self.state >> 16) as f64) / ((1u64 << 48) as f64)
    }

    /// Generate next f64 in range [-1, 1)
    pub fn next_centered(&mut self) -> f64 {
        2.0 * self.next_f64() - 1.0
    }

    /// Random m × n matrix with entries in [-1, 1)
    pub fn matrix(&mut self, m: usize, n: usize) -> DMatrix<f64> {
        let mut data = Vec::with_capacity(m * n);
        for _ in 0..m * n {
            data.push(self.next_centered());
        }
        DMatrix::from_vec(m, n, data)
    }
}

/// Create Hilbert matrix of size n x n, H[i,j] = 1 / (i + j + 1)
pub fn hilbert(n: usize) -> DMatrix<f64> {
    DMatrix::from_fn(n, n, |i, j| 1.0 / (i + j + 1) as f64)
}

/// Relative Frobenius distance ||a - b|| / ||b||
pub fn relative_error(a: &DMatrix<f64>, b: &DMatrix<f64>) -> f64 {
    (a - b).norm() / b.norm()
}

/// Shapes exercised by the randomized tests: tall, wide and square
pub const SHAPES: [(usize, usize); 6] = [(6, 3), (3, 6), (5, 5), (10, 4), (4, 10), (1, 7)];
