//! Shared helpers for the integration tests.
#![allow(dead_code)] // not every test binary uses every helper

use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

pub fn zeros(n: usize) -> Vec<Vec<Complex64>> {
    vec![vec![c(0.0, 0.0); n]; n]
}

pub fn identity(n: usize) -> Vec<Vec<Complex64>> {
    let mut a = zeros(n);
    for i in 0..n {
        a[i][i] = c(1.0, 0.0);
    }
    a
}

/// Seeded pseudo-random complex matrix with a boosted diagonal, so every
/// generated matrix is comfortably well-conditioned.
pub fn random_matrix(n: usize, seed: u64) -> Vec<Vec<Complex64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut a = zeros(n);
    for (i, row) in a.iter_mut().enumerate() {
        for (j, x) in row.iter_mut().enumerate() {
            *x = c(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0));
            if i == j {
                *x += c(n as f64, 0.0);
            }
        }
    }
    a
}

pub fn matmul(a: &[Vec<Complex64>], b: &[Vec<Complex64>]) -> Vec<Vec<Complex64>> {
    let n = a.len();
    let mut out = zeros(n);
    for i in 0..n {
        for j in 0..n {
            let mut sum = c(0.0, 0.0);
            for k in 0..n {
                sum += a[i][k] * b[k][j];
            }
            out[i][j] = sum;
        }
    }
    out
}

/// Max entry-wise modulus of `a - b`.
pub fn max_diff(a: &[Vec<Complex64>], b: &[Vec<Complex64>]) -> f64 {
    let mut worst = 0.0f64;
    for (ra, rb) in a.iter().zip(b.iter()) {
        for (&xa, &xb) in ra.iter().zip(rb.iter()) {
            worst = worst.max((xa - xb).norm());
        }
    }
    worst
}
