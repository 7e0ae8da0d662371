//! Unrolled determinant and inverse kernels for dimensions 1 through 6.
//!
//! One file per dimension. Each inverse kernel writes every adjugate entry
//! straight into its final output position, takes the determinant as the dot
//! product of the input's first row with the adjugate's first column, then
//! divides the whole output by it. The shared `t*` locals are the 2×2 (and,
//! for the larger sizes, 3×3 and 4×4) sub-determinants that several cofactors
//! have in common; each is computed once per call.
//!
//! The kernels are two-buffer: for dimension ≥ 3 every formula reads input
//! entries after the first output write, so output must not alias input.
//! In-place entry points live in [`crate::dispatch`].
//!
//! **Not part of the public API.**

pub(crate) mod dim1;
pub(crate) mod dim2;
pub(crate) mod dim3;
pub(crate) mod dim4;
pub(crate) mod dim5;
pub(crate) mod dim6;

#[cfg(test)]
pub(crate) mod support {
    use num_complex::Complex64;

    pub(crate) fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    /// Seeded pseudo-random complex matrix with a boosted diagonal so the
    /// test matrices stay comfortably far from singular.
    pub(crate) fn random_matrix(n: usize, seed: u64) -> Vec<Vec<Complex64>> {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(seed);
        let mut a = vec![vec![Complex64::new(0.0, 0.0); n]; n];
        for (i, row) in a.iter_mut().enumerate() {
            for (j, x) in row.iter_mut().enumerate() {
                let re: f64 = rng.random_range(-1.0..1.0);
                let im: f64 = rng.random_range(-1.0..1.0);
                *x = Complex64::new(re, im);
                if i == j {
                    *x += Complex64::new(n as f64, 0.0);
                }
            }
        }
        a
    }

    /// Textbook recursive cofactor expansion along the first row. Slow, but
    /// an independent oracle for the unrolled kernels (dimensions ≥ 2; the
    /// 1×1 kernel deliberately uses the reciprocal convention instead).
    pub(crate) fn naive_det(a: &[Vec<Complex64>]) -> Complex64 {
        let n = a.len();
        if n == 1 {
            return a[0][0];
        }
        let mut det = Complex64::new(0.0, 0.0);
        let mut sign = 1.0;
        for j in 0..n {
            let minor: Vec<Vec<Complex64>> = a[1..]
                .iter()
                .map(|row| {
                    row.iter()
                        .enumerate()
                        .filter(|(col, _)| *col != j)
                        .map(|(_, &x)| x)
                        .collect()
                })
                .collect();
            det += Complex64::new(sign, 0.0) * a[0][j] * naive_det(&minor);
            sign = -sign;
        }
        det
    }

    /// Max modulus of `a * b - I`.
    pub(crate) fn identity_residual(
        a: &[Vec<Complex64>],
        b: &[Vec<Complex64>],
    ) -> f64 {
        let n = a.len();
        let mut worst = 0.0f64;
        for i in 0..n {
            for j in 0..n {
                let mut sum = Complex64::new(0.0, 0.0);
                for k in 0..n {
                    sum += a[i][k] * b[k][j];
                }
                let expect = if i == j { 1.0 } else { 0.0 };
                worst = worst.max((sum - Complex64::new(expect, 0.0)).norm());
            }
        }
        worst
    }

    pub(crate) fn zeros(n: usize) -> Vec<Vec<Complex64>> {
        vec![vec![Complex64::new(0.0, 0.0); n]; n]
    }
}
