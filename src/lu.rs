//! General N×N fallback: partial-pivoting LU behind a swappable backend.
//!
//! The closed-form kernels stop at dimension 6; everything larger is packed
//! into a contiguous column-major scratch buffer and handed to a
//! [`LuBackend`], whose two operations mirror LAPACK's `getrf`/`getri` pair.
//! The built-in [`NativeLu`] keeps the crate self-contained; a LAPACK binding
//! (or any other dense solver with the same semantics) can be dropped in by
//! implementing the trait.

use num_complex::Complex64;
use tracing::debug;

use crate::error::ZinvError;

/// A dense LU backend with LAPACK `getrf`/`getri` semantics.
///
/// Both operations work on an `n * n` column-major buffer (element `(i, j)`
/// at `a[j * n + i]`) and a 0-based pivot array in LAPACK's swap-record
/// convention: at elimination step `k`, row `k` was swapped with row
/// `ipiv[k]`.
pub trait LuBackend {
    /// Factorizes `a` in place into `P * A = L * U`, with the unit-diagonal
    /// `L` stored below the diagonal and `U` on and above it, filling `ipiv`.
    ///
    /// An exactly zero pivot column at step `k` stops elimination and returns
    /// [`ZinvError::Singular`] with `pivot = k`; the buffer then holds the
    /// partial factorization up to and including the zero diagonal entry, and
    /// `ipiv[..=k]` is valid.
    fn factorize(
        &self,
        a: &mut [Complex64],
        n: usize,
        ipiv: &mut [usize],
    ) -> Result<(), ZinvError>;

    /// Overwrites the factored buffer with the inverse of the original
    /// matrix. `a` and `ipiv` must come from a successful [`factorize`]
    /// call on this backend.
    ///
    /// [`factorize`]: LuBackend::factorize
    fn invert_factored(
        &self,
        a: &mut [Complex64],
        n: usize,
        ipiv: &[usize],
    ) -> Result<(), ZinvError>;
}

/// Built-in pure-Rust [`LuBackend`].
///
/// Unblocked right-looking elimination with partial pivoting by largest
/// modulus; inversion solves the factored system against each unit vector.
/// O(N³) and unvectorized — adequate as a default, replaceable where a tuned
/// LAPACK is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeLu;

impl LuBackend for NativeLu {
    fn factorize(
        &self,
        a: &mut [Complex64],
        n: usize,
        ipiv: &mut [usize],
    ) -> Result<(), ZinvError> {
        debug_assert_eq!(a.len(), n * n);
        debug_assert_eq!(ipiv.len(), n);

        for k in 0..n {
            // Pivot: largest modulus in column k, rows k..n.
            let mut p = k;
            let mut best = a[k * n + k].norm_sqr();
            for r in (k + 1)..n {
                let cand = a[k * n + r].norm_sqr();
                if cand > best {
                    best = cand;
                    p = r;
                }
            }
            ipiv[k] = p;
            if p != k {
                for j in 0..n {
                    a.swap(j * n + k, j * n + p);
                }
            }

            let pivot = a[k * n + k];
            if pivot == Complex64::new(0.0, 0.0) {
                return Err(ZinvError::Singular { pivot: k });
            }

            for r in (k + 1)..n {
                let factor = a[k * n + r] / pivot;
                a[k * n + r] = factor;
                for j in (k + 1)..n {
                    let u = a[j * n + k];
                    a[j * n + r] -= factor * u;
                }
            }
        }

        Ok(())
    }

    fn invert_factored(
        &self,
        a: &mut [Complex64],
        n: usize,
        ipiv: &[usize],
    ) -> Result<(), ZinvError> {
        debug_assert_eq!(a.len(), n * n);
        debug_assert_eq!(ipiv.len(), n);

        let mut inv = vec![Complex64::new(0.0, 0.0); n * n];
        let mut col = vec![Complex64::new(0.0, 0.0); n];

        for j in 0..n {
            // P * e_j: apply the recorded swaps in factorization order.
            for x in col.iter_mut() {
                *x = Complex64::new(0.0, 0.0);
            }
            col[j] = Complex64::new(1.0, 0.0);
            for (k, &p) in ipiv.iter().enumerate() {
                if p != k {
                    col.swap(k, p);
                }
            }

            // Forward substitution against unit-lower L.
            for i in 0..n {
                let mut sum = col[i];
                for r in 0..i {
                    sum -= a[r * n + i] * col[r];
                }
                col[i] = sum;
            }

            // Back substitution against U.
            for i in (0..n).rev() {
                let mut sum = col[i];
                for r in (i + 1)..n {
                    sum -= a[r * n + i] * col[r];
                }
                col[i] = sum / a[i * n + i];
            }

            inv[j * n..(j + 1) * n].copy_from_slice(&col);
        }

        a.copy_from_slice(&inv);
        Ok(())
    }
}

/// Determinant via the pivoted factorization: product of the factored
/// diagonal, negated once per elimination step whose pivot row differs from
/// its own position. A reported zero pivot short-circuits to an exact zero.
pub fn det<B: LuBackend>(backend: &B, a: &[Vec<Complex64>]) -> Complex64 {
    let n = a.len();
    debug!(n, "determinant via LU fallback");

    let mut scratch = pack(a);
    let mut ipiv = vec![0usize; n];
    match backend.factorize(&mut scratch, n, &mut ipiv) {
        Ok(()) => {
            let mut det = Complex64::new(1.0, 0.0);
            for (i, &p) in ipiv.iter().enumerate() {
                let d = scratch[i * n + i];
                det *= if p != i { -d } else { d };
            }
            det
        }
        Err(ZinvError::Singular { .. }) => Complex64::new(0.0, 0.0),
    }
}

/// Inverse via the pivoted factorization, two-buffer form.
pub fn invert<B: LuBackend>(
    backend: &B,
    a: &[Vec<Complex64>],
    out: &mut [Vec<Complex64>],
) -> Result<(), ZinvError> {
    let n = a.len();
    debug!(n, "inverse via LU fallback");

    let mut scratch = pack(a);
    let mut ipiv = vec![0usize; n];
    backend.factorize(&mut scratch, n, &mut ipiv)?;
    backend.invert_factored(&mut scratch, n, &ipiv)?;
    unpack(&scratch, out);
    Ok(())
}

/// Inverse via the pivoted factorization, overwriting `a`. The scratch copy
/// means a factorization failure leaves `a` untouched.
pub fn invert_in_place<B: LuBackend>(
    backend: &B,
    a: &mut [Vec<Complex64>],
) -> Result<(), ZinvError> {
    let n = a.len();
    debug!(n, "in-place inverse via LU fallback");

    let mut scratch = pack(a);
    let mut ipiv = vec![0usize; n];
    backend.factorize(&mut scratch, n, &mut ipiv)?;
    backend.invert_factored(&mut scratch, n, &ipiv)?;
    unpack(&scratch, a);
    Ok(())
}

/// Row storage -> contiguous column-major scratch.
fn pack(a: &[Vec<Complex64>]) -> Vec<Complex64> {
    let n = a.len();
    let mut scratch = vec![Complex64::new(0.0, 0.0); n * n];
    for (i, row) in a.iter().enumerate() {
        for (j, &x) in row.iter().enumerate() {
            scratch[j * n + i] = x;
        }
    }
    scratch
}

/// Contiguous column-major scratch -> row storage.
fn unpack(scratch: &[Complex64], out: &mut [Vec<Complex64>]) {
    let n = out.len();
    for (i, row) in out.iter_mut().enumerate() {
        for (j, x) in row.iter_mut().enumerate() {
            *x = scratch[j * n + i];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::small::support::{c, identity_residual, naive_det, random_matrix, zeros};
    use approx::assert_abs_diff_eq;

    #[test]
    fn pack_is_column_major() {
        let a = vec![
            vec![c(1.0, 0.0), c(2.0, 0.0)],
            vec![c(3.0, 0.0), c(4.0, 0.0)],
        ];
        let scratch = pack(&a);
        assert_eq!(scratch, vec![c(1.0, 0.0), c(3.0, 0.0), c(2.0, 0.0), c(4.0, 0.0)]);

        let mut back = zeros(2);
        unpack(&scratch, &mut back);
        assert_eq!(back, a);
    }

    #[test]
    fn factorize_identity_is_trivial() {
        let n = 4;
        let mut a = vec![c(0.0, 0.0); n * n];
        for i in 0..n {
            a[i * n + i] = c(1.0, 0.0);
        }
        let mut ipiv = vec![0usize; n];
        NativeLu.factorize(&mut a, n, &mut ipiv).unwrap();
        for (i, &p) in ipiv.iter().enumerate() {
            assert_eq!(p, i);
        }
        for i in 0..n {
            assert_eq!(a[i * n + i], c(1.0, 0.0));
        }
    }

    #[test]
    fn det_matches_cofactor_oracle() {
        for n in 2..=7 {
            let a = random_matrix(n, 1000 + n as u64);
            let expect = naive_det(&a);
            assert_abs_diff_eq!(
                (det(&NativeLu, &a) - expect).norm(),
                0.0,
                epsilon = 1e-8 * expect.norm().max(1.0)
            );
        }
    }

    /// Sign reconstruction: a permutation matrix factors with unit diagonal,
    /// so its determinant is purely the pivot-swap sign.
    #[test]
    fn det_of_odd_permutation_is_minus_one() {
        let n = 7;
        let mut a = zeros(n);
        // Identity with rows 0 and 1 swapped.
        for i in 0..n {
            a[i][i] = c(1.0, 0.0);
        }
        a.swap(0, 1);
        assert_eq!(det(&NativeLu, &a), c(-1.0, 0.0));
    }

    #[test]
    fn det_of_exactly_singular_matrix_is_zero() {
        // Zero column stays exactly zero under row operations.
        let mut a = random_matrix(7, 77);
        for row in a.iter_mut() {
            row[3] = c(0.0, 0.0);
        }
        assert_eq!(det(&NativeLu, &a), c(0.0, 0.0));
    }

    #[test]
    fn invert_roundtrip() {
        for n in [7, 9, 12] {
            let a = random_matrix(n, 2000 + n as u64);
            let mut b = zeros(n);
            invert(&NativeLu, &a, &mut b).unwrap();
            assert!(identity_residual(&a, &b) < 1e-9);
            assert!(identity_residual(&b, &a) < 1e-9);
        }
    }

    #[test]
    fn invert_in_place_matches_two_buffer() {
        let a = random_matrix(8, 42);
        let mut b = zeros(8);
        invert(&NativeLu, &a, &mut b).unwrap();
        let mut inplace = a.clone();
        invert_in_place(&NativeLu, &mut inplace).unwrap();
        assert_eq!(inplace, b);
    }

    #[test]
    fn invert_singular_reports_pivot() {
        let n = 8;
        let mut a = zeros(n);
        for i in 0..n {
            if i != 3 {
                a[i][i] = c(1.0, 0.0);
            }
        }
        let mut b = zeros(n);
        let err = invert(&NativeLu, &a, &mut b).unwrap_err();
        assert_eq!(err, ZinvError::Singular { pivot: 3 });
    }
}
