//! Determinant contract: agreement between the closed-form kernels and the
//! LU path, diagonal sanity cases, and the deliberate 1×1 convention.

mod common;

use common::{c, identity, random_matrix, zeros};
use zinv::lu::{self, NativeLu};
use zinv::det;

/// The closed-form kernels and the pivoted-LU determinant agree for every
/// dimension both can handle, including across the 6/7 dispatch boundary.
#[test]
fn closed_form_agrees_with_lu() {
    for n in 2..=8 {
        let a = random_matrix(n, 10 + n as u64);
        let closed = det(&a); // LU route itself for n >= 7
        let via_lu = lu::det(&NativeLu, &a);
        let scale = via_lu.norm().max(1.0);
        assert!(
            (closed - via_lu).norm() < 1e-9 * scale,
            "dimension {n}: {closed} vs {via_lu}"
        );
    }
}

/// Diagonal determinant is the product of the diagonal, dimensions 2..=6.
/// Dimension 1 is deliberately excluded: its convention is the reciprocal.
#[test]
fn diagonal_det_is_product_of_diagonal() {
    for n in 2..=6 {
        let mut a = zeros(n);
        let mut expect = c(1.0, 0.0);
        for i in 0..n {
            a[i][i] = c(i as f64 + 1.0, 0.5);
            expect *= a[i][i];
        }
        assert!((det(&a) - expect).norm() < 1e-12 * expect.norm(), "dimension {n}");
    }
}

#[test]
fn identity_det_is_one() {
    for n in 1..=6 {
        // Holds for n = 1 only because 1/1 == 1 under the reciprocal
        // convention.
        assert_eq!(det(&identity(n)), c(1.0, 0.0), "dimension {n}");
    }
}

/// The 1×1 convention, verified with a non-unit entry: the determinant is
/// the reciprocal of the entry, not the entry.
#[test]
fn one_by_one_det_is_reciprocal() {
    let a = vec![vec![c(2.0, 0.0)]];
    assert_eq!(det(&a), c(0.5, 0.0));

    let b = vec![vec![c(0.0, 4.0)]];
    assert_eq!(det(&b), c(0.0, -0.25));
}

/// Singular input yields a zero determinant on both routes (exactly zero on
/// the LU route, which detects the dead pivot column).
#[test]
fn singular_det_is_zero() {
    for n in [3, 5, 8] {
        let mut a = random_matrix(n, 300 + n as u64);
        // Duplicate a row: rank deficient by construction.
        a[1] = a[0].clone();
        let d = det(&a);
        // The closed-form routes cancel in floating point rather than
        // producing an exact zero.
        assert!(d.norm() < 1e-6, "dimension {n}: {d}");
    }
}
