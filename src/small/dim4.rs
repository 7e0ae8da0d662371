//! 4×4 kernel.
//!
//! The `t*` locals are the 2×2 sub-determinants shared between cofactors;
//! they are reassigned block by block as the expansion walks through the
//! adjugate columns.

use num_complex::Complex64;

pub(crate) fn det4(a: &[Vec<Complex64>]) -> Complex64 {
    let t1 = a[2][2] * a[3][3] - a[2][3] * a[3][2];
    let t2 = a[2][1] * a[3][3] - a[2][3] * a[3][1];
    let t3 = a[2][1] * a[3][2] - a[2][2] * a[3][1];

    let b0 = a[1][1] * t1 - a[1][2] * t2 + a[1][3] * t3;

    let t4 = a[2][0] * a[3][3] - a[2][3] * a[3][0];
    let t5 = a[2][0] * a[3][2] - a[2][2] * a[3][0];

    let b1 = a[1][2] * t4 - a[1][0] * t1 - a[1][3] * t5;

    let t1 = a[2][0] * a[3][1] - a[2][1] * a[3][0];

    let b2 = a[1][0] * t2 - a[1][1] * t4 + a[1][3] * t1;
    let b3 = a[1][1] * t5 - a[1][0] * t3 - a[1][2] * t1;

    a[0][0] * b0 + a[0][1] * b1 + a[0][2] * b2 + a[0][3] * b3
}

pub(crate) fn invert4(a: &[Vec<Complex64>], b: &mut [Vec<Complex64>]) {
    let mut t1 = a[2][2] * a[3][3] - a[2][3] * a[3][2];
    let mut t2 = a[2][1] * a[3][3] - a[2][3] * a[3][1];
    let mut t3 = a[2][1] * a[3][2] - a[2][2] * a[3][1];

    b[0][0] = a[1][1] * t1 - a[1][2] * t2 + a[1][3] * t3;
    b[0][1] = a[0][2] * t2 - a[0][1] * t1 - a[0][3] * t3;

    let mut t4 = a[2][0] * a[3][3] - a[2][3] * a[3][0];
    let mut t5 = a[2][0] * a[3][2] - a[2][2] * a[3][0];

    b[1][0] = a[1][2] * t4 - a[1][0] * t1 - a[1][3] * t5;
    b[1][1] = a[0][0] * t1 - a[0][2] * t4 + a[0][3] * t5;

    t1 = a[2][0] * a[3][1] - a[2][1] * a[3][0];

    b[2][0] = a[1][0] * t2 - a[1][1] * t4 + a[1][3] * t1;
    b[2][1] = a[0][1] * t4 - a[0][0] * t2 - a[0][3] * t1;
    b[3][0] = a[1][1] * t5 - a[1][0] * t3 - a[1][2] * t1;
    b[3][1] = a[0][0] * t3 - a[0][1] * t5 + a[0][2] * t1;

    t1 = a[0][2] * a[1][3] - a[0][3] * a[1][2];
    t2 = a[0][1] * a[1][3] - a[0][3] * a[1][1];
    t3 = a[0][1] * a[1][2] - a[0][2] * a[1][1];

    b[0][2] = a[3][1] * t1 - a[3][2] * t2 + a[3][3] * t3;
    b[0][3] = a[2][2] * t2 - a[2][1] * t1 - a[2][3] * t3;

    t4 = a[0][0] * a[1][3] - a[0][3] * a[1][0];
    t5 = a[0][0] * a[1][2] - a[0][2] * a[1][0];

    b[1][2] = a[3][2] * t4 - a[3][0] * t1 - a[3][3] * t5;
    b[1][3] = a[2][0] * t1 - a[2][2] * t4 + a[2][3] * t5;

    t1 = a[0][0] * a[1][1] - a[0][1] * a[1][0];

    b[2][2] = a[3][0] * t2 - a[3][1] * t4 + a[3][3] * t1;
    b[2][3] = a[2][1] * t4 - a[2][0] * t2 - a[2][3] * t1;
    b[3][2] = a[3][1] * t5 - a[3][0] * t3 - a[3][2] * t1;
    b[3][3] = a[2][0] * t3 - a[2][1] * t5 + a[2][2] * t1;

    let det = a[0][0] * b[0][0] + a[0][1] * b[1][0] + a[0][2] * b[2][0] + a[0][3] * b[3][0];

    for i in 0..4 {
        for j in 0..4 {
            b[i][j] /= det;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::small::support::{identity_residual, naive_det, random_matrix, zeros};
    use approx::assert_abs_diff_eq;

    #[test]
    fn det_matches_cofactor_oracle() {
        for seed in [4, 44, 444] {
            let a = random_matrix(4, seed);
            assert_abs_diff_eq!((det4(&a) - naive_det(&a)).norm(), 0.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn inverse_times_input_is_identity() {
        for seed in [7, 70, 700] {
            let a = random_matrix(4, seed);
            let mut b = zeros(4);
            invert4(&a, &mut b);
            assert!(identity_residual(&a, &b) < 1e-11);
            assert!(identity_residual(&b, &a) < 1e-11);
        }
    }

    /// det of the inverse is the reciprocal of det.
    #[test]
    fn det_of_inverse_is_reciprocal() {
        let a = random_matrix(4, 9);
        let mut b = zeros(4);
        invert4(&a, &mut b);
        let d = det4(&a);
        assert_abs_diff_eq!((det4(&b) - d.inv()).norm(), 0.0, epsilon = 1e-10);
    }
}
