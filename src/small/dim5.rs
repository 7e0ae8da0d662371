//! 5×5 kernel.
//!
//! `t1..t10` are the 2×2 sub-determinants of the bottom two rows, `t11..t20`
//! the 3×3 minors built on top of them. Both tiers are reassigned when the
//! expansion moves to the upper-row minors for the right-hand adjugate
//! columns.

use num_complex::Complex64;

pub(crate) fn det5(a: &[Vec<Complex64>]) -> Complex64 {
    let t1 = a[3][3] * a[4][4] - a[3][4] * a[4][3];
    let t2 = a[3][2] * a[4][4] - a[3][4] * a[4][2];
    let t3 = a[3][2] * a[4][3] - a[3][3] * a[4][2];
    let t4 = a[3][1] * a[4][4] - a[3][4] * a[4][1];
    let t5 = a[3][1] * a[4][3] - a[3][3] * a[4][1];
    let t6 = a[3][1] * a[4][2] - a[3][2] * a[4][1];
    let t7 = a[3][0] * a[4][4] - a[3][4] * a[4][0];
    let t8 = a[3][0] * a[4][3] - a[3][3] * a[4][0];
    let t9 = a[3][0] * a[4][2] - a[3][2] * a[4][0];
    let t10 = a[3][0] * a[4][1] - a[3][1] * a[4][0];

    let t11 = a[2][2] * t1 - a[2][3] * t2 + a[2][4] * t3;
    let t12 = a[2][1] * t1 - a[2][3] * t4 + a[2][4] * t5;
    let t13 = a[2][1] * t2 - a[2][2] * t4 + a[2][4] * t6;
    let t14 = a[2][1] * t3 - a[2][2] * t5 + a[2][3] * t6;
    let t15 = a[2][0] * t1 - a[2][3] * t7 + a[2][4] * t8;
    let t16 = a[2][0] * t2 - a[2][2] * t7 + a[2][4] * t9;
    let t17 = a[2][0] * t3 - a[2][2] * t8 + a[2][3] * t9;

    let b0 = a[1][1] * t11 - a[1][2] * t12 + a[1][3] * t13 - a[1][4] * t14;
    let b1 = -a[1][0] * t11 + a[1][2] * t15 - a[1][3] * t16 + a[1][4] * t17;

    let t18 = a[2][0] * t4 - a[2][1] * t7 + a[2][4] * t10;
    let t19 = a[2][0] * t5 - a[2][1] * t8 + a[2][3] * t10;
    let t20 = a[2][0] * t6 - a[2][1] * t9 + a[2][2] * t10;

    let b2 = a[1][0] * t12 - a[1][1] * t15 + a[1][3] * t18 - a[1][4] * t19;
    let b3 = -a[1][0] * t13 + a[1][1] * t16 - a[1][2] * t18 + a[1][4] * t20;
    let b4 = a[1][0] * t14 - a[1][1] * t17 + a[1][2] * t19 - a[1][3] * t20;

    a[0][0] * b0 + a[0][1] * b1 + a[0][2] * b2 + a[0][3] * b3 + a[0][4] * b4
}

pub(crate) fn invert5(a: &[Vec<Complex64>], b: &mut [Vec<Complex64>]) {
    let mut t1 = a[3][3] * a[4][4] - a[3][4] * a[4][3];
    let mut t2 = a[3][2] * a[4][4] - a[3][4] * a[4][2];
    let mut t3 = a[3][2] * a[4][3] - a[3][3] * a[4][2];
    let mut t4 = a[3][1] * a[4][4] - a[3][4] * a[4][1];
    let mut t5 = a[3][1] * a[4][3] - a[3][3] * a[4][1];
    let mut t6 = a[3][1] * a[4][2] - a[3][2] * a[4][1];
    let mut t7 = a[3][0] * a[4][4] - a[3][4] * a[4][0];
    let mut t8 = a[3][0] * a[4][3] - a[3][3] * a[4][0];
    let mut t9 = a[3][0] * a[4][2] - a[3][2] * a[4][0];
    let mut t10 = a[3][0] * a[4][1] - a[3][1] * a[4][0];

    let mut t11 = a[2][2] * t1 - a[2][3] * t2 + a[2][4] * t3;
    let mut t12 = a[2][1] * t1 - a[2][3] * t4 + a[2][4] * t5;
    let mut t13 = a[2][1] * t2 - a[2][2] * t4 + a[2][4] * t6;
    let mut t14 = a[2][1] * t3 - a[2][2] * t5 + a[2][3] * t6;
    let mut t15 = a[2][0] * t1 - a[2][3] * t7 + a[2][4] * t8;
    let mut t16 = a[2][0] * t2 - a[2][2] * t7 + a[2][4] * t9;
    let mut t17 = a[2][0] * t3 - a[2][2] * t8 + a[2][3] * t9;

    b[0][0] = a[1][1] * t11 - a[1][2] * t12 + a[1][3] * t13 - a[1][4] * t14;
    b[0][1] = -a[0][1] * t11 + a[0][2] * t12 - a[0][3] * t13 + a[0][4] * t14;
    b[1][0] = -a[1][0] * t11 + a[1][2] * t15 - a[1][3] * t16 + a[1][4] * t17;
    b[1][1] = a[0][0] * t11 - a[0][2] * t15 + a[0][3] * t16 - a[0][4] * t17;

    let mut t18 = a[2][0] * t4 - a[2][1] * t7 + a[2][4] * t10;
    let mut t19 = a[2][0] * t5 - a[2][1] * t8 + a[2][3] * t10;
    let mut t20 = a[2][0] * t6 - a[2][1] * t9 + a[2][2] * t10;

    b[2][0] = a[1][0] * t12 - a[1][1] * t15 + a[1][3] * t18 - a[1][4] * t19;
    b[2][1] = -a[0][0] * t12 + a[0][1] * t15 - a[0][3] * t18 + a[0][4] * t19;
    b[3][0] = -a[1][0] * t13 + a[1][1] * t16 - a[1][2] * t18 + a[1][4] * t20;
    b[3][1] = a[0][0] * t13 - a[0][1] * t16 + a[0][2] * t18 - a[0][4] * t20;
    b[4][0] = a[1][0] * t14 - a[1][1] * t17 + a[1][2] * t19 - a[1][3] * t20;
    b[4][1] = -a[0][0] * t14 + a[0][1] * t17 - a[0][2] * t19 + a[0][3] * t20;

    t11 = a[1][2] * t1 - a[1][3] * t2 + a[1][4] * t3;
    t12 = a[1][1] * t1 - a[1][3] * t4 + a[1][4] * t5;
    t13 = a[1][1] * t2 - a[1][2] * t4 + a[1][4] * t6;
    t14 = a[1][1] * t3 - a[1][2] * t5 + a[1][3] * t6;
    t15 = a[1][0] * t1 - a[1][3] * t7 + a[1][4] * t8;
    t16 = a[1][0] * t2 - a[1][2] * t7 + a[1][4] * t9;
    t17 = a[1][0] * t3 - a[1][2] * t8 + a[1][3] * t9;
    t18 = a[1][0] * t4 - a[1][1] * t7 + a[1][4] * t10;
    t19 = a[1][0] * t5 - a[1][1] * t8 + a[1][3] * t10;

    b[0][2] = a[0][1] * t11 - a[0][2] * t12 + a[0][3] * t13 - a[0][4] * t14;
    b[1][2] = -a[0][0] * t11 + a[0][2] * t15 - a[0][3] * t16 + a[0][4] * t17;
    b[2][2] = a[0][0] * t12 - a[0][1] * t15 + a[0][3] * t18 - a[0][4] * t19;

    t1 = a[0][2] * a[1][3] - a[0][3] * a[1][2];
    t2 = a[0][1] * a[1][3] - a[0][3] * a[1][1];
    t3 = a[0][1] * a[1][2] - a[0][2] * a[1][1];
    t4 = a[0][0] * a[1][3] - a[0][3] * a[1][0];
    t5 = a[0][0] * a[1][2] - a[0][2] * a[1][0];
    t6 = a[0][0] * a[1][1] - a[0][1] * a[1][0];
    t7 = a[0][2] * a[1][4] - a[0][4] * a[1][2];
    t8 = a[0][1] * a[1][4] - a[0][4] * a[1][1];
    t9 = a[0][0] * a[1][4] - a[0][4] * a[1][0];
    t10 = a[0][3] * a[1][4] - a[0][4] * a[1][3];

    t11 = a[2][2] * t10 - a[2][3] * t7 + a[2][4] * t1;
    t12 = a[2][1] * t10 - a[2][3] * t8 + a[2][4] * t2;
    t13 = a[2][1] * t7 - a[2][2] * t8 + a[2][4] * t3;
    t14 = a[2][1] * t1 - a[2][2] * t2 + a[2][3] * t3;
    t15 = a[2][0] * t10 - a[2][3] * t9 + a[2][4] * t4;
    t16 = a[2][0] * t7 - a[2][2] * t9 + a[2][4] * t5;
    t17 = a[2][0] * t1 - a[2][2] * t4 + a[2][3] * t5;

    b[0][3] = a[4][1] * t11 - a[4][2] * t12 + a[4][3] * t13 - a[4][4] * t14;
    b[0][4] = -a[3][1] * t11 + a[3][2] * t12 - a[3][3] * t13 + a[3][4] * t14;
    b[1][3] = -a[4][0] * t11 + a[4][2] * t15 - a[4][3] * t16 + a[4][4] * t17;
    b[1][4] = a[3][0] * t11 - a[3][2] * t15 + a[3][3] * t16 - a[3][4] * t17;

    t18 = a[2][0] * t8 - a[2][1] * t9 + a[2][4] * t6;
    t19 = a[2][0] * t2 - a[2][1] * t4 + a[2][3] * t6;
    t20 = a[2][0] * t3 - a[2][1] * t5 + a[2][2] * t6;

    b[2][3] = a[4][0] * t12 - a[4][1] * t15 + a[4][3] * t18 - a[4][4] * t19;
    b[2][4] = -a[3][0] * t12 + a[3][1] * t15 - a[3][3] * t18 + a[3][4] * t19;
    b[3][3] = -a[4][0] * t13 + a[4][1] * t16 - a[4][2] * t18 + a[4][4] * t20;
    b[3][4] = a[3][0] * t13 - a[3][1] * t16 + a[3][2] * t18 - a[3][4] * t20;
    b[4][3] = a[4][0] * t14 - a[4][1] * t17 + a[4][2] * t19 - a[4][3] * t20;
    b[4][4] = -a[3][0] * t14 + a[3][1] * t17 - a[3][2] * t19 + a[3][3] * t20;

    t11 = a[3][1] * t7 - a[3][2] * t8 + a[3][4] * t3;
    t12 = a[3][0] * t7 - a[3][2] * t9 + a[3][4] * t5;
    t13 = a[3][0] * t8 - a[3][1] * t9 + a[3][4] * t6;
    t14 = a[3][0] * t3 - a[3][1] * t5 + a[3][2] * t6;

    t15 = a[3][1] * t1 - a[3][2] * t2 + a[3][3] * t3;
    t16 = a[3][0] * t1 - a[3][2] * t4 + a[3][3] * t5;
    t17 = a[3][0] * t2 - a[3][1] * t4 + a[3][3] * t6;

    b[3][2] = a[4][0] * t11 - a[4][1] * t12 + a[4][2] * t13 - a[4][4] * t14;
    b[4][2] = -a[4][0] * t15 + a[4][1] * t16 - a[4][2] * t17 + a[4][3] * t14;

    let det = a[0][0] * b[0][0]
        + a[0][1] * b[1][0]
        + a[0][2] * b[2][0]
        + a[0][3] * b[3][0]
        + a[0][4] * b[4][0];

    for i in 0..5 {
        for j in 0..5 {
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
        for seed in [5, 55, 555] {
            let a = random_matrix(5, seed);
            assert_abs_diff_eq!((det5(&a) - naive_det(&a)).norm(), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn inverse_times_input_is_identity() {
        for seed in [11, 110, 1100] {
            let a = random_matrix(5, seed);
            let mut b = zeros(5);
            invert5(&a, &mut b);
            assert!(identity_residual(&a, &b) < 1e-10);
            assert!(identity_residual(&b, &a) < 1e-10);
        }
    }

    /// The determinant the inverse kernel accumulates internally must match
    /// the standalone determinant kernel: same terms, same order.
    #[test]
    fn inverse_consistent_with_det_kernel() {
        let a = random_matrix(5, 21);
        let mut b = zeros(5);
        invert5(&a, &mut b);
        let d = det5(&a);
        assert_abs_diff_eq!((det5(&b) - d.inv()).norm(), 0.0, epsilon = 1e-9);
    }
}
