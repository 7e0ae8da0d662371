//! 3×3 kernel.

use num_complex::Complex64;

pub(crate) fn det3(a: &[Vec<Complex64>]) -> Complex64 {
    let b0 = a[1][1] * a[2][2] - a[1][2] * a[2][1];
    let b1 = a[1][2] * a[2][0] - a[1][0] * a[2][2];
    let b2 = a[1][0] * a[2][1] - a[1][1] * a[2][0];
    a[0][0] * b0 + a[0][1] * b1 + a[0][2] * b2
}

pub(crate) fn invert3(a: &[Vec<Complex64>], b: &mut [Vec<Complex64>]) {
    b[0][0] = a[1][1] * a[2][2] - a[1][2] * a[2][1];
    b[1][0] = a[1][2] * a[2][0] - a[1][0] * a[2][2];
    b[2][0] = a[1][0] * a[2][1] - a[1][1] * a[2][0];

    let det = a[0][0] * b[0][0] + a[0][1] * b[1][0] + a[0][2] * b[2][0];

    b[0][1] = a[0][2] * a[2][1] - a[0][1] * a[2][2];
    b[1][1] = a[0][0] * a[2][2] - a[0][2] * a[2][0];
    b[2][1] = a[0][1] * a[2][0] - a[0][0] * a[2][1];
    b[0][2] = a[0][1] * a[1][2] - a[0][2] * a[1][1];
    b[1][2] = a[0][2] * a[1][0] - a[0][0] * a[1][2];
    b[2][2] = a[0][0] * a[1][1] - a[0][1] * a[1][0];

    for i in 0..3 {
        for j in 0..3 {
            b[i][j] /= det;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::small::support::{c, identity_residual, naive_det, random_matrix, zeros};
    use approx::assert_abs_diff_eq;

    #[test]
    fn det_matches_cofactor_oracle() {
        let a = random_matrix(3, 3);
        assert_abs_diff_eq!((det3(&a) - naive_det(&a)).norm(), 0.0, epsilon = 1e-12);
    }

    /// A cyclic permutation is even: determinant +1.
    #[test]
    fn det_cyclic_permutation_is_one() {
        let z = c(0.0, 0.0);
        let o = c(1.0, 0.0);
        let a = vec![vec![z, o, z], vec![z, z, o], vec![o, z, z]];
        assert_eq!(det3(&a), o);
    }

    /// A single row swap of the identity is odd: determinant -1.
    #[test]
    fn det_row_swap_is_minus_one() {
        let z = c(0.0, 0.0);
        let o = c(1.0, 0.0);
        let a = vec![vec![z, o, z], vec![o, z, z], vec![z, z, o]];
        assert_eq!(det3(&a), c(-1.0, 0.0));
    }

    #[test]
    fn inverse_times_input_is_identity() {
        let a = random_matrix(3, 33);
        let mut b = zeros(3);
        invert3(&a, &mut b);
        assert!(identity_residual(&a, &b) < 1e-12);
        assert!(identity_residual(&b, &a) < 1e-12);
    }
}
