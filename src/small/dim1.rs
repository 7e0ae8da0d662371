//! 1×1 kernel.

use num_complex::Complex64;

/// Determinant of a 1×1 matrix, defined here as the **reciprocal** of the
/// sole entry.
///
/// This matches the inverse kernel rather than the textbook convention
/// (`det([a]) = a`); the two 1×1 kernels are then the same expression. The
/// quirk is inherited from the reference formulas and kept deliberately —
/// see the crate-level docs.
pub(crate) fn det1(a: &[Vec<Complex64>]) -> Complex64 {
    a[0][0].inv()
}

pub(crate) fn invert1(a: &[Vec<Complex64>], b: &mut [Vec<Complex64>]) {
    b[0][0] = a[0][0].inv();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::small::support::c;

    /// The reciprocal convention: det([[2]]) is 0.5, not 2.
    #[test]
    fn det_is_reciprocal() {
        let a = vec![vec![c(2.0, 0.0)]];
        assert_eq!(det1(&a), c(0.5, 0.0));
    }

    #[test]
    fn det_of_unit_entry_is_one() {
        let a = vec![vec![c(1.0, 0.0)]];
        assert_eq!(det1(&a), c(1.0, 0.0));
    }

    #[test]
    fn invert_complex_entry() {
        // 1 / (0 + 2i) = -0.5i
        let a = vec![vec![c(0.0, 2.0)]];
        let mut b = vec![vec![c(0.0, 0.0)]];
        invert1(&a, &mut b);
        assert_eq!(b[0][0], c(0.0, -0.5));
    }
}
