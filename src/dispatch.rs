//! Public entry points: route by dimension to a closed-form kernel or the
//! LU fallback.

use num_complex::Complex64;

use crate::error::ZinvError;
use crate::lu::{self, LuBackend, NativeLu};
use crate::small::{dim1, dim2, dim3, dim4, dim5, dim6};

/// Checks the row-storage contract: at least one row, every row of length
/// `a.len()`. Dispatch performs no other validation.
fn check_square(op: &str, a: &[Vec<Complex64>]) {
    let n = a.len();
    assert!(n > 0, "{op}: matrix dimension must be positive");
    for (i, row) in a.iter().enumerate() {
        assert!(
            row.len() == n,
            "{op}: row {i} has length {}, expected {n}",
            row.len()
        );
    }
}

/// Determinant of a square complex matrix.
///
/// Dimensions 1..=6 use the unrolled cofactor expansions; anything larger
/// goes through the built-in LU backend (see [`det_with`] to supply another).
///
/// **Convention**: the 1×1 determinant is the *reciprocal* of the sole entry
/// (`det([[2]]) == 0.5`), mirroring the 1×1 inverse. See the crate docs.
///
/// # Panics
///
/// Panics if `a` is empty or its rows do not all have length `a.len()`.
pub fn det(a: &[Vec<Complex64>]) -> Complex64 {
    det_with(&NativeLu, a)
}

/// [`det`] with an explicit LU backend for the dimension ≥ 7 path.
///
/// # Panics
///
/// Panics if `a` is empty or its rows do not all have length `a.len()`.
pub fn det_with<B: LuBackend>(backend: &B, a: &[Vec<Complex64>]) -> Complex64 {
    check_square("det", a);
    match a.len() {
        1 => dim1::det1(a),
        2 => dim2::det2(a),
        3 => dim3::det3(a),
        4 => dim4::det4(a),
        5 => dim5::det5(a),
        6 => dim6::det6(a),
        _ => lu::det(backend, a),
    }
}

/// Writes the inverse of `a` into `out`, leaving `a` unmodified.
///
/// For dimensions 1..=6, singular input is **not** detected: the result
/// silently contains non-finite entries and `Ok(())` is still returned.
/// Dimension ≥ 7 reports singular input as [`ZinvError::Singular`], in which
/// case `out` is unmodified.
///
/// # Panics
///
/// Panics if `a` is empty, if any row of `a` or `out` does not have length
/// `a.len()`, or if `out` has a different dimension than `a`.
pub fn invert(a: &[Vec<Complex64>], out: &mut [Vec<Complex64>]) -> Result<(), ZinvError> {
    invert_with(&NativeLu, a, out)
}

/// [`invert`] with an explicit LU backend for the dimension ≥ 7 path.
///
/// # Panics
///
/// Same conditions as [`invert`].
pub fn invert_with<B: LuBackend>(
    backend: &B,
    a: &[Vec<Complex64>],
    out: &mut [Vec<Complex64>],
) -> Result<(), ZinvError> {
    check_square("invert", a);
    check_square("invert (output)", out);
    assert!(
        a.len() == out.len(),
        "invert: output dimension {} does not match input dimension {}",
        out.len(),
        a.len()
    );
    match a.len() {
        1 => dim1::invert1(a, out),
        2 => dim2::invert2(a, out),
        3 => dim3::invert3(a, out),
        4 => dim4::invert4(a, out),
        5 => dim5::invert5(a, out),
        6 => dim6::invert6(a, out),
        _ => lu::invert(backend, a, out)?,
    }
    Ok(())
}

/// Overwrites `a` with its own inverse.
///
/// Same contract as [`invert`]. The 1×1 and 2×2 formulas run truly in place;
/// 3..=6 read input entries after their first output write, so those
/// dimensions copy the rows once and run the two-buffer kernel. Dimension ≥ 7
/// leaves `a` untouched on error.
///
/// # Panics
///
/// Panics if `a` is empty or its rows do not all have length `a.len()`.
pub fn invert_in_place(a: &mut [Vec<Complex64>]) -> Result<(), ZinvError> {
    invert_in_place_with(&NativeLu, a)
}

/// [`invert_in_place`] with an explicit LU backend for the dimension ≥ 7
/// path.
///
/// # Panics
///
/// Same conditions as [`invert_in_place`].
pub fn invert_in_place_with<B: LuBackend>(
    backend: &B,
    a: &mut [Vec<Complex64>],
) -> Result<(), ZinvError> {
    check_square("invert_in_place", a);
    match a.len() {
        1 => a[0][0] = a[0][0].inv(),
        2 => dim2::invert2_in_place(a),
        n @ 3..=6 => {
            let src = a.to_vec();
            match n {
                3 => dim3::invert3(&src, a),
                4 => dim4::invert4(&src, a),
                5 => dim5::invert5(&src, a),
                _ => dim6::invert6(&src, a),
            }
        }
        _ => lu::invert_in_place(backend, a)?,
    }
    Ok(())
}
