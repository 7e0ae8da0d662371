//! 2×2 kernel.

use num_complex::Complex64;

pub(crate) fn det2(a: &[Vec<Complex64>]) -> Complex64 {
    a[0][0] * a[1][1] - a[0][1] * a[1][0]
}

pub(crate) fn invert2(a: &[Vec<Complex64>], b: &mut [Vec<Complex64>]) {
    let idet = det2(a).inv();
    b[0][0] = a[1][1] * idet;
    b[0][1] = -a[0][1] * idet;
    b[1][0] = -a[1][0] * idet;
    b[1][1] = a[0][0] * idet;
}

/// In-place variant: the 2×2 inverse only permutes and scales the entries,
/// so it needs one saved scalar and no second buffer.
pub(crate) fn invert2_in_place(a: &mut [Vec<Complex64>]) {
    let idet = det2(a).inv();
    let a00 = a[0][0] * idet;
    a[0][0] = a[1][1] * idet;
    a[0][1] = -a[0][1] * idet;
    a[1][0] = -a[1][0] * idet;
    a[1][1] = a00;
}
