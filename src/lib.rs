//! # zinv
//!
//! Closed-form determinants and inverses for small square matrices of
//! `Complex64` entries, with a pivoted-LU fallback for everything larger.
//!
//! Dimensions 1 through 6 are handled by fully unrolled cofactor expansions:
//! no recursion, no pivoting, every 2×2 sub-determinant computed once and
//! reused across the cofactors that need it. This avoids the overhead of a
//! general LU factorization for the small fixed sizes that dominate
//! per-element work in finite-element and tensor pipelines. Dimension 7 and
//! up goes through [`lu`], an unblocked partial-pivoting factorization behind
//! the swappable [`lu::LuBackend`] trait.
//!
//! | dimension | route |
//! |-----------|-------|
//! | 1..=6     | unrolled adjugate/cofactor kernel |
//! | 7..       | column-major pivoted LU (getrf/getri-shaped backend) |
//!
//! ## Conventions
//!
//! A matrix is a slice of caller-owned rows, `&[Vec<Complex64>]`, with
//! element `(i, j)` at `a[i][j]`. Dimension is taken from `a.len()`; every
//! row must have that length.
//!
//! The closed-form branch is pivot-free by design and does **not** detect
//! singular input: inverting a singular matrix of dimension ≤ 6 silently
//! yields non-finite entries. Callers that need the distinction should check
//! [`det`] first or inspect the output. The LU branch reports singularity as
//! [`ZinvError::Singular`].
//!
//! One deliberate quirk is inherited and documented rather than hidden:
//! the 1×1 *determinant* is defined as the reciprocal of the sole entry (so
//! `det([[2]])` is `0.5`, not `2`), keeping the 1×1 determinant and inverse
//! kernels the same expression. See [`det`].
//!
//! ## Example
//!
//! ```
//! use num_complex::Complex64;
//! use zinv::{det, invert};
//!
//! let c = |re: f64| Complex64::new(re, 0.0);
//! let a = vec![vec![c(1.0), c(0.0)], vec![c(0.0), c(2.0)]];
//! let mut inv = vec![vec![c(0.0); 2]; 2];
//!
//! assert_eq!(det(&a), c(2.0));
//! invert(&a, &mut inv).unwrap();
//! assert_eq!(inv[1][1], c(0.5));
//! ```

mod dispatch;
mod error;
mod small;

pub mod lu;

pub use dispatch::{
    det, det_with, invert, invert_in_place, invert_in_place_with, invert_with,
};
pub use error::ZinvError;
