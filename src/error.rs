//! Error types for the zinv crate.

/// Error type for all fallible operations in the zinv crate.
///
/// Only the LU fallback path (dimension ≥ 7) produces errors: the closed-form
/// kernels are pivot-free and report singular input silently through
/// non-finite output entries instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ZinvError {
    /// Returned when the pivoted factorization meets an exactly zero pivot,
    /// i.e. the matrix is singular and has no inverse.
    ///
    /// `pivot` is the 0-based elimination step at which the zero pivot
    /// occurred (the analogue of LAPACK's positive `info` from `getrf`).
    #[error("matrix is singular: zero pivot at elimination step {pivot}")]
    Singular {
        /// Elimination step (0-based) with a zero pivot column.
        pivot: usize,
    },
}
