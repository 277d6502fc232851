//! Library error types.

/// Errors reported by the validating operations in [`crate::checked`].
///
/// The base [`Mat4`](crate::Mat4)/[`Vec3`](crate::Vec3) operations never
/// produce these — they let degenerate arithmetic flow through as
/// `inf`/`NaN` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// The vector has zero length and cannot be normalized.
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,

    /// A projection was given equal bounds on the named axis.
    #[error("degenerate projection bounds on the {axis} axis")]
    DegenerateBounds {
        /// Axis with coincident bounds: `"x"`, `"y"` or `"z"`.
        axis: &'static str,
    },

    /// A viewport projection was given a zero height.
    #[error("viewport height must be nonzero")]
    ZeroViewportHeight,
}
