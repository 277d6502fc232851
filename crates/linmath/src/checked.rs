//! Validating variants of the degenerate-input-prone operations.
//!
//! The base [`Mat4`]/[`Vec3`] operations never report failure — a
//! zero-length vector or coincident projection bounds simply propagate
//! `inf`/`NaN` through the result. The functions here reject such inputs
//! up front and return a [`MathError`] instead. They are a separate layer:
//! callers that want the permissive semantics keep using the base API.

use crate::error::MathError;
use crate::mat4::Mat4;
use crate::vec3::Vec3;

/// Normalizes `v`, rejecting zero-length input.
///
/// # Errors
///
/// Returns [`MathError::ZeroLength`] if `v` is the zero vector.
pub fn normalize(v: Vec3) -> Result<Vec3, MathError> {
    if v.length_squared() == 0.0 {
        return Err(MathError::ZeroLength);
    }
    Ok(v.normalize())
}

/// Builds an off-center orthographic projection, rejecting degenerate
/// bounds.
///
/// # Errors
///
/// Returns [`MathError::DegenerateBounds`] if any bound pair is equal.
pub fn orthographic(
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    near: f32,
    far: f32,
) -> Result<Mat4, MathError> {
    if right == left {
        return Err(MathError::DegenerateBounds { axis: "x" });
    }
    if top == bottom {
        return Err(MathError::DegenerateBounds { axis: "y" });
    }
    if far == near {
        return Err(MathError::DegenerateBounds { axis: "z" });
    }
    Ok(Mat4::orthographic(left, right, top, bottom, near, far))
}

/// Builds a 2D orthographic projection on the `near = -1, far = 1` slab,
/// rejecting degenerate bounds.
///
/// # Errors
///
/// Returns [`MathError::DegenerateBounds`] if a bound pair is equal.
pub fn orthographic_2d(left: f32, right: f32, top: f32, bottom: f32) -> Result<Mat4, MathError> {
    orthographic(left, right, top, bottom, -1.0, 1.0)
}

/// Builds a 2D viewport projection, rejecting a zero height.
///
/// # Errors
///
/// Returns [`MathError::ZeroViewportHeight`] if `height` is zero.
pub fn viewport_2d(width: f32, height: f32) -> Result<Mat4, MathError> {
    if height == 0.0 {
        return Err(MathError::ZeroViewportHeight);
    }
    Ok(Mat4::viewport_2d(width, height))
}
