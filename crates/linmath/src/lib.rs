//! # linmath
//!
//! Column-major 4×4 matrix and 3-component vector math for 3D graphics.
//!
//! This crate provides:
//!
//! - [`mat4`] — [`Mat4`] transform constructors (scale, translation, axis
//!   rotations, orthographic projections) and composition.
//! - [`vec3`] — [`Vec3`] arithmetic (dot, cross, length, normalize).
//! - [`checked`] — validating variants that reject degenerate inputs.
//! - [`error`] — library error types.
//!
//! The base operations never fail: degenerate inputs such as zero-length
//! vectors or equal projection bounds propagate IEEE-754 `inf`/`NaN`
//! through the arithmetic instead of panicking. Use [`checked`] where that
//! is not acceptable.

pub mod checked;
pub mod error;
pub mod mat4;
pub mod vec3;

pub use error::MathError;
pub use mat4::Mat4;
pub use vec3::Vec3;
