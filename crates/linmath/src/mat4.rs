//! Column-major 4×4 transform matrix.
//!
//! [`Mat4`] stores its 16 elements as `cols[col][row]`. Translation lives
//! in column 3, so a transform applies to a column vector on the right:
//! `p' = M × p`. Composition follows the same convention — `projection *
//! model` applies `model` first. Every constructor writes all 16 elements;
//! no partially initialised matrices are ever produced.
//!
//! Constructors that divide by a caller-supplied extent (the projection
//! family) do not guard against zero: degenerate bounds yield `inf`/`NaN`
//! elements. See [`crate::checked`] for the validating variants.

use std::fmt;
use std::ops::{Mul, MulAssign};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::vec3::Vec3;

/// A 4×4 transform matrix stored in column-major order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mat4 {
    /// Columns of the matrix, each a `[f32; 4]` of row values.
    pub cols: [[f32; 4]; 4],
}

impl Mat4 {
    /// All-zero matrix.
    pub const ZERO: Self = Self {
        cols: [[0.0; 4]; 4],
    };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from four column arrays.
    #[inline]
    #[must_use]
    pub const fn from_cols(c0: [f32; 4], c1: [f32; 4], c2: [f32; 4], c3: [f32; 4]) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    /// Creates a matrix from a column-major flat array.
    #[inline]
    #[must_use]
    pub const fn from_cols_array(a: [f32; 16]) -> Self {
        Self::from_cols(
            [a[0], a[1], a[2], a[3]],
            [a[4], a[5], a[6], a[7]],
            [a[8], a[9], a[10], a[11]],
            [a[12], a[13], a[14], a[15]],
        )
    }

    /// Flattens the matrix to a column-major array, the layout graphics
    /// APIs expect.
    #[inline]
    #[must_use]
    pub const fn to_cols_array(&self) -> [f32; 16] {
        let c = &self.cols;
        [
            c[0][0], c[0][1], c[0][2], c[0][3], c[1][0], c[1][1], c[1][2], c[1][3], c[2][0],
            c[2][1], c[2][2], c[2][3], c[3][0], c[3][1], c[3][2], c[3][3],
        ]
    }

    /// Uniform scale matrix: diagonal `{scale, scale, scale, 1}`.
    #[must_use]
    pub const fn from_scale(scale: f32) -> Self {
        Self::from_cols(
            [scale, 0.0, 0.0, 0.0],
            [0.0, scale, 0.0, 0.0],
            [0.0, 0.0, scale, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    /// Translation matrix: identity with `v` in column 3.
    #[must_use]
    pub const fn from_translation(v: Vec3) -> Self {
        Self::from_cols(
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [v.x, v.y, v.z, 1.0],
        )
    }

    /// Right-handed rotation about the X axis by `rad` radians.
    #[must_use]
    pub fn from_rotation_x(rad: f32) -> Self {
        let (sin_r, cos_r) = rad.sin_cos();
        Self::from_cols(
            [1.0, 0.0, 0.0, 0.0],
            [0.0, cos_r, sin_r, 0.0],
            [0.0, -sin_r, cos_r, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    /// Right-handed rotation about the Y axis by `rad` radians.
    #[must_use]
    pub fn from_rotation_y(rad: f32) -> Self {
        let (sin_r, cos_r) = rad.sin_cos();
        Self::from_cols(
            [cos_r, 0.0, -sin_r, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [sin_r, 0.0, cos_r, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    /// Right-handed rotation about the Z axis by `rad` radians.
    #[must_use]
    pub fn from_rotation_z(rad: f32) -> Self {
        let (sin_r, cos_r) = rad.sin_cos();
        Self::from_cols(
            [cos_r, sin_r, 0.0, 0.0],
            [-sin_r, cos_r, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    /// Off-center orthographic projection.
    ///
    /// Maps `x ∈ [left, right]`, `y ∈ [bottom, top]`, `z ∈ [near, far]`
    /// to the unit cube. Equal bounds on any axis divide by zero and
    /// produce non-finite elements; use [`crate::checked::orthographic`]
    /// to reject them instead.
    #[must_use]
    pub fn orthographic(left: f32, right: f32, top: f32, bottom: f32, near: f32, far: f32) -> Self {
        Self::from_cols(
            [2.0 / (right - left), 0.0, 0.0, 0.0],
            [0.0, 2.0 / (top - bottom), 0.0, 0.0],
            [0.0, 0.0, -2.0 / (far - near), 0.0],
            [0.0, 0.0, -((far + near) / (far - near)), 1.0],
        )
    }

    /// 2D orthographic projection on the `near = -1, far = 1` slab.
    #[must_use]
    pub fn orthographic_2d(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self::orthographic(left, right, top, bottom, -1.0, 1.0)
    }

    /// 2D projection for a viewport of the given size, mapping
    /// `x ∈ [-aspect, aspect]` and `y ∈ [-1, 1]` where
    /// `aspect = width / height`.
    #[must_use]
    pub fn viewport_2d(width: f32, height: f32) -> Self {
        let aspect = width / height;
        Self::orthographic_2d(-aspect, aspect, 1.0, -1.0)
    }

    /// Returns column `col` of the matrix.
    #[inline]
    #[must_use]
    pub fn col(&self, col: usize) -> [f32; 4] {
        self.cols[col]
    }

    /// Returns row `row` of the matrix.
    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> [f32; 4] {
        [
            self.cols[0][row],
            self.cols[1][row],
            self.cols[2][row],
            self.cols[3][row],
        ]
    }

    /// Returns the transpose. The diagonal is untouched; the six
    /// off-diagonal pairs trade places.
    #[must_use]
    pub fn transpose(self) -> Self {
        let mut out = Self::ZERO;
        for col in 0..4 {
            for row in 0..4 {
                out.cols[col][row] = self.cols[row][col];
            }
        }
        out
    }

    /// Exchanges the contents of two matrices.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Applies the transform to a point (`w = 1`); translation applies.
    #[must_use]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let c = &self.cols;
        Vec3::new(
            c[0][0] * p.x + c[1][0] * p.y + c[2][0] * p.z + c[3][0],
            c[0][1] * p.x + c[1][1] * p.y + c[2][1] * p.z + c[3][1],
            c[0][2] * p.x + c[1][2] * p.y + c[2][2] * p.z + c[3][2],
        )
    }

    /// Applies the transform to a direction (`w = 0`); translation is
    /// ignored.
    #[must_use]
    pub fn transform_direction(&self, d: Vec3) -> Vec3 {
        let c = &self.cols;
        Vec3::new(
            c[0][0] * d.x + c[1][0] * d.y + c[2][0] * d.z,
            c[0][1] * d.x + c[1][1] * d.y + c[2][1] * d.z,
            c[0][2] * d.x + c[1][2] * d.y + c[2][2] * d.z,
        )
    }

    /// Logs the matrix at debug level, one event per row.
    pub fn print(&self) {
        for row in 0..4 {
            let [a, b, c, d] = self.row(row);
            debug!("{a:>8.3}{b:>8.3}{c:>8.3}{d:>8.3}");
        }
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        // Every output element reads a full row of `self` and a full
        // column of `rhs`, so accumulation goes into a fresh matrix.
        let mut out = Self::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                for i in 0..4 {
                    out.cols[col][row] += self.cols[i][row] * rhs.cols[col][i];
                }
            }
        }
        out
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Four lines, one per row, fixed-width signed fields with three decimal
/// digits. A debug aid, not a stable serialisation format.
impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            let [a, b, c, d] = self.row(row);
            writeln!(f, "{a:>8.3}{b:>8.3}{c:>8.3}{d:>8.3}")?;
        }
        Ok(())
    }
}

impl From<[[f32; 4]; 4]> for Mat4 {
    #[inline]
    fn from(cols: [[f32; 4]; 4]) -> Self {
        Self { cols }
    }
}

impl From<Mat4> for [[f32; 4]; 4] {
    #[inline]
    fn from(m: Mat4) -> Self {
        m.cols
    }
}
