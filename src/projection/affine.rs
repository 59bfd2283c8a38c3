//! Affine projections
//!
//! Many local grid conversions (datum shifts between neighbouring national
//! grids, site-local survey grids) are well approximated by a planar affine
//! map or a Helmert transform. These are exact under the finite-difference
//! direction rule and have closed-form inverses.

use super::Projection;
use crate::error::TransformError;
use crate::types::Vector2;
use nalgebra as na;

/// Planar affine map stored as a homogeneous 3x3 matrix
///
/// `x' = a·x + b·y + tx`, `y' = c·x + d·y + ty`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineProjection {
    matrix: na::Matrix3<f64>,
}

impl AffineProjection {
    /// Identity map
    pub fn identity() -> Self {
        Self {
            matrix: na::Matrix3::identity(),
        }
    }

    /// General affine map from its six coefficients
    pub fn new(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self {
            matrix: na::Matrix3::new(
                a, b, tx, //
                c, d, ty, //
                0.0, 0.0, 1.0,
            ),
        }
    }

    /// Pure translation
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// Four-parameter Helmert transform: rotate by `rotation` radians about
    /// the origin, scale uniformly, then translate
    pub fn helmert(tx: f64, ty: f64, rotation: f64, scale: f64) -> Self {
        let (sin, cos) = rotation.sin_cos();
        Self::new(scale * cos, -scale * sin, scale * sin, scale * cos, tx, ty)
    }

    /// Inverse map, or `None` when the linear part is singular
    pub fn inverse(&self) -> Option<Self> {
        if self.matrix.determinant().abs() < 1e-12 {
            return None;
        }
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }

    /// `self` followed by `next`
    pub fn then(&self, next: &AffineProjection) -> Self {
        Self {
            matrix: next.matrix * self.matrix,
        }
    }

    /// Apply the map to a point
    pub fn apply(&self, p: Vector2) -> Vector2 {
        let h = self.matrix * na::Vector3::new(p.x, p.y, 1.0);
        Vector2::new(h.x, h.y)
    }
}

impl Default for AffineProjection {
    fn default() -> Self {
        Self::identity()
    }
}

impl Projection for AffineProjection {
    fn forward(&self, x: f64, y: f64) -> Result<(f64, f64), TransformError> {
        let p = self.apply(Vector2::new(x, y));
        Ok((p.x, p.y))
    }
}
