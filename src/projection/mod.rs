//! Reference systems and coordinate transforms
//!
//! The projection mathematics itself is supplied from outside through the
//! [`Projection`] trait. This module wraps a projection into a
//! [`ReferenceTransform`] that enforces the invariants the rewriter relies
//! on: deterministic, side-effect free, and never producing NaN or infinite
//! coordinates.

pub mod affine;
pub mod registry;

pub use affine::AffineProjection;
pub use registry::ProjectionRegistry;

use crate::error::TransformError;
use crate::types::{Vector2, Vector3};
use std::fmt;
use std::sync::Arc;

/// A planar map `(x, y) -> (x, y)` between two reference systems
///
/// Implementations must be deterministic and must not mutate shared state,
/// so one instance can be used from several threads at once.
pub trait Projection: Send + Sync {
    /// Project one coordinate pair
    fn forward(&self, x: f64, y: f64) -> Result<(f64, f64), TransformError>;
}

impl<F> Projection for F
where
    F: Fn(f64, f64) -> Result<(f64, f64), TransformError> + Send + Sync,
{
    fn forward(&self, x: f64, y: f64) -> Result<(f64, f64), TransformError> {
        self(x, y)
    }
}

/// A validated reference system identifier such as `EPSG:5186`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReferenceSystemId(String);

impl ReferenceSystemId {
    /// Validate and normalize an identifier
    ///
    /// Surrounding whitespace is trimmed and an `authority:code` prefix is
    /// upper-cased, so `" epsg:5186"` and `"EPSG:5186"` are the same system.
    /// Returns `None` for empty or blank input.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let normalized = match trimmed.split_once(':') {
            Some((authority, code)) => {
                format!("{}:{}", authority.trim().to_ascii_uppercase(), code.trim())
            }
            None => trimmed.to_string(),
        };
        Some(ReferenceSystemId(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReferenceSystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A ready-to-use transform from one reference system to another
///
/// Cheap to clone; clones share the underlying projection.
#[derive(Clone)]
pub struct ReferenceTransform {
    source: ReferenceSystemId,
    target: ReferenceSystemId,
    /// `None` means identity
    projection: Option<Arc<dyn Projection>>,
}

impl ReferenceTransform {
    /// Transform that leaves every coordinate unchanged
    pub fn identity(system: ReferenceSystemId) -> Self {
        Self {
            source: system.clone(),
            target: system,
            projection: None,
        }
    }

    /// Wrap a projection between two systems
    pub fn new(
        source: ReferenceSystemId,
        target: ReferenceSystemId,
        projection: Arc<dyn Projection>,
    ) -> Self {
        Self {
            source,
            target,
            projection: Some(projection),
        }
    }

    /// Wrap a closure; mostly useful in tests and small tools
    pub fn from_fn<F>(source: ReferenceSystemId, target: ReferenceSystemId, f: F) -> Self
    where
        F: Fn(f64, f64) -> Result<(f64, f64), TransformError> + Send + Sync + 'static,
    {
        Self::new(source, target, Arc::new(f))
    }

    pub fn source(&self) -> &ReferenceSystemId {
        &self.source
    }

    pub fn target(&self) -> &ReferenceSystemId {
        &self.target
    }

    pub fn is_identity(&self) -> bool {
        self.projection.is_none()
    }

    /// Project one coordinate pair
    ///
    /// Non-finite input or output is reported as
    /// [`TransformError::OutOfDomain`].
    pub fn forward(&self, x: f64, y: f64) -> Result<(f64, f64), TransformError> {
        if !(x.is_finite() && y.is_finite()) {
            return Err(TransformError::OutOfDomain { x, y });
        }
        let Some(projection) = &self.projection else {
            return Ok((x, y));
        };
        let (px, py) = projection.forward(x, y)?;
        if px.is_finite() && py.is_finite() {
            Ok((px, py))
        } else {
            Err(TransformError::OutOfDomain { x, y })
        }
    }

    /// Project a planar position
    pub fn forward_point2(&self, p: Vector2) -> Result<Vector2, TransformError> {
        self.forward(p.x, p.y).map(Vector2::from)
    }

    /// Project the planar part of a position, copying z unchanged
    pub fn forward_point3(&self, p: Vector3) -> Result<Vector3, TransformError> {
        self.forward_point2(p.xy()).map(|xy| p.with_xy(xy))
    }

    /// Image of the direction vector `dir` anchored at `anchor`
    ///
    /// A general projection is not linear, so a direction has no exact
    /// image. This projects `anchor + dir` and subtracts the already
    /// projected anchor. The error grows with the length of `dir` relative
    /// to the curvature of the projection around `anchor`; for affine
    /// projections the result is exact.
    pub fn forward_direction(
        &self,
        anchor: Vector2,
        projected_anchor: Vector2,
        dir: Vector2,
    ) -> Result<Vector2, TransformError> {
        if self.is_identity() {
            return Ok(dir);
        }
        Ok(self.forward_point2(anchor + dir)? - projected_anchor)
    }
}

impl fmt::Debug for ReferenceTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceTransform")
            .field("source", &self.source)
            .field("target", &self.target)
            .field("identity", &self.is_identity())
            .finish()
    }
}
