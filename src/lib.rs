//! # dxf-reproject
//!
//! Coordinate reprojection for CAD drawings.
//!
//! Given a drawing whose geometry is expressed in one geodetic reference
//! system, this library rewrites every coordinate so the drawing is
//! expressed in another one. Positions are projected, relative vectors
//! (ellipse axes, image pixel vectors, tangents) are re-derived around their
//! projected anchor, and everything that is not planar geometry (elevations,
//! bulges, widths, layers, colors) is carried over unchanged.
//!
//! Reading and writing drawing files, and the projection mathematics itself,
//! are left to other crates: a [`Drawing`] is the in-memory element graph,
//! and a [`Projection`] is any `(x, y) -> (x, y)` map.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dxf_reproject::{reproject_drawing, AffineProjection, Drawing, ProjectionRegistry};
//!
//! let mut registry = ProjectionRegistry::new();
//! registry.register_affine("EPSG:5186", "EPSG:5174", AffineProjection::translation(-0.5, 2.0))?;
//!
//! let mut drawing: Drawing = read_drawing("site.dxf")?;
//! let report = reproject_drawing(
//!     &mut drawing,
//!     &registry,
//!     "EPSG:5186",
//!     "EPSG:5174",
//!     Default::default(),
//! )?;
//!
//! for warning in &report.warnings {
//!     println!("{}", warning);
//! }
//! # Ok::<(), dxf_reproject::ReprojectError>(())
//! ```
//!
//! ## Architecture
//!
//! - `projection` - reference system ids, the `Projection` trait and the
//!   registry that builds a `ReferenceTransform`
//! - `reproject` - field classification, per-entity rewriting and the
//!   drawing walker
//! - `entities` / `document` - the element graph being rewritten
//! - `notification` - non-fatal warnings collected during a run

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod entities;
pub mod error;
pub mod notification;
pub mod projection;
pub mod reproject;
pub mod types;

// Re-export commonly used types
pub use error::{ReprojectError, Result, TransformError};
pub use types::{Color, Handle, Vector2, Vector3};

// Re-export entity types
pub use entities::{
    Arc, Circle, ElementKind, Ellipse, Entity, EntityType, Hatch, Insert, Leader, Line,
    LwPolyline, MText, Point, Polyline, RasterImage, Text, Unclassified,
};

pub use document::Drawing;
pub use notification::{Warning, WarningCollection, WarningKind};
pub use projection::{
    AffineProjection, Projection, ProjectionRegistry, ReferenceSystemId, ReferenceTransform,
};
pub use reproject::{
    reproject_drawing, ArcEndpointPolicy, EntityRewriter, FieldRole, GraphWalker,
    ReprojectConfiguration, ReprojectReport,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
