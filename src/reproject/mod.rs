//! Reprojection of a drawing's geometry
//!
//! - [`classify`]: which fields of an element are positions, directions or
//!   left alone
//! - [`EntityRewriter`]: rewrites one entity
//! - [`GraphWalker`]: rewrites a whole drawing and reports on it

pub mod classify;
pub mod config;
pub mod rewriter;
pub mod walker;

pub use classify::{
    classify, classify_field, classify_value, geometry_fields, FieldRole, GeometryField,
    DIRECTION_FIELDS, OUT_OF_PLANE_FIELDS,
};
pub use config::{ArcEndpointPolicy, ReprojectConfiguration};
pub use rewriter::{ElementOutcome, EntityRewriter, Rewrite};
pub use walker::{reproject_drawing, GraphWalker, ReprojectReport};
