//! Error types for dxf-reproject

use thiserror::Error;

/// Failure of a single coordinate transform or of transform construction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// The projection is undefined for this input, or produced a non-finite result
    #[error("Coordinate ({x}, {y}) is outside the projection domain")]
    OutOfDomain { x: f64, y: f64 },

    /// Both reference systems are known but no projection between them is available
    #[error("Unsupported reference system pair: {source_ref} -> {target_ref}")]
    Unsupported {
        source_ref: String,
        target_ref: String,
    },

    /// A reference system identifier could not be resolved
    #[error("Unknown reference system: {0}")]
    UnknownReferenceSystem(String),
}

/// Fatal error of a reprojection run
///
/// Only raised before traversal begins. Problems with individual elements
/// are reported as warnings instead (see [`crate::notification`]).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReprojectError {
    /// A reference system identifier was empty or blank
    #[error("Reference system identifier must not be empty ({0})")]
    EmptyReference(&'static str),

    /// The transform between the two reference systems could not be constructed
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),
}

/// Result type alias for dxf-reproject operations
pub type Result<T> = std::result::Result<T, ReprojectError>;
