//! Text entity

use super::{Entity, EntityCommon};
use crate::types::{Handle, Vector3};

/// A single-line text entity
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Common entity data
    pub common: EntityCommon,
    /// Text content
    pub value: String,
    /// First alignment (insertion) point
    pub insertion_point: Vector3,
    /// Second alignment point, only present for non-default justification
    pub alignment_point: Option<Vector3>,
    /// Text height
    pub height: f64,
    /// Rotation angle in radians
    pub rotation: f64,
    /// Relative X scale factor
    pub width_factor: f64,
    /// Text style name
    pub style: String,
    /// Normal vector
    pub normal: Vector3,
}

impl Text {
    /// Create a new text entity
    pub fn new() -> Self {
        Text {
            common: EntityCommon::new(),
            value: String::new(),
            insertion_point: Vector3::ZERO,
            alignment_point: None,
            height: 1.0,
            rotation: 0.0,
            width_factor: 1.0,
            style: "STANDARD".to_string(),
            normal: Vector3::UNIT_Z,
        }
    }

    /// Create a text entity with content and position
    pub fn with_value(value: impl Into<String>, insertion_point: Vector3) -> Self {
        Text {
            value: value.into(),
            insertion_point,
            ..Self::new()
        }
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Text {
    fn handle(&self) -> Handle {
        self.common.handle
    }

    fn set_handle(&mut self, handle: Handle) {
        self.common.handle = handle;
    }

    fn layer(&self) -> &str {
        &self.common.layer
    }

    fn entity_type(&self) -> &'static str {
        "TEXT"
    }
}
