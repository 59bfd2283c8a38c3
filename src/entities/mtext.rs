//! Multi-line text entity

use super::{Entity, EntityCommon};
use crate::types::{Handle, Vector3};

/// A multi-line text entity
#[derive(Debug, Clone, PartialEq)]
pub struct MText {
    /// Common entity data
    pub common: EntityCommon,
    /// Text content with inline formatting codes
    pub value: String,
    /// Insertion point
    pub insertion_point: Vector3,
    /// Secondary alignment point, if the source carried one
    pub alignment_point: Option<Vector3>,
    /// Nominal text height
    pub height: f64,
    /// Reference rectangle width
    pub rectangle_width: f64,
    /// Rotation angle in radians
    pub rotation: f64,
    /// Text style name
    pub style: String,
    /// Attachment point code (1 = top left … 9 = bottom right)
    pub attachment_point: i16,
    /// Normal vector
    pub normal: Vector3,
}

impl MText {
    /// Create a new MText entity
    pub fn new() -> Self {
        MText {
            common: EntityCommon::new(),
            value: String::new(),
            insertion_point: Vector3::ZERO,
            alignment_point: None,
            height: 1.0,
            rectangle_width: 0.0,
            rotation: 0.0,
            style: "STANDARD".to_string(),
            attachment_point: 1,
            normal: Vector3::UNIT_Z,
        }
    }

    /// Create an MText entity with content and position
    pub fn with_value(value: impl Into<String>, insertion_point: Vector3) -> Self {
        MText {
            value: value.into(),
            insertion_point,
            ..Self::new()
        }
    }
}

impl Default for MText {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for MText {
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
        "MTEXT"
    }
}
