//! Insert entity (block reference)

use super::{Entity, EntityCommon};
use crate::types::{Handle, Vector3};

/// A block reference
///
/// Block definitions live in block-local coordinates; only the insertion
/// point of the reference is a world position.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub common: EntityCommon,
    /// Name of the referenced block
    pub block_name: String,
    /// Insertion point
    pub insert_point: Vector3,
    /// X scale factor
    pub x_scale: f64,
    /// Y scale factor
    pub y_scale: f64,
    /// Z scale factor
    pub z_scale: f64,
    /// Rotation angle in radians
    pub rotation: f64,
    /// Normal vector
    pub normal: Vector3,
}

impl Insert {
    /// Create a reference to `block_name` at `insert_point`
    pub fn new(block_name: impl Into<String>, insert_point: Vector3) -> Self {
        Insert {
            common: EntityCommon::new(),
            block_name: block_name.into(),
            insert_point,
            x_scale: 1.0,
            y_scale: 1.0,
            z_scale: 1.0,
            rotation: 0.0,
            normal: Vector3::UNIT_Z,
        }
    }
}

impl Entity for Insert {
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
        "INSERT"
    }
}
