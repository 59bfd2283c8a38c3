//! Arc entity

use super::{Entity, EntityCommon};
use crate::types::{Handle, Vector3};
use std::f64::consts::PI;

/// A circular arc entity
///
/// Angles are in radians, measured counter-clockwise from +X, and the arc
/// always runs counter-clockwise from `start_angle` to `end_angle`.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point
    pub center: Vector3,
    /// Radius
    pub radius: f64,
    /// Start angle in radians
    pub start_angle: f64,
    /// End angle in radians
    pub end_angle: f64,
    /// Thickness (extrusion in Z direction)
    pub thickness: f64,
    /// Normal vector
    pub normal: Vector3,
}

impl Arc {
    /// Create a new quarter arc at the origin
    pub fn new() -> Self {
        Arc {
            common: EntityCommon::new(),
            center: Vector3::ZERO,
            radius: 1.0,
            start_angle: 0.0,
            end_angle: PI / 2.0,
            thickness: 0.0,
            normal: Vector3::UNIT_Z,
        }
    }

    /// Create a new arc from coordinates, radius, and angles
    pub fn from_coords(
        x: f64,
        y: f64,
        z: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Arc {
            center: Vector3::new(x, y, z),
            radius,
            start_angle,
            end_angle,
            ..Self::new()
        }
    }

    /// Get the sweep angle (angular extent) in radians
    pub fn sweep_angle(&self) -> f64 {
        let mut sweep = self.end_angle - self.start_angle;
        if sweep < 0.0 {
            sweep += 2.0 * PI;
        }
        sweep
    }

    /// Absolute start point of the arc
    pub fn start_point(&self) -> Vector3 {
        self.center.with_xy(self.center.xy().polar(self.radius, self.start_angle))
    }

    /// Absolute end point of the arc
    pub fn end_point(&self) -> Vector3 {
        self.center.with_xy(self.center.xy().polar(self.radius, self.end_angle))
    }
}

impl Default for Arc {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Arc {
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
        "ARC"
    }
}
