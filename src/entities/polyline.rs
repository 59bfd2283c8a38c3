//! Classic (heavy) polyline entity with a vertex chain

use super::{Entity, EntityCommon};
use crate::types::{Handle, Vector3};
use bitflags::bitflags;

bitflags! {
    /// Polyline flags (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PolylineFlags: u16 {
        const CLOSED = 1;
        const CURVE_FIT = 2;
        const SPLINE_FIT = 4;
        const POLYLINE_3D = 8;
        const POLYGON_MESH = 16;
        const CLOSED_N = 32;
        const POLYFACE_MESH = 64;
        const LINETYPE_CONTINUOUS = 128;
    }
}

bitflags! {
    /// Vertex flags (group code 70 on VERTEX)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct VertexFlags: u8 {
        const EXTRA_VERTEX = 1;
        const CURVE_FIT_TANGENT = 2;
        const SPLINE_VERTEX = 8;
        const SPLINE_CONTROL = 16;
        const POLYLINE_3D = 32;
        const POLYGON_MESH = 64;
        const POLYFACE_FACE = 128;
    }
}

/// A vertex of a classic polyline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolylineVertex {
    /// Location (Z is the vertex elevation and is never reprojected)
    pub location: Vector3,
    /// Vertex flags
    pub flags: VertexFlags,
    /// Starting width
    pub start_width: f64,
    /// Ending width
    pub end_width: f64,
    /// Bulge of the segment starting at this vertex
    pub bulge: f64,
}

impl PolylineVertex {
    /// Create a new vertex at a location
    pub fn new(location: Vector3) -> Self {
        PolylineVertex {
            location,
            flags: VertexFlags::empty(),
            start_width: 0.0,
            end_width: 0.0,
            bulge: 0.0,
        }
    }
}

/// A classic polyline (2D or 3D, depending on `flags`)
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    /// Common entity data
    pub common: EntityCommon,
    /// Polyline flags
    pub flags: PolylineFlags,
    /// Default start width
    pub start_width: f64,
    /// Default end width
    pub end_width: f64,
    /// Thickness
    pub thickness: f64,
    /// Elevation of a 2D polyline
    pub elevation: f64,
    /// Normal vector
    pub normal: Vector3,
    /// Vertex chain in drawing order
    pub vertices: Vec<PolylineVertex>,
}

impl Polyline {
    /// Create a new empty polyline
    pub fn new() -> Self {
        Polyline {
            common: EntityCommon::new(),
            flags: PolylineFlags::empty(),
            start_width: 0.0,
            end_width: 0.0,
            thickness: 0.0,
            elevation: 0.0,
            normal: Vector3::UNIT_Z,
            vertices: Vec::new(),
        }
    }

    /// Create a 3D polyline from points
    pub fn from_points_3d(points: impl IntoIterator<Item = Vector3>) -> Self {
        Polyline {
            flags: PolylineFlags::POLYLINE_3D,
            vertices: points.into_iter().map(PolylineVertex::new).collect(),
            ..Self::new()
        }
    }

    /// Add a vertex at a location
    pub fn add_vertex(&mut self, location: Vector3) {
        self.vertices.push(PolylineVertex::new(location));
    }

    pub fn is_closed(&self) -> bool {
        self.flags.contains(PolylineFlags::CLOSED)
    }

    pub fn is_3d(&self) -> bool {
        self.flags.contains(PolylineFlags::POLYLINE_3D)
    }
}

impl Default for Polyline {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Polyline {
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
        "POLYLINE"
    }
}
