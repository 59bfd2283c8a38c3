//! Hatch entity and boundary path types

use crate::entities::{Entity, EntityCommon};
use crate::types::{Handle, Vector2, Vector3};
use bitflags::bitflags;

bitflags! {
    /// Boundary path flags (group code 92)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BoundaryPathFlags: u32 {
        const EXTERNAL = 1;
        const POLYLINE = 2;
        const DERIVED = 4;
        const TEXTBOX = 8;
        const OUTERMOST = 16;
        const NOT_CLOSED = 32;
        const SELF_INTERSECTING = 64;
        const TEXT_ISLAND = 128;
        const DUPLICATE = 256;
    }
}

/// Line edge in a boundary path
#[derive(Debug, Clone, PartialEq)]
pub struct LineEdge {
    /// Start point (in OCS)
    pub start: Vector2,
    /// End point (in OCS)
    pub end: Vector2,
}

/// Circular arc edge in a boundary path
#[derive(Debug, Clone, PartialEq)]
pub struct CircularArcEdge {
    /// Center point (in OCS)
    pub center: Vector2,
    /// Radius
    pub radius: f64,
    /// Start angle in radians
    pub start_angle: f64,
    /// End angle in radians
    pub end_angle: f64,
    /// Counter-clockwise flag
    pub counter_clockwise: bool,
}

/// Elliptic arc edge in a boundary path
#[derive(Debug, Clone, PartialEq)]
pub struct EllipticArcEdge {
    /// Center point (in OCS)
    pub center: Vector2,
    /// Endpoint of major axis relative to center (in OCS)
    pub major_axis_endpoint: Vector2,
    /// Ratio of minor axis to major axis
    pub minor_axis_ratio: f64,
    /// Start angle in radians
    pub start_angle: f64,
    /// End angle in radians
    pub end_angle: f64,
    /// Counter-clockwise flag
    pub counter_clockwise: bool,
}

/// Spline edge in a boundary path
#[derive(Debug, Clone, PartialEq)]
pub struct SplineEdge {
    /// Degree of the spline
    pub degree: i32,
    /// Rational flag
    pub rational: bool,
    /// Periodic flag
    pub periodic: bool,
    /// Knot values
    pub knots: Vec<f64>,
    /// Control points (X, Y, weight)
    pub control_points: Vec<Vector3>,
    /// Fit points
    pub fit_points: Vec<Vector2>,
    /// Start tangent
    pub start_tangent: Vector2,
    /// End tangent
    pub end_tangent: Vector2,
}

/// Polyline (vertex list) edge in a boundary path
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineEdge {
    /// Vertices (X, Y, bulge)
    pub vertices: Vec<Vector3>,
    /// Is closed flag
    pub is_closed: bool,
}

impl PolylineEdge {
    /// Create a new polyline edge
    pub fn new(vertices: Vec<Vector2>, is_closed: bool) -> Self {
        Self {
            vertices: vertices.into_iter().map(|v| v.with_z(0.0)).collect(),
            is_closed,
        }
    }

    /// Add a vertex with bulge
    pub fn add_vertex(&mut self, point: Vector2, bulge: f64) {
        self.vertices.push(point.with_z(bulge));
    }
}

/// Boundary path edge
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryEdge {
    Line(LineEdge),
    CircularArc(CircularArcEdge),
    EllipticArc(EllipticArcEdge),
    Spline(SplineEdge),
    Polyline(PolylineEdge),
    /// An edge whose shape was not understood when the drawing was read.
    /// The raw type code is kept so the edge can be written back as-is.
    Unsupported { edge_type: i16 },
}

impl BoundaryEdge {
    /// Short name used in diagnostics
    pub fn shape_name(&self) -> &'static str {
        match self {
            BoundaryEdge::Line(_) => "line",
            BoundaryEdge::CircularArc(_) => "circular arc",
            BoundaryEdge::EllipticArc(_) => "elliptic arc",
            BoundaryEdge::Spline(_) => "spline",
            BoundaryEdge::Polyline(_) => "polyline",
            BoundaryEdge::Unsupported { .. } => "unsupported",
        }
    }
}

/// Boundary path for a hatch
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoundaryPath {
    /// Boundary path flags
    pub flags: BoundaryPathFlags,
    /// Edges that form the boundary
    pub edges: Vec<BoundaryEdge>,
}

impl BoundaryPath {
    /// Create a new boundary path
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an external boundary path
    pub fn external() -> Self {
        Self {
            flags: BoundaryPathFlags::EXTERNAL,
            edges: Vec::new(),
        }
    }

    /// Add an edge to the boundary
    pub fn add_edge(&mut self, edge: BoundaryEdge) {
        if matches!(edge, BoundaryEdge::Polyline(_)) {
            self.flags |= BoundaryPathFlags::POLYLINE;
        }
        self.edges.push(edge);
    }

    /// Check if this is a polyline (vertex list) boundary
    pub fn is_polyline(&self) -> bool {
        self.edges.len() == 1 && matches!(self.edges[0], BoundaryEdge::Polyline(_))
    }
}

/// Hatch entity
#[derive(Debug, Clone, PartialEq)]
pub struct Hatch {
    /// Common entity data
    pub common: EntityCommon,
    /// Elevation of the hatch plane
    pub elevation: f64,
    /// Normal vector
    pub normal: Vector3,
    /// Pattern name
    pub pattern_name: String,
    /// Solid fill flag
    pub is_solid: bool,
    /// Associativity flag
    pub is_associative: bool,
    /// Pattern angle in radians
    pub pattern_angle: f64,
    /// Pattern scale
    pub pattern_scale: f64,
    /// Boundary paths
    pub paths: Vec<BoundaryPath>,
    /// Seed points (in OCS)
    pub seed_points: Vec<Vector2>,
}

impl Hatch {
    /// Create a new pattern-less hatch
    pub fn new() -> Self {
        Self {
            common: EntityCommon::new(),
            elevation: 0.0,
            normal: Vector3::UNIT_Z,
            pattern_name: "ANSI31".to_string(),
            is_solid: false,
            is_associative: false,
            pattern_angle: 0.0,
            pattern_scale: 1.0,
            paths: Vec::new(),
            seed_points: Vec::new(),
        }
    }

    /// Create a solid fill hatch
    pub fn solid() -> Self {
        Self {
            pattern_name: "SOLID".to_string(),
            is_solid: true,
            ..Self::new()
        }
    }

    /// Add a boundary path
    pub fn add_path(&mut self, path: BoundaryPath) {
        self.paths.push(path);
    }
}

impl Default for Hatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Hatch {
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
        "HATCH"
    }
}
