//! Drawing entity types and traits
//!
//! Each geometry-bearing element kind the reprojection core knows about has
//! its own struct carrying exactly the fields its rewrite needs, plus the
//! shared [`EntityCommon`] attributes. Anything else lands in
//! [`Unclassified`], which keeps its fields in a name → value map.

use crate::types::{Color, Handle};
use std::fmt;

pub mod arc;
pub mod circle;
pub mod ellipse;
pub mod hatch;
pub mod insert;
pub mod leader;
pub mod line;
pub mod lwpolyline;
pub mod mtext;
pub mod point;
pub mod polyline;
pub mod raster_image;
pub mod text;
pub mod unclassified;

pub use arc::Arc;
pub use circle::Circle;
pub use ellipse::Ellipse;
pub use hatch::{
    BoundaryEdge, BoundaryPath, BoundaryPathFlags, CircularArcEdge, EllipticArcEdge, Hatch,
    LineEdge, PolylineEdge, SplineEdge,
};
pub use insert::Insert;
pub use leader::Leader;
pub use line::Line;
pub use lwpolyline::{LwPolyline, LwVertex};
pub use mtext::MText;
pub use point::Point;
pub use polyline::{Polyline, PolylineFlags, PolylineVertex, VertexFlags};
pub use raster_image::RasterImage;
pub use text::Text;
pub use unclassified::{FieldValue, Unclassified, UnclassifiedField};

/// Base trait for all drawing entities
pub trait Entity {
    /// Get the entity's handle
    fn handle(&self) -> Handle;

    /// Set the entity's handle
    fn set_handle(&mut self, handle: Handle);

    /// Get the entity's layer name
    fn layer(&self) -> &str;

    /// Get the entity type name as it appears in a drawing file
    fn entity_type(&self) -> &'static str;
}

/// Non-geometric attributes shared by all entities
///
/// Reprojection never touches these.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCommon {
    /// Unique handle
    pub handle: Handle,
    /// Layer name
    pub layer: String,
    /// Color
    pub color: Color,
    /// Visibility flag
    pub invisible: bool,
}

impl EntityCommon {
    /// Create new common entity data with defaults
    pub fn new() -> Self {
        EntityCommon {
            handle: Handle::NULL,
            layer: "0".to_string(),
            color: Color::ByLayer,
            invisible: false,
        }
    }

    /// Create with a specific layer
    pub fn with_layer(layer: impl Into<String>) -> Self {
        EntityCommon {
            layer: layer.into(),
            ..Self::new()
        }
    }
}

impl Default for EntityCommon {
    fn default() -> Self {
        Self::new()
    }
}

/// Tag for the geometry-bearing element kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    Point,
    Line,
    Circle,
    Arc,
    Ellipse,
    LwPolyline,
    Polyline,
    Text,
    MText,
    Insert,
    Leader,
    Image,
    Hatch,
    /// Any kind without a dedicated rewrite
    Unclassified,
}

impl ElementKind {
    /// Drawing-file type name of the kind
    pub fn dxf_name(&self) -> &'static str {
        match self {
            ElementKind::Point => "POINT",
            ElementKind::Line => "LINE",
            ElementKind::Circle => "CIRCLE",
            ElementKind::Arc => "ARC",
            ElementKind::Ellipse => "ELLIPSE",
            ElementKind::LwPolyline => "LWPOLYLINE",
            ElementKind::Polyline => "POLYLINE",
            ElementKind::Text => "TEXT",
            ElementKind::MText => "MTEXT",
            ElementKind::Insert => "INSERT",
            ElementKind::Leader => "LEADER",
            ElementKind::Image => "IMAGE",
            ElementKind::Hatch => "HATCH",
            ElementKind::Unclassified => "UNCLASSIFIED",
        }
    }

    /// Resolve a drawing-file type name; unknown names map to `Unclassified`
    pub fn from_dxf_name(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "POINT" => ElementKind::Point,
            "LINE" => ElementKind::Line,
            "CIRCLE" => ElementKind::Circle,
            "ARC" => ElementKind::Arc,
            "ELLIPSE" => ElementKind::Ellipse,
            "LWPOLYLINE" => ElementKind::LwPolyline,
            "POLYLINE" => ElementKind::Polyline,
            "TEXT" => ElementKind::Text,
            "MTEXT" => ElementKind::MText,
            "INSERT" => ElementKind::Insert,
            "LEADER" => ElementKind::Leader,
            "IMAGE" => ElementKind::Image,
            "HATCH" => ElementKind::Hatch,
            _ => ElementKind::Unclassified,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dxf_name())
    }
}

/// Enumeration of all entity types for type-safe storage
#[derive(Debug, Clone, PartialEq)]
pub enum EntityType {
    Point(Point),
    Line(Line),
    Circle(Circle),
    Arc(Arc),
    Ellipse(Ellipse),
    /// Lightweight polyline
    LwPolyline(LwPolyline),
    /// Classic (heavy) polyline with vertex chain
    Polyline(Polyline),
    Text(Text),
    MText(MText),
    /// Block reference
    Insert(Insert),
    Leader(Leader),
    RasterImage(RasterImage),
    Hatch(Hatch),
    /// Entity without a dedicated rewrite, held as a field map
    Unclassified(Unclassified),
}

impl EntityType {
    /// Get a reference to the entity trait object
    pub fn as_entity(&self) -> &dyn Entity {
        match self {
            EntityType::Point(e) => e,
            EntityType::Line(e) => e,
            EntityType::Circle(e) => e,
            EntityType::Arc(e) => e,
            EntityType::Ellipse(e) => e,
            EntityType::LwPolyline(e) => e,
            EntityType::Polyline(e) => e,
            EntityType::Text(e) => e,
            EntityType::MText(e) => e,
            EntityType::Insert(e) => e,
            EntityType::Leader(e) => e,
            EntityType::RasterImage(e) => e,
            EntityType::Hatch(e) => e,
            EntityType::Unclassified(e) => e,
        }
    }

    /// Get a mutable reference to the entity trait object
    pub fn as_entity_mut(&mut self) -> &mut dyn Entity {
        match self {
            EntityType::Point(e) => e,
            EntityType::Line(e) => e,
            EntityType::Circle(e) => e,
            EntityType::Arc(e) => e,
            EntityType::Ellipse(e) => e,
            EntityType::LwPolyline(e) => e,
            EntityType::Polyline(e) => e,
            EntityType::Text(e) => e,
            EntityType::MText(e) => e,
            EntityType::Insert(e) => e,
            EntityType::Leader(e) => e,
            EntityType::RasterImage(e) => e,
            EntityType::Hatch(e) => e,
            EntityType::Unclassified(e) => e,
        }
    }

    /// The element kind used for dispatch and classification
    pub fn kind(&self) -> ElementKind {
        match self {
            EntityType::Point(_) => ElementKind::Point,
            EntityType::Line(_) => ElementKind::Line,
            EntityType::Circle(_) => ElementKind::Circle,
            EntityType::Arc(_) => ElementKind::Arc,
            EntityType::Ellipse(_) => ElementKind::Ellipse,
            EntityType::LwPolyline(_) => ElementKind::LwPolyline,
            EntityType::Polyline(_) => ElementKind::Polyline,
            EntityType::Text(_) => ElementKind::Text,
            EntityType::MText(_) => ElementKind::MText,
            EntityType::Insert(_) => ElementKind::Insert,
            EntityType::Leader(_) => ElementKind::Leader,
            EntityType::RasterImage(_) => ElementKind::Image,
            EntityType::Hatch(_) => ElementKind::Hatch,
            EntityType::Unclassified(_) => ElementKind::Unclassified,
        }
    }

    /// Shortcut for the entity handle
    pub fn handle(&self) -> Handle {
        self.as_entity().handle()
    }

    /// Shared non-geometric attributes
    pub fn common(&self) -> &EntityCommon {
        match self {
            EntityType::Point(e) => &e.common,
            EntityType::Line(e) => &e.common,
            EntityType::Circle(e) => &e.common,
            EntityType::Arc(e) => &e.common,
            EntityType::Ellipse(e) => &e.common,
            EntityType::LwPolyline(e) => &e.common,
            EntityType::Polyline(e) => &e.common,
            EntityType::Text(e) => &e.common,
            EntityType::MText(e) => &e.common,
            EntityType::Insert(e) => &e.common,
            EntityType::Leader(e) => &e.common,
            EntityType::RasterImage(e) => &e.common,
            EntityType::Hatch(e) => &e.common,
            EntityType::Unclassified(e) => &e.common,
        }
    }
}
