//! Field roles: which fields are positions, which are directions, and which
//! are left alone.

use crate::entities::{ElementKind, EntityType, FieldValue, UnclassifiedField};
use crate::types::Handle;
use ahash::AHashMap;
use once_cell::sync::Lazy;
use std::fmt;

/// How a field takes part in reprojection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRole {
    /// Absolute planar position; projected directly
    Position2D,
    /// Absolute position with elevation; x/y projected, z copied
    Position3D,
    /// Relative vector; derived by finite difference around an anchor
    Direction2D,
    /// Elevation; copied unchanged
    ElevationScalar,
    /// Not geometry, or not planar geometry; copied unchanged
    Opaque,
}

impl FieldRole {
    pub fn is_position(&self) -> bool {
        matches!(self, FieldRole::Position2D | FieldRole::Position3D)
    }
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldRole::Position2D => "Position2D",
            FieldRole::Position3D => "Position3D",
            FieldRole::Direction2D => "Direction2D",
            FieldRole::ElevationScalar => "ElevationScalar",
            FieldRole::Opaque => "Opaque",
        };
        f.write_str(s)
    }
}

/// A geometry-bearing field of one element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeometryField {
    pub handle: Handle,
    pub field: String,
    pub role: FieldRole,
}

/// Relative vectors that share a value type with positions. They must
/// never be projected as positions.
pub const DIRECTION_FIELDS: &[&str] = &[
    "major_axis",
    "major_axis_endpoint",
    "u_vector",
    "v_vector",
    "horizontal_direction",
    "block_offset",
    "annotation_offset",
    "start_tangent",
    "end_tangent",
    "x_axis_direction",
];

/// Out-of-plane vectors. Planar reprojection leaves them alone.
pub const OUT_OF_PLANE_FIELDS: &[&str] = &["normal", "extrusion", "extrusion_direction"];

use ElementKind as K;
use FieldRole as R;

/// Field roles of the element kinds with a dedicated rewrite. Nested
/// fields use dotted paths (`vertices.location`, `line.start`).
const TABLE: &[(ElementKind, &str, FieldRole)] = &[
    (K::Point, "location", R::Position3D),
    (K::Line, "start", R::Position3D),
    (K::Line, "end", R::Position3D),
    (K::Circle, "center", R::Position3D),
    (K::Circle, "radius", R::Opaque),
    (K::Arc, "center", R::Position3D),
    (K::Arc, "radius", R::Opaque),
    (K::Arc, "start_point", R::Position3D),
    (K::Arc, "end_point", R::Position3D),
    (K::Ellipse, "center", R::Position3D),
    (K::Ellipse, "major_axis", R::Direction2D),
    (K::Ellipse, "minor_axis_ratio", R::Opaque),
    (K::LwPolyline, "vertices.location", R::Position2D),
    (K::LwPolyline, "vertices.bulge", R::Opaque),
    (K::LwPolyline, "vertices.start_width", R::Opaque),
    (K::LwPolyline, "vertices.end_width", R::Opaque),
    (K::LwPolyline, "elevation", R::ElevationScalar),
    (K::Polyline, "vertices.location", R::Position3D),
    (K::Polyline, "vertices.bulge", R::Opaque),
    (K::Polyline, "elevation", R::ElevationScalar),
    (K::Text, "insertion_point", R::Position3D),
    (K::Text, "alignment_point", R::Position3D),
    (K::MText, "insertion_point", R::Position3D),
    (K::MText, "alignment_point", R::Position3D),
    (K::Insert, "insert_point", R::Position3D),
    (K::Leader, "vertices", R::Position3D),
    (K::Leader, "horizontal_direction", R::Direction2D),
    (K::Leader, "block_offset", R::Direction2D),
    (K::Leader, "annotation_offset", R::Direction2D),
    (K::Image, "insertion_point", R::Position3D),
    (K::Image, "u_vector", R::Direction2D),
    (K::Image, "v_vector", R::Direction2D),
    (K::Image, "clip_vertices", R::Opaque),
    (K::Hatch, "elevation", R::ElevationScalar),
    (K::Hatch, "seed_points", R::Position2D),
    (K::Hatch, "line.start", R::Position2D),
    (K::Hatch, "line.end", R::Position2D),
    (K::Hatch, "circular_arc.center", R::Position2D),
    (K::Hatch, "circular_arc.start_point", R::Position2D),
    (K::Hatch, "circular_arc.end_point", R::Position2D),
    (K::Hatch, "elliptic_arc.center", R::Position2D),
    (K::Hatch, "elliptic_arc.major_axis_endpoint", R::Direction2D),
    (K::Hatch, "spline.control_points", R::Position2D),
    (K::Hatch, "spline.fit_points", R::Position2D),
    (K::Hatch, "spline.start_tangent", R::Direction2D),
    (K::Hatch, "spline.end_tangent", R::Direction2D),
    (K::Hatch, "polyline.vertices", R::Position2D),
];

static CLASSIFICATION: Lazy<AHashMap<(ElementKind, &'static str), FieldRole>> = Lazy::new(|| {
    TABLE
        .iter()
        .map(|&(kind, field, role)| ((kind, field), role))
        .collect()
});

fn by_name(field: &str) -> Option<FieldRole> {
    if DIRECTION_FIELDS.contains(&field) {
        Some(FieldRole::Direction2D)
    } else if OUT_OF_PLANE_FIELDS.contains(&field) {
        Some(FieldRole::Opaque)
    } else {
        None
    }
}

/// Role of `field` on elements of `kind`
///
/// Fields absent from the table fall back to the direction and
/// out-of-plane name lists, and otherwise to `Opaque`.
pub fn classify(kind: ElementKind, field: &str) -> FieldRole {
    CLASSIFICATION
        .get(&(kind, field))
        .copied()
        .or_else(|| by_name(field))
        .unwrap_or(FieldRole::Opaque)
}

/// Role of `field` given its current value
///
/// Same as [`classify`], except that a field no rule names is promoted to a
/// position when its value is a coordinate.
pub fn classify_value(kind: ElementKind, field: &str, value: &FieldValue) -> FieldRole {
    if let Some(role) = CLASSIFICATION.get(&(kind, field)).copied().or_else(|| by_name(field)) {
        return role;
    }
    match value {
        FieldValue::Point2(_) => FieldRole::Position2D,
        FieldValue::Point3(_) => FieldRole::Position3D,
        _ => FieldRole::Opaque,
    }
}

/// Role of a field of an unclassified element; a declared role wins
pub fn classify_field(name: &str, field: &UnclassifiedField) -> FieldRole {
    field
        .role
        .unwrap_or_else(|| classify_value(ElementKind::Unclassified, name, &field.value))
}

/// The geometry-bearing fields of an entity and their roles
///
/// Opaque fields are omitted.
pub fn geometry_fields(entity: &EntityType) -> Vec<GeometryField> {
    let handle = entity.handle();
    match entity {
        EntityType::Unclassified(e) => e
            .fields
            .iter()
            .map(|(name, field)| (name.as_str(), classify_field(name, field)))
            .filter(|(_, role)| *role != FieldRole::Opaque)
            .map(|(name, role)| GeometryField {
                handle,
                field: name.to_string(),
                role,
            })
            .collect(),
        _ => {
            let kind = entity.kind();
            TABLE
                .iter()
                .filter(|(k, _, role)| *k == kind && *role != FieldRole::Opaque)
                .map(|&(_, field, role)| GeometryField {
                    handle,
                    field: field.to_string(),
                    role,
                })
                .collect()
        }
    }
}
