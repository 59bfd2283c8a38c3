//! Test drawing builders.
//!
//! The `create_all_entities_drawing()` function produces a drawing containing
//! one instance of every element kind the library rewrites, laid out on a
//! grid around a survey origin.

#![allow(dead_code)]

use dxf_reproject::entities::*;
use dxf_reproject::types::{Color, Handle, Vector2, Vector3};
use dxf_reproject::Drawing;
use std::f64::consts::PI;

/// Grid origin, roughly central Seoul in EPSG:5186.
pub const ORIGIN: (f64, f64) = (200_000.0, 550_000.0);

/// Handles assigned by `create_all_entities_drawing()`, in insertion order.
pub mod handles {
    use dxf_reproject::types::Handle;

    pub const POINT: Handle = Handle::new(1);
    pub const LINE: Handle = Handle::new(2);
    pub const CIRCLE: Handle = Handle::new(3);
    pub const ARC: Handle = Handle::new(4);
    pub const ELLIPSE: Handle = Handle::new(5);
    pub const LWPOLYLINE: Handle = Handle::new(6);
    pub const POLYLINE: Handle = Handle::new(7);
    pub const TEXT: Handle = Handle::new(8);
    pub const MTEXT: Handle = Handle::new(9);
    pub const INSERT: Handle = Handle::new(10);
    pub const LEADER: Handle = Handle::new(11);
    pub const IMAGE: Handle = Handle::new(12);
    pub const HATCH: Handle = Handle::new(13);
    pub const UNCLASSIFIED: Handle = Handle::new(14);
}

/// Create a drawing containing every element kind (14 entities), laid out in
/// a grid with 25-unit spacing. Every entity has a non-zero elevation or z so
/// tests can check it survives.
///
/// Any new element kind should be added here.
pub fn create_all_entities_drawing() -> Drawing {
    let mut drawing = Drawing::new();
    drawing.reference_system = Some("EPSG:5186".to_string());
    let sp = 25.0;
    let (x0, y0) = ORIGIN;
    let mut x = x0;
    let mut y = y0;

    // Row 1 - basic geometry
    let mut point = Point::at(Vector3::new(x, y, 1.5));
    point.common.color = Color::RED;
    drawing.add_entity(EntityType::Point(point));
    x += sp;

    let mut line = Line::from_coords(x, y, 2.0, x + 10.0, y + 10.0, 3.0);
    line.common.color = Color::GREEN;
    drawing.add_entity(EntityType::Line(line));
    x += sp;

    let mut circle = Circle::from_coords(x, y, 4.0, 5.0);
    circle.common.color = Color::BLUE;
    drawing.add_entity(EntityType::Circle(circle));
    x += sp;

    let mut arc = Arc::from_coords(x, y, 5.0, 5.0, 0.0, PI);
    arc.common.color = Color::YELLOW;
    drawing.add_entity(EntityType::Arc(arc));
    x += sp;

    let mut ellipse = Ellipse::from_center_axes(
        Vector3::new(x, y, 6.0),
        Vector3::new(8.0, 0.0, 0.0),
        0.5,
    );
    ellipse.common.color = Color::CYAN;
    drawing.add_entity(EntityType::Ellipse(ellipse));

    // Row 2 - polylines and annotation
    x = x0;
    y += sp;

    let mut lwpoly = LwPolyline::new();
    lwpoly.add_vertex(LwVertex::new(Vector2::new(x, y)));
    lwpoly.add_point_with_bulge(Vector2::new(x + 5.0, y + 5.0), 0.25);
    lwpoly.add_vertex(LwVertex {
        location: Vector2::new(x + 10.0, y),
        bulge: 0.0,
        start_width: 0.5,
        end_width: 1.0,
    });
    lwpoly.is_closed = true;
    lwpoly.elevation = 7.0;
    drawing.add_entity(EntityType::LwPolyline(lwpoly));
    x += sp;

    let poly = Polyline::from_points_3d([
        Vector3::new(x, y, 8.0),
        Vector3::new(x + 5.0, y + 5.0, 9.0),
        Vector3::new(x + 10.0, y, 10.0),
    ]);
    drawing.add_entity(EntityType::Polyline(poly));
    x += sp;

    let mut text = Text::with_value("GATE", Vector3::new(x, y, 11.0));
    text.alignment_point = Some(Vector3::new(x + 4.0, y, 11.0));
    drawing.add_entity(EntityType::Text(text));
    x += sp;

    let mtext = MText::with_value("Survey\\Pnote", Vector3::new(x, y, 12.0));
    drawing.add_entity(EntityType::MText(mtext));
    x += sp;

    let insert = Insert::new("MANHOLE", Vector3::new(x, y, 13.0));
    drawing.add_entity(EntityType::Insert(insert));

    // Row 3 - relative vectors and nested structures
    x = x0;
    y += sp;

    let mut leader = Leader::from_vertices(vec![
        Vector3::new(x, y, 14.0),
        Vector3::new(x + 5.0, y + 5.0, 14.0),
        Vector3::new(x + 10.0, y + 5.0, 14.0),
    ]);
    leader.block_offset = Vector3::new(1.0, 0.5, 0.0);
    drawing.add_entity(EntityType::Leader(leader));
    x += sp;

    let image = RasterImage::new("ortho.png", Vector3::new(x, y, 15.0), 640.0, 480.0);
    drawing.add_entity(EntityType::RasterImage(image));
    x += sp;

    drawing.add_entity(EntityType::Hatch(boundary_hatch(x, y)));
    x += sp;

    let wipeout = Unclassified::new("WIPEOUT")
        .with_field("insertion_point", FieldValue::Point3(Vector3::new(x, y, 16.0)))
        .with_field("u_vector", FieldValue::Point3(Vector3::new(2.0, 0.0, 0.0)))
        .with_field("v_vector", FieldValue::Point3(Vector3::new(0.0, 2.0, 0.0)))
        .with_field("brightness", FieldValue::Integer(50))
        .with_field("normal", FieldValue::Point3(Vector3::UNIT_Z));
    drawing.add_entity(EntityType::Unclassified(wipeout));

    drawing
}

/// A hatch using every boundary edge shape, anchored at `(x, y)`.
pub fn boundary_hatch(x: f64, y: f64) -> Hatch {
    let mut hatch = Hatch::solid();
    hatch.elevation = 17.0;

    let mut outer = BoundaryPath::external();
    outer.add_edge(BoundaryEdge::Line(LineEdge {
        start: Vector2::new(x, y),
        end: Vector2::new(x + 10.0, y),
    }));
    outer.add_edge(BoundaryEdge::CircularArc(CircularArcEdge {
        center: Vector2::new(x + 10.0, y + 5.0),
        radius: 5.0,
        start_angle: -PI / 2.0,
        end_angle: PI / 2.0,
        counter_clockwise: true,
    }));
    outer.add_edge(BoundaryEdge::EllipticArc(EllipticArcEdge {
        center: Vector2::new(x + 5.0, y + 10.0),
        major_axis_endpoint: Vector2::new(5.0, 0.0),
        minor_axis_ratio: 0.4,
        start_angle: 0.0,
        end_angle: PI,
        counter_clockwise: true,
    }));
    outer.add_edge(BoundaryEdge::Spline(SplineEdge {
        degree: 3,
        rational: true,
        periodic: false,
        knots: vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0],
        control_points: vec![
            Vector3::new(x, y + 10.0, 1.0),
            Vector3::new(x - 2.0, y + 7.0, 0.5),
            Vector3::new(x - 2.0, y + 3.0, 0.5),
            Vector3::new(x, y, 1.0),
        ],
        fit_points: Vec::new(),
        start_tangent: Vector2::new(0.0, -1.0),
        end_tangent: Vector2::new(1.0, 0.0),
    }));
    hatch.add_path(outer);

    let mut island = BoundaryPath::new();
    let mut ring = PolylineEdge::new(Vec::new(), true);
    ring.add_vertex(Vector2::new(x + 3.0, y + 3.0), 0.0);
    ring.add_vertex(Vector2::new(x + 6.0, y + 3.0), 0.5);
    ring.add_vertex(Vector2::new(x + 6.0, y + 6.0), 0.0);
    island.add_edge(BoundaryEdge::Polyline(ring));
    hatch.add_path(island);

    hatch.seed_points.push(Vector2::new(x + 1.0, y + 1.0));
    hatch
}

/// A one-path hatch with a line edge followed by an edge of unknown shape.
pub fn hatch_with_unsupported_edge(x: f64, y: f64) -> Hatch {
    let mut hatch = Hatch::solid();
    let mut path = BoundaryPath::external();
    path.add_edge(BoundaryEdge::Line(LineEdge {
        start: Vector2::new(x, y),
        end: Vector2::new(x + 10.0, y),
    }));
    path.add_edge(BoundaryEdge::Unsupported { edge_type: 9 });
    hatch.add_path(path);
    hatch
}

/// A one-path hatch with a circular arc edge (radius 10, a quarter turn from
/// 45 to 90 degrees) and an elliptic arc edge (major axis 8 along x), both
/// centered at `(x, y)`.
pub fn arc_edges_hatch(x: f64, y: f64) -> Hatch {
    let mut hatch = Hatch::solid();
    let mut path = BoundaryPath::external();
    path.add_edge(BoundaryEdge::CircularArc(CircularArcEdge {
        center: Vector2::new(x, y),
        radius: 10.0,
        start_angle: PI / 4.0,
        end_angle: PI / 2.0,
        counter_clockwise: true,
    }));
    path.add_edge(BoundaryEdge::EllipticArc(EllipticArcEdge {
        center: Vector2::new(x, y),
        major_axis_endpoint: Vector2::new(8.0, 0.0),
        minor_axis_ratio: 0.5,
        start_angle: 0.0,
        end_angle: PI,
        counter_clockwise: true,
    }));
    hatch.add_path(path);
    hatch
}

/// A drawing of `n` short lines on a diagonal, for volume tests.
pub fn line_grid(n: usize) -> Drawing {
    let (x0, y0) = ORIGIN;
    (0..n)
        .map(|i| {
            let d = i as f64;
            EntityType::Line(Line::from_coords(
                x0 + d,
                y0 + d,
                d,
                x0 + d + 1.0,
                y0 + d,
                d,
            ))
        })
        .collect()
}

/// Set the handle of an entity before it is added to a drawing.
pub fn with_handle(mut entity: EntityType, handle: Handle) -> EntityType {
    entity.as_entity_mut().set_handle(handle);
    entity
}
