//! Per-entity coordinate rewriting
//!
//! [`EntityRewriter`] takes one entity, looks up the role of each of its
//! geometry fields and produces an equivalent entity with every position
//! projected, every direction re-derived around its projected anchor, and
//! everything else (elevations, bulges, widths, radii, attributes) copied.
//!
//! Rewrites of dedicated kinds are atomic: if any position fails to
//! project, the entity is rejected as a whole and the caller keeps the
//! original. Unclassified entities are rewritten field by field instead.

use super::classify::{classify, classify_field, FieldRole};
use super::config::{ArcEndpointPolicy, ReprojectConfiguration};
use crate::entities::{
    Arc, BoundaryEdge, CircularArcEdge, Circle, ElementKind, Ellipse, EllipticArcEdge,
    EntityType, FieldValue, Hatch, Insert, Leader, Line, LwPolyline, MText, Point, Polyline,
    RasterImage, SplineEdge, Text, Unclassified,
};
use crate::error::TransformError;
use crate::notification::{Warning, WarningKind};
use crate::projection::ReferenceTransform;
use crate::types::{Vector2, Vector3};
use std::f64::consts::{PI, TAU};

/// A successfully rewritten entity
#[derive(Debug, Clone, PartialEq)]
pub struct Rewrite {
    /// The entity with projected coordinates
    pub entity: EntityType,
    /// Non-fatal problems met on the way
    pub warnings: Vec<Warning>,
}

/// Outcome of an in-place rewrite
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementOutcome {
    /// `false` when the entity was rejected and left untouched
    pub rewritten: bool,
    pub warnings: Vec<Warning>,
}

/// A field whose transform failed
#[derive(Debug, Clone, PartialEq)]
struct FieldFailure {
    field: String,
    error: TransformError,
}

impl FieldFailure {
    fn new(field: &str, error: TransformError) -> Self {
        Self {
            field: field.to_string(),
            error,
        }
    }

    /// Qualify with an element index (`vertices[3]`)
    fn at(mut self, index: usize) -> Self {
        self.field = format!("{}[{}]", self.field, index);
        self
    }

    /// Qualify with a sub-structure path (`paths[0].edges[2].line.start`)
    fn within(mut self, path: &str) -> Self {
        self.field = format!("{}.{}", path, self.field);
        self
    }
}

type FieldResult<T> = std::result::Result<T, FieldFailure>;

/// Role-checked access to the transform for one element kind
///
/// Positions are only projected when the classifier says the field is a
/// position, and directions only when it says direction, so a field can
/// never take the wrong path.
struct Fields<'t> {
    transform: &'t ReferenceTransform,
    kind: ElementKind,
}

impl Fields<'_> {
    fn point3(&self, field: &str, p: Vector3) -> FieldResult<Vector3> {
        if !classify(self.kind, field).is_position() {
            return Ok(p);
        }
        self.transform
            .forward_point3(p)
            .map_err(|e| FieldFailure::new(field, e))
    }

    fn point2(&self, field: &str, p: Vector2) -> FieldResult<Vector2> {
        if !classify(self.kind, field).is_position() {
            return Ok(p);
        }
        self.transform
            .forward_point2(p)
            .map_err(|e| FieldFailure::new(field, e))
    }

    /// Project every position of a chain in place, keeping order
    fn chain3(&self, field: &str, points: &mut [Vector3]) -> FieldResult<()> {
        for (i, p) in points.iter_mut().enumerate() {
            *p = self.point3(field, *p).map_err(|f| f.at(i))?;
        }
        Ok(())
    }

    fn direction(
        &self,
        field: &str,
        anchor: Vector2,
        projected_anchor: Vector2,
        dir: Vector2,
    ) -> FieldResult<Vector2> {
        if classify(self.kind, field) != FieldRole::Direction2D {
            return Ok(dir);
        }
        self.transform
            .forward_direction(anchor, projected_anchor, dir)
            .map_err(|e| FieldFailure::new(field, e))
    }

    /// Project an anchor that is not itself stored in the entity
    fn anchor(&self, field: &str, p: Vector2) -> FieldResult<Vector2> {
        self.transform
            .forward_point2(p)
            .map_err(|e| FieldFailure::new(field, e))
    }

    /// Whether the transform reverses orientation around `center`
    ///
    /// Sign of the cross product of the images of two perpendicular steps
    /// of length `scale`.
    fn is_mirrored(
        &self,
        field: &str,
        center: Vector2,
        projected_center: Vector2,
        scale: f64,
    ) -> FieldResult<bool> {
        if self.transform.is_identity() {
            return Ok(false);
        }
        let step = if scale > 0.0 { scale } else { 1.0 };
        let image = |dir: Vector2| {
            self.transform
                .forward_direction(center, projected_center, dir)
                .map_err(|e| FieldFailure::new(field, e))
        };
        let dx = image(Vector2::new(step, 0.0))?;
        let dy = image(Vector2::new(0.0, step))?;
        Ok(dx.x * dy.y - dx.y * dy.x < 0.0)
    }
}

/// Re-derived arc angles
///
/// `start` and `end` are the angles of the images of the original start
/// and end points. `mirrored` is set when the projection reversed the
/// rotational sense around the center.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ArcAngles {
    start: f64,
    end: f64,
    mirrored: bool,
}

/// Move `angle` into the half-turn window around `reference`, so that an
/// unchanged direction keeps its original numeric angle.
fn unwrap_near(reference: f64, angle: f64) -> f64 {
    let mut delta = (angle - reference) % TAU;
    if delta > PI {
        delta -= TAU;
    } else if delta <= -PI {
        delta += TAU;
    }
    reference + delta
}

fn coordinate_xy(value: &FieldValue) -> Option<Vector2> {
    match value {
        FieldValue::Point2(p) => Some(*p),
        FieldValue::Point3(p) => Some(p.xy()),
        _ => None,
    }
}

/// Rewrites the coordinates of single entities
#[derive(Debug, Clone, Copy)]
pub struct EntityRewriter<'a> {
    transform: &'a ReferenceTransform,
    config: &'a ReprojectConfiguration,
}

impl<'a> EntityRewriter<'a> {
    pub fn new(transform: &'a ReferenceTransform, config: &'a ReprojectConfiguration) -> Self {
        Self { transform, config }
    }

    fn fields(&self, kind: ElementKind) -> Fields<'a> {
        Fields {
            transform: self.transform,
            kind,
        }
    }

    /// Produce the rewritten form of `entity`
    ///
    /// On rejection the returned warnings end with the
    /// [`WarningKind::TransformDomain`] warning naming the failed field.
    pub fn rewrite(&self, entity: &EntityType) -> Result<Rewrite, Vec<Warning>> {
        let handle = entity.handle();
        let mut out = entity.clone();
        let mut warnings = Vec::new();

        let result = match &mut out {
            EntityType::Point(e) => self.rewrite_point(e),
            EntityType::Line(e) => self.rewrite_line(e),
            EntityType::Circle(e) => self.rewrite_circle(e),
            EntityType::Arc(e) => self.rewrite_arc(e),
            EntityType::Ellipse(e) => self.rewrite_ellipse(e),
            EntityType::LwPolyline(e) => self.rewrite_lwpolyline(e),
            EntityType::Polyline(e) => self.rewrite_polyline(e),
            EntityType::Text(e) => self.rewrite_text(e),
            EntityType::MText(e) => self.rewrite_mtext(e),
            EntityType::Insert(e) => self.rewrite_insert(e),
            EntityType::Leader(e) => self.rewrite_leader(e),
            EntityType::RasterImage(e) => self.rewrite_image(e),
            EntityType::Hatch(e) => self.rewrite_hatch(e, &mut warnings),
            EntityType::Unclassified(e) => {
                self.rewrite_unclassified(e, &mut warnings);
                Ok(())
            }
        };

        match result {
            Ok(()) => Ok(Rewrite {
                entity: out,
                warnings,
            }),
            Err(failure) => {
                warnings.push(Warning::for_field(
                    WarningKind::TransformDomain,
                    handle,
                    failure.field,
                    format!("{}; {} left unmodified", failure.error, entity.kind()),
                ));
                Err(warnings)
            }
        }
    }

    /// Rewrite `entity` in place, leaving it untouched when rejected
    pub fn rewrite_in_place(&self, entity: &mut EntityType) -> ElementOutcome {
        match self.rewrite(entity) {
            Ok(rewrite) => {
                *entity = rewrite.entity;
                ElementOutcome {
                    rewritten: true,
                    warnings: rewrite.warnings,
                }
            }
            Err(warnings) => ElementOutcome {
                rewritten: false,
                warnings,
            },
        }
    }

    fn unit(&self, v: Vector2) -> Vector2 {
        if self.config.renormalize_unit_directions && !self.transform.is_identity() {
            v.normalize()
        } else {
            v
        }
    }

    /// New start/end angles of an arc whose center moved from `center` to
    /// `projected_center`
    fn arc_angles(
        &self,
        f: &Fields<'_>,
        endpoint_fields: (&str, &str),
        center: Vector2,
        projected_center: Vector2,
        radius: f64,
        angles: (f64, f64),
    ) -> FieldResult<ArcAngles> {
        let (start_angle, end_angle) = angles;
        if self.config.arc_policy == ArcEndpointPolicy::KeepAngles
            || radius <= 0.0
            || self.transform.is_identity()
        {
            return Ok(ArcAngles {
                start: start_angle,
                end: end_angle,
                mirrored: false,
            });
        }
        let (start_field, end_field) = endpoint_fields;
        let start = f.point2(start_field, center.polar(radius, start_angle))?;
        let end = f.point2(end_field, center.polar(radius, end_angle))?;
        let mirrored = f.is_mirrored(start_field, center, projected_center, radius)?;
        Ok(ArcAngles {
            start: unwrap_near(start_angle, (start - projected_center).angle()),
            end: unwrap_near(end_angle, (end - projected_center).angle()),
            mirrored,
        })
    }

    fn rewrite_point(&self, e: &mut Point) -> FieldResult<()> {
        e.location = self.fields(ElementKind::Point).point3("location", e.location)?;
        Ok(())
    }

    fn rewrite_line(&self, e: &mut Line) -> FieldResult<()> {
        let f = self.fields(ElementKind::Line);
        e.start = f.point3("start", e.start)?;
        e.end = f.point3("end", e.end)?;
        Ok(())
    }

    fn rewrite_insert(&self, e: &mut Insert) -> FieldResult<()> {
        e.insert_point = self.fields(ElementKind::Insert).point3("insert_point", e.insert_point)?;
        Ok(())
    }

    fn rewrite_text(&self, e: &mut Text) -> FieldResult<()> {
        let f = self.fields(ElementKind::Text);
        e.insertion_point = f.point3("insertion_point", e.insertion_point)?;
        e.alignment_point = e
            .alignment_point
            .map(|p| f.point3("alignment_point", p))
            .transpose()?;
        Ok(())
    }

    fn rewrite_mtext(&self, e: &mut MText) -> FieldResult<()> {
        let f = self.fields(ElementKind::MText);
        e.insertion_point = f.point3("insertion_point", e.insertion_point)?;
        e.alignment_point = e
            .alignment_point
            .map(|p| f.point3("alignment_point", p))
            .transpose()?;
        Ok(())
    }

    // The radius is kept as-is: exact only for locally conformal
    // projections at the circle's scale.
    fn rewrite_circle(&self, e: &mut Circle) -> FieldResult<()> {
        e.center = self.fields(ElementKind::Circle).point3("center", e.center)?;
        Ok(())
    }

    fn rewrite_arc(&self, e: &mut Arc) -> FieldResult<()> {
        let f = self.fields(ElementKind::Arc);
        let center = e.center.xy();
        e.center = f.point3("center", e.center)?;
        let angles = self.arc_angles(
            &f,
            ("start_point", "end_point"),
            center,
            e.center.xy(),
            e.radius,
            (e.start_angle, e.end_angle),
        )?;
        // Arcs always run counter-clockwise, so a mirrored image swaps ends.
        if angles.mirrored {
            e.start_angle = angles.end;
            e.end_angle = angles.start;
        } else {
            e.start_angle = angles.start;
            e.end_angle = angles.end;
        }
        Ok(())
    }

    fn rewrite_ellipse(&self, e: &mut Ellipse) -> FieldResult<()> {
        let f = self.fields(ElementKind::Ellipse);
        let center = e.center.xy();
        e.center = f.point3("center", e.center)?;
        let axis = f.direction("major_axis", center, e.center.xy(), e.major_axis.xy())?;
        let scale = e.major_axis.xy().length();
        e.major_axis = e.major_axis.with_xy(axis);

        // Parameters are measured counter-clockwise from the major axis; a
        // reflection negates them and reverses the sweep.
        if f.is_mirrored("center", center, e.center.xy(), scale)? {
            let (start, end) = (e.start_parameter, e.end_parameter);
            e.start_parameter = -end;
            e.end_parameter = -start;
        }
        Ok(())
    }

    fn rewrite_lwpolyline(&self, e: &mut LwPolyline) -> FieldResult<()> {
        let f = self.fields(ElementKind::LwPolyline);
        for (i, vertex) in e.vertices.iter_mut().enumerate() {
            vertex.location = f
                .point2("vertices.location", vertex.location)
                .map_err(|x| x.at(i))?;
        }
        Ok(())
    }

    fn rewrite_polyline(&self, e: &mut Polyline) -> FieldResult<()> {
        let f = self.fields(ElementKind::Polyline);
        for (i, vertex) in e.vertices.iter_mut().enumerate() {
            vertex.location = f
                .point3("vertices.location", vertex.location)
                .map_err(|x| x.at(i))?;
        }
        Ok(())
    }

    fn rewrite_leader(&self, e: &mut Leader) -> FieldResult<()> {
        let f = self.fields(ElementKind::Leader);
        let anchor = e.vertices.last().map(Vector3::xy);
        f.chain3("vertices", &mut e.vertices)?;

        // Directions hang off the annotation end of the leader.
        let projected = e.vertices.last().map(Vector3::xy);
        if let (Some(anchor), Some(projected)) = (anchor, projected) {
            let h = f.direction(
                "horizontal_direction",
                anchor,
                projected,
                e.horizontal_direction.xy(),
            )?;
            e.horizontal_direction = e.horizontal_direction.with_xy(self.unit(h));

            let offset = f.direction("block_offset", anchor, projected, e.block_offset.xy())?;
            e.block_offset = e.block_offset.with_xy(offset);

            let offset =
                f.direction("annotation_offset", anchor, projected, e.annotation_offset.xy())?;
            e.annotation_offset = e.annotation_offset.with_xy(offset);
        }
        Ok(())
    }

    fn rewrite_image(&self, e: &mut RasterImage) -> FieldResult<()> {
        let f = self.fields(ElementKind::Image);
        let anchor = e.insertion_point.xy();
        e.insertion_point = f.point3("insertion_point", e.insertion_point)?;
        let projected = e.insertion_point.xy();

        let u = f.direction("u_vector", anchor, projected, e.u_vector.xy())?;
        let v = f.direction("v_vector", anchor, projected, e.v_vector.xy())?;
        e.u_vector = e.u_vector.with_xy(u);
        e.v_vector = e.v_vector.with_xy(v);
        Ok(())
    }

    fn rewrite_hatch(&self, e: &mut Hatch, warnings: &mut Vec<Warning>) -> FieldResult<()> {
        let f = self.fields(ElementKind::Hatch);
        let handle = e.common.handle;

        for (i, seed) in e.seed_points.iter_mut().enumerate() {
            *seed = f.point2("seed_points", *seed).map_err(|x| x.at(i))?;
        }

        for (path_index, path) in e.paths.iter_mut().enumerate() {
            for (edge_index, edge) in path.edges.iter_mut().enumerate() {
                let location = format!("paths[{}].edges[{}]", path_index, edge_index);
                let result = match edge {
                    BoundaryEdge::Line(line) => {
                        f.point2("line.start", line.start).and_then(|start| {
                            line.start = start;
                            line.end = f.point2("line.end", line.end)?;
                            Ok(())
                        })
                    }
                    BoundaryEdge::CircularArc(arc) => self.rewrite_circular_edge(&f, arc),
                    BoundaryEdge::EllipticArc(arc) => self.rewrite_elliptic_edge(&f, arc),
                    BoundaryEdge::Spline(spline) => self.rewrite_spline_edge(&f, spline),
                    BoundaryEdge::Polyline(poly) => {
                        let mut result = Ok(());
                        for (i, v) in poly.vertices.iter_mut().enumerate() {
                            // z holds the bulge
                            match f.point2("polyline.vertices", v.xy()) {
                                Ok(xy) => *v = v.with_xy(xy),
                                Err(failure) => {
                                    result = Err(failure.at(i));
                                    break;
                                }
                            }
                        }
                        result
                    }
                    BoundaryEdge::Unsupported { edge_type } => {
                        warnings.push(Warning::for_field(
                            WarningKind::UnsupportedElementShape,
                            handle,
                            location.clone(),
                            format!("boundary edge type {} passed through unchanged", edge_type),
                        ));
                        Ok(())
                    }
                };
                result.map_err(|x| x.within(&location))?;
            }
        }
        Ok(())
    }

    fn rewrite_circular_edge(&self, f: &Fields<'_>, arc: &mut CircularArcEdge) -> FieldResult<()> {
        let center = arc.center;
        arc.center = f.point2("circular_arc.center", center)?;
        let angles = self.arc_angles(
            f,
            ("circular_arc.start_point", "circular_arc.end_point"),
            center,
            arc.center,
            arc.radius,
            (arc.start_angle, arc.end_angle),
        )?;
        // The edge keeps its ends so the boundary stays connected; a mirrored
        // image runs the other way round.
        arc.start_angle = angles.start;
        arc.end_angle = angles.end;
        if angles.mirrored {
            arc.counter_clockwise = !arc.counter_clockwise;
        }
        Ok(())
    }

    fn rewrite_elliptic_edge(&self, f: &Fields<'_>, arc: &mut EllipticArcEdge) -> FieldResult<()> {
        let center = arc.center;
        arc.center = f.point2("elliptic_arc.center", center)?;
        let axis = arc.major_axis_endpoint;
        arc.major_axis_endpoint =
            f.direction("elliptic_arc.major_axis_endpoint", center, arc.center, axis)?;

        if f.is_mirrored("elliptic_arc.center", center, arc.center, axis.length())? {
            arc.start_angle = -arc.start_angle;
            arc.end_angle = -arc.end_angle;
            arc.counter_clockwise = !arc.counter_clockwise;
        }
        Ok(())
    }

    fn rewrite_spline_edge(&self, f: &Fields<'_>, s: &mut SplineEdge) -> FieldResult<()> {
        let first = s
            .fit_points
            .first()
            .copied()
            .or_else(|| s.control_points.first().map(Vector3::xy));
        let last = s
            .fit_points
            .last()
            .copied()
            .or_else(|| s.control_points.last().map(Vector3::xy));

        for (i, cp) in s.control_points.iter_mut().enumerate() {
            // z holds the weight
            let xy = f.point2("spline.control_points", cp.xy()).map_err(|x| x.at(i))?;
            *cp = cp.with_xy(xy);
        }
        for (i, p) in s.fit_points.iter_mut().enumerate() {
            *p = f.point2("spline.fit_points", *p).map_err(|x| x.at(i))?;
        }

        // A zero tangent means "not specified".
        if let Some(anchor) = first.filter(|_| s.start_tangent.length() > 0.0) {
            let projected = f.anchor("spline.start_tangent", anchor)?;
            let t = f.direction("spline.start_tangent", anchor, projected, s.start_tangent)?;
            s.start_tangent = self.unit(t);
        }
        if let Some(anchor) = last.filter(|_| s.end_tangent.length() > 0.0) {
            let projected = f.anchor("spline.end_tangent", anchor)?;
            let t = f.direction("spline.end_tangent", anchor, projected, s.end_tangent)?;
            s.end_tangent = self.unit(t);
        }
        Ok(())
    }

    /// Field-by-field rewrite; a failing field is left as it was and
    /// reported, its siblings are still processed
    fn rewrite_unclassified(&self, e: &mut Unclassified, warnings: &mut Vec<Warning>) {
        let handle = e.common.handle;
        let roles: Vec<FieldRole> = e
            .fields
            .iter()
            .map(|(name, field)| classify_field(name, field))
            .collect();

        // Directions are anchored at the first position field holding a
        // coordinate.
        let anchor = e
            .fields
            .values()
            .zip(&roles)
            .filter(|(_, role)| role.is_position())
            .find_map(|(field, _)| coordinate_xy(&field.value));
        let projected_anchor = anchor.map(|a| self.transform.forward_point2(a));

        for ((name, field), role) in e.fields.iter_mut().zip(&roles) {
            let rewritten = match role {
                FieldRole::Position2D | FieldRole::Position3D => {
                    self.rewrite_position_value(&field.value)
                }
                FieldRole::Direction2D => match (anchor, &projected_anchor) {
                    (Some(anchor), Some(Ok(projected))) => {
                        self.rewrite_direction_value(&field.value, anchor, *projected)
                    }
                    (_, Some(Err(error))) => Err((
                        WarningKind::TransformDomain,
                        format!("anchor position could not be projected: {}", error),
                    )),
                    _ => Err((
                        WarningKind::FieldAccess,
                        "direction field has no anchor position".to_string(),
                    )),
                },
                FieldRole::ElevationScalar | FieldRole::Opaque => continue,
            };

            match rewritten {
                Ok(value) => field.value = value,
                Err((kind, message)) => {
                    warnings.push(Warning::for_field(kind, handle, name.clone(), message))
                }
            }
        }
    }

    fn rewrite_position_value(
        &self,
        value: &FieldValue,
    ) -> std::result::Result<FieldValue, (WarningKind, String)> {
        let domain = |e: TransformError| (WarningKind::TransformDomain, e.to_string());
        match value {
            FieldValue::Point2(p) => self
                .transform
                .forward_point2(*p)
                .map(FieldValue::Point2)
                .map_err(domain),
            FieldValue::Point3(p) => self
                .transform
                .forward_point3(*p)
                .map(FieldValue::Point3)
                .map_err(domain),
            other => Err((
                WarningKind::FieldAccess,
                format!("position field holds a {} value", other.type_name()),
            )),
        }
    }

    fn rewrite_direction_value(
        &self,
        value: &FieldValue,
        anchor: Vector2,
        projected_anchor: Vector2,
    ) -> std::result::Result<FieldValue, (WarningKind, String)> {
        let Some(dir) = coordinate_xy(value) else {
            return Err((
                WarningKind::FieldAccess,
                format!("direction field holds a {} value", value.type_name()),
            ));
        };
        let projected = self
            .transform
            .forward_direction(anchor, projected_anchor, dir)
            .map_err(|e| (WarningKind::TransformDomain, e.to_string()))?;
        Ok(match value {
            FieldValue::Point3(p) => FieldValue::Point3(p.with_xy(projected)),
            _ => FieldValue::Point2(projected),
        })
    }
}
