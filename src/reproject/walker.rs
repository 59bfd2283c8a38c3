//! Drawing traversal
//!
//! The walker visits every top-level entity in document order, hands it to
//! an [`EntityRewriter`] and gathers the outcome into a [`ReprojectReport`].
//! Nested sub-structures (hatch boundary paths and edges, polyline vertices,
//! leader vertices) are owned by their parent entity and are rewritten as
//! part of it.

use super::config::ReprojectConfiguration;
use super::rewriter::{ElementOutcome, EntityRewriter};
use crate::document::Drawing;
use crate::entities::ElementKind;
use crate::error::Result;
use crate::notification::WarningCollection;
use crate::projection::{ProjectionRegistry, ReferenceSystemId, ReferenceTransform};
use crate::types::Handle;
use rayon::prelude::*;

/// Summary of one reprojection run
#[derive(Debug, Clone, PartialEq)]
pub struct ReprojectReport {
    pub source: ReferenceSystemId,
    pub target: ReferenceSystemId,
    /// Top-level entities handed to the rewriter
    pub visited: usize,
    /// Entities replaced by their rewritten form
    pub rewritten: usize,
    /// Entities left unmodified because a position failed to project
    pub failed: usize,
    /// The run was cancelled before the last entity
    pub stopped_early: bool,
    /// Warnings in traversal order
    pub warnings: WarningCollection,
}

impl ReprojectReport {
    fn new(transform: &ReferenceTransform) -> Self {
        Self {
            source: transform.source().clone(),
            target: transform.target().clone(),
            visited: 0,
            rewritten: 0,
            failed: 0,
            stopped_early: false,
            warnings: WarningCollection::new(),
        }
    }

    /// Every entity was rewritten without any warning
    pub fn is_clean(&self) -> bool {
        self.failed == 0 && self.warnings.is_empty() && !self.stopped_early
    }

    fn record(&mut self, handle: Handle, kind: ElementKind, outcome: ElementOutcome) {
        self.visited += 1;
        if outcome.rewritten {
            self.rewritten += 1;
            tracing::debug!(%handle, %kind, "entity reprojected");
        } else {
            self.failed += 1;
        }
        for warning in &outcome.warnings {
            tracing::warn!("{}", warning);
        }
        self.warnings.extend(outcome.warnings);
    }
}

/// Applies a transform to every entity of a drawing
#[derive(Debug)]
pub struct GraphWalker<'a> {
    transform: &'a ReferenceTransform,
    config: ReprojectConfiguration,
}

impl<'a> GraphWalker<'a> {
    pub fn new(transform: &'a ReferenceTransform, config: ReprojectConfiguration) -> Self {
        Self { transform, config }
    }

    /// Rewrite every entity of `drawing` in place
    ///
    /// Uses the rayon thread pool when the configuration asks for it; the
    /// report is the same either way.
    pub fn walk(&self, drawing: &mut Drawing) -> ReprojectReport {
        if self.config.parallel {
            self.walk_parallel(drawing)
        } else {
            self.walk_while(drawing, |_| true)
        }
    }

    /// Rewrite entities sequentially for as long as `keep_going` agrees
    ///
    /// `keep_going` is asked before each entity with the number of entities
    /// processed so far. Returning `false` stops the run; the entities
    /// already rewritten stay rewritten.
    pub fn walk_while<F>(&self, drawing: &mut Drawing, mut keep_going: F) -> ReprojectReport
    where
        F: FnMut(usize) -> bool,
    {
        let rewriter = EntityRewriter::new(self.transform, &self.config);
        let mut report = ReprojectReport::new(self.transform);

        for (processed, entity) in drawing.entities_mut().enumerate() {
            if !keep_going(processed) {
                report.stopped_early = true;
                break;
            }
            let outcome = rewriter.rewrite_in_place(entity);
            report.record(entity.handle(), entity.kind(), outcome);
        }

        self.finish(report)
    }

    fn walk_parallel(&self, drawing: &mut Drawing) -> ReprojectReport {
        let rewriter = EntityRewriter::new(self.transform, &self.config);

        // collect() keeps document order
        let outcomes: Vec<(Handle, ElementKind, ElementOutcome)> = drawing
            .entity_map_mut()
            .par_values_mut()
            .map(|entity| {
                let outcome = rewriter.rewrite_in_place(entity);
                (entity.handle(), entity.kind(), outcome)
            })
            .collect();

        let mut report = ReprojectReport::new(self.transform);
        for (handle, kind, outcome) in outcomes {
            report.record(handle, kind, outcome);
        }
        self.finish(report)
    }

    fn finish(&self, report: ReprojectReport) -> ReprojectReport {
        tracing::info!(
            source = %report.source,
            target = %report.target,
            visited = report.visited,
            rewritten = report.rewritten,
            failed = report.failed,
            warnings = report.warnings.len(),
            stopped_early = report.stopped_early,
            "reprojection finished"
        );
        report
    }
}

/// Reproject a whole drawing from `input` to `output`
///
/// Building the transform is the only fatal step: an empty, unknown or
/// unsupported reference system fails before any entity is touched.
/// Per-entity problems end up in the report. Unless the run was stopped,
/// the drawing is tagged with the target system afterwards.
pub fn reproject_drawing(
    drawing: &mut Drawing,
    registry: &ProjectionRegistry,
    input: &str,
    output: &str,
    config: ReprojectConfiguration,
) -> Result<ReprojectReport> {
    let transform = registry.construct_transform(input, output)?;

    if let Some(current) = drawing.reference_system.as_deref().and_then(ReferenceSystemId::new) {
        if &current != transform.source() {
            tracing::warn!(
                drawing = %current,
                input = %transform.source(),
                "drawing is tagged with a different reference system than the input"
            );
        }
    }

    let report = GraphWalker::new(&transform, config).walk(drawing);
    if !report.stopped_early {
        drawing.reference_system = Some(transform.target().to_string());
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Circle, EntityType, Line, Point};
    use crate::error::{ReprojectError, TransformError};
    use crate::notification::WarningKind;
    use crate::projection::AffineProjection;
    use crate::types::Vector3;

    fn drawing() -> Drawing {
        [
            EntityType::Line(Line::from_coords(0.0, 0.0, 0.0, 10.0, 10.0, 0.0)),
            EntityType::Circle(Circle::from_coords(-5.0, 5.0, 1.0, 2.0)),
            EntityType::Point(Point::at(Vector3::new(3.0, 4.0, 5.0))),
        ]
        .into_iter()
        .collect()
    }

    fn half_plane() -> ReferenceTransform {
        ReferenceTransform::from_fn(
            ReferenceSystemId::new("A:1").unwrap(),
            ReferenceSystemId::new("B:1").unwrap(),
            |x, y| {
                if x < 0.0 {
                    Err(TransformError::OutOfDomain { x, y })
                } else {
                    Ok((x * 2.0, y))
                }
            },
        )
    }

    #[test]
    fn test_failure_leaves_entity_and_continues() {
        let t = half_plane();
        let mut d = drawing();
        let circle_before = d.get_entity(Handle::new(2)).cloned();

        let report = GraphWalker::new(&t, ReprojectConfiguration::default()).walk(&mut d);

        assert_eq!(report.visited, 3);
        assert_eq!(report.rewritten, 2);
        assert_eq!(report.failed, 1);
        assert!(!report.is_clean());
        assert_eq!(report.warnings.of_kind(WarningKind::TransformDomain).len(), 1);
        assert_eq!(d.get_entity(Handle::new(2)).cloned(), circle_before);

        let Some(EntityType::Point(p)) = d.get_entity(Handle::new(3)) else {
            panic!("missing point");
        };
        assert_eq!(p.location, Vector3::new(6.0, 4.0, 5.0));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let t = half_plane();
        let mut sequential = drawing();
        let mut parallel = drawing();

        let a = GraphWalker::new(&t, ReprojectConfiguration::default()).walk(&mut sequential);
        let config = ReprojectConfiguration {
            parallel: true,
            ..Default::default()
        };
        let b = GraphWalker::new(&t, config).walk(&mut parallel);

        assert_eq!(a, b);
        let left: Vec<_> = sequential.entities().collect();
        let right: Vec<_> = parallel.entities().collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_walk_while_stops() {
        let t = half_plane();
        let mut d = drawing();
        let report = GraphWalker::new(&t, ReprojectConfiguration::default())
            .walk_while(&mut d, |processed| processed < 1);

        assert!(report.stopped_early);
        assert_eq!(report.visited, 1);
        let Some(EntityType::Point(p)) = d.get_entity(Handle::new(3)) else {
            panic!("missing point");
        };
        assert_eq!(p.location, Vector3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn test_reproject_drawing_tags_target() {
        let mut registry = ProjectionRegistry::new();
        registry
            .register_affine("EPSG:5186", "EPSG:5174", AffineProjection::translation(1.0, 1.0))
            .unwrap();
        let mut d = drawing();
        d.reference_system = Some("EPSG:5186".into());

        let report = reproject_drawing(
            &mut d,
            &registry,
            "epsg:5186",
            "EPSG:5174",
            ReprojectConfiguration::default(),
        )
        .unwrap();

        assert!(report.is_clean());
        assert_eq!(d.reference_system.as_deref(), Some("EPSG:5174"));
    }

    #[test]
    fn test_unknown_reference_is_fatal() {
        let registry = ProjectionRegistry::new();
        let mut d = drawing();
        let before: Vec<EntityType> = d.entities().cloned().collect();

        let err = reproject_drawing(
            &mut d,
            &registry,
            "EPSG:5186",
            "EPSG:0000",
            ReprojectConfiguration::default(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ReprojectError::Transform(TransformError::UnknownReferenceSystem(_))
        ));
        let after: Vec<EntityType> = d.entities().cloned().collect();
        assert_eq!(before, after);
        assert_eq!(d.reference_system, None);
    }
}
