//! Shared test utilities for dxf-reproject integration tests.
//!
//! Consolidates transform constructors, tolerance comparisons and entity
//! lookups into a single module that all test crates import via
//! `mod common;`.

#![allow(dead_code)]

pub mod builders;

use dxf_reproject::entities::EntityType;
use dxf_reproject::error::TransformError;
use dxf_reproject::projection::{
    AffineProjection, ProjectionRegistry, ReferenceSystemId, ReferenceTransform,
};
use dxf_reproject::types::{Vector2, Vector3};
use dxf_reproject::{Drawing, Handle};
use std::collections::BTreeMap;

// ===========================================================================
// Reference systems
// ===========================================================================

pub const KOREA_CENTRAL: &str = "EPSG:5186";
pub const KOREA_CENTRAL_OLD: &str = "EPSG:5174";
pub const WGS84: &str = "EPSG:4326";

pub fn id(raw: &str) -> ReferenceSystemId {
    ReferenceSystemId::new(raw).expect("valid reference system id")
}

/// Helmert pair between the two Korean grids, close to the real datum shift.
pub fn korea_helmert() -> AffineProjection {
    AffineProjection::helmert(-115.8, 474.99, 1.2e-5, 1.000_006)
}

/// Registry with the Korean grid pair (both directions) and WGS84 known but
/// unconnected.
pub fn registry() -> ProjectionRegistry {
    let mut registry = ProjectionRegistry::new();
    registry
        .register_affine(KOREA_CENTRAL, KOREA_CENTRAL_OLD, korea_helmert())
        .expect("register helmert pair");
    registry.register_system(WGS84).expect("register wgs84");
    registry
}

/// A strongly non-affine map: x is stretched quadratically.
pub fn quadratic() -> ReferenceTransform {
    ReferenceTransform::from_fn(id("LOCAL:1"), id("LOCAL:2"), |x, y| {
        Ok::<_, TransformError>((x * x / 100.0, y))
    })
}

/// Reflection across the diagonal; reverses orientation.
pub fn mirror() -> ReferenceTransform {
    ReferenceTransform::from_fn(id("LOCAL:1"), id("LOCAL:2"), |x, y| {
        Ok::<_, TransformError>((y, x))
    })
}

/// Defined only for x >= 0.
pub fn right_half_plane() -> ReferenceTransform {
    ReferenceTransform::from_fn(id("LOCAL:1"), id("LOCAL:2"), |x, y| {
        if x < 0.0 {
            Err(TransformError::OutOfDomain { x, y })
        } else {
            Ok((x + 1.0, y + 1.0))
        }
    })
}

// ===========================================================================
// Comparisons
// ===========================================================================

pub fn assert_close2(actual: Vector2, expected: Vector2, tol: f64) {
    assert!(
        actual.distance(&expected) <= tol,
        "expected {} within {}, got {}",
        expected,
        tol,
        actual
    );
}

pub fn assert_close3(actual: Vector3, expected: Vector3, tol: f64) {
    assert!(
        actual.distance(&expected) <= tol,
        "expected {} within {}, got {}",
        expected,
        tol,
        actual
    );
}

/// Count entities by DXF type name.
pub fn count_entities(drawing: &Drawing) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for entity in drawing.entities() {
        *counts
            .entry(entity.as_entity().entity_type().to_string())
            .or_insert(0) += 1;
    }
    counts
}

/// Entity at `handle`, panicking with a readable message when absent.
pub fn entity(drawing: &Drawing, handle: Handle) -> &EntityType {
    drawing
        .get_entity(handle)
        .unwrap_or_else(|| panic!("no entity with handle {}", handle))
}
