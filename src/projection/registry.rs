//! Lookup of projections by reference system pair

use super::{AffineProjection, Projection, ReferenceSystemId, ReferenceTransform};
use crate::error::{ReprojectError, Result, TransformError};
use ahash::{AHashMap, AHashSet};
use std::sync::Arc;

/// Known reference systems and the projections between them
///
/// The registry does not contain any projection mathematics of its own;
/// callers register the projections their projection library provides.
#[derive(Default, Clone)]
pub struct ProjectionRegistry {
    systems: AHashSet<ReferenceSystemId>,
    pairs: AHashMap<(ReferenceSystemId, ReferenceSystemId), Arc<dyn Projection>>,
}

impl ProjectionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a reference system as resolvable
    pub fn register_system(&mut self, id: &str) -> Result<ReferenceSystemId> {
        let id = ReferenceSystemId::new(id).ok_or(ReprojectError::EmptyReference("system"))?;
        self.systems.insert(id.clone());
        Ok(id)
    }

    /// Register a projection from `source` to `target`
    ///
    /// Both systems become resolvable. A later registration for the same
    /// pair replaces the earlier one.
    pub fn register<P>(&mut self, source: &str, target: &str, projection: P) -> Result<()>
    where
        P: Projection + 'static,
    {
        self.register_shared(source, target, Arc::new(projection))
    }

    fn register_shared(
        &mut self,
        source: &str,
        target: &str,
        projection: Arc<dyn Projection>,
    ) -> Result<()> {
        let source = self.register_system(source)?;
        let target = self.register_system(target)?;
        self.pairs.insert((source, target), projection);
        Ok(())
    }

    /// Register an affine projection and, when it is invertible, its inverse
    pub fn register_affine(
        &mut self,
        source: &str,
        target: &str,
        projection: AffineProjection,
    ) -> Result<()> {
        if let Some(inverse) = projection.inverse() {
            self.register(target, source, inverse)?;
        }
        self.register(source, target, projection)
    }

    /// Whether `id` names a registered reference system
    pub fn contains_system(&self, id: &str) -> bool {
        ReferenceSystemId::new(id).is_some_and(|id| self.systems.contains(&id))
    }

    /// Build the transform from `input` to `output`
    ///
    /// Identical identifiers yield the identity transform without any
    /// lookup. Otherwise both systems must be registered
    /// ([`TransformError::UnknownReferenceSystem`]) and a projection for
    /// the pair must exist ([`TransformError::Unsupported`]).
    pub fn construct_transform(&self, input: &str, output: &str) -> Result<ReferenceTransform> {
        let source = ReferenceSystemId::new(input).ok_or(ReprojectError::EmptyReference("input"))?;
        let target =
            ReferenceSystemId::new(output).ok_or(ReprojectError::EmptyReference("output"))?;

        if source == target {
            return Ok(ReferenceTransform::identity(source));
        }

        for id in [&source, &target] {
            if !self.systems.contains(id) {
                return Err(TransformError::UnknownReferenceSystem(id.to_string()).into());
            }
        }

        let projection = self
            .pairs
            .get(&(source.clone(), target.clone()))
            .cloned()
            .ok_or_else(|| TransformError::Unsupported {
                source_ref: source.to_string(),
                target_ref: target.to_string(),
            })?;

        Ok(ReferenceTransform::new(source, target, projection))
    }
}

impl std::fmt::Debug for ProjectionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut systems: Vec<&str> = self.systems.iter().map(ReferenceSystemId::as_str).collect();
        systems.sort_unstable();
        f.debug_struct("ProjectionRegistry")
            .field("systems", &systems)
            .field("pairs", &self.pairs.len())
            .finish()
    }
}
