//! In-memory drawing: the element graph handed over by the drawing I/O layer

use crate::entities::EntityType;
use crate::types::Handle;
use indexmap::IndexMap;

/// An ordered collection of model-space entities
///
/// Entities are kept in insertion order, which is the document order the
/// reprojection walker follows. Readers build a `Drawing` from a file and
/// writers persist it after reprojection; both are outside this crate.
#[derive(Debug, Clone, Default)]
pub struct Drawing {
    /// Reference system the coordinates are currently expressed in, if known
    pub reference_system: Option<String>,
    /// All entities, keyed by handle, in document order
    entities: IndexMap<Handle, EntityType>,
    /// Next handle to hand out
    next_handle: u64,
}

impl Drawing {
    /// Create an empty drawing
    pub fn new() -> Self {
        Drawing {
            reference_system: None,
            entities: IndexMap::new(),
            next_handle: 1,
        }
    }

    /// Allocate a fresh handle
    pub fn allocate_handle(&mut self) -> Handle {
        let handle = Handle::new(self.next_handle.max(1));
        self.next_handle = handle.value() + 1;
        handle
    }

    /// Add an entity, assigning a handle if it has none
    ///
    /// An entity that already carries a handle keeps it; a later entity
    /// with the same handle replaces the earlier one in place.
    pub fn add_entity(&mut self, mut entity: EntityType) -> Handle {
        let mut handle = entity.handle();
        if handle.is_null() {
            handle = self.allocate_handle();
            entity.as_entity_mut().set_handle(handle);
        } else if handle.value() >= self.next_handle {
            self.next_handle = handle.value() + 1;
        }
        self.entities.insert(handle, entity);
        handle
    }

    /// Get an entity by handle
    pub fn get_entity(&self, handle: Handle) -> Option<&EntityType> {
        self.entities.get(&handle)
    }

    /// Get a mutable entity by handle
    pub fn get_entity_mut(&mut self, handle: Handle) -> Option<&mut EntityType> {
        self.entities.get_mut(&handle)
    }

    /// Get the number of entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate over all entities in document order
    pub fn entities(&self) -> impl Iterator<Item = &EntityType> {
        self.entities.values()
    }

    /// Iterate over all entities mutably in document order
    pub fn entities_mut(&mut self) -> impl Iterator<Item = &mut EntityType> {
        self.entities.values_mut()
    }

    /// Raw ordered storage, for sharded traversal
    pub(crate) fn entity_map_mut(&mut self) -> &mut IndexMap<Handle, EntityType> {
        &mut self.entities
    }
}

impl FromIterator<EntityType> for Drawing {
    fn from_iter<I: IntoIterator<Item = EntityType>>(iter: I) -> Self {
        let mut drawing = Drawing::new();
        for entity in iter {
            drawing.add_entity(entity);
        }
        drawing
    }
}
