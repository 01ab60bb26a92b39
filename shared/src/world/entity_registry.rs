use std::collections::HashMap;

use crate::types::{ActionIndex, EntityId, Position, Rotation};

/// A live, replicated in-process entity.
///
/// Both callbacks run synchronously inside the host's tick, so
/// implementations must not block; a slow entity stalls every record
/// dispatched after it that tick.
pub trait ReplicatedEntity {
    /// Applies a transform snapshot. Only the fields present in the record
    /// are `Some`; the entity keeps its previous value for an absent field.
    fn move_to_sync(&mut self, rotation: Option<Rotation>, position: Option<Position>);

    /// Fires the action registered at `index`. An out-of-range index is the
    /// entity's to reject; the router does not validate it.
    fn trigger_by_index(&mut self, index: ActionIndex);
}

/// Maps identifiers to live entities for the dispatch router.
///
/// Entries are created and removed by whatever owns entity lifecycle,
/// independent of connection state; the protocol layer only looks up.
pub trait EntityRegistry {
    fn lookup(&mut self, id: &EntityId) -> Option<&mut dyn ReplicatedEntity>;
}

/// HashMap-backed registry for hosts that own their entities directly.
#[derive(Default)]
pub struct LocalRegistry {
    entities: HashMap<EntityId, Box<dyn ReplicatedEntity>>,
}

impl LocalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: EntityId, entity: Box<dyn ReplicatedEntity>) {
        self.entities.insert(id, entity);
    }

    pub fn remove(&mut self, id: &EntityId) -> Option<Box<dyn ReplicatedEntity>> {
        self.entities.remove(id)
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.entities.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl EntityRegistry for LocalRegistry {
    fn lookup(&mut self, id: &EntityId) -> Option<&mut dyn ReplicatedEntity> {
        self.entities
            .get_mut(id)
            .map(|entity| entity.as_mut() as &mut dyn ReplicatedEntity)
    }
}
