use std::cell::RefCell;
use std::rc::Rc;

use replink_shared::{
    ActionIndex, EntityId, EntityRegistry, LocalRegistry, Position, ReplicatedEntity, Rotation,
};

#[derive(Debug, Default)]
struct TestEntityState {
    position: Position,
    rotation: Rotation,
    triggered: Vec<ActionIndex>,
}

/// Cloneable entity probe recording every callback it receives.
///
/// One clone goes into the registry, the test keeps another, and both see
/// the same state, so assertions can run after dispatch without fishing the
/// boxed entity back out.
#[derive(Clone, Default)]
pub struct TestEntity(Rc<RefCell<TestEntityState>>);

impl TestEntity {
    pub fn position(&self) -> Position {
        self.0.borrow().position
    }

    pub fn rotation(&self) -> Rotation {
        self.0.borrow().rotation
    }

    pub fn triggered(&self) -> Vec<ActionIndex> {
        self.0.borrow().triggered.clone()
    }
}

impl ReplicatedEntity for TestEntity {
    fn move_to_sync(&mut self, rotation: Option<Rotation>, position: Option<Position>) {
        let mut state = self.0.borrow_mut();
        if let Some(rotation) = rotation {
            state.rotation = rotation;
        }
        if let Some(position) = position {
            state.position = position;
        }
    }

    fn trigger_by_index(&mut self, index: ActionIndex) {
        self.0.borrow_mut().triggered.push(index);
    }
}

/// A registry of probe entities for one simulated peer.
#[derive(Default)]
pub struct TestWorld {
    registry: LocalRegistry,
}

impl TestWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns a probe under `id` and returns the test's handle to it.
    pub fn spawn(&mut self, id: EntityId) -> TestEntity {
        let entity = TestEntity::default();
        self.registry.insert(id, Box::new(entity.clone()));
        entity
    }

    pub fn despawn(&mut self, id: &EntityId) {
        self.registry.remove(id);
    }

    pub fn registry_mut(&mut self) -> &mut dyn EntityRegistry {
        &mut self.registry
    }
}
