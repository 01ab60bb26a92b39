use log::warn;

use crate::{
    messages::{action_invoke::ActionInvoke, batch::Batch, transform_update::TransformUpdate},
    world::entity_registry::EntityRegistry,
};

/// Outcome of routing one batch: how many records reached an entity and how
/// many were dropped because their identifier has no registry entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchStats {
    pub applied: usize,
    pub unknown_entities: usize,
}

impl DispatchStats {
    pub fn merge(&mut self, other: DispatchStats) {
        self.applied += other.applied;
        self.unknown_entities += other.unknown_entities;
    }
}

/// Routes every record of a parsed batch to its entity, in wire order.
pub fn dispatch_batch(batch: &Batch, registry: &mut dyn EntityRegistry) -> DispatchStats {
    match batch {
        Batch::Transforms(records) => dispatch_transforms(records, registry),
        Batch::Actions(records) => dispatch_actions(records, registry),
    }
}

/// Applies transform records in order. A record whose identifier is not
/// registered is skipped: one stale or out-of-scope entity must not
/// invalidate the rest of the tick's sync data.
pub fn dispatch_transforms(
    records: &[TransformUpdate],
    registry: &mut dyn EntityRegistry,
) -> DispatchStats {
    let mut stats = DispatchStats::default();
    for record in records {
        let id = record.id();
        match registry.lookup(&id) {
            Some(entity) => {
                entity.move_to_sync(record.rotation(), record.position());
                stats.applied += 1;
            }
            None => {
                warn!("Dropping transform update for unknown entity {}", id);
                stats.unknown_entities += 1;
            }
        }
    }
    stats
}

/// Fires action records in order, with the same skip-and-continue policy as
/// transform dispatch.
pub fn dispatch_actions(
    records: &[ActionInvoke],
    registry: &mut dyn EntityRegistry,
) -> DispatchStats {
    let mut stats = DispatchStats::default();
    for record in records {
        match registry.lookup(&record.id) {
            Some(entity) => {
                entity.trigger_by_index(record.index);
                stats.applied += 1;
            }
            None => {
                warn!(
                    "Dropping action {} for unknown entity {}",
                    record.index, record.id
                );
                stats.unknown_entities += 1;
            }
        }
    }
    stats
}
