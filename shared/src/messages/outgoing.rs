use std::mem;

use crate::messages::{action_invoke::ActionInvoke, transform_update::TransformUpdate};

/// Per-tick accumulation buffers for outgoing records.
///
/// Producers append during the tick; the session drains both lists exactly
/// once at the tick boundary. Insertion order is send order — actions are
/// not idempotent and must apply in the order they were issued. There is no
/// deduplication: two updates for the same entity in one tick both go out,
/// and the receiver applies them in order, so the last one wins.
#[derive(Debug, Default)]
pub struct OutgoingQueue {
    transforms: Vec<TransformUpdate>,
    actions: Vec<ActionInvoke>,
}

impl OutgoingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_transform(&mut self, update: TransformUpdate) {
        self.transforms.push(update);
    }

    pub fn queue_action(&mut self, action: ActionInvoke) {
        self.actions.push(action);
    }

    /// Takes and clears the pending transform list in one step.
    pub fn drain_transforms(&mut self) -> Vec<TransformUpdate> {
        mem::take(&mut self.transforms)
    }

    /// Takes and clears the pending action list in one step.
    pub fn drain_actions(&mut self) -> Vec<ActionInvoke> {
        mem::take(&mut self.actions)
    }

    pub fn pending_transforms(&self) -> usize {
        self.transforms.len()
    }

    pub fn pending_actions(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty() && self.actions.is_empty()
    }

    pub fn clear(&mut self) {
        self.transforms.clear();
        self.actions.clear();
    }
}
