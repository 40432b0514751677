//! PieceManager: owns both containers and the generator.
//!
//! This is the object the driver talks to. It is a thin owner around the free
//! functions in [`crate::actions`]; all rules live there.

use crate::actions;
use crate::core::{PieceGenerator, PieceSource, ReserveStack, Snapshot, UpcomingQueue};
use crate::outcome::ActionResult;
use crate::types::MenuAction;

#[derive(Debug, Clone)]
pub struct PieceManager<G = PieceGenerator> {
    queue: UpcomingQueue,
    stack: ReserveStack,
    generator: G,
}

impl PieceManager<PieceGenerator> {
    /// Random shapes from `seed`, queue already full.
    pub fn with_seed(seed: u32) -> Self {
        Self::new(PieceGenerator::new(seed))
    }
}

impl<G: PieceSource> PieceManager<G> {
    /// Take ownership of `generator` and fill the queue from it.
    pub fn new(mut generator: G) -> Self {
        let (queue, stack) = actions::initialize(&mut generator);
        Self {
            queue,
            stack,
            generator,
        }
    }

    /// Start from explicit container contents (no initial fill).
    pub fn from_parts(queue: UpcomingQueue, stack: ReserveStack, generator: G) -> Self {
        Self {
            queue,
            stack,
            generator,
        }
    }

    /// Perform the action for a raw menu code.
    pub fn perform(&mut self, code: i64) -> ActionResult {
        actions::perform_action(code, &mut self.queue, &mut self.stack, &mut self.generator)
    }

    pub fn apply(&mut self, action: MenuAction) -> ActionResult {
        actions::apply(action, &mut self.queue, &mut self.stack, &mut self.generator)
    }

    pub fn snapshot(&self) -> Snapshot {
        actions::snapshot(&self.queue, &self.stack)
    }

    /// Allocation-free variant of [`Self::snapshot`].
    pub fn snapshot_into(&self, out: &mut Snapshot) {
        out.fill_from(&self.queue, &self.stack);
    }

    pub fn queue(&self) -> &UpcomingQueue {
        &self.queue
    }

    pub fn stack(&self) -> &ReserveStack {
        &self.stack
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }
}
