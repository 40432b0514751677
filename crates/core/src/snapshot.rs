use arrayvec::ArrayVec;

use crate::queue::UpcomingQueue;
use crate::stack::ReserveStack;
use crate::types::{Piece, QUEUE_CAPACITY, STACK_CAPACITY};

/// Settled view of both containers: queue front→back, stack top→base.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Snapshot {
    pub queue: ArrayVec<Piece, QUEUE_CAPACITY>,
    pub stack: ArrayVec<Piece, STACK_CAPACITY>,
}

impl Snapshot {
    pub fn capture(queue: &UpcomingQueue, stack: &ReserveStack) -> Self {
        let mut snap = Self::default();
        snap.fill_from(queue, stack);
        snap
    }

    /// Overwrite in place; no allocation.
    pub fn fill_from(&mut self, queue: &UpcomingQueue, stack: &ReserveStack) {
        self.clear();
        self.queue.extend(queue.iter().copied());
        self.stack.extend(stack.iter().copied());
    }

    pub fn clear(&mut self) {
        self.queue.clear();
        self.stack.clear();
    }

    pub fn queue_front(&self) -> Option<Piece> {
        self.queue.first().copied()
    }

    pub fn stack_top(&self) -> Option<Piece> {
        self.stack.first().copied()
    }
}
