//! Fixed-capacity circular queue
//!
//! Backing storage is a fixed array addressed through a head index and a
//! length. Logical position `i` (0 = front) lives at `(head + i) % N`, so
//! clients only ever observe arrival order no matter where the storage wraps.

use crate::types::{Piece, QUEUE_CAPACITY};

/// Circular FIFO with compile-time capacity `N`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedQueue<T, const N: usize> {
    slots: [Option<T>; N],
    head: usize,
    len: usize,
}

/// The upcoming-piece queue
pub type UpcomingQueue = BoundedQueue<Piece, QUEUE_CAPACITY>;

impl<T, const N: usize> BoundedQueue<T, N> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            head: 0,
            len: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    fn slot(&self, offset: usize) -> usize {
        (self.head + offset) % N
    }

    /// Append at the back. Returns `false` without touching the queue when full.
    pub fn enqueue(&mut self, item: T) -> bool {
        if self.is_full() {
            return false;
        }
        let tail = self.slot(self.len);
        self.slots[tail] = Some(item);
        self.len += 1;
        true
    }

    /// Remove and return the front item.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.head].take();
        self.head = self.slot(1);
        self.len -= 1;
        item
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.peek_at(0)
    }

    pub fn peek_front_mut(&mut self) -> Option<&mut T> {
        self.peek_at_mut(0)
    }

    /// The `index`-th item counted from the front (0 = front).
    pub fn peek_at(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[self.slot(index)].as_ref()
    }

    pub fn peek_at_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let slot = self.slot(index);
        self.slots[slot].as_mut()
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |i| self.slots[self.slot(i)].as_ref())
    }
}

impl<T, const N: usize> Default for BoundedQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<const N: usize>(q: &BoundedQueue<u32, N>) -> Vec<u32> {
        q.iter().copied().collect()
    }

    #[test]
    fn test_enqueue_until_full() {
        let mut q: BoundedQueue<u32, 3> = BoundedQueue::new();
        assert!(q.is_empty());
        assert!(q.enqueue(1));
        assert!(q.enqueue(2));
        assert!(q.enqueue(3));
        assert!(q.is_full());

        // Rejected without mutation
        assert!(!q.enqueue(4));
        assert_eq!(collect(&q), vec![1, 2, 3]);
    }

    #[test]
    fn test_dequeue_fifo_order() {
        let mut q: BoundedQueue<u32, 3> = BoundedQueue::new();
        q.enqueue(1);
        q.enqueue(2);
        assert_eq!(q.dequeue(), Some(1));
        assert_eq!(q.dequeue(), Some(2));
        assert_eq!(q.dequeue(), None);
        assert!(q.is_empty());
    }

    #[test]
    fn test_wraparound_keeps_logical_order() {
        let mut q: BoundedQueue<u32, 3> = BoundedQueue::new();
        for v in 0..3 {
            q.enqueue(v);
        }
        // Cycle several times so head walks past the end of storage.
        for v in 3..10 {
            let out = q.dequeue().unwrap();
            assert_eq!(out, v - 3);
            assert!(q.enqueue(v));
        }
        assert_eq!(collect(&q), vec![7, 8, 9]);
        assert_eq!(q.peek_front(), Some(&7));
        assert_eq!(q.peek_at(2), Some(&9));
    }

    #[test]
    fn test_peek_at_bounds() {
        let mut q: BoundedQueue<u32, 5> = BoundedQueue::new();
        assert_eq!(q.peek_front(), None);
        q.enqueue(10);
        q.enqueue(11);
        assert_eq!(q.peek_at(1), Some(&11));
        assert_eq!(q.peek_at(2), None);
        assert_eq!(q.peek_at_mut(5), None);
    }

    #[test]
    fn test_peek_mut_edits_in_place() {
        let mut q: BoundedQueue<u32, 2> = BoundedQueue::new();
        q.enqueue(1);
        q.enqueue(2);
        q.dequeue();
        q.enqueue(3); // wraps into slot 0
        *q.peek_at_mut(1).unwrap() = 30;
        *q.peek_front_mut().unwrap() = 20;
        assert_eq!(collect(&q), vec![20, 30]);
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn test_upcoming_queue_capacity() {
        let q = UpcomingQueue::new();
        assert_eq!(q.capacity(), QUEUE_CAPACITY);
    }
}
