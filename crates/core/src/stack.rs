//! Fixed-capacity LIFO stack backed by `ArrayVec` (no heap allocation).

use arrayvec::ArrayVec;

use crate::types::{Piece, STACK_CAPACITY};

/// Stack with compile-time capacity `N`. The top is the last element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedStack<T, const N: usize> {
    items: ArrayVec<T, N>,
}

/// The reserve stack
pub type ReserveStack = BoundedStack<Piece, STACK_CAPACITY>;

impl<T, const N: usize> BoundedStack<T, N> {
    pub fn new() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    /// Push onto the top. Returns `false` without touching the stack when full.
    pub fn push(&mut self, item: T) -> bool {
        self.items.try_push(item).is_ok()
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek_top(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn peek_top_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// The `depth`-th item counted from the top (0 = top).
    pub fn peek_from_top(&self, depth: usize) -> Option<&T> {
        let index = self.index_from_top(depth)?;
        self.items.get(index)
    }

    pub fn peek_from_top_mut(&mut self, depth: usize) -> Option<&mut T> {
        let index = self.index_from_top(depth)?;
        self.items.get_mut(index)
    }

    fn index_from_top(&self, depth: usize) -> Option<usize> {
        self.items.len().checked_sub(depth + 1)
    }

    /// Iterate top to base.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().rev()
    }
}

impl<T, const N: usize> Default for BoundedStack<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
