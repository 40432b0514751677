//! Positional exchanges between the queue and the stack.
//!
//! Offsets pair up as front↔top, 2nd-from-front↔2nd-from-top and so on.
//! Both helpers are all-or-nothing: they check sizes before touching anything.

use crate::queue::BoundedQueue;
use crate::stack::BoundedStack;

/// Exchange the first `count` queue items with the top `count` stack items.
///
/// Returns `false` and leaves both containers untouched if either holds fewer
/// than `count` items. Container sizes never change.
pub fn exchange_prefix<T, const Q: usize, const S: usize>(
    queue: &mut BoundedQueue<T, Q>,
    stack: &mut BoundedStack<T, S>,
    count: usize,
) -> bool {
    if queue.len() < count || stack.len() < count {
        return false;
    }
    for offset in 0..count {
        match (queue.peek_at_mut(offset), stack.peek_from_top_mut(offset)) {
            (Some(q), Some(s)) => std::mem::swap(q, s),
            _ => return false,
        }
    }
    true
}

/// Exchange the queue front with the stack top.
pub fn exchange_front_top<T, const Q: usize, const S: usize>(
    queue: &mut BoundedQueue<T, Q>,
    stack: &mut BoundedStack<T, S>,
) -> bool {
    exchange_prefix(queue, stack, 1)
}
