//! The six menu actions over the queue and the reserve stack.
//!
//! Each action checks all of its preconditions before mutating anything, so a
//! failed action leaves both containers exactly as they were. Actions that
//! consume a queue slot (play, reserve) refill it from the generator before
//! returning.

use crate::core::{
    exchange_front_top, exchange_prefix, PieceSource, ReserveStack, Snapshot, UpcomingQueue,
};
use crate::outcome::{ActionEvent, ActionFailure, ActionResult, ActionWarning};
use crate::types::{MenuAction, TRIPLE_SWAP_DEPTH};

/// Fresh containers: a full queue and an empty stack.
pub fn initialize<G: PieceSource>(generator: &mut G) -> (UpcomingQueue, ReserveStack) {
    let mut queue = UpcomingQueue::new();
    while !queue.is_full() {
        queue.enqueue(generator.next_piece());
    }
    (queue, ReserveStack::new())
}

/// Dispatch a raw driver code. Unknown codes are reported and change nothing.
pub fn perform_action<G: PieceSource>(
    code: i64,
    queue: &mut UpcomingQueue,
    stack: &mut ReserveStack,
    generator: &mut G,
) -> ActionResult {
    match MenuAction::from_code(code) {
        Some(action) => apply(action, queue, stack, generator),
        None => ActionResult::invalid(code),
    }
}

/// Run a decoded action to completion.
pub fn apply<G: PieceSource>(
    action: MenuAction,
    queue: &mut UpcomingQueue,
    stack: &mut ReserveStack,
    generator: &mut G,
) -> ActionResult {
    match action {
        MenuAction::PlayFront => play_front(queue, generator),
        MenuAction::Reserve => reserve(queue, stack, generator),
        MenuAction::UseReserved => use_reserved(stack),
        MenuAction::SwapFrontTop => swap_front_top(queue, stack),
        MenuAction::TripleSwap => triple_swap(queue, stack),
        MenuAction::ShowState => ActionResult::succeeded(action, ActionEvent::Shown),
        MenuAction::Quit => ActionResult::succeeded(action, ActionEvent::Quit),
    }
}

pub fn snapshot(queue: &UpcomingQueue, stack: &ReserveStack) -> Snapshot {
    Snapshot::capture(queue, stack)
}

fn play_front<G: PieceSource>(queue: &mut UpcomingQueue, generator: &mut G) -> ActionResult {
    let action = MenuAction::PlayFront;
    let Some(played) = queue.dequeue() else {
        return ActionResult::failed(action, ActionFailure::NothingToPlay);
    };
    let mut result = ActionResult::succeeded(action, ActionEvent::Played(played));
    refill(queue, generator, &mut result);
    result
}

fn reserve<G: PieceSource>(
    queue: &mut UpcomingQueue,
    stack: &mut ReserveStack,
    generator: &mut G,
) -> ActionResult {
    let action = MenuAction::Reserve;
    if stack.is_full() {
        return ActionResult::failed(action, ActionFailure::StackFull);
    }
    let Some(front) = queue.dequeue() else {
        return ActionResult::failed(action, ActionFailure::NothingToReserve);
    };
    // Cannot fail: fullness was checked above.
    stack.push(front);
    let mut result = ActionResult::succeeded(action, ActionEvent::Reserved(front));
    refill(queue, generator, &mut result);
    result
}

fn use_reserved(stack: &mut ReserveStack) -> ActionResult {
    let action = MenuAction::UseReserved;
    match stack.pop() {
        Some(piece) => ActionResult::succeeded(action, ActionEvent::UsedReserved(piece)),
        None => ActionResult::failed(action, ActionFailure::NothingReserved),
    }
}

fn swap_front_top(queue: &mut UpcomingQueue, stack: &mut ReserveStack) -> ActionResult {
    let action = MenuAction::SwapFrontTop;
    let (front, top) = match (queue.peek_front(), stack.peek_top()) {
        (None, _) => return ActionResult::failed(action, ActionFailure::NoQueueFront),
        (_, None) => return ActionResult::failed(action, ActionFailure::NoStackTop),
        (Some(&front), Some(&top)) => (front, top),
    };
    exchange_front_top(queue, stack);
    ActionResult::succeeded(
        action,
        ActionEvent::SwappedFrontTop {
            front: top,
            top: front,
        },
    )
}

fn triple_swap(queue: &mut UpcomingQueue, stack: &mut ReserveStack) -> ActionResult {
    let action = MenuAction::TripleSwap;
    if !exchange_prefix(queue, stack, TRIPLE_SWAP_DEPTH) {
        return ActionResult::failed(
            action,
            ActionFailure::TripleSwapTooSmall {
                queue_len: queue.len(),
                stack_len: stack.len(),
            },
        );
    }
    ActionResult::succeeded(action, ActionEvent::TripleSwapped)
}

/// Top the queue back up by one piece after a consuming action.
fn refill<G: PieceSource>(queue: &mut UpcomingQueue, generator: &mut G, result: &mut ActionResult) {
    let fresh = generator.next_piece();
    if queue.enqueue(fresh) {
        // At most one refill per action, well within capacity.
        let _ = result.generated.try_push(fresh);
    } else {
        result.warning = Some(ActionWarning::RefillRejected(fresh));
    }
}
