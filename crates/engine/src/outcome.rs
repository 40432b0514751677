//! Action outcomes reported back to the driver.
//!
//! Failures are expected, named conditions rather than errors: every one of
//! them guarantees that neither container was touched.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{MenuAction, Piece, QUEUE_CAPACITY, TRIPLE_SWAP_DEPTH};

/// What a successful action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionEvent {
    Played(Piece),
    Reserved(Piece),
    UsedReserved(Piece),
    /// Pieces now at the queue front and the stack top.
    SwappedFrontTop { front: Piece, top: Piece },
    TripleSwapped,
    Shown,
    Quit,
}

impl fmt::Display for ActionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionEvent::Played(p) => write!(f, "Played: {}", p),
            ActionEvent::Reserved(p) => write!(f, "Reserved on top: {}", p),
            ActionEvent::UsedReserved(p) => write!(f, "Used (removed from stack): {}", p),
            ActionEvent::SwappedFrontTop { .. } => {
                write!(f, "Swapped the queue front with the stack top.")
            }
            ActionEvent::TripleSwapped => write!(
                f,
                "Swapped the first {n} queue pieces with the top {n} stack pieces.",
                n = TRIPLE_SWAP_DEPTH
            ),
            ActionEvent::Shown => write!(f, "Current state."),
            ActionEvent::Quit => write!(f, "Quitting. Thanks for playing!"),
        }
    }
}

/// Why an action was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionFailure {
    /// Play with an empty queue
    NothingToPlay,
    /// Reserve with a full stack (checked before the queue)
    StackFull,
    /// Reserve with an empty queue
    NothingToReserve,
    /// Use-reserved with an empty stack
    NothingReserved,
    /// Swap with an empty queue
    NoQueueFront,
    /// Swap with an empty stack
    NoStackTop,
    TripleSwapTooSmall { queue_len: usize, stack_len: usize },
    InvalidCode(i64),
    /// Driver input that is neither a number nor an action name
    UnrecognizedInput(String),
}

impl fmt::Display for ActionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionFailure::NothingToPlay => write!(f, "Queue empty. Nothing to play."),
            ActionFailure::StackFull => write!(f, "Stack full. Cannot reserve."),
            ActionFailure::NothingToReserve => write!(f, "Queue empty. Cannot reserve."),
            ActionFailure::NothingReserved => {
                write!(f, "Stack empty. Nothing reserved to use.")
            }
            ActionFailure::NoQueueFront => write!(f, "Queue empty. No front piece to swap."),
            ActionFailure::NoStackTop => write!(f, "Stack empty. No top piece to swap."),
            ActionFailure::TripleSwapTooSmall {
                queue_len,
                stack_len,
            } => write!(
                f,
                "Invalid operation: triple swap needs at least {n} pieces in the queue and {n} on the stack (queue has {q}, stack has {s}).",
                n = TRIPLE_SWAP_DEPTH,
                q = queue_len,
                s = stack_len
            ),
            ActionFailure::InvalidCode(code) => write!(f, "Invalid option: {}.", code),
            ActionFailure::UnrecognizedInput(text) => write!(f, "Invalid option: {}.", text),
        }
    }
}

impl std::error::Error for ActionFailure {}

/// Non-fatal anomaly observed while completing a successful action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionWarning {
    /// The replacement piece did not fit into the queue and was dropped.
    RefillRejected(Piece),
}

impl fmt::Display for ActionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionWarning::RefillRejected(p) => write!(
                f,
                "Warning: queue full, could not auto-refill (dropped {}).",
                p
            ),
        }
    }
}

/// Full report for one driver request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    /// Code as received from the driver.
    pub code: i64,
    /// `None` when the code is not a known action.
    pub action: Option<MenuAction>,
    pub outcome: Result<ActionEvent, ActionFailure>,
    /// Pieces generated and enqueued while completing the action.
    pub generated: ArrayVec<Piece, QUEUE_CAPACITY>,
    pub warning: Option<ActionWarning>,
}

impl ActionResult {
    pub fn succeeded(action: MenuAction, event: ActionEvent) -> Self {
        Self {
            code: action.code(),
            action: Some(action),
            outcome: Ok(event),
            generated: ArrayVec::new(),
            warning: None,
        }
    }

    pub fn failed(action: MenuAction, failure: ActionFailure) -> Self {
        Self {
            code: action.code(),
            action: Some(action),
            outcome: Err(failure),
            generated: ArrayVec::new(),
            warning: None,
        }
    }

    pub fn invalid(code: i64) -> Self {
        Self {
            code,
            action: None,
            outcome: Err(ActionFailure::InvalidCode(code)),
            generated: ArrayVec::new(),
            warning: None,
        }
    }

    /// Input the driver could not map to any code. Reported under code `-1`.
    pub fn unrecognized(input: &str) -> Self {
        Self {
            code: -1,
            action: None,
            outcome: Err(ActionFailure::UnrecognizedInput(input.to_string())),
            generated: ArrayVec::new(),
            warning: None,
        }
    }

    pub fn success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// True when the driver should stop issuing actions.
    pub fn is_quit(&self) -> bool {
        matches!(self.outcome, Ok(ActionEvent::Quit))
    }

    pub fn failure(&self) -> Option<ActionFailure> {
        self.outcome.as_ref().err().cloned()
    }

    /// Headline message (event or failure), without refill lines.
    pub fn message(&self) -> String {
        match &self.outcome {
            Ok(event) => event.to_string(),
            Err(failure) => failure.to_string(),
        }
    }
}
