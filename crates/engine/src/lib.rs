//! Action engine - the rules that move pieces between queue and stack
//!
//! The engine applies one menu action at a time to an [`UpcomingQueue`] and a
//! [`ReserveStack`], drawing replacement pieces from a [`PieceSource`]. Every
//! call completes fully (including queue refills) before it returns, and any
//! refused action leaves both containers untouched.
//!
//! | Code | Action | Refills queue |
//! |------|--------|---------------|
//! | 1 | play front | yes |
//! | 2 | reserve front onto stack | yes |
//! | 3 | use reserved (pop stack) | no |
//! | 4 | swap queue front with stack top | no |
//! | 5 | triple swap (front 3 ↔ top 3) | no |
//! | 6 | show state | no |
//! | 0 | quit | no |
//!
//! # Example
//!
//! ```
//! use tetris_reserve_engine::{ActionEvent, PieceManager};
//! use tetris_reserve_engine::core::ScriptedGenerator;
//! use tetris_reserve_engine::types::{Piece, Shape};
//!
//! let script = [Shape::I, Shape::O, Shape::T, Shape::L, Shape::I];
//! let mut mgr = PieceManager::new(ScriptedGenerator::new(&script));
//! let result = mgr.perform(1);
//! assert_eq!(result.outcome, Ok(ActionEvent::Played(Piece::new(Shape::I, 0))));
//! assert_eq!(mgr.queue().len(), 5);
//! ```
//!
//! [`UpcomingQueue`]: crate::core::UpcomingQueue
//! [`ReserveStack`]: crate::core::ReserveStack
//! [`PieceSource`]: crate::core::PieceSource

pub mod actions;
pub mod manager;
pub mod outcome;

pub use tetris_reserve_core as core;
pub use tetris_reserve_types as types;

pub use actions::{apply, initialize, perform_action, snapshot};
pub use manager::PieceManager;
pub use outcome::{ActionEvent, ActionFailure, ActionResult, ActionWarning};
