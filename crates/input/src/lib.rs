//! Driver input module.
//!
//! Turns typed lines into menu codes. Numbers pass straight through; action
//! names (`play`, `reserve`, `use`, `swap`, `triple`, `show`, `quit`) map to
//! their codes. Deciding whether a code is valid is left to the engine.

pub mod map;
pub mod reader;

pub use tetris_reserve_types as types;

pub use map::{parse_choice, Choice};
pub use reader::LineInput;
