//! Tetris reserve (workspace facade crate).
//!
//! Re-exports the member crates under stable module names:
//! `tetris_reserve::{core,engine,input,term,adapter,types}`. The implementation
//! lives in dedicated crates under `crates/`.

pub use tetris_reserve_adapter as adapter;
pub use tetris_reserve_core as core;
pub use tetris_reserve_engine as engine;
pub use tetris_reserve_input as input;
pub use tetris_reserve_term as term;
pub use tetris_reserve_types as types;
