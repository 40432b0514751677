//! Terminal text module.
//!
//! Renders the piece containers, action results and the menu as plain text,
//! optionally tinted with ANSI colours through crossterm. Rendering is split
//! from output:
//! - [`view`] and [`menu`] build strings and do no I/O
//! - [`renderer`] writes those strings to stdout (or any writer)

pub mod menu;
pub mod renderer;
pub mod view;

pub use tetris_reserve_core as core;
pub use tetris_reserve_engine as engine;
pub use tetris_reserve_types as types;

pub use menu::{label, render_menu, BANNER, PROMPT};
pub use renderer::{stdout_is_terminal, TextRenderer};
pub use view::StateView;
