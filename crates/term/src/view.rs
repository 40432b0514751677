//! StateView: maps snapshots and action results into display text.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write;

use crossterm::style::{Color, Stylize};

use crate::core::Snapshot;
use crate::engine::ActionResult;
use crate::types::{Piece, Shape};

const EMPTY: &str = "(empty)";

/// Text renderer for the two containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StateView {
    color: bool,
}

impl StateView {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    /// `[I 0]`, tinted by shape when colour is on.
    pub fn piece(&self, piece: Piece) -> String {
        let text = piece.to_string();
        if self.color {
            text.with(shape_color(piece.shape)).bold().to_string()
        } else {
            text
        }
    }

    fn pieces<'a>(&self, pieces: impl Iterator<Item = &'a Piece>, out: &mut String) {
        let mut any = false;
        for piece in pieces {
            if any {
                out.push(' ');
            }
            out.push_str(&self.piece(*piece));
            any = true;
        }
        if !any {
            out.push_str(EMPTY);
        }
    }

    /// Queue front→back, then stack top→base.
    pub fn render_snapshot(&self, snap: &Snapshot, out: &mut String) {
        out.push_str("\nCurrent state:\n\n");
        out.push_str("Piece queue\t");
        self.pieces(snap.queue.iter(), out);
        out.push('\n');
        out.push_str("Reserve stack\t(top -> base): ");
        self.pieces(snap.stack.iter(), out);
        out.push('\n');
    }

    /// Headline, one line per refill, then any warning.
    pub fn render_result(&self, result: &ActionResult, out: &mut String) {
        let _ = writeln!(out, "{}", result.message());
        for piece in &result.generated {
            let _ = writeln!(out, "Auto refill: {}", self.piece(*piece));
        }
        if let Some(warning) = result.warning {
            let line = warning.to_string();
            if self.color {
                let _ = writeln!(out, "{}", line.yellow());
            } else {
                let _ = writeln!(out, "{}", line);
            }
        }
    }
}

fn shape_color(shape: Shape) -> Color {
    match shape {
        Shape::I => Color::Rgb { r: 80, g: 220, b: 220 },
        Shape::O => Color::Rgb { r: 240, g: 220, b: 80 },
        Shape::T => Color::Rgb { r: 200, g: 120, b: 220 },
        Shape::L => Color::Rgb { r: 255, g: 165, b: 0 },
    }
}
