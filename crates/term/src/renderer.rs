//! TextRenderer: flushes rendered text to a terminal (or any writer).

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{style::Print, tty::IsTty, QueueableCommand};

pub struct TextRenderer<W: Write> {
    out: W,
}

impl TextRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write `text` and flush, so prompts show up before we block on input.
    pub fn write(&mut self, text: &str) -> Result<()> {
        self.out.queue(Print(text))?;
        self.out.flush()?;
        Ok(())
    }

    pub fn write_line(&mut self, text: &str) -> Result<()> {
        self.out.queue(Print(text))?;
        self.out.queue(Print("\n"))?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Colour only makes sense when stdout is an actual terminal.
pub fn stdout_is_terminal() -> bool {
    io::stdout().is_tty()
}
