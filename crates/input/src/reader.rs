//! Line-oriented reader over any `BufRead` (stdin in the binary, byte slices
//! in tests).

use std::io::{self, BufRead};

use crate::map::{parse_choice, Choice};

pub struct LineInput<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::with_capacity(64),
        }
    }

    /// Read the next line. `Ok(None)` means end of input.
    pub fn next_choice(&mut self) -> io::Result<Option<Choice>> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        Ok(Some(parse_choice(&self.line)))
    }
}
