//! Whitespace-separated token input

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Reads whitespace-separated tokens from a buffered reader
///
/// Line breaks only separate tokens: a prompt waiting for a token skips blank
/// lines, and several tokens typed on one line answer several prompts.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Drop the tokens left over from the current line
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }
}
