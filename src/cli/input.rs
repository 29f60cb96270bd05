//! Whitespace-delimited token reader over a buffered input.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Yields whitespace-separated tokens from `reader`, crossing line
/// boundaries as needed.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// failing the read.
///
/// # Example
///
/// ```
/// use payroll_engine::cli::TokenReader;
///
/// let mut tokens = TokenReader::new("3 Alice\n0 12\n".as_bytes());
/// assert_eq!(tokens.next_token().unwrap().as_deref(), Some("3"));
/// assert_eq!(tokens.next_token().unwrap().as_deref(), Some("Alice"));
/// assert_eq!(tokens.next_token().unwrap().as_deref(), Some("0"));
/// ```
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_owned),
            );
        }
    }

    /// Drops any tokens left over from the current line.
    pub fn discard_pending(&mut self) {
        self.pending.clear();
    }
}
