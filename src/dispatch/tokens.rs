/*!
 * Token Stream
 * Whitespace-separated tokens read line by line
 */

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Whitespace-separated tokens from a buffered reader
///
/// Tokens may be spread over any number of lines; a command does not have
/// to end at a newline. Lines are only read when the buffered tokens run
/// out, so interactive input is processed as soon as it is typed. Bytes
/// that are not valid UTF-8 are replaced rather than rejected, so a stray
/// byte in a program name does not end the session.
#[derive(Debug)]
pub struct Tokens<R> {
    reader: R,
    line: Vec<u8>,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&self.line)
                    .split_whitespace()
                    .map(str::to_owned),
            );
        }
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(input: impl AsRef<[u8]>) -> Vec<String> {
        Tokens::new(Cursor::new(input.as_ref().to_vec()))
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_splits_on_any_whitespace() {
        assert_eq!(
            collect("+ 1 prog\t2\n\n  3 4\r\n#"),
            vec!["+", "1", "prog", "2", "3", "4", "#"]
        );
    }

    #[test]
    fn test_invalid_utf8_replaced() {
        assert_eq!(
            collect(b"+ 2 caf\xE9 0\n? 1\n"),
            vec!["+", "2", "caf\u{FFFD}", "0", "?", "1"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(collect("").is_empty());
        assert!(collect("   \n\n").is_empty());
    }
}
