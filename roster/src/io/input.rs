//! Line sources that feed commands and prompts.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Where the next line of input comes from.
///
/// The interactive variant wraps the session's reader (normally stdin). The
/// script variant holds the data lines of one `execute_script` invocation and
/// lives only for the duration of that invocation.
pub enum InputSource {
    Interactive(Box<dyn BufRead>),
    Script(VecDeque<String>),
}

impl InputSource {
    pub fn interactive(reader: impl BufRead + 'static) -> Self {
        Self::Interactive(Box::new(reader))
    }

    pub fn stdin() -> Self {
        Self::interactive(io::stdin().lock())
    }

    pub fn script(lines: impl IntoIterator<Item = String>) -> Self {
        Self::Script(lines.into_iter().collect())
    }

    pub fn is_script(&self) -> bool {
        matches!(self, Self::Script(_))
    }

    /// Next line without its terminator, or `None` at end of input.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        match self {
            Self::Interactive(reader) => {
                let mut buf = Vec::new();
                if reader.read_until(b'\n', &mut buf)? == 0 {
                    return Ok(None);
                }
                // Invalid UTF-8 is replaced with U+FFFD.
                let mut line = String::from_utf8_lossy(&buf).into_owned();
                let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed_len);
                Ok(Some(line))
            }
            Self::Script(lines) => Ok(lines.pop_front()),
        }
    }

    /// Drop up to `n` buffered script lines; returns how many were dropped.
    /// Interactive sources are left untouched.
    pub fn skip(&mut self, n: usize) -> usize {
        match self {
            Self::Interactive(_) => 0,
            Self::Script(lines) => {
                let n = n.min(lines.len());
                lines.drain(..n);
                n
            }
        }
    }

    /// Lines still buffered (always 0 for interactive sources).
    pub fn remaining(&self) -> usize {
        match self {
            Self::Interactive(_) => 0,
            Self::Script(lines) => lines.len(),
        }
    }
}
