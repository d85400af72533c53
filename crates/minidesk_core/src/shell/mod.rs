//! Blocking text menus over line-oriented input/output.
//!
//! # Responsibility
//! - Drive the library and task services from numbered menus.
//! - Keep prompt/read plumbing shared between both shells.
//!
//! # Invariants
//! - Shells are generic over `BufRead`/`Write`; nothing touches process stdio.
//! - End of input stops a shell cleanly, as if exit was chosen.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};

pub mod library_shell;
pub mod task_shell;

pub use library_shell::LibraryShell;
pub use task_shell::TaskShell;

pub type ShellResult<T> = Result<T, ShellError>;

/// Failures that stop a shell loop.
#[derive(Debug)]
pub enum ShellError {
    /// Reading input or writing output failed.
    Io(io::Error),
    /// A numeric prompt received text that is not an integer.
    InvalidNumber(String),
}

impl ShellError {
    /// Stable tag for log events; never carries input text.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::InvalidNumber(_) => "invalid_number",
        }
    }
}

impl Display for ShellError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "console i/o failed: {err}"),
            Self::InvalidNumber(value) => write!(f, "expected a number, got `{value}`"),
        }
    }
}

impl Error for ShellError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InvalidNumber(_) => None,
        }
    }
}

impl From<io::Error> for ShellError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Loop control returned by each menu handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Continue,
    Quit,
}

/// Prompt/read helper shared by the shells.
pub(crate) struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub(crate) fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    pub(crate) fn say(&mut self, line: impl Display) -> ShellResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Prints `prompt` and reads one line without its terminator.
    ///
    /// Returns `None` at end of input.
    pub(crate) fn ask(&mut self, prompt: &str) -> ShellResult<Option<String>> {
        self.say(prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Reads an integer, re-prompting until the input parses.
    pub(crate) fn ask_number_retrying(&mut self, prompt: &str) -> ShellResult<Option<i64>> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse::<i64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say("Invalid input. Please enter a number.")?,
            }
        }
    }

    /// Reads an integer, failing on the first non-numeric line.
    pub(crate) fn ask_number_strict(&mut self, prompt: &str) -> ShellResult<Option<i64>> {
        let Some(line) = self.ask(prompt)? else {
            return Ok(None);
        };
        line.trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ShellError::InvalidNumber(line))
    }
}

#[cfg(test)]
mod tests {
    use super::{Console, ShellError};
    use std::io::Cursor;

    #[test]
    fn ask_strips_line_endings_and_reports_eof() {
        let mut console = Console::new(Cursor::new("hello\r\n"), Vec::new());
        assert_eq!(console.ask("?").unwrap().as_deref(), Some("hello"));
        assert_eq!(console.ask("?").unwrap(), None);
    }

    #[test]
    fn retrying_number_skips_garbage() {
        let mut console = Console::new(Cursor::new("abc\n 42 \n"), Vec::new());
        assert_eq!(console.ask_number_retrying("n").unwrap(), Some(42));

        let (_, output) = console.into_parts();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Invalid input. Please enter a number."));
    }

    #[test]
    fn strict_number_rejects_garbage() {
        let mut console = Console::new(Cursor::new("abc\n"), Vec::new());
        let err = console.ask_number_strict("n").unwrap_err();
        assert_eq!(err.kind(), "invalid_number");
        assert!(matches!(err, ShellError::InvalidNumber(value) if value == "abc"));
    }
}
