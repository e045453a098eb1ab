//! Validated console input.
//!
//! [`Prompter`] writes a prompt, reads one line and re-prompts until the line
//! is acceptable. Malformed input (an empty name, a non-integer, an index past
//! the end of a menu) is handled here and never reaches the caller. Failures of
//! the stream itself are returned as [`PromptError`] and are never retried.

use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Input-stream failures.
///
/// Once one of these is returned no further interaction is possible; callers
/// abandon the current prompt chain.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Input reached end of stream.
    #[error("input stream closed")]
    Closed,

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A selection did not map back to a known menu entry.
    #[error("unknown menu selection: {0}")]
    UnknownSelection(String),
}

/// Console prompter over an input and an output stream.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompter, returning its streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write `message` followed by a newline.
    pub fn say(&mut self, message: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Read a non-empty line.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.read_line_with(prompt, true)
    }

    /// Read one line, without its line terminator.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
    /// failing the read. When `require_non_empty` is set, blank or
    /// whitespace-only lines are rejected and the prompt is repeated.
    pub fn read_line_with(
        &mut self,
        prompt: &str,
        require_non_empty: bool,
    ) -> Result<String, PromptError> {
        loop {
            write!(self.output, "{prompt} ")?;
            self.output.flush()?;

            let mut raw = Vec::new();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                return Err(PromptError::Closed);
            }
            let decoded = String::from_utf8_lossy(&raw);
            let line = decoded.trim_end_matches(['\n', '\r']);

            if !require_non_empty || !line.trim().is_empty() {
                return Ok(line.to_string());
            }
            self.say("Please enter a valid string.")?;
        }
    }

    /// Read a positive, non-zero integer.
    pub fn read_int(&mut self, prompt: &str) -> Result<i64, PromptError> {
        self.read_int_with(prompt, true, true)
    }

    /// Read an integer, re-prompting until it parses and meets the sign
    /// constraints.
    ///
    /// `require_positive` rejects negative values and `require_non_zero`
    /// rejects zero.
    pub fn read_int_with(
        &mut self,
        prompt: &str,
        require_positive: bool,
        require_non_zero: bool,
    ) -> Result<i64, PromptError> {
        loop {
            let line = self.read_line(prompt)?;

            let Ok(value) = line.trim().parse::<i64>() else {
                self.say("\nYou must enter a valid integer.")?;
                continue;
            };

            if (require_positive && value < 0) || (require_non_zero && value == 0) {
                let requirement = requirement(require_positive, require_non_zero);
                self.say(&format!("\nYou must enter a {requirement}."))?;
                continue;
            }

            return Ok(value);
        }
    }

    /// Present `options` as a numbered list and return the one selected.
    ///
    /// Selection is by 1-based index only. The returned string is always one
    /// of `options`. With no options every index is rejected, so this only
    /// returns once the stream fails.
    pub fn read_selection<S: AsRef<str>>(
        &mut self,
        prompt: &str,
        options: &[S],
    ) -> Result<String, PromptError> {
        let mut menu = String::from(prompt);
        for (index, option) in options.iter().enumerate() {
            menu.push_str(&format!("\n{}. {}", index + 1, option.as_ref().to_lowercase()));
        }
        menu.push_str("\n> ");

        loop {
            let index = self.read_int(&menu)? - 1;

            match usize::try_from(index).ok().and_then(|i| options.get(i)) {
                Some(option) => return Ok(option.as_ref().to_string()),
                None => self.say("\nPlease enter a valid selection index.")?,
            }
        }
    }
}

/// Description of the integer constraints that were violated.
fn requirement(require_positive: bool, require_non_zero: bool) -> &'static str {
    match (require_positive, require_non_zero) {
        (true, true) => "non-zero integer that is positive",
        (false, true) => "non-zero integer",
        (true, false) => "positive integer",
        (false, false) => "integer",
    }
}
