//! Line-oriented player interaction.

use alloc::collections::VecDeque;
use std::io::{self, BufRead, Write};

use tracing::{trace, warn};

use crate::error::ConsoleError;

/// A source of player input and a sink for table output.
pub trait Console {
    /// Shows `text` and reads one line of input, without its line ending.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Closed`] when no more input is available.
    fn prompt(&mut self, text: &str) -> Result<String, ConsoleError>;

    /// Shows one line of output.
    fn display(&mut self, text: &str);
}

/// Asks `text` until `parse` accepts the answer.
///
/// A rejected answer is reported through [`Console::display`] using the
/// message returned by `parse`, then the question is asked again.
///
/// # Errors
///
/// Returns an error only if the console fails; bad answers never escape.
pub fn prompt_until<C, T, F>(console: &mut C, text: &str, mut parse: F) -> Result<T, ConsoleError>
where
    C: Console + ?Sized,
    F: FnMut(&str) -> Result<T, String>,
{
    loop {
        let answer = console.prompt(text)?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(message) => {
                trace!(%answer, "rejected input");
                console.display(&message);
            }
        }
    }
}

/// A console on the process's stdin and stdout.
#[derive(Debug, Default)]
pub struct Terminal;

impl Terminal {
    /// Creates a terminal console.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Console for Terminal {
    fn prompt(&mut self, text: &str) -> Result<String, ConsoleError> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{text}")?;
        stdout.flush()?;
        drop(stdout);

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(ConsoleError::Closed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }

    fn display(&mut self, text: &str) {
        if let Err(err) = writeln!(io::stdout().lock(), "{text}") {
            warn!(%err, "failed to write to stdout");
        }
    }
}

/// A console that answers from a fixed script and records everything shown.
///
/// Used to drive rounds and menus without a terminal.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    /// Every prompt asked, in order.
    pub prompts: Vec<String>,
    /// Every line displayed, in order.
    pub output: Vec<String>,
}

impl ScriptedConsole {
    /// Creates a console that returns `answers` one per prompt.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            output: Vec::new(),
        }
    }

    /// Returns the number of answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Returns whether any displayed line contains `needle`.
    #[must_use]
    pub fn saw(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn prompt(&mut self, text: &str) -> Result<String, ConsoleError> {
        self.prompts.push(text.to_owned());
        self.answers.pop_front().ok_or(ConsoleError::Closed)
    }

    fn display(&mut self, text: &str) {
        self.output.push(text.to_owned());
    }
}
