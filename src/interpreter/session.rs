use crate::interpreter::{
    evaluator::core::Context,
    lexer::{Token, tokenize},
    parser::{core::Interrupt, statement::parse_statement},
    terminal::Terminal,
    value::core::Value,
};

/// What a single line did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A bare expression was evaluated and its value printed.
    Printed(Value),
    /// A value was stored under the given name.
    Stored(String),
    /// Nothing was printed or stored: a blank line, a unit result, or a line
    /// abandoned with a syntax error.
    Silent,
    /// `quit` ran; no further lines should be read.
    Quit,
}

/// One interpreter session: an evaluation context plus a running line count.
///
/// Lines are evaluated one at a time and fully, and variables persist from
/// one line to the next. Sessions are independent of one another.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     session::{Outcome, Session},
///     terminal::BufferTerminal,
///     value::core::Value,
/// };
///
/// let out = BufferTerminal::default();
/// let mut session = Session::new(Box::new(out.clone()));
///
/// assert_eq!(session.run_line("x = 10"), Outcome::Stored("x".to_string()));
/// assert_eq!(session.run_line("x + 5"), Outcome::Printed(Value::Integer(15)));
/// assert_eq!(out.lines(), vec!["15".to_string()]);
/// ```
pub struct Session {
    context:   Context,
    next_line: usize,
}

impl Session {
    /// Starts a session with an empty environment that writes to `terminal`.
    #[must_use]
    pub fn new(terminal: Box<dyn Terminal>) -> Self {
        Self { context:   Context::new(terminal),
               next_line: 1, }
    }

    /// Replaces the version string reported by `info`.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.context = self.context.with_version(version);
        self
    }

    /// The evaluation context, including the environment.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Tokenizes, parses and evaluates one line of input.
    ///
    /// Lexical errors are reported and skipped, and a syntax error abandons
    /// the rest of the line. Neither affects later lines. A line that
    /// contains newlines is still read as a single statement; its line count
    /// advances the session's counter.
    pub fn run_line(&mut self, source: &str) -> Outcome {
        let first_line = self.next_line;
        self.next_line += 1 + source.matches('\n').count();

        let tokens = self.collect_tokens(source, first_line);
        self.context.last_line = tokens.last().map_or(first_line, |(_, line)| *line);

        tracing::debug!(line = first_line, tokens = tokens.len(), "statement");

        let mut iter = tokens.iter().peekable();
        match parse_statement(&mut iter, &mut self.context) {
            Ok(outcome) => outcome,
            Err(Interrupt::Quit) => Outcome::Quit,
            Err(Interrupt::Syntax(error)) => {
                tracing::debug!(%error, "statement abandoned");
                self.context.report(&error);
                Outcome::Silent
            },
        }
    }

    /// Runs every line of `source` in order.
    ///
    /// Stops early if a line quits. Returns the outcome of the last line run,
    /// or `Outcome::Silent` for empty input.
    pub fn run_script(&mut self, source: &str) -> Outcome {
        let mut last = Outcome::Silent;
        for line in source.lines() {
            last = self.run_line(line);
            if last == Outcome::Quit {
                break;
            }
        }
        last
    }

    /// Tokenizes a line, reporting each lexical error as it is found.
    fn collect_tokens(&mut self, source: &str, first_line: usize) -> Vec<(Token, usize)> {
        let mut tokens = Vec::new();
        for item in tokenize(source, first_line) {
            match item {
                Ok(token) => tokens.push(token),
                Err(error) => {
                    tracing::debug!(%error, "skipped illegal character");
                    self.context.report(&error);
                },
            }
        }
        tokens
    }
}
