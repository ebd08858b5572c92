use std::fmt::Display;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::environment::Environment, terminal::Terminal, value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The version string printed by `info`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state that outlives a single line: the
/// variable environment, the version string reported by `info`, and the
/// terminal that receives results and diagnostics.
///
/// ## Usage
///
/// `Context` is created once per session and handed to the parser for every
/// line. Grammar actions call back into it to look up names, store values and
/// report soft errors.
pub struct Context {
    /// Variables assigned so far in this session.
    pub environment: Environment,
    /// Reported by the `info` command.
    pub version:     String,
    /// Line of the last token in the statement being evaluated; names the
    /// line in end-of-input diagnostics.
    pub last_line:   usize,
    terminal:        Box<dyn Terminal>,
}

impl Context {
    /// Creates a new evaluation context with an empty environment that writes
    /// to `terminal`.
    #[must_use]
    pub fn new(terminal: Box<dyn Terminal>) -> Self {
        Self { environment: Environment::default(),
               version: VERSION.to_string(),
               last_line: 1,
               terminal }
    }

    /// Replaces the version string reported by `info`.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Gives access to the terminal, for commands with direct effects.
    pub fn terminal_mut(&mut self) -> &mut dyn Terminal {
        self.terminal.as_mut()
    }

    /// Prints one line of normal output.
    pub fn print(&mut self, line: &str) {
        self.terminal.write_line(line);
    }

    /// Prints one diagnostic line.
    pub fn report(&mut self, diagnostic: &impl Display) {
        self.terminal.diagnostic(&diagnostic.to_string());
    }

    /// Resolves a soft error to the fallback value.
    ///
    /// An `Ok` value passes through untouched. An error is printed as a
    /// diagnostic and replaced by [`Value::FALLBACK`], so the enclosing
    /// statement can finish.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Context, terminal::BufferTerminal, value::core::Value},
    /// };
    ///
    /// let out = BufferTerminal::default();
    /// let mut context = Context::new(Box::new(out.clone()));
    ///
    /// let value = context.recover(Err(RuntimeError::DivisionByZero { line: 1 }));
    ///
    /// assert_eq!(value, Value::Integer(0));
    /// assert_eq!(out.lines(), vec!["ERR: Division by zero attempted.".to_string()]);
    /// ```
    pub fn recover(&mut self, result: EvalResult<Value>) -> Value {
        result.unwrap_or_else(|error| {
                  tracing::debug!(line = error.line(), %error, "recovered with fallback value");
                  self.report(&error);
                  Value::FALLBACK
              })
    }

    /// Looks up a variable by name.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedName` if the name was never assigned.
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.environment
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedName { name: name.to_string(),
                                                         line })
    }

    /// Stores `value` under `name`, replacing any earlier value.
    pub fn assign(&mut self, name: &str, value: Value) {
        tracing::debug!(name, %value, kind = value.kind(), "assign");
        self.environment.assign(name, value);
    }
}
