use std::ops::ControlFlow;

use crate::interpreter::{evaluator::core::Context, lexer::Keyword, value::core::Value};

/// Printed by `quit` before the session ends.
pub const FAREWELL: &str = "Good-Bye.";

impl Context {
    /// Runs a built-in command.
    ///
    /// - `cls` clears the terminal.
    /// - `info` prints `Version <version>`.
    /// - `quit` prints the farewell and breaks out of the session.
    ///
    /// `cls` and `info` continue with [`Value::Unit`]; `quit` returns
    /// `ControlFlow::Break`, which ends the statement and the session.
    ///
    /// # Example
    /// ```
    /// use std::ops::ControlFlow;
    ///
    /// use reckon::interpreter::{
    ///     evaluator::core::Context, lexer::Keyword, terminal::BufferTerminal, value::core::Value,
    /// };
    ///
    /// let out = BufferTerminal::default();
    /// let mut context = Context::new(Box::new(out.clone())).with_version("0.4");
    ///
    /// assert_eq!(context.eval_keyword(Keyword::Info), ControlFlow::Continue(Value::Unit));
    /// assert_eq!(context.eval_keyword(Keyword::Quit), ControlFlow::Break(()));
    /// assert_eq!(out.lines(), vec!["Version 0.4".to_string(), "Good-Bye.".to_string()]);
    /// ```
    pub fn eval_keyword(&mut self, keyword: Keyword) -> ControlFlow<(), Value> {
        tracing::debug!(command = keyword.spelling(), "built-in");
        match keyword {
            Keyword::Cls => {
                self.terminal_mut().clear();
                ControlFlow::Continue(Value::Unit)
            },
            Keyword::Info => {
                let banner = format!("Version {}", self.version);
                self.print(&banner);
                ControlFlow::Continue(Value::Unit)
            },
            Keyword::Quit => {
                self.print(FAREWELL);
                ControlFlow::Break(())
            },
        }
    }
}
