use std::{cell::RefCell, io::Write, rc::Rc};

/// The output side of an interpreter session.
///
/// Results and diagnostics are written one line at a time. `clear` backs the
/// `cls` command, so the interpreter core never shells out to clear the
/// screen itself.
pub trait Terminal {
    /// Writes one line of normal output, such as a printed result.
    fn write_line(&mut self, line: &str);

    /// Writes one diagnostic line. Diagnostics share the output stream unless
    /// an implementation routes them elsewhere.
    fn diagnostic(&mut self, line: &str) {
        self.write_line(line);
    }

    /// Clears the screen.
    fn clear(&mut self);
}

/// A terminal backed by the process's standard output.
///
/// Clearing uses ANSI escape sequences, which every modern terminal
/// emulator (including Windows Terminal) understands.
#[derive(Debug, Default)]
pub struct StdTerminal;

impl Terminal for StdTerminal {
    fn write_line(&mut self, line: &str) {
        println!("{line}");
    }

    fn clear(&mut self) {
        let mut stdout = std::io::stdout();
        // A failed clear is cosmetic; the session carries on.
        if let Err(error) = stdout.write_all(b"\x1b[2J\x1b[1;1H")
                                  .and_then(|()| stdout.flush())
        {
            tracing::debug!(%error, "failed to clear the terminal");
        }
    }
}

/// A terminal that records everything written to it.
///
/// Clones share the same buffer, so a test can keep one handle while the
/// session owns another.
///
/// # Example
/// ```
/// use reckon::interpreter::terminal::{BufferTerminal, Terminal};
///
/// let buffer = BufferTerminal::default();
/// let mut handle = buffer.clone();
///
/// handle.write_line("7");
/// handle.clear();
///
/// assert_eq!(buffer.lines(), vec!["7".to_string()]);
/// assert_eq!(buffer.clear_count(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct BufferTerminal {
    lines:  Rc<RefCell<Vec<String>>>,
    clears: Rc<RefCell<usize>>,
}

impl BufferTerminal {
    /// Returns a copy of every line written so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Removes and returns every line written so far.
    #[must_use]
    pub fn take_lines(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.borrow_mut())
    }

    /// Returns how many times the screen was cleared.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        *self.clears.borrow()
    }
}

impl Terminal for BufferTerminal {
    fn write_line(&mut self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }

    fn clear(&mut self) {
        *self.clears.borrow_mut() += 1;
    }
}
