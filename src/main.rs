use std::fs;

use clap::Parser;
use reckon::{
    interpreter::{
        session::{Outcome, Session},
        terminal::StdTerminal,
    },
    util::logging::init_tracing,
};
use rustyline::{DefaultEditor, error::ReadlineError};

/// reckon is an interactive calculator with variables, strings and
/// comparisons.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells reckon to read a script file instead of an expression.
    #[arg(short, long)]
    file: bool,

    /// The prompt shown by the interactive loop.
    #[arg(long, default_value = "calc > ")]
    prompt: String,

    /// An expression to evaluate, or a script path with `--file`. Starts the
    /// interactive loop when omitted.
    contents: Option<String>,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let mut session = Session::new(Box::new(StdTerminal));

    let Some(contents) = args.contents else {
        repl(&mut session, &args.prompt);
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    if session.run_script(&script) == Outcome::Quit {
        std::process::exit(0);
    }
}

/// Reads and evaluates lines until end of input or `quit`.
fn repl(session: &mut Session, prompt: &str) {
    let mut editor = DefaultEditor::new().unwrap_or_else(|e| {
                                             eprintln!("Failed to open the terminal: {e}");
                                             std::process::exit(1);
                                         });

    loop {
        let line = match editor.readline(prompt) {
            Ok(line) => line,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                break;
            },
        };

        if line.trim().is_empty() {
            continue;
        }
        if let Err(e) = editor.add_history_entry(line.as_str()) {
            tracing::debug!(error = %e, "history not updated");
        }

        if session.run_line(&line) == Outcome::Quit {
            std::process::exit(0);
        }
    }
}
