//! REPL command implementation

use anyhow::Result;
use lox_runtime::{Lox, Stdout};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

const PROMPT: &str = "lox> ";

/// What the loop should do after a line
#[derive(Debug, PartialEq)]
enum Step {
    Continue,
    Quit,
}

/// Run the interactive REPL
///
/// Every line runs against the same runtime, so variables persist between
/// lines. Errors are reported and the session continues.
pub fn run(no_history: bool, json: bool, config: &crate::config::Config) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut lox = Lox::new();

    // Load history from file (unless disabled)
    let history_path = config.history_path();
    if !no_history {
        if let Some(ref path) = history_path {
            let _ = rl.load_history(path); // Ignore errors if file doesn't exist
        }
    }

    println!("Lox v{} REPL", lox_runtime::VERSION);
    println!("Type statements to run them, or :quit to exit");

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                if eval_line(&mut lox, &line, json) == Step::Quit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C cancels the current line
                println!("^C");
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    // Save history to file (unless disabled)
    if !no_history {
        if let Some(path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.save_history(&path); // Ignore errors
        }
    }

    Ok(())
}

/// Handle one input line: a `:` command or Lox source
fn eval_line(lox: &mut Lox<Stdout>, line: &str, json: bool) -> Step {
    let trimmed = line.trim();

    match trimmed {
        ":quit" | ":q" => return Step::Quit,
        ":reset" => {
            lox.reset();
            println!("REPL state reset");
            return Step::Continue;
        }
        ":help" | ":h" => {
            print_help();
            return Step::Continue;
        }
        ":vars" | ":v" => {
            print_vars(lox);
            return Step::Continue;
        }
        _ => {}
    }

    if let Err(err) = lox.run(line) {
        tracing::debug!(error = %err, "line failed");
        if json {
            eprintln!("{}", super::format_error(&err, "<repl>", line, true));
        } else {
            eprintln!("{}", err);
        }
    }

    Step::Continue
}

/// Print global bindings, sorted by name
fn print_vars(lox: &Lox<Stdout>) {
    let globals = lox.globals();
    let globals = globals.borrow();
    let mut names: Vec<&String> = globals.values().keys().collect();
    names.sort();

    if names.is_empty() {
        println!("No variables defined");
    }
    for name in names {
        if let Some(value) = globals.values().get(name) {
            println!("{} = {}", name, value);
        }
    }
}

/// Print help information
fn print_help() {
    println!("Lox REPL Commands:");
    println!("  :quit, :q         Exit the REPL");
    println!("  :reset            Clear all variables");
    println!("  :vars, :v         List global variables");
    println!("  :help, :h         Show this help message");
    println!();
    println!("Type any Lox statement to run it.");
    println!("Examples:");
    println!("  {}var x = 42;", PROMPT);
    println!("  {}print x * 2;", PROMPT);
}
