use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod config;

/// Exit status for bad command-line usage
const EXIT_USAGE: u8 = 64;
/// Exit status when a script fails to scan, parse or run
const EXIT_SCRIPT_ERROR: u8 = 65;

/// Lox scripting language interpreter.
///
/// Runs a script file, or starts an interactive REPL when no script is given.
///
/// EXAMPLES:
///     lox                    Start the REPL
///     lox hello.lox          Run a script
///     lox --ast hello.lox    Print the parsed program
///
/// ENVIRONMENT VARIABLES:
///     LOX_DIAGNOSTICS   Set to 'json' for JSON diagnostics by default
///     LOX_HISTORY_FILE  REPL history file (default ~/.lox/history)
///     LOX_NO_HISTORY    Set (to anything but 0/false/no/off) to disable REPL history
///     LOX_LOG           Tracing filter, e.g. 'lox_runtime=debug'
#[derive(Parser)]
#[command(name = "lox")]
#[command(version)]
struct Cli {
    /// Script to run
    #[arg(value_name = "script")]
    script: Vec<PathBuf>,
    /// Print the parsed program instead of running it
    #[arg(long, requires = "script")]
    ast: bool,
    /// Output diagnostics in JSON format
    #[arg(long)]
    json: bool,
    /// Disable REPL history persistence
    #[arg(long, env = "LOX_NO_HISTORY")]
    no_history: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let cli_config = config::Config::from_env();
    init_tracing(cli_config.log_filter.as_deref());

    // Command-line flag overrides environment variable
    let use_json = cli.json || cli_config.default_json;

    let result = match cli.script.as_slice() {
        [] => commands::repl::run(cli.no_history, use_json, &cli_config)
            .map(|()| ExitCode::SUCCESS),
        [script] if cli.ast => commands::ast::run(script, use_json),
        [script] => commands::run::run(script, use_json),
        _ => {
            println!("Usage: lox [script]");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Install a stderr tracing subscriber when `LOX_LOG` is set
fn init_tracing(filter: Option<&str>) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let Some(filter) = filter else {
        return;
    };

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .try_init();
}
