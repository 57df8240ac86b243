//! AST command - print the parsed program

use anyhow::{Context, Result};
use lox_runtime::parse_program;
use lox_runtime::printer::print_stmt;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

/// Parse a file and print one S-expression per top-level statement
pub fn run(file_path: &Path, json: bool) -> Result<ExitCode> {
    let source = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read source file: {}", file_path.display()))?;

    match parse_program(&source) {
        Ok(program) => {
            for stmt in &program {
                println!("{}", print_stmt(stmt));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let file = file_path.display().to_string();
            eprintln!("{}", super::format_error(&err, &file, &source, json));
            Ok(ExitCode::from(crate::EXIT_SCRIPT_ERROR))
        }
    }
}
