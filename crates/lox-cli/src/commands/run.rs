//! Run command - execute Lox source files

use anyhow::{Context, Result};
use lox_runtime::Lox;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

/// Run a Lox source file once
///
/// Any lexical, syntax or runtime error is reported on stderr and turned
/// into exit status 65.
pub fn run(file_path: &Path, json: bool) -> Result<ExitCode> {
    let source = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read source file: {}", file_path.display()))?;

    tracing::debug!(file = %file_path.display(), bytes = source.len(), "running script");

    let mut lox = Lox::new();
    match lox.run(&source) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            let file = file_path.display().to_string();
            eprintln!("{}", super::format_error(&err, &file, &source, json));
            Ok(ExitCode::from(crate::EXIT_SCRIPT_ERROR))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_run_simple_program() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "var a = 1 + 2;").unwrap();

        let result = run(temp_file.path(), false);
        assert_eq!(result.unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_run_failing_program() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "var a = 1 / 0;").unwrap();

        let result = run(temp_file.path(), false);
        assert_eq!(result.unwrap(), ExitCode::from(crate::EXIT_SCRIPT_ERROR));
    }

    #[test]
    fn test_run_missing_file() {
        let result = run(Path::new("nonexistent.lox"), false);
        assert!(result.is_err());
    }
}
