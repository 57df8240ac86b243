pub mod ast;
pub mod repl;
pub mod run;

use lox_runtime::{Diagnostic, LoxError};

/// Render an error for stderr, as JSON or human-readable text
pub(crate) fn format_error(err: &LoxError, file: &str, source: &str, json: bool) -> String {
    let diag = Diagnostic::from_error(err)
        .with_file(file)
        .with_source(source);

    if json {
        // Serialising a plain struct of strings and integers cannot fail
        diag.to_json().unwrap_or_else(|_| err.to_string())
    } else {
        diag.to_human_string().trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lox_runtime::RuntimeError;

    #[test]
    fn test_format_error_human() {
        let err = LoxError::from(RuntimeError::DivideByZero { line: 1 });
        let text = format_error(&err, "a.lox", "print 1 / 0;", false);
        assert!(text.starts_with("error[RT0003]: Attempted to divide by 0"));
        assert!(text.contains("--> a.lox:1"));
        assert!(text.contains("print 1 / 0;"));
    }

    #[test]
    fn test_format_error_json() {
        let err = LoxError::from(RuntimeError::DivideByZero { line: 1 });
        let text = format_error(&err, "a.lox", "print 1 / 0;", true);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["code"], "RT0003");
        assert_eq!(value["file"], "a.lox");
    }
}
