//! Diagnostics for reporting errors to users
//!
//! A [`Diagnostic`] is a stable, serialisable view of a [`LoxError`]: a
//! code per error kind, the pipeline stage it came from, and the offending
//! source line when the source is available.

use crate::error::{LexError, LoxError, ParseError, RuntimeError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Diagnostic schema version
pub const DIAG_VERSION: u32 = 1;

/// Pipeline stage that produced a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Lex,
    Parse,
    Runtime,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Lex => write!(f, "lex"),
            Stage::Parse => write!(f, "parse"),
            Stage::Runtime => write!(f, "runtime"),
        }
    }
}

/// Error code registry
pub mod error_codes {
    // LX - Lexical errors
    pub const UNEXPECTED_CHARACTER: &str = "LX0001";
    pub const UNTERMINATED_STRING: &str = "LX0002";

    // PS - Syntax errors
    pub const UNEXPECTED_TOKEN: &str = "PS0001";
    pub const INVALID_ASSIGNMENT_TARGET: &str = "PS0002";

    // RT - Runtime errors
    pub const UNDEFINED_VARIABLE: &str = "RT0001";
    pub const TYPE_ERROR: &str = "RT0002";
    pub const DIVIDE_BY_ZERO: &str = "RT0003";
}

/// A reportable error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Diagnostic schema version
    pub diag_version: u32,
    /// Stage that failed
    pub stage: Stage,
    /// Error code (e.g., "RT0003")
    pub code: String,
    /// Main diagnostic message
    pub message: String,
    /// File path
    pub file: String,
    /// Line number (1-based)
    pub line: u32,
    /// Source line string
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub snippet: String,
}

impl Diagnostic {
    /// Create a diagnostic with an explicit code
    pub fn new(stage: Stage, code: impl Into<String>, message: impl Into<String>, line: u32) -> Self {
        Self {
            diag_version: DIAG_VERSION,
            stage,
            code: code.into(),
            message: message.into(),
            file: "<input>".to_string(),
            line,
            snippet: String::new(),
        }
    }

    /// Build the diagnostic for a pipeline error
    pub fn from_error(error: &LoxError) -> Self {
        let (stage, code) = match error {
            LoxError::Lex(e) => (Stage::Lex, lex_code(e)),
            LoxError::Parse(e) => (Stage::Parse, parse_code(e)),
            LoxError::Runtime(e) => (Stage::Runtime, runtime_code(e)),
        };
        Self::new(stage, code, error.message(), error.line())
    }

    /// Set the file path
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    /// Set the snippet (source line)
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = snippet.into();
        self
    }

    /// Take the snippet from the full source text
    pub fn with_source(self, source: &str) -> Self {
        let snippet = (self.line as usize)
            .checked_sub(1)
            .and_then(|index| source.lines().nth(index))
            .unwrap_or("")
            .to_string();
        self.with_snippet(snippet)
    }

    /// Format as human-readable string
    pub fn to_human_string(&self) -> String {
        let mut output = String::new();

        // Header: error[RT0003]: Attempted to divide by 0
        output.push_str(&format!("error[{}]: {}\n", self.code, self.message));

        // Location: --> script.lox:12
        output.push_str(&format!("  --> {}:{}\n", self.file, self.line));

        if !self.snippet.is_empty() {
            output.push_str("   |\n");
            output.push_str(&format!("{:>2} | {}\n", self.line, self.snippet));
        }

        output
    }

    /// Format as compact JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Format as pretty-printed JSON string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&LoxError> for Diagnostic {
    fn from(error: &LoxError) -> Self {
        Self::from_error(error)
    }
}

fn lex_code(error: &LexError) -> &'static str {
    match error {
        LexError::UnexpectedCharacter { .. } => error_codes::UNEXPECTED_CHARACTER,
        LexError::UnterminatedString { .. } => error_codes::UNTERMINATED_STRING,
    }
}

fn parse_code(error: &ParseError) -> &'static str {
    match error {
        ParseError::UnexpectedToken { .. } => error_codes::UNEXPECTED_TOKEN,
        ParseError::InvalidAssignmentTarget { .. } => error_codes::INVALID_ASSIGNMENT_TARGET,
    }
}

fn runtime_code(error: &RuntimeError) -> &'static str {
    match error {
        RuntimeError::UndefinedVariable { .. } => error_codes::UNDEFINED_VARIABLE,
        RuntimeError::TypeError { .. } => error_codes::TYPE_ERROR,
        RuntimeError::DivideByZero { .. } => error_codes::DIVIDE_BY_ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_code_per_error_kind() {
        let cases = [
            (
                LoxError::from(LexError::UnterminatedString { line: 1 }),
                Stage::Lex,
                "LX0002",
            ),
            (
                LoxError::from(ParseError::InvalidAssignmentTarget { line: 1 }),
                Stage::Parse,
                "PS0002",
            ),
            (
                LoxError::from(RuntimeError::DivideByZero { line: 1 }),
                Stage::Runtime,
                "RT0003",
            ),
        ];

        for (error, stage, code) in cases {
            let diag = Diagnostic::from_error(&error);
            assert_eq!(diag.stage, stage);
            assert_eq!(diag.code, code);
            assert_eq!(diag.diag_version, DIAG_VERSION);
        }
    }

    #[test]
    fn test_with_source_picks_error_line() {
        let error = LoxError::from(RuntimeError::DivideByZero { line: 2 });
        let diag = Diagnostic::from_error(&error).with_source("var a = 1;\nprint a / 0;\n");
        assert_eq!(diag.snippet, "print a / 0;");
    }

    #[test]
    fn test_with_source_out_of_range_is_empty() {
        let error = LoxError::from(LexError::UnterminatedString { line: 9 });
        let diag = Diagnostic::from_error(&error).with_source("\"abc");
        assert_eq!(diag.snippet, "");
    }

    #[test]
    fn test_human_format() {
        let error = LoxError::from(RuntimeError::DivideByZero { line: 2 });
        let diag = Diagnostic::from_error(&error)
            .with_file("test.lox")
            .with_snippet("print a / 0;");

        let output = diag.to_human_string();
        assert_eq!(
            output,
            "error[RT0003]: Attempted to divide by 0\n  --> test.lox:2\n   |\n 2 | print a / 0;\n"
        );
    }

    #[test]
    fn test_json_round_trip() {
        let diag = Diagnostic::new(Stage::Parse, "PS0001", "Expect expression.", 3);
        let json = diag.to_json().unwrap();
        assert!(json.contains("\"stage\":\"parse\""));
        assert!(!json.contains("snippet"));

        let back: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(back, diag);
    }
}
