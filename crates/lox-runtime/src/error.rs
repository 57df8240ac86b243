//! Error types for each pipeline stage
//!
//! Every stage fails fast: the lexer stops at the first bad character, the
//! parser at the first unexpected token, the interpreter at the first
//! runtime fault. All errors carry the 1-based source line they occurred on.

use crate::environment::EnvironmentError;
use thiserror::Error;

/// Lexical error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Character that cannot start any token
    #[error("{character} ({}) is not supported", char_code(.character))]
    UnexpectedCharacter { character: char, line: u32 },
    /// Input ended inside a string literal
    #[error("Unterminated string")]
    UnterminatedString { line: u32 },
}

fn char_code(c: &char) -> u32 {
    u32::from(*c)
}

impl LexError {
    pub fn line(&self) -> u32 {
        match self {
            LexError::UnexpectedCharacter { line, .. } => *line,
            LexError::UnterminatedString { line } => *line,
        }
    }
}

/// Syntax error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Expected-token mismatch
    #[error("{message}")]
    UnexpectedToken { message: String, line: u32 },
    /// Left-hand side of `=` is not a variable
    #[error("Invalid assignment target.")]
    InvalidAssignmentTarget { line: u32 },
}

impl ParseError {
    pub fn line(&self) -> u32 {
        match self {
            ParseError::UnexpectedToken { line, .. } => *line,
            ParseError::InvalidAssignmentTarget { line } => *line,
        }
    }
}

/// Runtime error raised while evaluating
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// Read or assignment of a name bound in no scope
    #[error("Undefined variable '{name}'")]
    UndefinedVariable {
        name: String,
        line: u32,
        #[source]
        source: EnvironmentError,
    },
    /// Operand types not supported by an operator
    #[error("{message}")]
    TypeError { message: String, line: u32 },
    /// Division with a zero divisor
    #[error("Attempted to divide by 0")]
    DivideByZero { line: u32 },
}

impl RuntimeError {
    pub fn line(&self) -> u32 {
        match self {
            RuntimeError::UndefinedVariable { line, .. } => *line,
            RuntimeError::TypeError { line, .. } => *line,
            RuntimeError::DivideByZero { line } => *line,
        }
    }

    pub(crate) fn type_error(message: impl Into<String>, line: u32) -> Self {
        RuntimeError::TypeError {
            message: message.into(),
            line,
        }
    }
}

/// Any error the pipeline can produce
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoxError {
    #[error("Line {}: {}", .0.line(), .0)]
    Lex(#[from] LexError),
    #[error("Line {}: {}", .0.line(), .0)]
    Parse(#[from] ParseError),
    #[error("Line {}: {}", .0.line(), .0)]
    Runtime(#[from] RuntimeError),
}

impl LoxError {
    /// Source line the error occurred on
    pub fn line(&self) -> u32 {
        match self {
            LoxError::Lex(e) => e.line(),
            LoxError::Parse(e) => e.line(),
            LoxError::Runtime(e) => e.line(),
        }
    }

    /// Message without the line prefix
    pub fn message(&self) -> String {
        match self {
            LoxError::Lex(e) => e.to_string(),
            LoxError::Parse(e) => e.to_string(),
            LoxError::Runtime(e) => e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_unexpected_character_reports_code() {
        let err = LexError::UnexpectedCharacter {
            character: '#',
            line: 2,
        };
        assert_eq!(err.to_string(), "# (35) is not supported");
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn test_lox_error_prefixes_line() {
        let err = LoxError::from(RuntimeError::DivideByZero { line: 4 });
        assert_eq!(err.to_string(), "Line 4: Attempted to divide by 0");
        assert_eq!(err.message(), "Attempted to divide by 0");
        assert_eq!(err.line(), 4);
    }

    #[test]
    fn test_undefined_variable_wraps_lookup_failure() {
        let err = RuntimeError::UndefinedVariable {
            name: "a".to_string(),
            line: 1,
            source: EnvironmentError::Undefined {
                name: "a".to_string(),
            },
        };
        let source = err.source().expect("lookup failure should be the source");
        assert_eq!(source.to_string(), "Variable a not defined");
    }
}
