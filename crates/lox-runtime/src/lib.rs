//! Lox Runtime - Core language implementation
//!
//! This library provides the complete Lox pipeline:
//! - Lexical analysis (`lexer`)
//! - Recursive-descent parsing into an AST (`parser`, `ast`)
//! - Tree-walking evaluation over chained scopes (`interpreter`, `environment`)
//! - Diagnostics and an embedding facade (`diagnostic`, `runtime`)

/// Lox runtime version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Public API modules
pub mod ast;
pub mod diagnostic;
pub mod environment;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod printer;
pub mod runtime;
pub mod token;
pub mod value;

// Re-export commonly used types
pub use ast::{Expr, Program, Stmt};
pub use diagnostic::{Diagnostic, Stage, DIAG_VERSION};
pub use environment::{Environment, EnvironmentError};
pub use error::{LexError, LoxError, ParseError, RuntimeError};
pub use interpreter::Interpreter;
pub use lexer::Lexer;
pub use output::{Output, Stdout};
pub use parser::Parser;
pub use runtime::{parse_program, Lox, LoxResult};
pub use token::{Token, TokenKind};
pub use value::Value;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoke() {
        assert_eq!(VERSION, "0.1.0");
    }
}
