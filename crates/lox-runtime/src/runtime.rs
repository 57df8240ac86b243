//! Lox runtime API for embedding

use crate::ast::Program;
use crate::environment::{EnvRef, Environment};
use crate::error::LoxError;
use crate::interpreter::Interpreter;
use crate::lexer::Lexer;
use crate::output::{Output, Stdout};
use crate::parser::Parser;
use crate::value::Value;
use std::rc::Rc;

/// Result type for runtime operations
pub type LoxResult<T> = Result<T, LoxError>;

/// Scan and parse a whole program without running it
pub fn parse_program(source: &str) -> LoxResult<Program> {
    let tokens = Lexer::new(source).tokenize()?;
    Ok(Parser::new(tokens).parse()?)
}

/// Lox runtime instance
///
/// Owns one interpreter and its global scope, so bindings made by one
/// [`run`](Lox::run) call are visible to the next.
///
/// # Examples
///
/// ```
/// use lox_runtime::{Lox, Value};
///
/// let mut lox = Lox::with_output(Vec::<String>::new());
/// lox.run("var a = 1;").unwrap();
/// lox.run("print a + 2;").unwrap();
/// assert_eq!(lox.output(), &vec!["3".to_string()]);
/// assert_eq!(lox.eval_expression("a * 10").unwrap(), Value::Number(10.0));
/// ```
pub struct Lox<O: Output = Stdout> {
    globals: EnvRef,
    interpreter: Interpreter<O>,
}

impl Lox<Stdout> {
    /// Create a runtime that prints to standard output
    pub fn new() -> Self {
        Self::with_output(Stdout)
    }
}

impl Default for Lox<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Output> Lox<O> {
    /// Create a runtime that prints to `output`
    pub fn with_output(output: O) -> Self {
        let globals = Environment::new().into_ref();
        let interpreter = Interpreter::new(Rc::clone(&globals), output);
        Self {
            globals,
            interpreter,
        }
    }

    /// Scan, parse and execute a program
    ///
    /// Statements before a runtime error keep their effects.
    pub fn run(&mut self, source: &str) -> LoxResult<()> {
        let program = parse_program(source)?;
        self.interpreter.interpret(&program)?;
        Ok(())
    }

    /// Scan, parse and evaluate a single expression
    ///
    /// # Examples
    ///
    /// ```
    /// use lox_runtime::{Lox, Value};
    ///
    /// let mut lox = Lox::with_output(Vec::<String>::new());
    /// assert_eq!(lox.eval_expression("\"6\" + \"2\"").unwrap(), Value::string("62"));
    /// ```
    pub fn eval_expression(&mut self, source: &str) -> LoxResult<Value> {
        let tokens = Lexer::new(source).tokenize()?;
        let expr = Parser::new(tokens).parse_expression()?;
        Ok(self.interpreter.evaluate(&expr)?)
    }

    /// The global scope
    pub fn globals(&self) -> EnvRef {
        Rc::clone(&self.globals)
    }

    /// Look up a global binding
    pub fn get_global(&self, name: &str) -> Option<Value> {
        self.globals.borrow().get(name).ok()
    }

    /// The output sink
    pub fn output(&self) -> &O {
        self.interpreter.output()
    }

    /// Mutable access to the output sink
    pub fn output_mut(&mut self) -> &mut O {
        self.interpreter.output_mut()
    }

    /// Drop every global binding, keeping the output sink
    pub fn reset(&mut self) {
        self.globals = Environment::new().into_ref();
        self.interpreter.environment = Rc::clone(&self.globals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_state_persists_across_runs() {
        let mut lox = Lox::with_output(Vec::<String>::new());
        lox.run("var a = 1;").unwrap();
        lox.run("a = a + 1;").unwrap();
        lox.run("print a;").unwrap();
        assert_eq!(lox.output(), &vec!["2".to_string()]);
    }

    #[test]
    fn test_error_keeps_environment() {
        let mut lox = Lox::with_output(Vec::<String>::new());
        lox.run("var a = 1;").unwrap();
        let err = lox.run("{ var b = 2; print nope; }").unwrap_err();
        assert!(matches!(
            err,
            LoxError::Runtime(RuntimeError::UndefinedVariable { .. })
        ));
        assert_eq!(lox.get_global("a"), Some(Value::Number(1.0)));
        assert_eq!(lox.get_global("b"), None);
    }

    #[test]
    fn test_reset_clears_globals() {
        let mut lox = Lox::with_output(Vec::<String>::new());
        lox.run("var a = 1;").unwrap();
        lox.reset();
        assert_eq!(lox.get_global("a"), None);
        assert!(lox.run("print a;").is_err());
    }

    #[test]
    fn test_parse_program_reports_syntax_error() {
        let err = parse_program("print ;").unwrap_err();
        assert_eq!(err.to_string(), "Line 1: Expect expression.");
    }
}
