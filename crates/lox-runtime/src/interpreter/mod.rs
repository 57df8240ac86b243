//! AST interpreter (tree-walking)
//!
//! Direct AST evaluation against a chain of [`Environment`] scopes.
//! Supports:
//! - Expression evaluation (literals, unary/binary/logical ops, variables, assignment)
//! - Statement execution (print, declarations, blocks, if, while)
//! - Block scoping with shadowing
//!
//! Printed output goes to the [`Output`] sink given at construction.

mod expr;
mod stmt;

use crate::ast::{Expr, Stmt};
use crate::environment::{EnvRef, Environment};
use crate::error::RuntimeError;
use crate::output::Output;
use crate::value::Value;
use std::rc::Rc;
use tracing::{debug, instrument};

/// Interpreter state
pub struct Interpreter<O: Output> {
    /// Scope that new bindings are defined in
    pub(super) environment: EnvRef,
    /// Sink for `print`
    pub(super) output: O,
}

impl<O: Output> Interpreter<O> {
    /// Create an interpreter that starts executing in `environment`
    pub fn new(environment: EnvRef, output: O) -> Self {
        Self {
            environment,
            output,
        }
    }

    /// Execute statements in order, stopping at the first runtime error
    #[instrument(level = "debug", skip_all, fields(statements = statements.len()))]
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for stmt in statements {
            if let Err(err) = self.eval_statement(stmt) {
                debug!(line = err.line(), error = %err, "runtime error");
                return Err(err);
            }
        }
        Ok(())
    }

    /// Evaluate a single expression in the current scope
    pub fn evaluate(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        self.eval_expr(expr)
    }

    /// The scope currently executing
    pub fn environment(&self) -> EnvRef {
        Rc::clone(&self.environment)
    }

    /// The output sink
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Mutable access to the output sink
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Consume the interpreter, returning its output sink
    pub fn into_output(self) -> O {
        self.output
    }

    /// Run `f` in a fresh child scope of the current one.
    ///
    /// The previous scope is restored on every exit path, including errors.
    pub(super) fn with_child_scope<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, RuntimeError>,
    ) -> Result<T, RuntimeError> {
        let child = Environment::with_enclosing(Rc::clone(&self.environment)).into_ref();
        let previous = std::mem::replace(&mut self.environment, child);
        tracing::trace!("push scope");

        let result = f(self);

        self.environment = previous;
        tracing::trace!("pop scope");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::Parser;
    use pretty_assertions::assert_eq;

    fn run(source: &str) -> (Result<(), RuntimeError>, Vec<String>, EnvRef) {
        let tokens = Lexer::new(source).tokenize().unwrap();
        let program = Parser::new(tokens).parse().unwrap();
        let globals = Environment::new().into_ref();
        let mut interpreter = Interpreter::new(Rc::clone(&globals), Vec::<String>::new());
        let result = interpreter.interpret(&program);
        (result, interpreter.into_output(), globals)
    }

    #[test]
    fn test_print_number() {
        let (result, output, _) = run("print 1 + 2;");
        assert!(result.is_ok());
        assert_eq!(output, vec!["3"]);
    }

    #[test]
    fn test_globals_visible_after_run() {
        let (result, _, globals) = run("var a = 1; var b = 2; print a + b;");
        assert!(result.is_ok());
        assert_eq!(globals.borrow().get("a"), Ok(Value::Number(1.0)));
        assert_eq!(globals.borrow().get("b"), Ok(Value::Number(2.0)));
    }

    #[test]
    fn test_error_stops_remaining_statements() {
        let (result, output, _) = run("print 1;\nprint -\"x\";\nprint 3;");
        assert_eq!(
            result,
            Err(RuntimeError::TypeError {
                message: "Minus only supported for number values".to_string(),
                line: 2
            })
        );
        assert_eq!(output, vec!["1"]);
    }

    #[test]
    fn test_failing_block_restores_scope() {
        let globals = Environment::new().into_ref();
        let mut interpreter = Interpreter::new(Rc::clone(&globals), Vec::<String>::new());
        let tokens = Lexer::new("{ var inner = 1; print missing; }").tokenize().unwrap();
        let program = Parser::new(tokens).parse().unwrap();

        assert!(interpreter.interpret(&program).is_err());
        assert!(Rc::ptr_eq(&interpreter.environment(), &globals));
        assert!(globals.borrow().values().is_empty());
    }
}
