//! Shared test utilities for Lox integration tests

#![allow(dead_code)]

use lox_runtime::{Lox, LoxError, Value};

// Re-export testing utilities
pub use pretty_assertions::{assert_eq, assert_ne};

/// Run a program on a fresh runtime and return what it printed
pub fn run_output(source: &str) -> Vec<String> {
    let mut lox = Lox::with_output(Vec::<String>::new());
    if let Err(err) = lox.run(source) {
        panic!("Expected success, got {}", err);
    }
    lox.output().clone()
}

/// Run a program and return the runtime for inspecting globals
pub fn run_lox(source: &str) -> Lox<Vec<String>> {
    let mut lox = Lox::with_output(Vec::<String>::new());
    if let Err(err) = lox.run(source) {
        panic!("Expected success, got {}", err);
    }
    lox
}

/// Assert that a program prints exactly `expected`
///
/// # Example
/// ```
/// assert_prints("print 1 + 2;", &["3"]);
/// ```
pub fn assert_prints(source: &str, expected: &[&str]) {
    let output = run_output(source);
    assert_eq!(output, expected, "Output mismatch for {:?}", source);
}

/// Assert that an expression evaluates to `expected`
pub fn assert_eval(source: &str, expected: Value) {
    let mut lox = Lox::with_output(Vec::<String>::new());
    match lox.eval_expression(source) {
        Ok(value) => assert_eq!(value, expected, "Value mismatch for {:?}", source),
        Err(err) => panic!("Expected {:?}, got error {}", expected, err),
    }
}

/// Run a program expecting failure, returning the error and the output printed before it
pub fn run_error(source: &str) -> (LoxError, Vec<String>) {
    let mut lox = Lox::with_output(Vec::<String>::new());
    match lox.run(source) {
        Ok(()) => panic!("Expected error for {:?}, got success", source),
        Err(err) => (err, lox.output().clone()),
    }
}

/// Assert that a program fails with the given `Line n: message` text
pub fn assert_error(source: &str, expected: &str) {
    let (err, _) = run_error(source);
    assert_eq!(err.to_string(), expected);
}
