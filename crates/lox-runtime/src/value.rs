//! Runtime value representation
//!
//! Every Lox value is one of four immediate cases. Values are compared
//! structurally; comparing across cases is never an error, just unequal.

use std::fmt;

/// Runtime value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 64-bit floating point number
    Number(f64),
    /// Immutable string
    String(String),
    /// Boolean
    Boolean(bool),
    /// The absence of a value (`nil`)
    Nil,
}

impl Value {
    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::String(_) => "String",
            Value::Boolean(_) => "Boolean",
            Value::Nil => "Nil",
        }
    }

    /// Truthiness: only `nil` and `false` are falsy. `0` and `""` are truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Boolean(b) => *b,
            Value::Number(_) | Value::String(_) => true,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => {
                // Shortest round-trip form: exponent notation at 1e16 and above or below 1e-4.
                // Only a literal trailing ".0" is dropped.
                let rendered = format!("{:?}", n);
                f.write_str(rendered.strip_suffix(".0").unwrap_or(&rendered))
            }
            Value::String(s) => f.write_str(s),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Nil => f.write_str("nil"),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Boolean(true), "true")]
    #[case(Value::Boolean(false), "false")]
    #[case(Value::string("hello"), "hello")]
    #[case(Value::Nil, "nil")]
    #[case(Value::Number(1.0), "1")]
    #[case(Value::Number(1.1), "1.1")]
    #[case(Value::Number(-3.0), "-3")]
    #[case(Value::Number(-0.0), "-0")]
    #[case(Value::Number(123.45), "123.45")]
    #[case(Value::Number(1e15), "1000000000000000")]
    #[case(Value::Number(1e16), "1e16")]
    #[case(Value::Number(1e21), "1e21")]
    #[case(Value::Number(1e-7), "1e-7")]
    #[case(Value::Number(0.1 + 0.2), "0.30000000000000004")]
    fn test_stringify(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    #[case(Value::Nil, false)]
    #[case(Value::Boolean(false), false)]
    #[case(Value::Boolean(true), true)]
    #[case(Value::Number(0.0), true)]
    #[case(Value::string(""), true)]
    fn test_truthiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[test]
    fn test_cross_type_equality_is_false() {
        assert_ne!(Value::Number(1.0), Value::string("1"));
        assert_ne!(Value::Number(1.0), Value::Boolean(true));
        assert_ne!(Value::Nil, Value::Boolean(false));
        assert_eq!(Value::Nil, Value::Nil);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Number(1.0).type_name(), "Number");
        assert_eq!(Value::string("x").type_name(), "String");
        assert_eq!(Value::Boolean(true).type_name(), "Boolean");
        assert_eq!(Value::Nil.type_name(), "Nil");
    }
}
