//! Expression evaluation

use crate::ast::*;
use crate::error::RuntimeError;
use crate::interpreter::Interpreter;
use crate::output::Output;
use crate::value::Value;

impl<O: Output> Interpreter<O> {
    /// Evaluate an expression
    pub(super) fn eval_expr(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal(lit) => Ok(lit.value.clone()),
            Expr::Grouping(group) => self.eval_expr(&group.expr),
            Expr::Variable(id) => self.get_variable(id),
            Expr::Assign(assign) => self.eval_assign(assign),
            Expr::Logical(logical) => self.eval_logical(logical),
            Expr::Unary(unary) => self.eval_unary(unary),
            Expr::Binary(binary) => self.eval_binary(binary),
        }
    }

    /// Look a variable up through the scope chain
    fn get_variable(&self, id: &Identifier) -> Result<Value, RuntimeError> {
        self.environment
            .borrow()
            .get(&id.name)
            .map_err(|source| RuntimeError::UndefinedVariable {
                name: id.name.clone(),
                line: id.line,
                source,
            })
    }

    /// Assign to an existing binding; yields the assigned value
    fn eval_assign(&mut self, assign: &AssignExpr) -> Result<Value, RuntimeError> {
        let value = self.eval_expr(&assign.value)?;
        self.environment
            .borrow_mut()
            .assign(&assign.name.name, value.clone())
            .map_err(|source| RuntimeError::UndefinedVariable {
                name: assign.name.name.clone(),
                line: assign.line,
                source,
            })?;
        Ok(value)
    }

    /// Short-circuit `and` / `or`, yielding an operand rather than a boolean
    fn eval_logical(&mut self, logical: &LogicalExpr) -> Result<Value, RuntimeError> {
        let left = self.eval_expr(&logical.left)?;

        let short_circuit = match logical.op {
            LogicalOp::Or => left.is_truthy(),
            LogicalOp::And => !left.is_truthy(),
        };

        if short_circuit {
            Ok(left)
        } else {
            self.eval_expr(&logical.right)
        }
    }

    /// Evaluate a unary expression
    fn eval_unary(&mut self, unary: &UnaryExpr) -> Result<Value, RuntimeError> {
        let operand = self.eval_expr(&unary.expr)?;

        match unary.op {
            UnaryOp::Negate => match operand {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(RuntimeError::type_error(
                    "Minus only supported for number values",
                    unary.line,
                )),
            },
            UnaryOp::Not => Ok(Value::Boolean(!operand.is_truthy())),
        }
    }

    /// Evaluate a binary expression. Both operands are evaluated left to right.
    fn eval_binary(&mut self, binary: &BinaryExpr) -> Result<Value, RuntimeError> {
        let left = self.eval_expr(&binary.left)?;
        let right = self.eval_expr(&binary.right)?;
        let line = binary.line;

        match binary.op {
            BinaryOp::Add => match (left, right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::String(a), Value::String(b)) => Ok(Value::String(a + &b)),
                _ => Err(RuntimeError::type_error(
                    "Addition only supported if both operands are Number or both operands are String",
                    line,
                )),
            },
            BinaryOp::Sub => numeric_binary_op(binary.op, left, right, line, |a, b| a - b),
            BinaryOp::Mul => numeric_binary_op(binary.op, left, right, line, |a, b| a * b),
            BinaryOp::Div => {
                if let Value::Number(b) = right {
                    if b == 0.0 && matches!(left, Value::Number(_)) {
                        return Err(RuntimeError::DivideByZero { line });
                    }
                }
                numeric_binary_op(binary.op, left, right, line, |a, b| a / b)
            }
            BinaryOp::Eq => Ok(Value::Boolean(left == right)),
            BinaryOp::Ne => Ok(Value::Boolean(left != right)),
            BinaryOp::Lt => numeric_comparison(binary.op, left, right, line, |a, b| a < b),
            BinaryOp::Le => numeric_comparison(binary.op, left, right, line, |a, b| a <= b),
            BinaryOp::Gt => numeric_comparison(binary.op, left, right, line, |a, b| a > b),
            BinaryOp::Ge => numeric_comparison(binary.op, left, right, line, |a, b| a >= b),
        }
    }
}

/// Helper for numeric binary operations
fn numeric_binary_op<F>(
    op: BinaryOp,
    left: Value,
    right: Value,
    line: u32,
    f: F,
) -> Result<Value, RuntimeError>
where
    F: FnOnce(f64, f64) -> f64,
{
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(f(a, b))),
        _ => Err(operands_must_be_numbers(op, line)),
    }
}

/// Helper for numeric comparisons
fn numeric_comparison<F>(
    op: BinaryOp,
    left: Value,
    right: Value,
    line: u32,
    f: F,
) -> Result<Value, RuntimeError>
where
    F: FnOnce(f64, f64) -> bool,
{
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Boolean(f(a, b))),
        _ => Err(operands_must_be_numbers(op, line)),
    }
}

fn operands_must_be_numbers(op: BinaryOp, line: u32) -> RuntimeError {
    RuntimeError::type_error(
        format!("'{}' only supported if both operands are Number", op),
        line,
    )
}

#[cfg(test)]
mod tests {
    use crate::environment::Environment;
    use crate::error::RuntimeError;
    use crate::interpreter::Interpreter;
    use crate::lexer::Lexer;
    use crate::parser::Parser;
    use crate::value::Value;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn eval(source: &str) -> Result<Value, RuntimeError> {
        let tokens = Lexer::new(source).tokenize().unwrap();
        let expr = Parser::new(tokens).parse_expression().unwrap();
        let mut interpreter = Interpreter::new(Environment::new().into_ref(), Vec::<String>::new());
        interpreter.evaluate(&expr)
    }

    #[rstest]
    #[case("1 == 1", Value::Boolean(true))]
    #[case("1 == \"1\"", Value::Boolean(false))]
    #[case("nil == false", Value::Boolean(false))]
    #[case("nil == nil", Value::Boolean(true))]
    #[case("\"a\" != \"b\"", Value::Boolean(true))]
    #[case("\"6\" + \"2\"", Value::string("62"))]
    #[case("6 + 2", Value::Number(8.0))]
    #[case("6 - 2", Value::Number(4.0))]
    #[case("6 * 2", Value::Number(12.0))]
    #[case("6 / 2", Value::Number(3.0))]
    #[case("3 > 2", Value::Boolean(true))]
    #[case("3 >= 3", Value::Boolean(true))]
    #[case("2 < 1", Value::Boolean(false))]
    #[case("2 <= 1", Value::Boolean(false))]
    #[case("-(1 + 2)", Value::Number(-3.0))]
    #[case("!nil", Value::Boolean(true))]
    #[case("!0", Value::Boolean(false))]
    #[case("!\"\"", Value::Boolean(false))]
    #[case("!false", Value::Boolean(true))]
    #[case("\"hi\" or 2", Value::string("hi"))]
    #[case("nil or \"yes\"", Value::string("yes"))]
    #[case("nil and 1", Value::Nil)]
    #[case("1 and 2", Value::Number(2.0))]
    fn test_operator_table(#[case] source: &str, #[case] expected: Value) {
        assert_eq!(eval(source), Ok(expected));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(eval("6 / 0"), Err(RuntimeError::DivideByZero { line: 1 }));
    }

    #[rstest]
    #[case("1 + \"a\"", "Addition only supported if both operands are Number or both operands are String")]
    #[case("\"a\" - 1", "'-' only supported if both operands are Number")]
    #[case("true * 2", "'*' only supported if both operands are Number")]
    #[case("\"a\" / 0", "'/' only supported if both operands are Number")]
    #[case("\"a\" < \"b\"", "'<' only supported if both operands are Number")]
    #[case("-true", "Minus only supported for number values")]
    fn test_type_errors(#[case] source: &str, #[case] message: &str) {
        let err = eval(source).unwrap_err();
        assert_eq!(err.to_string(), message);
    }

    #[test]
    fn test_undefined_variable() {
        let err = eval("missing").unwrap_err();
        assert!(matches!(err, RuntimeError::UndefinedVariable { ref name, line: 1, .. } if name == "missing"));
    }

    #[test]
    fn test_assign_undefined_does_not_create() {
        let globals = Environment::new().into_ref();
        let mut interpreter = Interpreter::new(globals.clone(), Vec::<String>::new());
        let tokens = Lexer::new("a = 1").tokenize().unwrap();
        let expr = Parser::new(tokens).parse_expression().unwrap();

        assert!(interpreter.evaluate(&expr).is_err());
        assert!(globals.borrow().values().is_empty());
    }
}
