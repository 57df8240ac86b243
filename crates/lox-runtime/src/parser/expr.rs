//! Expression parsing

use crate::ast::*;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::token::TokenKind;
use crate::value::Value;

impl Parser {
    /// `expression → assignment`
    pub(super) fn expression(&mut self) -> Result<Expr, ParseError> {
        self.assignment()
    }

    /// `assignment → IDENTIFIER "=" assignment | logic_or`
    ///
    /// The target is parsed as an ordinary expression first and only
    /// accepted if it turned out to be a variable reference.
    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let target = self.logic_or()?;

        if self.match_token(TokenKind::Equal) {
            let line = self.previous().line_start;
            let value = self.assignment()?;

            return match target {
                Expr::Variable(name) => Ok(Expr::Assign(AssignExpr {
                    name,
                    value: Box::new(value),
                    line,
                })),
                _ => Err(ParseError::InvalidAssignmentTarget { line }),
            };
        }

        Ok(target)
    }

    /// `logic_or → logic_and ( "or" logic_and )*`
    fn logic_or(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.logic_and()?;

        while self.match_token(TokenKind::Or) {
            let line = self.previous().line_start;
            let right = self.logic_and()?;
            expr = Expr::Logical(LogicalExpr {
                op: LogicalOp::Or,
                left: Box::new(expr),
                right: Box::new(right),
                line,
            });
        }

        Ok(expr)
    }

    /// `logic_and → equality ( "and" equality )*`
    fn logic_and(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.equality()?;

        while self.match_token(TokenKind::And) {
            let line = self.previous().line_start;
            let right = self.equality()?;
            expr = Expr::Logical(LogicalExpr {
                op: LogicalOp::And,
                left: Box::new(expr),
                right: Box::new(right),
                line,
            });
        }

        Ok(expr)
    }

    /// `equality → comparison ( ( "!=" | "==" ) comparison )*`
    fn equality(&mut self) -> Result<Expr, ParseError> {
        self.binary_level(
            &[TokenKind::BangEqual, TokenKind::EqualEqual],
            Self::comparison,
        )
    }

    /// `comparison → term ( ( ">" | ">=" | "<" | "<=" ) term )*`
    fn comparison(&mut self) -> Result<Expr, ParseError> {
        self.binary_level(
            &[
                TokenKind::Greater,
                TokenKind::GreaterEqual,
                TokenKind::Less,
                TokenKind::LessEqual,
            ],
            Self::term,
        )
    }

    /// `term → factor ( ( "-" | "+" ) factor )*`
    fn term(&mut self) -> Result<Expr, ParseError> {
        self.binary_level(&[TokenKind::Minus, TokenKind::Plus], Self::factor)
    }

    /// `factor → unary ( ( "/" | "*" ) unary )*`
    fn factor(&mut self) -> Result<Expr, ParseError> {
        self.binary_level(&[TokenKind::Slash, TokenKind::Star], Self::unary)
    }

    /// Left fold over one binary precedence level
    fn binary_level(
        &mut self,
        operators: &[TokenKind],
        operand: fn(&mut Self) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        let mut expr = operand(self)?;

        while let Some(kind) = self.match_any(operators) {
            let line = self.previous().line_start;
            let op = binary_op(kind).ok_or_else(|| self.error("Expect binary operator."))?;
            let right = operand(self)?;
            expr = Expr::Binary(BinaryExpr {
                op,
                left: Box::new(expr),
                right: Box::new(right),
                line,
            });
        }

        Ok(expr)
    }

    /// `unary → ( "!" | "-" ) unary | primary`
    fn unary(&mut self) -> Result<Expr, ParseError> {
        if let Some(kind) = self.match_any(&[TokenKind::Bang, TokenKind::Minus]) {
            let line = self.previous().line_start;
            let op = if kind == TokenKind::Bang {
                UnaryOp::Not
            } else {
                UnaryOp::Negate
            };
            let operand = self.unary()?;
            return Ok(Expr::Unary(UnaryExpr {
                op,
                expr: Box::new(operand),
                line,
            }));
        }

        self.primary()
    }

    /// `primary → NUMBER | STRING | "true" | "false" | "nil" | IDENTIFIER | "(" expression ")"`
    fn primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.peek().clone();
        let line = token.line_end;

        match token.kind {
            TokenKind::False => {
                self.advance();
                Ok(Expr::literal(false, line))
            }
            TokenKind::True => {
                self.advance();
                Ok(Expr::literal(true, line))
            }
            TokenKind::Nil => {
                self.advance();
                Ok(Expr::nil(line))
            }
            TokenKind::Number | TokenKind::String => {
                self.advance();
                let value = token.literal.unwrap_or(Value::Nil);
                Ok(Expr::literal(value, line))
            }
            TokenKind::Identifier => {
                self.advance();
                Ok(Expr::Variable(Identifier::new(token.lexeme, line)))
            }
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.expression()?;
                let close = self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
                Ok(Expr::Grouping(GroupingExpr {
                    expr: Box::new(inner),
                    line: close.line_start,
                }))
            }
            _ => Err(self.error("Expect expression.")),
        }
    }
}

/// Map an operator token to its binary operator
fn binary_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        TokenKind::EqualEqual => Some(BinaryOp::Eq),
        TokenKind::BangEqual => Some(BinaryOp::Ne),
        TokenKind::Less => Some(BinaryOp::Lt),
        TokenKind::LessEqual => Some(BinaryOp::Le),
        TokenKind::Greater => Some(BinaryOp::Gt),
        TokenKind::GreaterEqual => Some(BinaryOp::Ge),
        _ => None,
    }
}
