//! Literal scanning for the lexer

use crate::error::LexError;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};
use crate::value::Value;

impl Lexer {
    /// Scan a string literal. Strings may span lines and have no escapes.
    pub(super) fn string(&mut self) -> Result<Token, LexError> {
        while !self.is_at_end() && self.peek() != '"' {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            return Err(LexError::UnterminatedString { line: self.line });
        }

        self.advance(); // Closing "

        let value: String = self.chars[self.start_pos + 1..self.current - 1]
            .iter()
            .collect();
        Ok(self
            .make_token(TokenKind::String)
            .with_literal(Value::String(value)))
    }

    /// Scan a number literal: digits with an optional fractional part
    pub(super) fn number(&mut self) -> Token {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // A trailing '.' with no digit after it is not part of the number
        if self.peek() == '.' && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // consume .
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let token = self.make_token(TokenKind::Number);
        // Only ASCII digits and at most one interior '.' were consumed
        let value = token.lexeme.parse::<f64>().unwrap_or(f64::NAN);
        token.with_literal(Value::Number(value))
    }

    /// Scan an identifier or keyword
    pub(super) fn identifier(&mut self) -> Token {
        while self.peek().is_alphanumeric() {
            self.advance();
        }

        let lexeme = self.lexeme();
        let kind = TokenKind::keyword(&lexeme).unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }
}
