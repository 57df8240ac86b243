//! Parsing (tokens to AST)
//!
//! The parser converts a stream of tokens into an Abstract Syntax Tree (AST)
//! by recursive descent, one method per grammar rule. Binary levels are
//! left-associative and built by iterative left folds. There is no error
//! recovery: the first syntax error aborts the parse.

mod expr;
mod stmt;

use crate::ast::{Expr, Program};
use crate::error::ParseError;
use crate::token::{Token, TokenKind};
use tracing::{debug, instrument};

/// Parser state for building AST from tokens
pub struct Parser {
    pub(super) tokens: Vec<Token>,
    pub(super) current: usize,
}

impl Parser {
    /// Create a new parser for the given tokens
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            let line = tokens.last().map_or(1, |t| t.line_end);
            tokens.push(Token::eof(line));
        }
        Self { tokens, current: 0 }
    }

    /// Parse a whole program: `declaration* EOF`
    #[instrument(level = "debug", skip(self), fields(tokens = self.tokens.len()))]
    pub fn parse(&mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            statements.push(self.parse_declaration()?);
        }

        debug!(statements = statements.len(), "parsed program");
        Ok(statements)
    }

    /// Parse a single expression that must span the whole input
    #[instrument(level = "debug", skip(self), fields(tokens = self.tokens.len()))]
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let expr = self.expression()?;
        if !self.is_at_end() {
            return Err(self.error(&format!(
                "Expect end of expression, found '{}'.",
                self.peek().lexeme
            )));
        }
        Ok(expr)
    }

    // === Helper methods ===

    /// Advance to next token and return reference to previous
    pub(super) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    /// Most recently consumed token
    pub(super) fn previous(&self) -> &Token {
        &self.tokens[self.current.saturating_sub(1)]
    }

    /// Peek at current token
    pub(super) fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    /// Check if current token matches kind
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    /// Match and consume token if it matches
    pub(super) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Match and consume the current token if it is any of `kinds`
    pub(super) fn match_any(&mut self, kinds: &[TokenKind]) -> Option<TokenKind> {
        let kind = self.peek().kind;
        if kinds.contains(&kind) && self.match_token(kind) {
            Some(kind)
        } else {
            None
        }
    }

    /// Consume token of given kind or error
    pub(super) fn consume(&mut self, kind: TokenKind, message: &str) -> Result<&Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error(message))
        }
    }

    /// Check if at end of token stream
    pub(super) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Syntax error at the current token
    pub(super) fn error(&self, message: &str) -> ParseError {
        ParseError::UnexpectedToken {
            message: message.to_string(),
            line: self.peek().line_start,
        }
    }
}
