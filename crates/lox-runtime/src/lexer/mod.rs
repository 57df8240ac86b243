//! Lexical analysis (tokenization)
//!
//! The lexer converts Lox source code into a flat token stream terminated by
//! [`TokenKind::Eof`]. Scanning stops at the first lexical error.

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use tracing::{debug, instrument};

mod literals;

/// Lexer state for tokenizing source code
pub struct Lexer {
    /// Characters of source code
    pub(super) chars: Vec<char>,
    /// Current position in chars
    pub(super) current: usize,
    /// Current line number (1-indexed)
    pub(super) line: u32,
    /// Start position of current token
    pub(super) start_pos: usize,
    /// Start line of current token
    pub(super) start_line: u32,
}

impl Lexer {
    /// Create a new lexer for the given source code
    pub fn new(source: impl AsRef<str>) -> Self {
        Self {
            chars: source.as_ref().chars().collect(),
            current: 0,
            line: 1,
            start_pos: 0,
            start_line: 1,
        }
    }

    /// Tokenize the whole source. The last token is always `Eof`.
    #[instrument(level = "debug", skip(self), fields(len = self.chars.len()))]
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        debug!(count = tokens.len(), "tokenized");
        Ok(tokens)
    }

    /// Scan the next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments();

        // Mark start of token
        self.start_pos = self.current;
        self.start_line = self.line;

        if self.is_at_end() {
            return Ok(Token::eof(self.line));
        }

        let c = self.advance();

        let token = match c {
            // Single-character tokens
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            '{' => self.make_token(TokenKind::LeftBrace),
            '}' => self.make_token(TokenKind::RightBrace),
            ',' => self.make_token(TokenKind::Comma),
            '.' => self.make_token(TokenKind::Dot),
            '-' => self.make_token(TokenKind::Minus),
            '+' => self.make_token(TokenKind::Plus),
            ';' => self.make_token(TokenKind::Semicolon),
            '*' => self.make_token(TokenKind::Star),
            // Comments were consumed above, so this is division
            '/' => self.make_token(TokenKind::Slash),

            // One or two character tokens
            '!' => self.either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.either('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.either('=', TokenKind::GreaterEqual, TokenKind::Greater),

            // String literals
            '"' => self.string()?,

            // Numbers
            c if c.is_ascii_digit() => self.number(),

            // Identifiers and keywords
            c if c.is_alphabetic() => self.identifier(),

            _ => {
                return Err(LexError::UnexpectedCharacter {
                    character: c,
                    line: self.line,
                })
            }
        };

        Ok(token)
    }

    /// Skip whitespace and `//` comments, counting newlines
    fn skip_whitespace_and_comments(&mut self) {
        while !self.is_at_end() {
            match self.peek() {
                '\n' => {
                    self.advance();
                    self.line += 1;
                }
                c if c.is_whitespace() => {
                    self.advance();
                }
                '/' if self.peek_next() == Some('/') => {
                    // Line comment; the newline is left for the next iteration
                    while !self.is_at_end() && self.peek() != '\n' {
                        self.advance();
                    }
                }
                _ => return,
            }
        }
    }

    // === Character navigation ===

    /// Advance to next character and return it
    pub(super) fn advance(&mut self) -> char {
        let c = self.chars[self.current];
        self.current += 1;
        c
    }

    /// Peek at current character without advancing
    pub(super) fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    /// Peek at next character (current + 1)
    pub(super) fn peek_next(&self) -> Option<char> {
        self.chars.get(self.current + 1).copied()
    }

    /// Check if current character matches expected, and advance if so
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.chars[self.current] != expected {
            false
        } else {
            self.advance();
            true
        }
    }

    /// Check if we've reached the end of source
    pub(super) fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    // === Token creation ===

    /// Source text of the token being scanned
    pub(super) fn lexeme(&self) -> String {
        self.chars[self.start_pos..self.current].iter().collect()
    }

    /// Create a token spanning `start_pos..current`
    pub(super) fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.lexeme(), self.start_line).with_lines(self.start_line, self.line)
    }

    /// Maximal munch for the two-character operators
    fn either(&mut self, next: char, long: TokenKind, short: TokenKind) -> Token {
        if self.match_char(next) {
            self.make_token(long)
        } else {
            self.make_token(short)
        }
    }
}
