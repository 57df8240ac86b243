//! Statement parsing

use crate::ast::*;
use crate::error::ParseError;
use crate::parser::Parser;
use crate::token::TokenKind;

impl Parser {
    /// `declaration → varDecl | statement`
    pub(super) fn parse_declaration(&mut self) -> Result<Stmt, ParseError> {
        if self.match_token(TokenKind::Var) {
            self.parse_var_decl()
        } else {
            self.parse_statement()
        }
    }

    /// `varDecl → "var" IDENTIFIER ( "=" expression )? ";"`
    fn parse_var_decl(&mut self) -> Result<Stmt, ParseError> {
        let line = self.previous().line_start;
        let name = self.consume(TokenKind::Identifier, "Expect variable name.")?;
        let name = Identifier::new(name.lexeme.clone(), name.line_start);

        let init = if self.match_token(TokenKind::Equal) {
            self.expression()?
        } else {
            Expr::nil(name.line)
        };

        self.consume(
            TokenKind::Semicolon,
            "Expect ';' after variable declaration.",
        )?;

        Ok(Stmt::Var(VarDecl { name, init, line }))
    }

    /// `statement → printStmt | block | ifStmt | whileStmt | forStmt | exprStmt`
    fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.peek().kind {
            TokenKind::Print => self.parse_print(),
            TokenKind::LeftBrace => Ok(Stmt::Block(self.parse_block()?)),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::For => self.parse_for(),
            _ => self.parse_expression_stmt(),
        }
    }

    /// `printStmt → "print" expression ";"`
    fn parse_print(&mut self) -> Result<Stmt, ParseError> {
        let line = self.advance().line_start;
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Print(PrintStmt { expr, line }))
    }

    /// `exprStmt → expression ";"`
    fn parse_expression_stmt(&mut self) -> Result<Stmt, ParseError> {
        let line = self.peek().line_start;
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::Expression(ExprStmt { expr, line }))
    }

    /// `block → "{" declaration* "}"`
    fn parse_block(&mut self) -> Result<Block, ParseError> {
        let line = self
            .consume(TokenKind::LeftBrace, "Expect '{' before block.")?
            .line_start;

        let mut statements = Vec::new();
        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            statements.push(self.parse_declaration()?);
        }

        self.consume(TokenKind::RightBrace, "Expect '}' after block.")?;

        Ok(Block { statements, line })
    }

    /// `ifStmt → "if" "(" expression ")" statement ( "else" statement )?`
    ///
    /// A dangling `else` binds to the nearest `if`.
    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        let line = self.advance().line_start;
        self.consume(TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let cond = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.parse_statement()?);
        let else_branch = if self.match_token(TokenKind::Else) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(Stmt::If(IfStmt {
            cond,
            then_branch,
            else_branch,
            line,
        }))
    }

    /// `whileStmt → "while" "(" expression ")" statement`
    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        let line = self.advance().line_start;
        self.consume(TokenKind::LeftParen, "Expect '(' after 'while'.")?;
        let cond = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after condition.")?;
        let body = Box::new(self.parse_statement()?);

        Ok(Stmt::While(WhileStmt { cond, body, line }))
    }

    /// `forStmt → "for" "(" ( varDecl | exprStmt | ";" ) expression? ";" expression? ")" statement`
    ///
    /// Desugared into `{ init; while (cond) { body; incr; } }`. The outer
    /// block scopes the initializer to the loop; a missing condition is `true`.
    fn parse_for(&mut self) -> Result<Stmt, ParseError> {
        let line = self.advance().line_start;
        self.consume(TokenKind::LeftParen, "Expect '(' after 'for'.")?;

        let init = if self.match_token(TokenKind::Semicolon) {
            None
        } else if self.match_token(TokenKind::Var) {
            Some(self.parse_var_decl()?)
        } else {
            Some(self.parse_expression_stmt()?)
        };

        let cond = if self.check(TokenKind::Semicolon) {
            Expr::literal(true, self.peek().line_start)
        } else {
            self.expression()?
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let incr = if self.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::RightParen, "Expect ')' after for clauses.")?;

        let body = self.parse_statement()?;
        let body_line = body.line();

        let mut loop_body = vec![body];
        if let Some(incr) = incr {
            let incr_line = incr.line();
            loop_body.push(Stmt::Expression(ExprStmt {
                expr: incr,
                line: incr_line,
            }));
        }

        let while_loop = Stmt::While(WhileStmt {
            cond,
            body: Box::new(Stmt::Block(Block {
                statements: loop_body,
                line: body_line,
            })),
            line,
        });

        let statements = init.into_iter().chain(std::iter::once(while_loop)).collect();
        Ok(Stmt::Block(Block { statements, line }))
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::error::ParseError;
    use crate::lexer::Lexer;
    use crate::parser::Parser;
    use pretty_assertions::assert_eq;

    fn parse_source(source: &str) -> Result<Program, ParseError> {
        let tokens = Lexer::new(source).tokenize().unwrap();
        Parser::new(tokens).parse()
    }

    #[test]
    fn test_parse_if_else() {
        let program = parse_source("if (true) print 1; else print 2;").unwrap();
        let Stmt::If(stmt) = &program[0] else {
            panic!("Expected if statement");
        };
        assert!(matches!(*stmt.then_branch, Stmt::Print(_)));
        assert!(stmt.else_branch.is_some());
    }

    #[test]
    fn test_dangling_else_binds_inner() {
        let program = parse_source("if (a) if (b) print 1; else print 2;").unwrap();
        let Stmt::If(outer) = &program[0] else {
            panic!("Expected if statement");
        };
        assert!(outer.else_branch.is_none());
        let Stmt::If(inner) = outer.then_branch.as_ref() else {
            panic!("Expected nested if");
        };
        assert!(inner.else_branch.is_some());
    }

    #[test]
    fn test_for_desugars_to_block_and_while() {
        let program = parse_source("for (var i = 0; i < 3; i = i + 1) print i;").unwrap();
        let Stmt::Block(outer) = &program[0] else {
            panic!("Expected desugared block");
        };
        assert_eq!(outer.statements.len(), 2);
        assert!(matches!(outer.statements[0], Stmt::Var(_)));

        let Stmt::While(while_stmt) = &outer.statements[1] else {
            panic!("Expected while loop");
        };
        let Stmt::Block(body) = while_stmt.body.as_ref() else {
            panic!("Expected loop body block");
        };
        assert_eq!(body.statements.len(), 2);
        assert!(matches!(body.statements[0], Stmt::Print(_)));
        assert!(matches!(body.statements[1], Stmt::Expression(_)));
    }

    #[test]
    fn test_for_without_clauses_loops_on_true() {
        let program = parse_source("for (;;) print 1;").unwrap();
        let Stmt::Block(outer) = &program[0] else {
            panic!("Expected desugared block");
        };
        assert_eq!(outer.statements.len(), 1);
        let Stmt::While(while_stmt) = &outer.statements[0] else {
            panic!("Expected while loop");
        };
        assert_eq!(while_stmt.cond, Expr::literal(true, 1));
    }

    #[test]
    fn test_unclosed_block() {
        let err = parse_source("{ print 1;").unwrap_err();
        assert_eq!(err.to_string(), "Expect '}' after block.");
    }

    #[test]
    fn test_missing_variable_name() {
        let err = parse_source("var 1 = 2;").unwrap_err();
        assert_eq!(err.to_string(), "Expect variable name.");
    }
}
