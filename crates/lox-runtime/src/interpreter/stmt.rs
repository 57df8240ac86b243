//! Statement execution

use crate::ast::*;
use crate::error::RuntimeError;
use crate::interpreter::Interpreter;
use crate::output::Output;

impl<O: Output> Interpreter<O> {
    /// Execute a statement
    pub(super) fn eval_statement(&mut self, stmt: &Stmt) -> Result<(), RuntimeError> {
        match stmt {
            Stmt::Expression(expr_stmt) => {
                self.eval_expr(&expr_stmt.expr)?;
                Ok(())
            }
            Stmt::Print(print) => {
                let value = self.eval_expr(&print.expr)?;
                self.output.print(&value.to_string());
                Ok(())
            }
            Stmt::Var(decl) => self.eval_var_decl(decl),
            Stmt::Block(block) => self.eval_block(block),
            Stmt::If(if_stmt) => self.eval_if(if_stmt),
            Stmt::While(while_stmt) => self.eval_while(while_stmt),
        }
    }

    /// Define a variable in the current scope
    fn eval_var_decl(&mut self, decl: &VarDecl) -> Result<(), RuntimeError> {
        let value = self.eval_expr(&decl.init)?;
        self.environment
            .borrow_mut()
            .define(decl.name.name.clone(), value);
        Ok(())
    }

    /// Execute a block in its own scope
    pub(super) fn eval_block(&mut self, block: &Block) -> Result<(), RuntimeError> {
        self.with_child_scope(|interp| {
            for stmt in &block.statements {
                interp.eval_statement(stmt)?;
            }
            Ok(())
        })
    }

    /// Execute an if statement
    fn eval_if(&mut self, if_stmt: &IfStmt) -> Result<(), RuntimeError> {
        if self.eval_expr(&if_stmt.cond)?.is_truthy() {
            self.eval_statement(&if_stmt.then_branch)
        } else if let Some(else_branch) = &if_stmt.else_branch {
            self.eval_statement(else_branch)
        } else {
            Ok(())
        }
    }

    /// Execute a while loop
    fn eval_while(&mut self, while_stmt: &WhileStmt) -> Result<(), RuntimeError> {
        while self.eval_expr(&while_stmt.cond)?.is_truthy() {
            self.eval_statement(&while_stmt.body)?;
        }
        Ok(())
    }
}
