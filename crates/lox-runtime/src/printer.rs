//! Parenthesised prefix rendering of the AST
//!
//! `-123 * (45.67)` prints as `(* (- 123) (grouping 45.67))`. Used by tests
//! and the CLI's `--ast` mode.

use crate::ast::{Expr, Stmt};

/// Render an expression
pub fn print_expr(expr: &Expr) -> String {
    match expr {
        Expr::Literal(lit) => lit.value.to_string(),
        Expr::Grouping(group) => parenthesize("grouping", [print_expr(&group.expr)]),
        Expr::Unary(unary) => parenthesize(unary.op.as_str(), [print_expr(&unary.expr)]),
        Expr::Binary(binary) => parenthesize(
            binary.op.as_str(),
            [print_expr(&binary.left), print_expr(&binary.right)],
        ),
        Expr::Logical(logical) => parenthesize(
            logical.op.as_str(),
            [print_expr(&logical.left), print_expr(&logical.right)],
        ),
        Expr::Variable(id) => parenthesize("var", [id.name.clone()]),
        Expr::Assign(assign) => parenthesize(
            "assign",
            [assign.name.name.clone(), print_expr(&assign.value)],
        ),
    }
}

/// Render a statement
pub fn print_stmt(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Expression(expr_stmt) => parenthesize(";", [print_expr(&expr_stmt.expr)]),
        Stmt::Print(print) => parenthesize("print", [print_expr(&print.expr)]),
        Stmt::Var(decl) => {
            parenthesize("var", [decl.name.name.clone(), print_expr(&decl.init)])
        }
        Stmt::Block(block) => parenthesize("block", block.statements.iter().map(print_stmt)),
        Stmt::If(if_stmt) => {
            let mut parts = vec![
                print_expr(&if_stmt.cond),
                print_stmt(&if_stmt.then_branch),
            ];
            if let Some(else_branch) = &if_stmt.else_branch {
                parts.push(print_stmt(else_branch));
            }
            parenthesize("if", parts)
        }
        Stmt::While(while_stmt) => parenthesize(
            "while",
            [print_expr(&while_stmt.cond), print_stmt(&while_stmt.body)],
        ),
    }
}

fn parenthesize(name: &str, parts: impl IntoIterator<Item = String>) -> String {
    let mut out = format!("({}", name);
    for part in parts {
        out.push(' ');
        out.push_str(&part);
    }
    out.push(')');
    out
}
