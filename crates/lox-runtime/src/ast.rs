//! Abstract Syntax Tree (AST) definitions
//!
//! Two closed node sets: [`Expr`] and [`Stmt`]. Every node records the
//! source line of its defining token so runtime errors can point back at
//! the program text.

use crate::value::Value;
use std::fmt;

/// A parsed program
pub type Program = Vec<Stmt>;

/// Variable name as written in the source
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
    pub line: u32,
}

impl Identifier {
    pub fn new(name: impl Into<String>, line: u32) -> Self {
        Self {
            name: name.into(),
            line,
        }
    }
}

/// Expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    Grouping(GroupingExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Logical(LogicalExpr),
    Variable(Identifier),
    Assign(AssignExpr),
}

impl Expr {
    /// Source line of the expression's defining token
    pub fn line(&self) -> u32 {
        match self {
            Expr::Literal(lit) => lit.line,
            Expr::Grouping(group) => group.line,
            Expr::Unary(unary) => unary.line,
            Expr::Binary(binary) => binary.line,
            Expr::Logical(logical) => logical.line,
            Expr::Variable(id) => id.line,
            Expr::Assign(assign) => assign.line,
        }
    }

    /// Literal expression
    pub fn literal(value: impl Into<Value>, line: u32) -> Self {
        Expr::Literal(LiteralExpr {
            value: value.into(),
            line,
        })
    }

    /// `nil` literal
    pub fn nil(line: u32) -> Self {
        Expr::Literal(LiteralExpr {
            value: Value::Nil,
            line,
        })
    }
}

/// Literal value
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: Value,
    pub line: u32,
}

/// Parenthesised expression
#[derive(Debug, Clone, PartialEq)]
pub struct GroupingExpr {
    pub expr: Box<Expr>,
    pub line: u32,
}

/// Unary expression
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub expr: Box<Expr>,
    pub line: u32,
}

/// Binary arithmetic, comparison or equality expression
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub line: u32,
}

/// Short-circuiting `and` / `or`
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalExpr {
    pub op: LogicalOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub line: u32,
}

/// Assignment to an existing variable
#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpr {
    pub name: Identifier,
    pub value: Box<Expr>,
    pub line: u32,
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `-`
    Negate,
    /// `!`
    Not,
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

/// Logical operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

impl UnaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Negate => "-",
            UnaryOp::Not => "!",
        }
    }
}

impl BinaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
        }
    }
}

impl LogicalOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOp::And => "and",
            LogicalOp::Or => "or",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statement
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(ExprStmt),
    Print(PrintStmt),
    Var(VarDecl),
    Block(Block),
    If(IfStmt),
    While(WhileStmt),
}

impl Stmt {
    /// Source line of the statement's first token
    pub fn line(&self) -> u32 {
        match self {
            Stmt::Expression(stmt) => stmt.line,
            Stmt::Print(stmt) => stmt.line,
            Stmt::Var(decl) => decl.line,
            Stmt::Block(block) => block.line,
            Stmt::If(stmt) => stmt.line,
            Stmt::While(stmt) => stmt.line,
        }
    }
}

/// Expression evaluated for its side effects
#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    pub expr: Expr,
    pub line: u32,
}

/// `print expr;`
#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    pub expr: Expr,
    pub line: u32,
}

/// `var name = init;`
///
/// A missing initializer is stored as a `nil` literal.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: Identifier,
    pub init: Expr,
    pub line: u32,
}

/// `{ ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub line: u32,
}

/// `if (cond) then else otherwise`
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub cond: Expr,
    pub then_branch: Box<Stmt>,
    pub else_branch: Option<Box<Stmt>>,
    pub line: u32,
}

/// `while (cond) body`
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub cond: Expr,
    pub body: Box<Stmt>,
    pub line: u32,
}
