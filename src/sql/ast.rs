//! Abstract syntax tree definitions for the strata-db SQL dialect.
//!
//! Every statement parsed by the [`super::parser::Parser`] is represented
//! as a tree of the types defined here. The statement and expression kinds
//! are closed sets — the executor matches them exhaustively and the sets
//! never grow at runtime.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sql::lexer::Literal;
use crate::types::DataType;

/// A top-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(SelectStatement),
    Create(CreateStatement),
    Insert(InsertStatement),
}

/// A `SELECT` statement.
///
/// Projection terms are kept as expressions: the parser can build
/// arbitrary arithmetic here, and the executor is the layer that insists
/// on bare column names.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    pub columns: Vec<Expr>,
    pub table: String,
    pub where_clause: Option<Expr>,
}

/// A `CREATE TABLE` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateStatement {
    pub table: String,
    pub columns: Vec<ColumnDef>,
}

/// An `INSERT INTO` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    pub table: String,
    pub columns: InsertColumns,
    /// Value literals, positionally aligned with `columns`.
    pub values: Vec<Expr>,
}

/// The column side of an `INSERT`: either the `*` wildcard (all columns in
/// declaration order) or an explicit, possibly empty, list of names.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertColumns {
    Wildcard,
    Named(Vec<String>),
}

/// A column definition inside `CREATE TABLE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: DataType,
    pub nullable: bool,
    pub primary_key: bool,
    /// `Some` only when the column carries a `REFERENCES t(c)` clause.
    pub references: Option<ForeignKeyRef>,
}

/// A foreign-key target, `table.column`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeyRef {
    pub table: String,
    pub column: String,
}

impl fmt::Display for ForeignKeyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table, self.column)
    }
}

/// A session-level command, issued outside any database.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommand {
    CreateDatabase(String),
    DropDatabase(String),
    /// A bare database name: make it the session's current database.
    Enter(String),
}

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number, a quoted string, or a bare identifier.
    Literal(Literal),
    /// Unary negation.
    Unary { op: UnaryOp, expr: Box<Expr> },
    /// Equality, comparison, or arithmetic.
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
    /// `AND` / `OR` combination.
    Logical {
        left: Box<Expr>,
        op: LogicalOp,
        right: Box<Expr>,
    },
    /// A parenthesised expression.
    Grouping(Box<Expr>),
    /// `expr AS alias` in a projection list.
    Alias { expr: Box<Expr>, alias: String },
}

/// Binary operators, low to high precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Equals,
    Greater,
    GreaterEq,
    Less,
    LessEq,
    Add,
    Sub,
    Mul,
    Div,
}

/// Logical connectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
}
