//! # strata-db
//!
//! An embeddable relational query engine. Statement text flows through a
//! hand-written lexer and a recursive-descent parser into a closed AST,
//! and an executor applies each statement to a schema-enforcing in-memory
//! table store (primary keys, foreign keys, nullability).
//!
//! The core is single-threaded and fully synchronous, and does no I/O;
//! persistence lives in [`storage`] and the multi-database session layer
//! in [`session`].

pub mod error;
pub mod types;
pub mod sql;
pub mod table;
pub mod execution;
pub mod storage;
pub mod session;

pub use error::{Result, StrataError};
pub use execution::StatementOutput;
pub use table::{StoredRow, Table, PRIMARY_KEY_COLUMN};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::execution::TableRegistry;
use crate::sql::lexer::{Diagnostic, Lexer};
use crate::sql::parser::Parser;

/// The rows returned by a `SELECT`: a projection header plus one string
/// tuple per row, in the header's order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl IntoIterator for ResultSet {
    type Item = Vec<String>;
    type IntoIter = std::vec::IntoIter<Vec<String>>;
    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

/// The outcome of one [`Database::run_query`] batch.
///
/// Each statement contributes one entry to `results`, in input order; a
/// failed statement is recorded there without stopping the statements
/// after it. `diagnostics` carries the non-fatal lexical reports.
#[derive(Debug)]
pub struct BatchOutcome {
    pub results: Vec<Result<StatementOutput>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl BatchOutcome {
    /// Whether every statement in the batch applied.
    pub fn all_ok(&self) -> bool {
        self.results.iter().all(|r| r.is_ok())
    }

    /// The first failure in the batch, if any.
    pub fn first_error(&self) -> Option<&StrataError> {
        self.results.iter().find_map(|r| r.as_ref().err())
    }
}

/// An in-memory database: a named table registry plus the statement
/// executor that drives it.
///
/// A `Database` owns its tables for its whole lifetime and holds no
/// ambient state; everything it needs is constructed with it. The
/// [`storage`] collaborator serializes this entire structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Database {
    name: String,
    tables: TableRegistry,
}

impl Database {
    /// Create an empty database.
    pub fn new(name: impl Into<String>) -> Self {
        Database {
            name: name.into(),
            tables: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// The names of all registered tables, sorted for stable display.
    pub fn table_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Run a batch of statements.
    ///
    /// The text is lexed once (collecting non-fatal diagnostics), then
    /// statements are parsed and executed one at a time. A statement that
    /// fails to parse or execute contributes its error to the outcome and
    /// the batch moves on to the next statement; nothing of the failed
    /// statement's effect is applied.
    pub fn run_query(&mut self, text: &str) -> BatchOutcome {
        let lexed = Lexer::new(text).tokenize();
        let mut parser = Parser::new(lexed.tokens);

        let mut results = Vec::new();
        while let Some(parsed) = parser.next_statement() {
            match parsed {
                Ok(stmt) => results.push(execution::execute_statement(&stmt, &mut self.tables)),
                Err(err) => results.push(Err(err)),
            }
        }

        BatchOutcome {
            results,
            diagnostics: lexed.diagnostics,
        }
    }
}
