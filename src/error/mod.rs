//! Unified error handling for strata-db.
//!
//! This module defines [`StrataError`], the single error type propagated
//! throughout the engine — from the SQL front-end, through statement
//! execution over the table store, up to the persistence and session
//! layers.
//!
//! Lexical problems (unterminated string, unexpected character) are *not*
//! errors: scanning continues past them and they surface as
//! [`Diagnostic`](crate::sql::lexer::Diagnostic)s on the lexer output.
//! Everything else is a `StrataError`, grouped by subsystem so that callers
//! can match on the category without inspecting free-form strings.
//!
//! A convenience [`Result<T>`] type alias is re-exported so that callers can
//! write `Result<T>` instead of `std::result::Result<T, StrataError>`.

use std::io;

/// The canonical error type for all strata-db operations.
///
/// Every fallible function in the codebase returns this type (via the
/// [`Result`] alias). Parse failures are fatal to the statement being
/// parsed; schema failures are raised before any mutation takes place;
/// execution failures are reported per statement and never abort the
/// rest of a batch.
#[derive(Debug, thiserror::Error)]
pub enum StrataError {
    /// The statement text could not be parsed. Carries the line of the
    /// token at which parsing gave up.
    #[error("parse error at line {line}: {message}")]
    Parse { message: String, line: u32 },

    /// A table with the given name already exists.
    #[error("table already exists: {0}")]
    DuplicateTable(String),

    /// A column name appears more than once within one table definition.
    #[error("duplicate column: {0}")]
    DuplicateColumn(String),

    /// A `CREATE TABLE` declared no primary-key column.
    #[error("table {0} must have at least one primary key column")]
    MissingPrimaryKey(String),

    /// A foreign key references a missing table/column, or its own table.
    #[error("invalid foreign key: {0}")]
    ForeignKey(String),

    /// The referenced table does not exist in the database.
    #[error("table not found: {0}")]
    TableNotFound(String),

    /// The referenced column does not exist on the target table.
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    /// A constraint was violated. This covers primary-key uniqueness and
    /// `NOT NULL` at insertion time.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// The statement or construct is recognised but not supported by this
    /// engine — a capability gap rather than a grammar error.
    #[error("not implemented: {0}")]
    NotImplemented(String),

    /// An I/O error originating from the filesystem layer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A database value could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The file exists but does not contain the expected database.
    #[error("corrupt database file: {0}")]
    CorruptDatabase(String),

    /// No database with the given name is known to the session.
    #[error("database not found: {0}")]
    DatabaseNotFound(String),
}

/// A specialised [`Result`] type for strata-db operations.
pub type Result<T> = std::result::Result<T, StrataError>;
