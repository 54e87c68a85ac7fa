//! Schema-enforcing table store for strata-db.
//!
//! A [`Table`] couples an immutable schema (its ordered [`ColumnDef`]s)
//! with a row store keyed by the composite primary key. The key is the
//! concatenation of the values of every primary-key column, in declaration
//! order, so a table with one key column and a table with a composite key
//! behave identically.
//!
//! # Positions
//!
//! Every real column has a projection position 1..=n in `positions`;
//! position 0 is reserved for the synthetic column
//! [`PRIMARY_KEY_COLUMN`], which projects the row's composite key. Rows
//! themselves are stored as [`StoredRow`] — key and fields held apart, so
//! no arithmetic on a flattened array is ever needed.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StrataError};
use crate::sql::ast::ColumnDef;

/// The synthetic column name that projects a row's composite primary key.
pub const PRIMARY_KEY_COLUMN: &str = "primary_key";

/// One stored row: the computed composite key plus the field values in
/// column declaration order. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRow {
    pub primary_key: String,
    pub fields: Vec<String>,
}

/// A table: schema, name→position map, primary-key layout, and rows.
///
/// The schema is fixed at construction; only the row store changes
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    name: String,
    columns: Vec<ColumnDef>,
    /// Column name → projection position (0 = composite primary key).
    positions: HashMap<String, usize>,
    /// 0-based indices into `columns` of the key components, in
    /// declaration order.
    pk_indexes: Vec<usize>,
    rows: HashMap<String, StoredRow>,
}

impl Table {
    /// Build a table from its declared columns.
    ///
    /// Validation (unique names, at least one key, foreign-key targets)
    /// belongs to the executor, which never constructs a `Table` from an
    /// invalid definition.
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDef>) -> Self {
        let mut positions = HashMap::with_capacity(columns.len() + 1);
        let mut pk_indexes = Vec::new();
        for (i, column) in columns.iter().enumerate() {
            positions.insert(column.name.clone(), i + 1);
            if column.primary_key {
                pk_indexes.push(i);
            }
        }
        positions.insert(PRIMARY_KEY_COLUMN.to_string(), 0);

        Table {
            name: name.into(),
            columns,
            positions,
            pk_indexes,
            rows: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared columns, in declaration order.
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Whether `name` resolves to a projectable column. This includes the
    /// synthetic [`PRIMARY_KEY_COLUMN`].
    pub fn has_column(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Look up a real column's definition by name.
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// The columns that must receive a value on insertion.
    pub fn non_nullable_columns(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter().filter(|c| !c.nullable)
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn composite_key(&self, values: &[String]) -> String {
        self.pk_indexes
            .iter()
            .map(|&i| values[i].as_str())
            .collect()
    }

    /// Insert a full positional row (one value per declared column).
    ///
    /// The composite key is computed from the primary-key columns; a row
    /// with the same key already in the store is a uniqueness violation
    /// and leaves the table unchanged.
    pub fn insert(&mut self, values: Vec<String>) -> Result<()> {
        if values.len() != self.columns.len() {
            return Err(StrataError::ConstraintViolation(format!(
                "table {} expects {} values, got {}",
                self.name,
                self.columns.len(),
                values.len()
            )));
        }

        let key = self.composite_key(&values);
        if self.rows.contains_key(&key) {
            return Err(StrataError::ConstraintViolation(format!(
                "duplicate primary key '{key}' in table {}",
                self.name
            )));
        }

        self.rows.insert(
            key.clone(),
            StoredRow {
                primary_key: key,
                fields: values,
            },
        );
        Ok(())
    }

    /// Project the requested columns out of every stored row.
    ///
    /// A `"*"` entry expands to all real column names in declaration
    /// order; any other name must resolve through the position map. Row
    /// order is unspecified (the backing store is unordered); at most
    /// `limit` rows are returned when a limit is supplied.
    pub fn select(&self, requested: &[String], limit: Option<usize>) -> Result<Vec<Vec<String>>> {
        let names = self.resolve_projection(requested);

        let mut indices = Vec::with_capacity(names.len());
        for name in &names {
            match self.positions.get(name.as_str()) {
                Some(&pos) => indices.push(pos),
                None => {
                    return Err(StrataError::ColumnNotFound(format!(
                        "{}.{name}",
                        self.name
                    )));
                }
            }
        }

        let mut result = Vec::new();
        for row in self.rows.values() {
            if limit.is_some_and(|n| result.len() >= n) {
                break;
            }
            result.push(
                indices
                    .iter()
                    .map(|&pos| self.position_value(row, pos).to_string())
                    .collect(),
            );
        }
        Ok(result)
    }

    /// The projection header for a request: `"*"` expanded, everything
    /// else passed through.
    pub fn resolve_projection(&self, requested: &[String]) -> Vec<String> {
        let mut names = Vec::with_capacity(requested.len());
        for name in requested {
            if name == "*" {
                names.extend(self.columns.iter().map(|c| c.name.clone()));
            } else {
                names.push(name.clone());
            }
        }
        names
    }

    fn position_value<'a>(&self, row: &'a StoredRow, pos: usize) -> &'a str {
        if pos == 0 {
            &row.primary_key
        } else {
            &row.fields[pos - 1]
        }
    }

    /// The value of one column in the row with the given primary key.
    pub fn row_value(&self, primary_key: &str, column: &str) -> Option<&str> {
        let pos = *self.positions.get(column)?;
        let row = self.rows.get(primary_key)?;
        Some(self.position_value(row, pos))
    }
}

// ===========================================================================
// Tests
// ===========================================================================
