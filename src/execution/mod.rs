//! Statement execution for strata-db.
//!
//! Bridges the parsed AST and the table store. Every statement is
//! validated completely before any mutation — a failed `CREATE` registers
//! nothing and a failed `INSERT` stores nothing — so a statement either
//! applies in full or not at all.

use std::collections::HashMap;

use crate::error::{Result, StrataError};
use crate::sql::ast::*;
use crate::sql::lexer::Literal;
use crate::table::Table;
use crate::types::render_number;
use crate::ResultSet;

/// The registry of tables owned by one database.
pub type TableRegistry = HashMap<String, Table>;

/// The effect of one successfully executed statement.
#[derive(Debug)]
pub enum StatementOutput {
    Created { table: String },
    Inserted { table: String },
    Rows(ResultSet),
}

/// Execute one statement against the registry.
pub fn execute_statement(
    stmt: &Statement,
    tables: &mut TableRegistry,
) -> Result<StatementOutput> {
    match stmt {
        Statement::Create(create) => execute_create(create, tables),
        Statement::Select(select) => execute_select(select, tables),
        Statement::Insert(insert) => execute_insert(insert, tables),
    }
}

// ---- CREATE TABLE ----

fn execute_create(stmt: &CreateStatement, tables: &mut TableRegistry) -> Result<StatementOutput> {
    if tables.contains_key(&stmt.table) {
        return Err(StrataError::DuplicateTable(stmt.table.clone()));
    }

    for (i, column) in stmt.columns.iter().enumerate() {
        if stmt.columns[..i].iter().any(|c| c.name == column.name) {
            return Err(StrataError::DuplicateColumn(column.name.clone()));
        }
    }

    for column in &stmt.columns {
        if let Some(fk) = &column.references {
            if fk.table == stmt.table {
                return Err(StrataError::ForeignKey(format!(
                    "{fk} references the table being created"
                )));
            }
            let target = tables.get(&fk.table).ok_or_else(|| {
                StrataError::ForeignKey(format!("{fk}: table {} does not exist", fk.table))
            })?;
            if !target.has_column(&fk.column) {
                return Err(StrataError::ForeignKey(format!(
                    "{fk}: column {} does not exist in table {}",
                    fk.column, fk.table
                )));
            }
        }
    }

    if !stmt.columns.iter().any(|c| c.primary_key) {
        return Err(StrataError::MissingPrimaryKey(stmt.table.clone()));
    }

    tables.insert(
        stmt.table.clone(),
        Table::new(stmt.table.clone(), stmt.columns.clone()),
    );
    Ok(StatementOutput::Created {
        table: stmt.table.clone(),
    })
}

// ---- SELECT ----

fn execute_select(stmt: &SelectStatement, tables: &mut TableRegistry) -> Result<StatementOutput> {
    let table = tables
        .get(&stmt.table)
        .ok_or_else(|| StrataError::TableNotFound(stmt.table.clone()))?;

    // Every projection term must be a bare column name (or an alias of
    // one). The AST can hold richer expressions; they are gated here.
    let mut requested = Vec::with_capacity(stmt.columns.len());
    let mut header = Vec::with_capacity(stmt.columns.len());
    for term in &stmt.columns {
        match term {
            Expr::Literal(Literal::Text(name)) if name == "*" => {
                requested.push(name.clone());
                header.extend(table.columns().iter().map(|c| c.name.clone()));
            }
            Expr::Literal(Literal::Text(name)) => {
                require_column(table, &stmt.table, name)?;
                requested.push(name.clone());
                header.push(name.clone());
            }
            Expr::Alias { expr, alias } => {
                let Expr::Literal(Literal::Text(name)) = expr.as_ref() else {
                    return Err(projection_gate());
                };
                require_column(table, &stmt.table, name)?;
                requested.push(name.clone());
                header.push(alias.clone());
            }
            _ => return Err(projection_gate()),
        }
    }

    let rows = table.select(&requested, None)?;
    Ok(StatementOutput::Rows(ResultSet {
        columns: header,
        rows,
    }))
}

fn require_column(table: &Table, table_name: &str, column: &str) -> Result<()> {
    if table.has_column(column) {
        Ok(())
    } else {
        Err(StrataError::ColumnNotFound(format!(
            "{table_name}.{column}"
        )))
    }
}

fn projection_gate() -> StrataError {
    StrataError::NotImplemented(
        "expressions in a SELECT list; projection terms must be bare column names".into(),
    )
}

// ---- INSERT ----

fn execute_insert(stmt: &InsertStatement, tables: &mut TableRegistry) -> Result<StatementOutput> {
    let table = tables
        .get_mut(&stmt.table)
        .ok_or_else(|| StrataError::TableNotFound(stmt.table.clone()))?;

    let values: Vec<String> = stmt
        .values
        .iter()
        .map(literal_text)
        .collect::<Result<_>>()?;

    let row = match &stmt.columns {
        InsertColumns::Wildcard => {
            if values.len() > table.columns().len() {
                return Err(StrataError::ConstraintViolation(format!(
                    "table {} expects at most {} values, got {}",
                    stmt.table,
                    table.columns().len(),
                    values.len()
                )));
            }
            build_row(table, |i, _| values.get(i).cloned())?
        }
        InsertColumns::Named(names) => {
            for (i, name) in names.iter().enumerate() {
                if table.column(name).is_none() {
                    return Err(StrataError::ColumnNotFound(format!(
                        "{}.{name}",
                        stmt.table
                    )));
                }
                if names[..i].contains(name) {
                    return Err(StrataError::DuplicateColumn(name.clone()));
                }
            }
            if names.len() != values.len() {
                return Err(StrataError::ConstraintViolation(format!(
                    "expected {} values, got {}",
                    names.len(),
                    values.len()
                )));
            }
            build_row(table, |_, column| {
                names
                    .iter()
                    .position(|n| n == column)
                    .map(|i| values[i].clone())
            })?
        }
    };

    table.insert(row)?;
    Ok(StatementOutput::Inserted {
        table: stmt.table.clone(),
    })
}

/// Assemble the full positional row: supplied columns take their value,
/// unspecified nullable columns default to empty, unspecified
/// non-nullable columns fail the statement.
fn build_row(
    table: &Table,
    supplied: impl Fn(usize, &str) -> Option<String>,
) -> Result<Vec<String>> {
    let mut row = Vec::with_capacity(table.columns().len());
    for (i, column) in table.columns().iter().enumerate() {
        match supplied(i, &column.name) {
            Some(value) => row.push(value),
            None if column.nullable => row.push(String::new()),
            None => {
                return Err(StrataError::ConstraintViolation(format!(
                    "column {} is non-nullable and has no value",
                    column.name
                )));
            }
        }
    }
    Ok(row)
}

fn literal_text(expr: &Expr) -> Result<String> {
    match expr {
        Expr::Literal(Literal::Text(text)) => Ok(text.clone()),
        Expr::Literal(Literal::Number(value)) => Ok(render_number(*value)),
        _ => Err(StrataError::NotImplemented(
            "expression values in INSERT".into(),
        )),
    }
}

// ===========================================================================
// Tests
// ===========================================================================
