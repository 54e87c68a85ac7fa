//! Column type system for strata-db.
//!
//! The engine recognises two declared column types, `NUMBER` and `STRING`,
//! matching the `number`/`string` keywords of the SQL dialect. Row values
//! are stored as text regardless of the declared type; [`render_number`]
//! defines the canonical text form of a numeric literal so that a value
//! inserted as `23` is stored and projected as `"23"`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The declared type of a column, from the `CREATE TABLE` statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// Declared with the `number` keyword.
    Number,
    /// Declared with the `string` keyword.
    String,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Number => write!(f, "NUMBER"),
            DataType::String => write!(f, "STRING"),
        }
    }
}

/// Render a numeric literal in its canonical row-value form.
///
/// Whole numbers drop the fractional part (`23.0` → `"23"`); everything
/// else uses the shortest representation that round-trips through `f64`.
pub fn render_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
