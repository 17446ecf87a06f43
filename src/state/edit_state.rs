//! EditState - Editable Grid Cell State
//!
//! Blank-row detection, typed cell values and focus bookkeeping for the
//! editable table. There is no draft buffer: every change to the focused
//! input is committed immediately.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use tracing::debug;

use crate::domain::row::{Row, holds_value, js_float};

/// Editing behavior of a column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    #[default]
    Text,
    Number,
    Currency,
}

/// A value reported for an edited cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Raw text from a text column
    Text(String),
    /// Coerced number; may be NaN or infinite
    Number(f64),
    /// Result of a caller-supplied parser
    Json(Value),
}

impl CellValue {
    /// Convert to JSON; non-finite numbers become `null`
    pub fn into_json(self) -> Value {
        match self {
            CellValue::Text(s) => Value::String(s),
            CellValue::Number(n) => Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null),
            CellValue::Json(value) => value,
        }
    }

    /// Whether this is a number that is not a number
    pub fn is_nan(&self) -> bool {
        matches!(self, CellValue::Number(n) if n.is_nan())
    }

    /// Display form, used in logs
    pub fn to_display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => js_float(*n),
            CellValue::Json(value) => value.to_string(),
        }
    }
}

/// Default blank-row test: no field holds a value.
///
/// Numbers always count as held, so a row with a `0` is not blank.
pub fn is_blank_row(row: &Row) -> bool {
    !row.values().any(holds_value)
}

/// Blank-row test that skips the given fields (typically the id)
pub fn is_blank_row_ignoring(row: &Row, skip: &[&str]) -> bool {
    !row
        .fields()
        .any(|(key, value)| !skip.contains(&key.as_str()) && holds_value(value))
}

/// Keys that release the focused cell without committing anything new
pub fn releases_focus(key: &str) -> bool {
    matches!(key, "escape" | "tab")
}

/// The focused cell of an editable table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveCell {
    pub row_id: String,
    pub key: String,
}

impl ActiveCell {
    pub fn new(row_id: impl Into<String>, key: impl Into<String>) -> Self {
        let cell = Self {
            row_id: row_id.into(),
            key: key.into(),
        };
        debug!(row_id = %cell.row_id, key = %cell.key, "Cell focused");
        cell
    }

    pub fn is(&self, row_id: &str, key: &str) -> bool {
        self.row_id == row_id && self.key == key
    }
}
