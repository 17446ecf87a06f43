//! SortState - Column Sort Interaction State

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::row::{Row, sort_key};

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Header arrow
    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

/// Active sort column and direction for one table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    /// Active column key, if any
    pub column: Option<String>,
    /// Direction of the active column
    pub direction: SortDirection,
}

impl SortState {
    /// Create from caller defaults
    pub fn new(column: Option<String>, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Handle a header click.
    ///
    /// The active column flips direction; any other column becomes active
    /// ascending.
    pub fn toggle(&mut self, key: &str) {
        if self.column.as_deref() == Some(key) {
            self.direction = self.direction.toggled();
        } else {
            self.column = Some(key.to_string());
            self.direction = SortDirection::Asc;
        }
        debug!(column = key, direction = ?self.direction, "Sort changed");
    }

    /// Whether `key` is the active column
    pub fn is_active(&self, key: &str) -> bool {
        self.column.as_deref() == Some(key)
    }

    /// Rows in display order.
    ///
    /// Sorts a copy of the row references; the caller's slice keeps its order.
    pub fn apply<'a>(&self, rows: &'a [Row]) -> Vec<&'a Row> {
        let mut sorted: Vec<&Row> = rows.iter().collect();
        if let Some(column) = &self.column {
            // Equal keys keep their original relative order in both directions.
            sorted.sort_by(|a, b| match self.direction {
                SortDirection::Asc => compare_values(a.get(column), b.get(column)),
                SortDirection::Desc => compare_values(b.get(column), a.get(column)),
            });
        }
        sorted
    }
}

/// Compare two row values by their string form
pub fn compare_values(a: Option<&serde_json::Value>, b: Option<&serde_json::Value>) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}
