//! DealsState - Row Data Owned by the Dashboard
//!
//! The single owner of every table's rows and selection. Tables only propose
//! changes; they land here through dispatched intents.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::deal::{DeskData, to_rows};
use crate::domain::row::{Row, js_float};
use crate::error::Result;
use crate::state::edit_state::is_blank_row_ignoring;
use crate::state::selection_state::SelectionSet;

/// The tables on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableId {
    Deals,
    Documents,
    Parties,
    Commission,
}

impl TableId {
    pub fn label(&self) -> &'static str {
        match self {
            TableId::Deals => "deals",
            TableId::Documents => "documents",
            TableId::Parties => "parties",
            TableId::Commission => "commission",
        }
    }
}

/// Row data and selections for the dashboard
#[derive(Debug, Clone, Default)]
pub struct DealsState {
    id_key: String,
    tables: HashMap<TableId, Vec<Row>>,
    selections: HashMap<TableId, SelectionSet>,
    /// Commission pool the split is taken from
    pub total_commission: f64,
}

impl DealsState {
    /// Build the store from typed desk data
    pub fn from_data(data: &DeskData, id_key: impl Into<String>) -> Result<Self> {
        let mut tables = HashMap::new();
        tables.insert(TableId::Deals, to_rows(&data.transactions)?);
        tables.insert(TableId::Documents, to_rows(&data.documents)?);
        tables.insert(TableId::Parties, to_rows(&data.parties)?);
        tables.insert(TableId::Commission, to_rows(&data.commission.parties)?);

        let mut state = Self {
            id_key: id_key.into(),
            tables,
            selections: HashMap::new(),
            total_commission: data.commission.total_commission,
        };
        state.ensure_blank_commission_row(None);
        Ok(state)
    }

    pub fn id_key(&self) -> &str {
        &self.id_key
    }

    /// Rows of a table in caller order
    pub fn rows(&self, table: TableId) -> &[Row] {
        self.tables.get(&table).map(Vec::as_slice).unwrap_or_default()
    }

    /// Current selection of a table
    pub fn selection(&self, table: TableId) -> SelectionSet {
        self.selections.get(&table).cloned().unwrap_or_default()
    }

    /// Accept a proposed selection
    pub fn set_selection(&mut self, table: TableId, ids: Vec<String>) {
        debug!(table = table.label(), count = ids.len(), "Selection changed");
        self.selections.insert(table, SelectionSet::from_ids(ids));
    }

    /// Write one field of one row; returns whether the row exists
    pub fn update_row(&mut self, table: TableId, row_id: &str, key: &str, value: Value) -> bool {
        let id_key = self.id_key.clone();
        let Some(row) = self
            .tables
            .get_mut(&table)
            .and_then(|rows| rows.iter_mut().find(|row| row.id(&id_key) == row_id))
        else {
            warn!(table = table.label(), row_id, "Update for unknown row");
            return false;
        };

        row.set(key, value);
        if table == TableId::Commission {
            self.ensure_blank_commission_row(Some(row_id));
        }
        true
    }

    /// Remove a row; returns whether it existed
    pub fn delete_row(&mut self, table: TableId, row_id: &str) -> bool {
        let id_key = self.id_key.clone();
        let Some(rows) = self.tables.get_mut(&table) else {
            return false;
        };
        let before = rows.len();
        rows.retain(|row| row.id(&id_key) != row_id);
        let removed = rows.len() != before;

        if removed {
            let remaining = self.tables.get(&table).map(Vec::as_slice).unwrap_or_default();
            if let Some(selection) = self.selections.get_mut(&table) {
                selection.retain_rows(remaining, &id_key);
            }
            if table == TableId::Commission {
                self.ensure_blank_commission_row(None);
            }
        }
        removed
    }

    /// Whether a commission row is the trailing "new entry" row
    pub fn is_blank_entry(&self, row: &Row) -> bool {
        is_blank_row_ignoring(row, &[self.id_key.as_str()])
    }

    /// Keep exactly one blank row at the end of the commission split.
    ///
    /// Blank rows followed by a filled row are dropped. Of the trailing blank
    /// rows one survives, preferably `edited` so an input in it stays put.
    fn ensure_blank_commission_row(&mut self, edited: Option<&str>) {
        let id_key = self.id_key.clone();
        let rows = self.tables.entry(TableId::Commission).or_default();
        let blank: Vec<bool> = rows
            .iter()
            .map(|row| is_blank_row_ignoring(row, &[id_key.as_str()]))
            .collect();

        let tail = blank.iter().rposition(|b| !b).map_or(0, |last_filled| last_filled + 1);
        let keep = (tail..rows.len())
            .find(|&i| edited.is_some_and(|id| rows[i].id(&id_key) == id))
            .or((tail < rows.len()).then_some(tail));

        if blank.iter().filter(|b| **b).count() > usize::from(keep.is_some()) {
            let before = rows.len();
            let mut index = 0;
            rows.retain(|_| {
                let retained = !blank[index] || Some(index) == keep;
                index += 1;
                retained
            });
            debug!(removed = before - rows.len(), "Dropped extra blank commission rows");
        }
        if keep.is_some() {
            return;
        }

        let blank = Row::new()
            .with(id_key.as_str(), uuid::Uuid::new_v4().to_string())
            .with("name", "")
            .with("role", "")
            .with("percentage", Value::Null)
            .with("amount", Value::Null);
        debug!(row_id = %blank.id(&id_key), "Appended blank commission row");
        rows.push(blank);
    }

    /// Sum of commission amounts
    pub fn commission_total(&self) -> f64 {
        self.rows(TableId::Commission)
            .iter()
            .filter_map(|row| row.value("amount").as_f64())
            .sum()
    }

    /// Sum of commission percentages, as display text
    pub fn commission_percent_text(&self) -> String {
        let percent: f64 = self
            .rows(TableId::Commission)
            .iter()
            .filter_map(|row| row.value("percentage").as_f64())
            .sum();
        format!("{}%", js_float(percent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn state() -> DealsState {
        let data = DeskData::sample().expect("sample data");
        DealsState::from_data(&data, "id").expect("state")
    }

    #[test]
    fn test_commission_has_trailing_blank_row() {
        let state = state();
        let rows = state.rows(TableId::Commission);
        assert_eq!(rows.len(), 3);
        assert!(state.is_blank_entry(&rows[2]));
        assert!(!state.is_blank_entry(&rows[0]));
    }

    #[test]
    fn test_filling_blank_row_appends_another() {
        let mut state = state();
        let blank_id = state.rows(TableId::Commission)[2].id("id");

        assert!(state.update_row(TableId::Commission, &blank_id, "name", json!("Escrow")));
        let rows = state.rows(TableId::Commission);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[2].value("name"), &json!("Escrow"));
        assert!(state.is_blank_entry(&rows[3]));
    }

    #[test]
    fn test_emptied_row_leaves_one_blank_row() {
        let mut state = state();
        for key in ["name", "role"] {
            state.update_row(TableId::Commission, "C-1", key, json!(""));
        }
        for key in ["percentage", "amount"] {
            state.update_row(TableId::Commission, "C-1", key, Value::Null);
        }

        let rows = state.rows(TableId::Commission);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id("id"), "C-2");
        assert!(state.is_blank_entry(&rows[1]));
        assert_eq!(rows.iter().filter(|row| state.is_blank_entry(row)).count(), 1);
    }

    #[test]
    fn test_clearing_new_entry_keeps_the_edited_row() {
        let mut state = state();
        let entry_id = state.rows(TableId::Commission)[2].id("id");

        state.update_row(TableId::Commission, &entry_id, "name", json!("E"));
        assert_eq!(state.rows(TableId::Commission).len(), 4);

        state.update_row(TableId::Commission, &entry_id, "name", json!(""));
        let rows = state.rows(TableId::Commission);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].id("id"), entry_id);
        assert!(state.is_blank_entry(&rows[2]));
    }

    #[test]
    fn test_update_unknown_row_is_ignored() {
        let mut state = state();
        assert!(!state.update_row(TableId::Deals, "nope", "price", json!(1)));
    }

    #[test]
    fn test_delete_row_prunes_selection() {
        let mut state = state();
        state.set_selection(TableId::Commission, vec!["C-1".into(), "C-2".into()]);

        assert!(state.delete_row(TableId::Commission, "C-1"));
        assert!(!state.delete_row(TableId::Commission, "C-1"));
        assert_eq!(state.selection(TableId::Commission).ids(), ["C-2"]);
        assert_eq!(state.rows(TableId::Commission).len(), 2);
    }

    #[test]
    fn test_commission_totals() {
        let state = state();
        assert_eq!(state.commission_total(), 14550.0);
        assert_eq!(state.commission_percent_text(), "100%");
    }

    #[test]
    fn test_selection_round_trip() {
        let mut state = state();
        assert!(state.selection(TableId::Documents).is_empty());
        state.set_selection(TableId::Documents, vec!["D-2".into(), "D-1".into()]);
        assert_eq!(state.selection(TableId::Documents).ids(), ["D-2", "D-1"]);
    }
}
