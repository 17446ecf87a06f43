//! Deals Controller
//!
//! Turns table callbacks into dispatched intents.

use gpui::{App, SharedString};

use crate::app::entities::AppEntities;
use crate::eventing::app_event::AppEvent;
use crate::state::deals_state::TableId;
use crate::state::edit_state::CellValue;

/// Deals page controller
#[derive(Clone)]
pub struct DealsController {
    entities: AppEntities,
}

impl DealsController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Accept a selection proposed by a table
    pub fn change_selection(&self, table: TableId, ids: Vec<String>, cx: &mut App) {
        self.entities
            .dispatch(AppEvent::SelectionChanged { table, ids }, cx);
    }

    /// Commit one edited cell
    pub fn update_row(&self, table: TableId, row_id: &str, key: &str, value: CellValue, cx: &mut App) {
        self.entities.dispatch(
            AppEvent::RowUpdated {
                table,
                row_id: row_id.to_string(),
                key: key.to_string(),
                value,
            },
            cx,
        );
    }

    /// Remove a row
    pub fn delete_row(&self, table: TableId, row_id: &str, cx: &mut App) {
        self.entities.dispatch(
            AppEvent::RowDeleted {
                table,
                row_id: row_id.to_string(),
            },
            cx,
        );
    }

    /// Forward a table notice to the notice feed
    pub fn notice(&self, message: SharedString, cx: &mut App) {
        self.entities.dispatch(AppEvent::success(message.to_string()), cx);
    }
}
