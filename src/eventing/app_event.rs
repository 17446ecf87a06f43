//! AppEvent - Application Event Enum
//!
//! Intents raised by views and tables, applied to the store entities.

use chrono::{DateTime, Local};

use crate::i18n::Locale;
use crate::state::deals_state::TableId;
use crate::state::edit_state::CellValue;
use crate::state::notice_state::NoticeLevel;

/// Application events for view -> store communication
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A table proposed a new selection
    SelectionChanged { table: TableId, ids: Vec<String> },

    /// A cell was edited
    RowUpdated {
        table: TableId,
        row_id: String,
        key: String,
        value: CellValue,
    },

    /// A row delete was requested
    RowDeleted { table: TableId, row_id: String },

    /// User-facing notice
    Notice {
        level: NoticeLevel,
        message: String,
        timestamp: DateTime<Local>,
    },

    /// Locale switched
    LocaleChanged { locale: Locale },
}

impl AppEvent {
    /// Create a notice event with current timestamp
    pub fn notice(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self::Notice {
            level,
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    /// Create a success notice
    pub fn success(message: impl Into<String>) -> Self {
        Self::notice(NoticeLevel::Success, message)
    }
}
