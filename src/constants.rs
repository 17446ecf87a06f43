//! Constants
//!
//! Centralized constants for layout, storage and table defaults.

/// Application directory name under the platform config/data dirs
pub const APP_DIR_NAME: &str = "dealdesk";

/// Config file name inside the config directory
pub const CONFIG_FILE: &str = "config.toml";

/// Log file prefix for the rolling file appender
pub const LOG_FILE_PREFIX: &str = "dealdesk.log";

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Row identifier field used when a table does not override it
pub const DEFAULT_ID_KEY: &str = "id";

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 860.0;

/// Table layout
pub const TABLE_ROW_HEIGHT: f32 = 36.0;
pub const TABLE_HEADER_HEIGHT: f32 = 40.0;
pub const EDITABLE_ROW_HEIGHT: f32 = 48.0;
pub const CHECKBOX_COLUMN_WIDTH: f32 = 48.0;
pub const DELETE_COLUMN_WIDTH: f32 = 48.0;
pub const FLEX_COLUMN_MIN_WIDTH: f32 = 100.0;

/// Opacity applied to blank rows in editable tables
pub const BLANK_ROW_OPACITY: f32 = 0.6;

/// Notice feed capacity
pub const NOTICE_CAPACITY: usize = 200;

/// Notices shown in the bottom panel
pub const NOTICE_PANEL_VISIBLE: usize = 20;
