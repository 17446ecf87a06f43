//! Config - Application Configuration

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ID_KEY, NOTICE_CAPACITY};
use crate::error::{Error, Result};
use crate::i18n::Locale;
use crate::state::sort_state::SortDirection;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// UI locale; detected from the system when absent
    pub locale: Option<Locale>,
    /// Table behavior
    pub tables: TableConfig,
    /// Notice feed
    pub notices: NoticeConfig,
}

impl AppConfig {
    /// Locale to start with, falling back to the system locale
    pub fn effective_locale(&self) -> Locale {
        self.locale.unwrap_or_else(Locale::detect)
    }

    /// Reject values the tables cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.tables.id_key.trim().is_empty() {
            return Err(Error::Invalid {
                message: "tables.id_key must not be empty".to_string(),
            });
        }
        if self.notices.capacity == 0 {
            return Err(Error::Invalid {
                message: "notices.capacity must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Table configuration shared by every table on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Row identifier field
    pub id_key: String,
    /// Initial direction of sortable tables
    pub default_sort_direction: SortDirection,
    /// Show the per-row delete affordance in editable tables
    pub show_delete_button: bool,
    /// Show the clear affordance in selectable tables
    pub show_clear_button: bool,
    /// Symbol used by the default currency formatter
    pub currency_symbol: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            id_key: DEFAULT_ID_KEY.to_string(),
            default_sort_direction: SortDirection::Asc,
            show_delete_button: true,
            show_clear_button: true,
            currency_symbol: "$".to_string(),
        }
    }
}

/// Notice feed configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    /// Maximum retained notices
    pub capacity: usize,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            capacity: NOTICE_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            locale = "es-ES"

            [tables]
            id_key = "uid"
            default_sort_direction = "desc"
            "#,
        )
        .expect("valid config");

        assert_eq!(config.locale, Some(Locale::EsES));
        assert_eq!(config.tables.id_key, "uid");
        assert_eq!(config.tables.default_sort_direction, SortDirection::Desc);
        assert!(config.tables.show_delete_button);
        assert_eq!(config.tables.currency_symbol, "$");
        assert_eq!(config.notices.capacity, NOTICE_CAPACITY);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: AppConfig = toml::from_str("").expect("empty config");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_validate_rejects_blank_id_key() {
        assert!(AppConfig::default().validate().is_ok());

        let mut config = AppConfig::default();
        config.tables.id_key = "  ".to_string();
        assert!(matches!(config.validate(), Err(Error::Invalid { .. })));

        let mut config = AppConfig::default();
        config.notices.capacity = 0;
        assert!(config.validate().is_err());
    }
}
