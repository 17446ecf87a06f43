//! ConfigState - Application Configuration State

use crate::domain::config::{AppConfig, TableConfig};
use crate::utils::format::CurrencyFormat;

/// State for application configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration
    pub config: AppConfig,
}

impl ConfigState {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn tables(&self) -> &TableConfig {
        &self.config.tables
    }

    /// Currency formatter built from the configured symbol
    pub fn currency(&self) -> CurrencyFormat {
        CurrencyFormat::with_symbol(self.config.tables.currency_symbol.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_follows_config() {
        let mut config = AppConfig::default();
        config.tables.currency_symbol = "€".to_string();
        let state = ConfigState::new(config);

        assert_eq!(state.currency().format(-0.5), "-€0.50");
        assert_eq!(state.tables().id_key, "id");
    }
}
