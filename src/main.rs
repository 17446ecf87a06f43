//! DealDesk - Main Entry Point
//!
//! Native dashboard for real-estate transactions

use dealdesk::app::application::run_app;
use dealdesk::constants::CONFIG_FILE;
use dealdesk::domain::config::AppConfig;
use dealdesk::logging;
use dealdesk::utils::config_store::{app_data_dir, load_config};

fn main() {
    let log_dir = app_data_dir().ok();
    let _log_guard = logging::init(log_dir.as_deref());

    tracing::info!("Starting DealDesk...");

    let config = match load_config::<AppConfig>(CONFIG_FILE).and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load config, using defaults");
            AppConfig::default()
        }
    };

    run_app(config);
}
