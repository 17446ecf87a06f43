//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here, split by update frequency,
//! together with the dispatcher that applies intents to them.

use gpui::{App, AppContext, Entity, Global};
use tracing::{error, warn};

use crate::constants::CONFIG_FILE;
use crate::domain::config::AppConfig;
use crate::domain::deal::DeskData;
use crate::eventing::app_event::AppEvent;
use crate::i18n::t;
use crate::state::{
    config_state::ConfigState, deals_state::DealsState, i18n_state::I18nState,
    notice_state::{NoticeLevel, NoticeState},
};
use crate::utils::config_store::save_config;

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Application configuration state
    pub config: Entity<ConfigState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
    /// User notices (ring buffer)
    pub notices: Entity<NoticeState>,
    /// Row data and selections for every table
    pub deals: Entity<DealsState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from the loaded configuration
    pub fn init(config: AppConfig, cx: &mut App) -> Self {
        let id_key = config.tables.id_key.clone();
        let deals = match DeskData::sample().and_then(|data| DealsState::from_data(&data, id_key)) {
            Ok(deals) => deals,
            Err(e) => {
                error!(error = %e, "Failed to load sample deals");
                DealsState::default()
            }
        };

        Self {
            i18n: cx.new(|_| I18nState::new(config.effective_locale())),
            notices: cx.new(|_| NoticeState::new(config.notices.capacity)),
            config: cx.new(|_| ConfigState::new(config)),
            deals: cx.new(|_| deals),
        }
    }

    /// Apply an intent to the store entities
    pub fn dispatch(&self, event: AppEvent, cx: &mut App) {
        dispatch_event(event, self, cx);
    }
}

/// Dispatch an AppEvent to the appropriate entity
pub fn dispatch_event(event: AppEvent, entities: &AppEntities, cx: &mut App) {
    match event {
        AppEvent::SelectionChanged { table, ids } => {
            entities.deals.update(cx, |deals, cx| {
                deals.set_selection(table, ids);
                cx.notify();
            });
        }
        AppEvent::RowUpdated {
            table,
            row_id,
            key,
            value,
        } => {
            if value.is_nan() {
                let locale = entities.i18n.read(cx).locale;
                warn!(table = table.label(), %row_id, %key, "Storing invalid number as null");
                push_notice(
                    entities,
                    NoticeLevel::Warn,
                    format!("{}: {}", t(locale, "notice-invalid-number"), key),
                    cx,
                );
            }
            entities.deals.update(cx, |deals, cx| {
                if deals.update_row(table, &row_id, &key, value.into_json()) {
                    cx.notify();
                }
            });
        }
        AppEvent::RowDeleted { table, row_id } => {
            let removed = entities.deals.update(cx, |deals, cx| {
                let removed = deals.delete_row(table, &row_id);
                if removed {
                    cx.notify();
                }
                removed
            });
            if removed {
                let locale = entities.i18n.read(cx).locale;
                push_notice(
                    entities,
                    NoticeLevel::Info,
                    t(locale, "notice-row-deleted").to_string(),
                    cx,
                );
            }
        }
        AppEvent::Notice {
            level,
            message,
            timestamp,
        } => {
            entities.notices.update(cx, |notices, cx| {
                notices.push(level, message, timestamp);
                cx.notify();
            });
        }
        AppEvent::LocaleChanged { locale } => {
            entities.i18n.update(cx, |i18n, cx| {
                i18n.set_locale(locale);
                cx.notify();
            });

            // Remember the choice for the next start
            let config = entities.config.update(cx, |state, _cx| {
                state.config.locale = Some(locale);
                state.config.clone()
            });
            if let Err(e) = save_config(CONFIG_FILE, &config) {
                warn!(error = %e, "Failed to save locale");
            }
        }
    }
}

fn push_notice(entities: &AppEntities, level: NoticeLevel, message: String, cx: &mut App) {
    entities.notices.update(cx, |notices, cx| {
        notices.push_now(level, message);
        cx.notify();
    });
}
