//! State - GPUI Entity State Modules
//!
//! Each state module represents a distinct piece of application state,
//! split by update frequency to avoid unnecessary re-renders. Interaction
//! state for the tables (sort, selection, editing) is pure and lives here too.

pub mod accordion_state;
pub mod config_state;
pub mod deals_state;
pub mod edit_state;
pub mod i18n_state;
pub mod notice_state;
pub mod selection_state;
pub mod sort_state;
