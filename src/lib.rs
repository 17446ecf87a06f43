//! DealDesk Library
//!
//! Generic table components (static, sortable, selectable, editable) over
//! JSON rows, runtime type guards for untrusted values, and the dashboard
//! that wires them together.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod guards;
pub mod i18n;
pub mod logging;
pub mod state;
pub mod theme;
pub mod utils;
