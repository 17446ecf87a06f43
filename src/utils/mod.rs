//! Utilities
//!
//! Config file storage and display formatting.

pub mod config_store;
pub mod format;
