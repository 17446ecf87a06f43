//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and represent the business domain.

pub mod config;
pub mod deal;
pub mod row;

pub use row::Row;
