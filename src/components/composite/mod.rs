//! Composite Components
//!
//! Components built from primitives.

pub mod accordion;
pub mod data_table;
