//! Primitive Components
//!
//! Basic building blocks like buttons, checkboxes and cells.

pub mod button;
pub mod cell_input;
pub mod checkbox;
