//! Theme - Colors for the desk UI

pub mod colors;
