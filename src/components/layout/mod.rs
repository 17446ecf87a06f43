//! Layout Components
//!
//! Header and notice panel framing the dashboard.

pub mod header;
pub mod notice_panel;
