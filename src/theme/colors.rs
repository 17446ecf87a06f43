//! Colors - DealDesk Theme Colors

use gpui::{Rgba, rgb};

/// DealDesk color palette, accessed via associated functions
pub struct DeskColors;

impl DeskColors {
    // Primary colors
    /// Header background - Deep navy
    pub fn header_bg() -> Rgba { rgb(0x1e3a5f) }
    /// Accent - Blue (checkboxes, focus, active sort)
    pub fn accent() -> Rgba { rgb(0x2563eb) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf3f4f6) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Notice panel background - Slate
    pub fn notice_panel_bg() -> Rgba { rgb(0x1e293b) }

    // Text colors
    pub fn text_primary() -> Rgba { rgb(0x111827) }
    pub fn text_secondary() -> Rgba { rgb(0x4b5563) }
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Status colors
    pub fn success() -> Rgba { rgb(0x16a34a) }
    pub fn danger() -> Rgba { rgb(0xef4444) }
    /// Danger hover background
    pub fn danger_soft() -> Rgba { rgb(0xfef2f2) }

    // Border colors
    pub fn border() -> Rgba { rgb(0xe5e7eb) }

    // Button colors
    pub fn button_primary_bg() -> Rgba { rgb(0x2563eb) }
    pub fn button_primary_hover() -> Rgba { rgb(0x1d4ed8) }
    pub fn button_outline_hover() -> Rgba { rgb(0xf3f4f6) }

    // Badge colors
    pub fn badge_bg() -> Rgba { rgb(0xe5e7eb) }

    // Table colors
    pub fn table_header_bg() -> Rgba { rgb(0xf9fafb) }
    pub fn table_row_hover() -> Rgba { rgb(0xf3f4f6) }
    pub fn table_row_alt() -> Rgba { rgb(0xfafafa) }

    // Input colors
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    pub fn input_disabled_bg() -> Rgba { rgb(0xf9fafb) }
    pub fn input_border() -> Rgba { rgb(0xe5e7eb) }
    pub fn input_placeholder() -> Rgba { rgb(0x9ca3af) }
}
