//! Colors - Hello Theme Colors

use gpui::{rgb, Rgba};

/// Hello color palette - All colors are accessed via associated functions
pub struct HelloColors;

impl HelloColors {
    // Background colors
    /// Window background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }

    // Button colors
    /// Primary button background - Cyan/Teal
    pub fn button_primary_bg() -> Rgba { rgb(0x2cb3b8) }
    /// Primary button background on hover
    pub fn button_primary_hover() -> Rgba { rgb(0x249a9f) }
    /// Primary button text
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    /// Ghost button text
    pub fn button_ghost_text() -> Rgba { rgb(0x6b7280) }
    /// Ghost button background on hover
    pub fn button_ghost_hover() -> Rgba { rgb(0xe5e7eb) }
}
