#![forbid(unsafe_code)]

//! Shared color palette and style constants for the Drowse UI.

use ftui_render::cell::PackedRgba;
use ftui_style::{Style, StyleFlags};

/// Background colors.
pub mod bg {
    use super::*;

    pub const SURFACE: PackedRgba = PackedRgba::rgb(32, 34, 56);
}

/// Foreground / text colors.
pub mod fg {
    use super::*;

    pub const PRIMARY: PackedRgba = PackedRgba::rgb(222, 222, 240);
    pub const MUTED: PackedRgba = PackedRgba::rgb(118, 120, 150);
}

/// Accent / semantic colors.
pub mod accent {
    use super::*;

    pub const PRIMARY: PackedRgba = PackedRgba::rgb(135, 170, 255);
    pub const SUCCESS: PackedRgba = PackedRgba::rgb(90, 220, 150);
    pub const ERROR: PackedRgba = PackedRgba::rgb(255, 105, 105);
}

pub fn body() -> Style {
    Style::new().fg(fg::PRIMARY)
}

pub fn muted() -> Style {
    Style::new().fg(fg::MUTED)
}

pub fn value_focused() -> Style {
    Style::new().fg(accent::PRIMARY).attrs(StyleFlags::BOLD)
}

pub fn title_bar() -> Style {
    Style::new().fg(fg::PRIMARY).bg(bg::SURFACE)
}

pub fn status_bar() -> Style {
    Style::new().fg(fg::MUTED).bg(bg::SURFACE)
}

/// Border style for a form section, highlighted when focused.
pub fn section_border(focused: bool) -> Style {
    if focused {
        Style::new().fg(accent::PRIMARY)
    } else {
        Style::new().fg(fg::MUTED)
    }
}

/// Border style for the alert overlay.
pub fn alert_border(is_error: bool) -> Style {
    if is_error {
        Style::new().fg(accent::ERROR)
    } else {
        Style::new().fg(accent::SUCCESS)
    }
}
