//! Theme and Colors
//!
//! π's palette for the terminal host. The host prints plain lines, so color
//! and the box-drawing glyphs are the only decoration.

use std::io::IsTerminal;

use crossterm::style::{style, Color, Stylize};
use pisay_core::NotifyLevel;

// ============================================================================
// π Palette
// ============================================================================

/// Pie crust gold (prompts, titles)
pub const PI_GOLD: Color = Color::Rgb {
    r: 255,
    g: 196,
    b: 84,
};

/// Background of pisay messages (`customMessageBg`)
pub const CUSTOM_MESSAGE_BG: Color = Color::Rgb {
    r: 52,
    g: 53,
    b: 65,
};

/// Text drawn on [`CUSTOM_MESSAGE_BG`]
pub const CUSTOM_MESSAGE_FG: Color = Color::Rgb {
    r: 236,
    g: 236,
    b: 241,
};

/// Berry filling (widgets)
pub const BERRY: Color = Color::Rgb {
    r: 214,
    g: 112,
    b: 160,
};

// ============================================================================
// UI Colors
// ============================================================================

/// System/dim text (status line, hints)
pub const DIM_GRAY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

/// Informational notifications
pub const INFO_BLUE: Color = Color::Rgb {
    r: 110,
    g: 170,
    b: 255,
};

/// Warnings
pub const WARNING_AMBER: Color = Color::Rgb {
    r: 255,
    g: 176,
    b: 0,
};

/// Errors
pub const ERROR_RED: Color = Color::Rgb {
    r: 255,
    g: 80,
    b: 80,
};

/// Color for a notification level
#[must_use]
pub fn notify_color(level: NotifyLevel) -> Color {
    match level {
        NotifyLevel::Info => INFO_BLUE,
        NotifyLevel::Warning => WARNING_AMBER,
        NotifyLevel::Error => ERROR_RED,
    }
}

/// Whether output gets ANSI colors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Always color
    #[must_use]
    pub fn colored() -> Self {
        Self { enabled: true }
    }

    /// Never color
    #[must_use]
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    /// Color when stdout is a terminal and `NO_COLOR` is unset
    #[must_use]
    pub fn detect() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self {
            enabled: !no_color && std::io::stdout().is_terminal(),
        }
    }

    /// `text` in foreground `color`
    #[must_use]
    pub fn fg(&self, text: &str, color: Color) -> String {
        if self.enabled {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    /// `text` in `fg` over `bg`
    #[must_use]
    pub fn on(&self, text: &str, fg: Color, bg: Color) -> String {
        if self.enabled {
            style(text).with(fg).on(bg).to_string()
        } else {
            text.to_string()
        }
    }
}
