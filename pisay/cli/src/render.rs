//! Message Renderer
//!
//! Draws `pisay` messages the way an agent shell draws custom messages: the
//! content in a box with one cell of padding on every side, over the themed
//! `customMessageBg` background.

use pisay_core::{ResponseMessage, PISAY_MESSAGE_TYPE};

use crate::theme::{Palette, CUSTOM_MESSAGE_BG, CUSTOM_MESSAGE_FG};

/// Cells of padding around the content
const PADDING: usize = 1;

/// Render a response for display, `None` when it is not ours to draw
#[must_use]
pub fn render_message(message: &ResponseMessage, palette: Palette) -> Option<String> {
    if message.custom_type != PISAY_MESSAGE_TYPE || !message.display {
        return None;
    }
    Some(render_box(&message.content, palette))
}

/// Frame `content` in a padded box
#[must_use]
pub fn render_box(content: &str, palette: Palette) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let pad = " ".repeat(PADDING);
    let blank = " ".repeat(width + 2 * PADDING);

    let mut rows = Vec::with_capacity(lines.len() + 2 * PADDING);
    for _ in 0..PADDING {
        rows.push(palette.on(&blank, CUSTOM_MESSAGE_FG, CUSTOM_MESSAGE_BG));
    }
    for line in lines {
        let fill = " ".repeat(width - line.chars().count());
        let row = format!("{pad}{line}{fill}{pad}");
        rows.push(palette.on(&row, CUSTOM_MESSAGE_FG, CUSTOM_MESSAGE_BG));
    }
    for _ in 0..PADDING {
        rows.push(palette.on(&blank, CUSTOM_MESSAGE_FG, CUSTOM_MESSAGE_BG));
    }

    rows.join("\n")
}
