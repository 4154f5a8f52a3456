//! Speech Bubble Renderer
//!
//! Word-wraps a message into a bordered bubble and appends the π mascot
//! underneath:
//!
//! ```text
//! ┌───────────────┐
//! │ Hello, human. │
//! └───────────────┘
//!         \
//!          \
//!           (mascot)
//! ```
//!
//! Widths are counted in `char`s, not terminal columns, so wide glyphs such as
//! emoji make a row look one or two columns wider than its neighbours. The
//! frame itself is always consistent: every row has the same `char` count.

/// Maximum characters per wrapped line
pub const MAX_WIDTH: usize = 50;

/// The π mascot drawn under every bubble
pub const MASCOT: &str = r"        \
         \
          ⠀⠀⠀⠀⠀⣀⣀⣀⣀⣀⣀⣀⣀⣀⣀⣀⣀⣀⣀⣀⣀⣀⣀⣀⣀⣀⣀⣀⠀⠀
          ⠀⠀⠀⣠⣾⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⠀⠀
          ⠀⣴⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⠀⠀
          ⣼⣿⣿⠟⠁⠀⠀⠀⢸⣿⣿⣿⣿⡏⠀⠀⠀⠀⠀⣿⣿⣿⣿⣿⣿⡇⠀⠀⠀⠀
          ⣿⡿⠁⠀⠀⠀⠀⠀⣾⣿⣿⣿⣿⡇⠀⠀⠀⠀⠀⢸⣿⣿⣿⣿⣿⡇⠀⠀⠀⠀
          ⠉⠀⠀⠀⠀⠀⠀⠀⣿⣿⣿⣿⣿⠇⠀⠀⠀⠀⠀⣸⣿⣿⣿⣿⣿⠀⠀⠀⠀⠀
          ⠀⠀⠀⠀⠀⠀⠀⢠⣿⣿⣿⣿⣿⠀⠀⠀⠀⠀⠀⣿⣿⣿⣿⣿⣿⠀⠀⠀⠀⠀
          ⠀⠀⠀⠀⠀⠀⠀⣾⣿⣿⣿⣿⣿⠀⠀⠀⠀⠀⢠⣿⣿⣿⣿⣿⡟⠀⠀⠀⠀⠀
          ⠀⠀⠀⠀⠀⠀⣸⣿⣿⣿⣿⣿⡇⠀⠀⠀⠀⠀⢸⣿⣿⣿⣿⣿⡇⠀⠀⠀⠀⠀
          ⠀⠀⠀⠀⢠⣿⣿⣿⣿⣿⣿⣿⠀⠀⠀⠀⠀⠀⢸⣿⣿⣿⣿⣿⣿⡀⠀⠀⠀⠀
          ⠀⠀⣰⣿⣿⣿⣿⣿⣿⣿⣿⡿⠀⠀⠀⠀⠀⠀⢸⣿⣿⣿⣿⣿⣿⡇⠀⢀⣶⠀
          ⢠⣾⣿⣿⣿⣿⣿⣿⣿⣿⣿⠀⠀⠀⠀⠀⠀⠀⢹⣿⣿⣿⣿⣿⣿⣿⣦⣼⣿⠀
          ⣿⣿⣿⣿⣿⣿⣿⣿⣿⣿⠏⠀⠀⠀⠀⠀⠀⠀⠀⠹⣿⣿⣿⣿⣿⣿⣿⣿⠏⠀
          ⠈⠻⣿⣿⣿⣿⣿⣿⠿⠋⠀⠀⠀⠀⠀⠀⠀⠀⠀⠀⠀⠙⠻⢿⣿⣿⠿⠋⠀⠀";

/// Word-wrapped bubble content
///
/// Every line holds at most `max_width` characters and `width` is the length
/// of the longest line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BubbleLayout {
    lines: Vec<String>,
    width: usize,
}

impl BubbleLayout {
    /// Wrap a message at [`MAX_WIDTH`]
    #[must_use]
    pub fn wrap(message: &str) -> Self {
        Self::wrap_to(message, MAX_WIDTH)
    }

    /// Wrap a message at an arbitrary width
    ///
    /// Greedy fill: a word joins the current line while
    /// `line + 1 + word` stays within `max_width`, where the separator is
    /// counted even on an empty line. Words longer than `max_width` are cut.
    #[must_use]
    pub fn wrap_to(message: &str, max_width: usize) -> Self {
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_len = 0;

        for word in message.split_whitespace() {
            let word_len = word.chars().count();
            if current_len + word_len < max_width {
                if current_len > 0 {
                    current.push(' ');
                    current_len += 1;
                }
                current.push_str(word);
                current_len += word_len;
            } else {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                }
                if word_len > max_width {
                    current = word.chars().take(max_width).collect();
                    current_len = max_width;
                } else {
                    current = word.to_string();
                    current_len = word_len;
                }
            }
        }
        if current_len > 0 {
            lines.push(current);
        }
        if lines.is_empty() {
            lines.push(String::new());
        }

        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        Self { lines, width }
    }

    /// Wrapped lines, unpadded
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Length of the longest line
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Draw the bordered bubble (without the mascot)
    #[must_use]
    pub fn frame(&self) -> String {
        let rule = "─".repeat(self.width + 2);
        let mut out = String::with_capacity((self.lines.len() + 2) * (self.width + 8) * 3);

        out.push('┌');
        out.push_str(&rule);
        out.push('┐');
        for line in &self.lines {
            let pad = self.width - line.chars().count();
            out.push_str("\n│ ");
            out.push_str(line);
            out.push_str(&" ".repeat(pad));
            out.push_str(" │");
        }
        out.push_str("\n└");
        out.push_str(&rule);
        out.push('┘');
        out
    }
}

/// Render a message as a speech bubble with the mascot below it
#[must_use]
pub fn render_bubble(message: &str) -> String {
    format!("{}\n{MASCOT}", BubbleLayout::wrap(message).frame())
}
