//! Command Parsing
//!
//! One `/pisay` invocation is a single free-text argument string. The whole
//! string, trimmed and lowercased, is matched exactly against the subcommand
//! names; anything else is a message to echo.

/// One parsed invocation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    token: String,
    raw_args: String,
}

impl Command {
    /// Parse a raw argument string
    #[must_use]
    pub fn parse(raw_args: &str) -> Self {
        Self {
            token: raw_args.trim().to_lowercase(),
            raw_args: raw_args.to_string(),
        }
    }

    /// Normalized token (trimmed, lowercased)
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Arguments exactly as typed
    #[must_use]
    pub fn raw_args(&self) -> &str {
        &self.raw_args
    }

    /// The subcommand named by the token, if any
    ///
    /// A message that spells a subcommand name is always taken as that
    /// subcommand.
    #[must_use]
    pub fn subcommand(&self) -> Option<Subcommand> {
        Subcommand::from_token(&self.token)
    }

    /// The message to echo: the raw arguments trimmed, case preserved
    #[must_use]
    pub fn message(&self) -> &str {
        self.raw_args.trim()
    }
}

/// Named sub-behaviors of `/pisay`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subcommand {
    /// Confirm dialog
    Confirm,
    /// Select dialog
    Select,
    /// Single-line input dialog
    Input,
    /// Multi-line editor dialog
    EditorDialog,
    /// Notification levels
    Notify,
    /// Footer status progression
    Status,
    /// Editor prefill
    Editor,
    /// Widgets above and below the editor, auto-cleared
    Widget,
    /// Clear both widget slots
    WidgetClear,
    /// Claim the terminal title
    Title,
    /// Restore the default title
    TitleReset,
    /// Command list
    Help,
    /// Random roast (`insult` or `roast`)
    Roast,
}

impl Subcommand {
    /// Every subcommand, in help order
    pub const ALL: [Subcommand; 13] = [
        Self::Confirm,
        Self::Select,
        Self::Input,
        Self::EditorDialog,
        Self::Notify,
        Self::Status,
        Self::Editor,
        Self::Widget,
        Self::WidgetClear,
        Self::Title,
        Self::TitleReset,
        Self::Help,
        Self::Roast,
    ];

    /// Match a normalized token exactly
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let sub = match token {
            "confirm" => Self::Confirm,
            "select" => Self::Select,
            "input" => Self::Input,
            "editor-dialog" => Self::EditorDialog,
            "notify" => Self::Notify,
            "status" => Self::Status,
            "editor" => Self::Editor,
            "widget" => Self::Widget,
            "widget-clear" => Self::WidgetClear,
            "title" => Self::Title,
            "title-reset" => Self::TitleReset,
            "help" => Self::Help,
            "insult" | "roast" => Self::Roast,
            _ => return None,
        };
        Some(sub)
    }

    /// Canonical token
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Confirm => "confirm",
            Self::Select => "select",
            Self::Input => "input",
            Self::EditorDialog => "editor-dialog",
            Self::Notify => "notify",
            Self::Status => "status",
            Self::Editor => "editor",
            Self::Widget => "widget",
            Self::WidgetClear => "widget-clear",
            Self::Title => "title",
            Self::TitleReset => "title-reset",
            Self::Help => "help",
            Self::Roast => "roast",
        }
    }

    /// Whether the subcommand drives the UI (and so has a no-UI fallback)
    #[must_use]
    pub fn requires_ui(self) -> bool {
        !matches!(self, Self::Help | Self::Roast)
    }
}

impl std::fmt::Display for Subcommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
