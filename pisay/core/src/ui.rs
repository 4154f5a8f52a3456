//! UI Surface Facade
//!
//! The host's UI primitives behind one trait. A host that can show dialogs
//! implements [`UiSurface`]; a host that cannot (print mode, RPC without a
//! frontend) hands the dispatcher [`UiContext::absent`] and every sequence
//! answers with a canned line instead.
//!
//! # Design Philosophy
//!
//! Dialog calls suspend until the user answers. Cancelling a dialog is not an
//! error: it is reported as `None` and handled as an ordinary branch. The
//! state-mutating calls (status line, widget slots, title, editor text) are
//! fire-and-forget and the host keeps the last value written until it is
//! cleared.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::messages::NotifyLevel;

/// Where a widget is drawn relative to the editor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WidgetPlacement {
    /// Above the input editor
    #[default]
    AboveEditor,
    /// Below the input editor
    BelowEditor,
}

/// Host UI primitives available to a command
///
/// Implement this trait to drive a real frontend. Dialog methods return
/// `None` (or `false` for confirm) when the user dismisses them.
#[async_trait]
pub trait UiSurface: Send + Sync {
    /// Ask a yes/no question; always resolves
    async fn confirm(&self, title: &str, question: &str) -> bool;

    /// Pick one label from an ordered list, `None` when cancelled
    async fn select(&self, title: &str, options: &[String]) -> Option<String>;

    /// Single-line text input, `None` when cancelled
    async fn input(&self, title: &str, placeholder: &str) -> Option<String>;

    /// Multi-line editor dialog prefilled with `prefill`, `None` when cancelled
    async fn editor(&self, title: &str, prefill: &str) -> Option<String>;

    /// Show a transient notification
    fn notify(&self, text: &str, level: NotifyLevel);

    /// Set (`Some`) or clear (`None`) the footer status entry under `key`
    fn set_status(&self, key: &str, text: Option<&str>);

    /// Set (`Some`) or clear (`None`) the widget slot `key`
    fn set_widget(&self, key: &str, lines: Option<&[String]>, placement: WidgetPlacement);

    /// Replace the terminal window title
    fn set_title(&self, text: &str);

    /// Replace the contents of the input editor
    fn set_editor_text(&self, text: &str);
}

/// Capabilities of the host for one command
///
/// Borrowed from the host for the duration of a single dispatch.
#[derive(Clone, Copy)]
pub struct UiContext<'a> {
    ui: Option<&'a dyn UiSurface>,
}

impl<'a> UiContext<'a> {
    /// A host with interactive UI
    pub fn present(ui: &'a dyn UiSurface) -> Self {
        Self { ui: Some(ui) }
    }

    /// A host without UI (print mode, headless)
    #[must_use]
    pub fn absent() -> Self {
        Self { ui: None }
    }

    /// Whether UI primitives may be called
    #[must_use]
    pub fn has_ui(&self) -> bool {
        self.ui.is_some()
    }

    /// The UI surface, if the host has one
    #[must_use]
    pub fn ui(&self) -> Option<&'a dyn UiSurface> {
        self.ui
    }
}

impl std::fmt::Debug for UiContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiContext")
            .field("has_ui", &self.has_ui())
            .finish()
    }
}
