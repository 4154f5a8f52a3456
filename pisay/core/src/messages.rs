//! Pisay Messages
//!
//! Values that cross the boundary between the core and its host: the rendered
//! response handed to the host's message renderer, plus the small enums shared
//! by the UI facade and the completion hook.

use serde::{Deserialize, Serialize};

/// Custom message type the host's renderer is registered under
pub const PISAY_MESSAGE_TYPE: &str = "pisay";

/// A rendered-text message for the host to display
///
/// Produced once per emitted bubble and consumed by the host's renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMessage {
    /// Unique message ID for tracking
    pub id: MessageId,
    /// Renderer key (always [`PISAY_MESSAGE_TYPE`])
    pub custom_type: String,
    /// Bubble text, mascot included
    pub content: String,
    /// Whether the host should show the message
    pub display: bool,
}

impl ResponseMessage {
    /// Package already-rendered text into a displayable message
    pub fn rendered_text(content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            custom_type: PISAY_MESSAGE_TYPE.to_string(),
            content: content.into(),
            display: true,
        }
    }
}

/// Message identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub String);

impl MessageId {
    /// Generate a new unique message ID
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        Self(format!("pisay_{id}"))
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

/// Who sent a message in an agent transcript
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageRole {
    /// User input
    User,
    /// The agent
    Assistant,
    /// Output of a tool call
    ToolResult,
}

/// Notification levels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotifyLevel {
    /// Informational
    Info,
    /// Warning
    Warning,
    /// Error
    Error,
}

impl NotifyLevel {
    /// Wire name of the level
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for NotifyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
