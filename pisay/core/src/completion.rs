//! Completion Notifier
//!
//! Tells the desktop when the agent finishes a turn: one `bash -c` invocation
//! that shows a notification and plays a sound. Each tool is optional; when
//! `notify-send` or `paplay` is missing that half is skipped silently.
//! Turns the user aborted are ignored.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::CompletionConfig;
use crate::exec::ProcessRunner;
use crate::messages::MessageRole;

/// Why the model stopped producing output
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StopReason {
    /// Finished normally
    Stop,
    /// Hit the output token limit
    Length,
    /// Stopped to call a tool
    ToolUse,
    /// The provider reported an error
    Error,
    /// The user interrupted the turn
    Aborted,
}

/// One message of the finished turn, as far as the notifier cares
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentMessage {
    /// Sender
    pub role: MessageRole,
    /// Stop reason (assistant messages only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<StopReason>,
}

impl AgentMessage {
    /// An assistant message with a stop reason
    #[must_use]
    pub fn assistant(stop_reason: StopReason) -> Self {
        Self {
            role: MessageRole::Assistant,
            stop_reason: Some(stop_reason),
        }
    }

    /// A user message
    #[must_use]
    pub fn user() -> Self {
        Self {
            role: MessageRole::User,
            stop_reason: None,
        }
    }
}

/// Emitted by the host when the agent finishes
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentEndEvent {
    /// Messages of the finished run, oldest first
    pub messages: Vec<AgentMessage>,
}

impl AgentEndEvent {
    /// Whether the user aborted the final assistant message
    #[must_use]
    pub fn was_aborted(&self) -> bool {
        self.messages.last().is_some_and(|m| {
            m.role == MessageRole::Assistant && m.stop_reason == Some(StopReason::Aborted)
        })
    }
}

/// Quote `value` for a POSIX shell
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// Sends the desktop notification for finished turns
pub struct CompletionNotifier<R: ProcessRunner> {
    config: CompletionConfig,
    runner: Arc<R>,
}

impl<R: ProcessRunner> CompletionNotifier<R> {
    /// Create a notifier
    pub fn new(runner: Arc<R>, config: CompletionConfig) -> Self {
        Self { config, runner }
    }

    /// The shell script run for a turn that finished in `cwd`
    #[must_use]
    pub fn script(&self, cwd: &Path) -> String {
        let expire_ms = self.config.expire.as_millis();
        format!(
            "(command -v notify-send >/dev/null 2>&1 && notify-send {summary} {cwd} -t {expire_ms} || true) && \
             (command -v paplay >/dev/null 2>&1 && paplay {sound} || true)",
            summary = shell_quote(&self.config.summary),
            cwd = shell_quote(&cwd.to_string_lossy()),
            sound = shell_quote(&self.config.sound),
        )
    }

    /// Handle an agent-end event
    ///
    /// At most one shell invocation. Failures are logged, never returned.
    pub async fn on_agent_end(&self, event: &AgentEndEvent, cwd: &Path) {
        if !self.config.enabled {
            tracing::trace!("Completion notifier disabled");
            return;
        }
        if event.was_aborted() {
            tracing::debug!("Turn aborted, skipping completion notification");
            return;
        }

        let args = vec!["-c".to_string(), self.script(cwd)];
        match self.runner.exec("bash", &args, None).await {
            Ok(output) if !output.success() => {
                tracing::warn!(
                    code = ?output.code,
                    stderr = %output.stderr.trim(),
                    "Completion notification script failed"
                );
            }
            Ok(_) => tracing::debug!(cwd = %cwd.display(), "Completion notification sent"),
            Err(e) => tracing::warn!(error = %e, "Could not run completion notification"),
        }
    }
}
