//! Test Doubles
//!
//! A recording [`UiSurface`] and a scripted [`ProcessRunner`] for exercising
//! the dispatcher without a terminal or real processes. Both record every
//! call so tests can assert on exact ordering.
//!
//! # Usage
//!
//! ```ignore
//! use pisay_core::testing::{RecordingSurface, ScriptedRunner, UiCall};
//!
//! let surface = RecordingSurface::new().with_text_answer(Some("π (pi) - the GOAT"));
//! let runner = ScriptedRunner::new().with_not_found();
//!
//! // ... dispatch ...
//!
//! assert!(matches!(surface.calls()[0], UiCall::Select { .. }));
//! ```

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::time::Instant;

use crate::exec::{ExecError, ExecOutput, ProcessRunner};
use crate::messages::NotifyLevel;
use crate::ui::{UiSurface, WidgetPlacement};

// ============================================================================
// Recording UI Surface
// ============================================================================

/// One call made against a [`RecordingSurface`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiCall {
    /// `confirm(title, question)`
    Confirm {
        /// Dialog title
        title: String,
        /// Question text
        question: String,
    },
    /// `select(title, options)`
    Select {
        /// Dialog title
        title: String,
        /// Offered labels
        options: Vec<String>,
    },
    /// `input(title, placeholder)`
    Input {
        /// Dialog title
        title: String,
        /// Placeholder text
        placeholder: String,
    },
    /// `editor(title, prefill)`
    Editor {
        /// Dialog title
        title: String,
        /// Prefilled text
        prefill: String,
    },
    /// `notify(text, level)`
    Notify {
        /// Notification text
        text: String,
        /// Severity
        level: NotifyLevel,
    },
    /// `set_status(key, text)`
    SetStatus {
        /// Status key
        key: String,
        /// New text, `None` clears
        text: Option<String>,
    },
    /// `set_widget(key, lines, placement)`
    SetWidget {
        /// Widget slot
        key: String,
        /// New lines, `None` clears
        lines: Option<Vec<String>>,
        /// Placement relative to the editor
        placement: WidgetPlacement,
    },
    /// `set_title(text)`
    SetTitle {
        /// New title
        text: String,
    },
    /// `set_editor_text(text)`
    SetEditorText {
        /// New editor contents
        text: String,
    },
}

impl UiCall {
    /// Whether this call is one of the four suspending dialogs
    #[must_use]
    pub fn is_dialog(&self) -> bool {
        matches!(
            self,
            Self::Confirm { .. } | Self::Select { .. } | Self::Input { .. } | Self::Editor { .. }
        )
    }
}

/// A [`UiSurface`] that records calls and replays canned dialog answers
///
/// Confirm answers default to `false` and text answers (select, input,
/// editor) default to `None` once the queues run dry.
pub struct RecordingSurface {
    created: Instant,
    calls: Mutex<Vec<(Duration, UiCall)>>,
    confirm_answers: Mutex<VecDeque<bool>>,
    text_answers: Mutex<VecDeque<Option<String>>>,
}

impl RecordingSurface {
    /// Create a surface with no queued answers
    #[must_use]
    pub fn new() -> Self {
        Self {
            created: Instant::now(),
            calls: Mutex::new(Vec::new()),
            confirm_answers: Mutex::new(VecDeque::new()),
            text_answers: Mutex::new(VecDeque::new()),
        }
    }

    /// Queue an answer for the next confirm dialog
    #[must_use]
    pub fn with_confirm_answer(self, answer: bool) -> Self {
        self.confirm_answers.lock().push_back(answer);
        self
    }

    /// Queue an answer for the next select/input/editor dialog
    #[must_use]
    pub fn with_text_answer(self, answer: Option<&str>) -> Self {
        self.text_answers
            .lock()
            .push_back(answer.map(str::to_string));
        self
    }

    /// All calls in order
    #[must_use]
    pub fn calls(&self) -> Vec<UiCall> {
        self.calls.lock().iter().map(|(_, c)| c.clone()).collect()
    }

    /// All calls with the time elapsed since the surface was created
    #[must_use]
    pub fn timeline(&self) -> Vec<(Duration, UiCall)> {
        self.calls.lock().clone()
    }

    /// Notifications in order
    #[must_use]
    pub fn notifications(&self) -> Vec<(String, NotifyLevel)> {
        self.calls
            .lock()
            .iter()
            .filter_map(|(_, call)| match call {
                UiCall::Notify { text, level } => Some((text.clone(), *level)),
                _ => None,
            })
            .collect()
    }

    /// Number of calls recorded
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    fn record(&self, call: UiCall) {
        self.calls.lock().push((self.created.elapsed(), call));
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UiSurface for RecordingSurface {
    async fn confirm(&self, title: &str, question: &str) -> bool {
        self.record(UiCall::Confirm {
            title: title.to_string(),
            question: question.to_string(),
        });
        self.confirm_answers.lock().pop_front().unwrap_or(false)
    }

    async fn select(&self, title: &str, options: &[String]) -> Option<String> {
        self.record(UiCall::Select {
            title: title.to_string(),
            options: options.to_vec(),
        });
        self.text_answers.lock().pop_front().flatten()
    }

    async fn input(&self, title: &str, placeholder: &str) -> Option<String> {
        self.record(UiCall::Input {
            title: title.to_string(),
            placeholder: placeholder.to_string(),
        });
        self.text_answers.lock().pop_front().flatten()
    }

    async fn editor(&self, title: &str, prefill: &str) -> Option<String> {
        self.record(UiCall::Editor {
            title: title.to_string(),
            prefill: prefill.to_string(),
        });
        self.text_answers.lock().pop_front().flatten()
    }

    fn notify(&self, text: &str, level: NotifyLevel) {
        self.record(UiCall::Notify {
            text: text.to_string(),
            level,
        });
    }

    fn set_status(&self, key: &str, text: Option<&str>) {
        self.record(UiCall::SetStatus {
            key: key.to_string(),
            text: text.map(str::to_string),
        });
    }

    fn set_widget(&self, key: &str, lines: Option<&[String]>, placement: WidgetPlacement) {
        self.record(UiCall::SetWidget {
            key: key.to_string(),
            lines: lines.map(<[String]>::to_vec),
            placement,
        });
    }

    fn set_title(&self, text: &str) {
        self.record(UiCall::SetTitle {
            text: text.to_string(),
        });
    }

    fn set_editor_text(&self, text: &str) {
        self.record(UiCall::SetEditorText {
            text: text.to_string(),
        });
    }
}

// ============================================================================
// Scripted Process Runner
// ============================================================================

/// One recorded `exec` invocation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecCall {
    /// Program name
    pub command: String,
    /// Arguments
    pub args: Vec<String>,
    /// Timeout requested by the caller
    pub timeout: Option<Duration>,
}

/// A [`ProcessRunner`] that replays queued results
///
/// When the queue is empty every call fails with [`ExecError::NotFound`].
#[derive(Default)]
pub struct ScriptedRunner {
    results: Mutex<VecDeque<Result<ExecOutput, ExecError>>>,
    calls: Mutex<Vec<ExecCall>>,
}

impl ScriptedRunner {
    /// Create a runner with nothing queued
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a completed run
    #[must_use]
    pub fn with_output(self, code: i32, stdout: &str) -> Self {
        self.results.lock().push_back(Ok(ExecOutput {
            code: Some(code),
            stdout: stdout.to_string(),
            stderr: String::new(),
        }));
        self
    }

    /// Queue a "tool not installed" failure
    #[must_use]
    pub fn with_not_found(self) -> Self {
        self.results.lock().push_back(Err(ExecError::NotFound {
            command: "scripted".to_string(),
        }));
        self
    }

    /// Queue a timeout
    #[must_use]
    pub fn with_timeout(self, after: Duration) -> Self {
        self.results.lock().push_back(Err(ExecError::TimedOut {
            command: "scripted".to_string(),
            timeout: after,
        }));
        self
    }

    /// All invocations in order
    #[must_use]
    pub fn calls(&self) -> Vec<ExecCall> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl ProcessRunner for ScriptedRunner {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn exec(
        &self,
        command: &str,
        args: &[String],
        timeout: Option<Duration>,
    ) -> Result<ExecOutput, ExecError> {
        self.calls.lock().push(ExecCall {
            command: command.to_string(),
            args: args.to_vec(),
            timeout,
        });
        self.results
            .lock()
            .pop_front()
            .unwrap_or_else(|| {
                Err(ExecError::NotFound {
                    command: command.to_string(),
                })
            })
    }
}
