//! Scripted Sequence Engine
//!
//! A sequence is an ordered list of [`SequenceStep`]s: dialogs, UI state
//! mutations, speech bubbles and timed waits. The engine runs them strictly
//! in order on the calling task. Dialog steps carry a [`Rulebook`] that turns
//! the user's answer into at most one bubble.
//!
//! # Cleanup
//!
//! Scripts clear every status entry and widget slot they set. If the running
//! future is dropped part way (host shutdown, a dropped command task) a drop
//! guard clears whatever is still set. This is best effort: nothing
//! rolls back notifications or the window title.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::time::Duration;

use crate::emitter::ResponseEmitter;
use crate::messages::NotifyLevel;
use crate::ui::{UiContext, UiSurface, WidgetPlacement};

// ============================================================================
// Dialog Answers and Rules
// ============================================================================

/// What a dialog step produced
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogAnswer {
    /// Result of a confirm dialog
    Confirmed(bool),
    /// Text chosen or typed by the user
    Text(String),
    /// The user dismissed the dialog
    Cancelled,
}

impl DialogAnswer {
    /// Wrap an optional dialog result
    #[must_use]
    pub fn from_text(answer: Option<String>) -> Self {
        answer.map_or(Self::Cancelled, Self::Text)
    }

    /// The text answer, if any
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Whether the dialog was dismissed
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

type Predicate = Box<dyn Fn(&DialogAnswer) -> bool + Send + Sync>;
type Responder = Box<dyn Fn(&DialogAnswer) -> String + Send + Sync>;

/// One branch of a dialog: when `predicate` holds, say what `responder` builds
pub struct Rule {
    name: &'static str,
    predicate: Predicate,
    responder: Responder,
}

impl Rule {
    /// A rule whose response depends on the answer
    pub fn new(
        name: &'static str,
        predicate: impl Fn(&DialogAnswer) -> bool + Send + Sync + 'static,
        responder: impl Fn(&DialogAnswer) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            predicate: Box::new(predicate),
            responder: Box::new(responder),
        }
    }

    /// A rule with a canned response
    pub fn fixed(
        name: &'static str,
        predicate: impl Fn(&DialogAnswer) -> bool + Send + Sync + 'static,
        text: &'static str,
    ) -> Self {
        Self::new(name, predicate, move |_| text.to_string())
    }

    /// Rule name, reported in [`Verdict`]s
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// The matching rule and the text it produced
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    /// Name of the rule that matched
    pub rule: &'static str,
    /// Text to show the user
    pub text: String,
}

/// Ordered rules, evaluated top to bottom; the first match wins
#[derive(Debug, Default)]
pub struct Rulebook {
    rules: Vec<Rule>,
}

impl Rulebook {
    /// An empty rulebook (every answer is ignored)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule below the existing ones
    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Rule names in evaluation order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(Rule::name)
    }

    /// Judge an answer; `None` when no rule matches
    #[must_use]
    pub fn judge(&self, answer: &DialogAnswer) -> Option<Verdict> {
        self.rules
            .iter()
            .find(|rule| (rule.predicate)(answer))
            .map(|rule| Verdict {
                rule: rule.name,
                text: (rule.responder)(answer),
            })
    }
}

// ============================================================================
// Steps
// ============================================================================

/// One step of a scripted sequence
#[derive(Debug)]
pub enum SequenceStep {
    /// Yes/no dialog
    ShowConfirm {
        /// Dialog title
        title: String,
        /// Question text
        question: String,
        /// How to respond to the answer
        rules: Rulebook,
    },
    /// Pick-one dialog
    ShowSelect {
        /// Dialog title
        title: String,
        /// Offered labels, in order
        options: Vec<String>,
        /// How to respond to the answer
        rules: Rulebook,
    },
    /// Single-line input dialog
    ShowInput {
        /// Dialog title
        title: String,
        /// Placeholder text
        placeholder: String,
        /// How to respond to the answer
        rules: Rulebook,
    },
    /// Multi-line editor dialog
    ShowEditor {
        /// Dialog title
        title: String,
        /// Prefilled text
        template: String,
        /// How to respond to the answer
        rules: Rulebook,
    },
    /// Set (`Some`) or clear (`None`) a footer status entry
    SetStatus {
        /// Status key
        key: String,
        /// Status text
        text: Option<String>,
    },
    /// Set (`Some`) or clear (`None`) a widget slot
    SetWidget {
        /// Widget slot
        key: String,
        /// Widget lines
        lines: Option<Vec<String>>,
        /// Placement relative to the editor
        placement: WidgetPlacement,
    },
    /// Replace the editor contents
    SetEditorText {
        /// New contents
        text: String,
    },
    /// Transient notification
    Notify {
        /// Notification text
        text: String,
        /// Severity
        level: NotifyLevel,
    },
    /// Replace the window title
    SetTitle {
        /// New title
        text: String,
    },
    /// Emit a speech bubble
    Say {
        /// Bubble text
        text: String,
    },
    /// Suspend for a fixed duration
    Wait {
        /// How long to wait
        duration: Duration,
    },
}

impl SequenceStep {
    /// Short step name for logs
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ShowConfirm { .. } => "confirm",
            Self::ShowSelect { .. } => "select",
            Self::ShowInput { .. } => "input",
            Self::ShowEditor { .. } => "editor",
            Self::SetStatus { .. } => "set_status",
            Self::SetWidget { .. } => "set_widget",
            Self::SetEditorText { .. } => "set_editor_text",
            Self::Notify { .. } => "notify",
            Self::SetTitle { .. } => "set_title",
            Self::Say { .. } => "say",
            Self::Wait { .. } => "wait",
        }
    }

    /// Whether running this step calls the UI surface
    #[must_use]
    pub fn needs_ui(&self) -> bool {
        !matches!(self, Self::Say { .. } | Self::Wait { .. })
    }

    /// Shorthand for [`SequenceStep::Say`]
    pub fn say(text: impl Into<String>) -> Self {
        Self::Say { text: text.into() }
    }

    /// Shorthand for [`SequenceStep::Wait`]
    #[must_use]
    pub fn wait_ms(ms: u64) -> Self {
        Self::Wait {
            duration: Duration::from_millis(ms),
        }
    }

    /// Shorthand for [`SequenceStep::Notify`]
    pub fn notify(text: impl Into<String>, level: NotifyLevel) -> Self {
        Self::Notify {
            text: text.into(),
            level,
        }
    }

    /// Shorthand for [`SequenceStep::SetStatus`]
    pub fn status(key: impl Into<String>, text: Option<&str>) -> Self {
        Self::SetStatus {
            key: key.into(),
            text: text.map(str::to_string),
        }
    }

    /// Shorthand for [`SequenceStep::SetWidget`]
    pub fn widget(
        key: impl Into<String>,
        lines: Option<&[&str]>,
        placement: WidgetPlacement,
    ) -> Self {
        Self::SetWidget {
            key: key.into(),
            lines: lines.map(|l| l.iter().map(|s| (*s).to_string()).collect()),
            placement,
        }
    }
}

/// A named script of steps bound to one subcommand
#[derive(Debug)]
pub struct Sequence {
    /// Subcommand name, for logs
    pub name: &'static str,
    /// Steps in execution order
    pub steps: Vec<SequenceStep>,
}

impl Sequence {
    /// Create a sequence
    #[must_use]
    pub fn new(name: &'static str, steps: Vec<SequenceStep>) -> Self {
        Self { name, steps }
    }

    /// Whether any step calls the UI surface
    #[must_use]
    pub fn needs_ui(&self) -> bool {
        self.steps.iter().any(SequenceStep::needs_ui)
    }

    /// Sum of all waits
    #[must_use]
    pub fn scripted_duration(&self) -> Duration {
        self.steps
            .iter()
            .map(|step| match step {
                SequenceStep::Wait { duration } => *duration,
                _ => Duration::ZERO,
            })
            .sum()
    }
}

// ============================================================================
// Slot Guard
// ============================================================================

/// Clears status entries and widget slots left set when dropped
struct SlotGuard<'a> {
    ui: Option<&'a dyn UiSurface>,
    statuses: BTreeSet<String>,
    widgets: BTreeMap<String, WidgetPlacement>,
}

impl<'a> SlotGuard<'a> {
    fn new(ui: Option<&'a dyn UiSurface>) -> Self {
        Self {
            ui,
            statuses: BTreeSet::new(),
            widgets: BTreeMap::new(),
        }
    }

    fn track_status(&mut self, key: &str, set: bool) {
        if set {
            self.statuses.insert(key.to_string());
        } else {
            self.statuses.remove(key);
        }
    }

    fn track_widget(&mut self, key: &str, placement: WidgetPlacement, set: bool) {
        if set {
            self.widgets.insert(key.to_string(), placement);
        } else {
            self.widgets.remove(key);
        }
    }

    fn is_clean(&self) -> bool {
        self.statuses.is_empty() && self.widgets.is_empty()
    }
}

impl Drop for SlotGuard<'_> {
    fn drop(&mut self) {
        let Some(ui) = self.ui else { return };
        if self.is_clean() {
            return;
        }
        tracing::debug!(
            statuses = self.statuses.len(),
            widgets = self.widgets.len(),
            "Sequence interrupted, clearing leftover UI state"
        );
        for key in &self.statuses {
            ui.set_status(key, None);
        }
        for (key, placement) in &self.widgets {
            ui.set_widget(key, None, *placement);
        }
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Outcome of one sequence run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceReport {
    /// Steps executed (skipped steps excluded)
    pub steps_run: usize,
    /// Rules that matched, in order
    pub verdicts: Vec<&'static str>,
}

/// Runs sequences against a UI context and a response emitter
pub struct SequenceEngine<'a> {
    ctx: UiContext<'a>,
    emitter: &'a ResponseEmitter,
}

impl<'a> SequenceEngine<'a> {
    /// Create an engine for one dispatch
    #[must_use]
    pub fn new(ctx: UiContext<'a>, emitter: &'a ResponseEmitter) -> Self {
        Self { ctx, emitter }
    }

    /// Run every step of `sequence` in order
    ///
    /// UI steps are skipped when the host has no UI.
    pub async fn run(&self, sequence: &Sequence) -> SequenceReport {
        let ui = self.ctx.ui();
        let mut guard = SlotGuard::new(ui);
        let mut report = SequenceReport::default();

        tracing::debug!(
            sequence = sequence.name,
            steps = sequence.steps.len(),
            "Running sequence"
        );

        for step in &sequence.steps {
            if step.needs_ui() && ui.is_none() {
                tracing::warn!(
                    sequence = sequence.name,
                    step = step.kind(),
                    "No UI available, skipping step"
                );
                continue;
            }
            tracing::trace!(sequence = sequence.name, step = step.kind(), "Step");

            if let Some(verdict) = self.run_step(step, ui, &mut guard).await {
                tracing::debug!(
                    sequence = sequence.name,
                    rule = verdict.rule,
                    "Dialog answer judged"
                );
                self.emitter.emit(&verdict.text).await;
                report.verdicts.push(verdict.rule);
            }
            report.steps_run += 1;
        }

        report
    }

    async fn run_step(
        &self,
        step: &SequenceStep,
        ui: Option<&'a dyn UiSurface>,
        guard: &mut SlotGuard<'a>,
    ) -> Option<Verdict> {
        match step {
            SequenceStep::Say { text } => {
                self.emitter.emit(text).await;
                None
            }
            SequenceStep::Wait { duration } => {
                tokio::time::sleep(*duration).await;
                None
            }
            step => {
                let ui = ui?;
                Self::run_ui_step(step, ui, guard).await
            }
        }
    }

    async fn run_ui_step(
        step: &SequenceStep,
        ui: &dyn UiSurface,
        guard: &mut SlotGuard<'_>,
    ) -> Option<Verdict> {
        match step {
            SequenceStep::ShowConfirm {
                title,
                question,
                rules,
            } => {
                let answer = DialogAnswer::Confirmed(ui.confirm(title, question).await);
                rules.judge(&answer)
            }
            SequenceStep::ShowSelect {
                title,
                options,
                rules,
            } => {
                let answer = DialogAnswer::from_text(ui.select(title, options).await);
                rules.judge(&answer)
            }
            SequenceStep::ShowInput {
                title,
                placeholder,
                rules,
            } => {
                let answer = DialogAnswer::from_text(ui.input(title, placeholder).await);
                rules.judge(&answer)
            }
            SequenceStep::ShowEditor {
                title,
                template,
                rules,
            } => {
                let answer = DialogAnswer::from_text(ui.editor(title, template).await);
                rules.judge(&answer)
            }
            SequenceStep::SetStatus { key, text } => {
                ui.set_status(key, text.as_deref());
                guard.track_status(key, text.is_some());
                None
            }
            SequenceStep::SetWidget {
                key,
                lines,
                placement,
            } => {
                ui.set_widget(key, lines.as_deref(), *placement);
                guard.track_widget(key, *placement, lines.is_some());
                None
            }
            SequenceStep::SetEditorText { text } => {
                ui.set_editor_text(text);
                None
            }
            SequenceStep::Notify { text, level } => {
                ui.notify(text, *level);
                None
            }
            SequenceStep::SetTitle { text } => {
                ui.set_title(text);
                None
            }
            SequenceStep::Say { .. } | SequenceStep::Wait { .. } => None,
        }
    }
}

impl fmt::Debug for SequenceEngine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceEngine")
            .field("ctx", &self.ctx)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingSurface, UiCall};
    use tokio::sync::mpsc;

    fn emitter() -> (ResponseEmitter, mpsc::Receiver<crate::messages::ResponseMessage>) {
        let (tx, rx) = mpsc::channel(16);
        (ResponseEmitter::new(tx), rx)
    }

    fn yes_no() -> Rulebook {
        Rulebook::new()
            .rule(Rule::fixed(
                "yes",
                |a| *a == DialogAnswer::Confirmed(true),
                "said yes",
            ))
            .rule(Rule::fixed("no", |_| true, "said no"))
    }

    #[test]
    fn test_rulebook_first_match_wins() {
        let rules = Rulebook::new()
            .rule(Rule::fixed("a", |a| a.text().is_some_and(|t| t.contains('a')), "A"))
            .rule(Rule::fixed("ab", |a| a.text().is_some_and(|t| t.contains("ab")), "AB"));

        let verdict = rules.judge(&DialogAnswer::Text("ab".into())).unwrap();
        assert_eq!(verdict.rule, "a");
        assert_eq!(verdict.text, "A");
        assert_eq!(rules.judge(&DialogAnswer::Text("zzz".into())), None);
        assert_eq!(rules.names().collect::<Vec<_>>(), vec!["a", "ab"]);
    }

    #[test]
    fn test_rule_responder_sees_answer() {
        let rules = Rulebook::new().rule(Rule::new(
            "echo",
            |_| true,
            |a| format!("got {}", a.text().unwrap_or("nothing")),
        ));
        assert_eq!(
            rules.judge(&DialogAnswer::Text("x".into())).unwrap().text,
            "got x"
        );
        assert_eq!(rules.judge(&DialogAnswer::Cancelled).unwrap().text, "got nothing");
    }

    #[test]
    fn test_from_text() {
        assert!(DialogAnswer::from_text(None).is_cancelled());
        assert_eq!(
            DialogAnswer::from_text(Some("π".into())),
            DialogAnswer::Text("π".into())
        );
    }

    #[tokio::test]
    async fn test_confirm_step_emits_verdict() {
        let surface = RecordingSurface::new().with_confirm_answer(true);
        let (emitter, mut rx) = emitter();
        let engine = SequenceEngine::new(UiContext::present(&surface), &emitter);

        let sequence = Sequence::new(
            "confirm",
            vec![SequenceStep::ShowConfirm {
                title: "t".into(),
                question: "q".into(),
                rules: yes_no(),
            }],
        );
        let report = engine.run(&sequence).await;

        assert_eq!(report.verdicts, vec!["yes"]);
        assert!(rx.recv().await.unwrap().content.contains("said yes"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_steps_run_in_order_with_waits() {
        let surface = RecordingSurface::new();
        let (emitter, _rx) = emitter();
        let engine = SequenceEngine::new(UiContext::present(&surface), &emitter);

        let sequence = Sequence::new(
            "ordered",
            vec![
                SequenceStep::status("k", Some("one")),
                SequenceStep::wait_ms(1500),
                SequenceStep::status("k", Some("two")),
                SequenceStep::wait_ms(500),
                SequenceStep::status("k", None),
            ],
        );
        assert_eq!(sequence.scripted_duration(), Duration::from_millis(2000));
        let report = engine.run(&sequence).await;
        assert_eq!(report.steps_run, 5);

        let timeline = surface.timeline();
        assert_eq!(timeline.len(), 3);
        assert!(timeline[0].0 < Duration::from_millis(1));
        assert!(timeline[1].0 >= Duration::from_millis(1500));
        assert!(timeline[2].0 >= Duration::from_millis(2000));
        assert_eq!(
            timeline[2].1,
            UiCall::SetStatus {
                key: "k".into(),
                text: None
            }
        );
    }

    #[tokio::test]
    async fn test_ui_steps_skipped_without_ui() {
        let (emitter, mut rx) = emitter();
        let ctx = UiContext::absent();
        let engine = SequenceEngine::new(ctx, &emitter);

        let sequence = Sequence::new(
            "mixed",
            vec![
                SequenceStep::notify("hidden", NotifyLevel::Info),
                SequenceStep::say("visible"),
            ],
        );
        assert!(sequence.needs_ui());
        let report = engine.run(&sequence).await;

        assert_eq!(report.steps_run, 1);
        assert!(rx.recv().await.unwrap().content.contains("visible"));
    }

    #[tokio::test]
    async fn test_completed_run_does_not_clear_twice() {
        let surface = RecordingSurface::new();
        let (emitter, _rx) = emitter();
        let engine = SequenceEngine::new(UiContext::present(&surface), &emitter);

        let sequence = Sequence::new(
            "widget",
            vec![
                SequenceStep::widget("w", Some(&["x"][..]), WidgetPlacement::BelowEditor),
                SequenceStep::widget("w", None, WidgetPlacement::BelowEditor),
            ],
        );
        engine.run(&sequence).await;
        assert_eq!(surface.call_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_run_clears_leftover_slots() {
        let surface = RecordingSurface::new();
        let (emitter, _rx) = emitter();

        {
            let engine = SequenceEngine::new(UiContext::present(&surface), &emitter);
            let sequence = Sequence::new(
                "interrupted",
                vec![
                    SequenceStep::status("s", Some("busy")),
                    SequenceStep::widget("w", Some(&["x"][..]), WidgetPlacement::AboveEditor),
                    SequenceStep::wait_ms(10_000),
                    SequenceStep::status("s", None),
                ],
            );
            let run = engine.run(&sequence);
            let result = tokio::time::timeout(Duration::from_millis(100), run).await;
            assert!(result.is_err());
        }

        let calls = surface.calls();
        assert_eq!(calls.len(), 4);
        assert!(calls[2..].contains(&UiCall::SetStatus {
            key: "s".into(),
            text: None
        }));
        assert!(calls[2..].contains(&UiCall::SetWidget {
            key: "w".into(),
            lines: None,
            placement: WidgetPlacement::AboveEditor
        }));
    }
}
