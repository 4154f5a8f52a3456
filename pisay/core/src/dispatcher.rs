//! Command Dispatcher
//!
//! Routes one `/pisay` invocation: subcommands run their script (or answer
//! with a canned line when the host has no UI), everything else is echoed
//! back in a bubble. With nothing to echo, π asks the fortune program.
//!
//! Nothing escapes [`Dispatcher::dispatch`]. Tool failures become fallback
//! text, a closed response channel is logged, and dialog cancellation is just
//! another branch.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::command::{Command, Subcommand};
use crate::config::PisayConfig;
use crate::emitter::ResponseEmitter;
use crate::exec::{ExecError, ProcessRunner};
use crate::messages::{NotifyLevel, ResponseMessage};
use crate::sequence::SequenceEngine;
use crate::sequences::{self, lines};
use crate::ui::UiContext;

/// Routes command lines to scripts or the echo path
pub struct Dispatcher<R: ProcessRunner> {
    /// Configuration
    config: PisayConfig,
    /// Host process execution service
    runner: Arc<R>,
    /// Publishes bubbles to the host
    emitter: ResponseEmitter,
}

impl<R: ProcessRunner> Dispatcher<R> {
    /// Create a dispatcher publishing bubbles on `tx`
    pub fn new(runner: R, config: PisayConfig, tx: mpsc::Sender<ResponseMessage>) -> Self {
        Self {
            config,
            runner: Arc::new(runner),
            emitter: ResponseEmitter::new(tx),
        }
    }

    /// Get the process runner
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Handle one invocation to completion, including every scripted wait
    pub async fn dispatch(&self, raw_args: &str, ctx: &UiContext<'_>) {
        let command = Command::parse(raw_args);

        match command.subcommand() {
            Some(sub) => self.run_subcommand(sub, ctx).await,
            None => self.echo(command.message(), ctx).await,
        }
    }

    async fn run_subcommand(&self, sub: Subcommand, ctx: &UiContext<'_>) {
        if !ctx.has_ui() {
            if let Some(line) = sequences::no_ui_line(sub) {
                tracing::debug!(command = %sub, "No UI, sending fallback line");
                self.emitter.emit(line).await;
                return;
            }
        }

        tracing::debug!(command = %sub, has_ui = ctx.has_ui(), "Running subcommand");
        let sequence = sequences::script(sub, &self.config);
        let engine = SequenceEngine::new(*ctx, &self.emitter);
        let report = engine.run(&sequence).await;

        tracing::debug!(
            command = %sub,
            steps = report.steps_run,
            verdicts = ?report.verdicts,
            "Subcommand finished"
        );
    }

    async fn echo(&self, message: &str, ctx: &UiContext<'_>) {
        let text = if message.is_empty() {
            self.fortune().await
        } else {
            message.to_string()
        };

        self.emitter.emit(&text).await;

        if let Some(ui) = ctx.ui() {
            ui.notify(lines::SPOKEN, NotifyLevel::Info);
        }
    }

    /// Ask the fortune program for a message, falling back to canned text
    async fn fortune(&self) -> String {
        let fortune = &self.config.fortune;
        let result = self
            .runner
            .exec(&fortune.command, &fortune.args, Some(fortune.timeout))
            .await;

        match result {
            Ok(output) if output.success() && !output.stdout.trim().is_empty() => {
                output.stdout.trim().to_string()
            }
            Ok(output) => {
                tracing::info!(
                    command = %fortune.command,
                    code = ?output.code,
                    "Fortune produced nothing usable"
                );
                lines::FORTUNE_REFUSED.to_string()
            }
            Err(e @ ExecError::TimedOut { .. }) => {
                tracing::info!(error = %e, "Fortune timed out");
                lines::FORTUNE_REFUSED.to_string()
            }
            Err(e) => {
                tracing::info!(runner = self.runner.name(), error = %e, "Fortune unavailable");
                lines::FORTUNE_MISSING.to_string()
            }
        }
    }
}

impl<R: ProcessRunner> std::fmt::Debug for Dispatcher<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("runner", &self.runner.name())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
