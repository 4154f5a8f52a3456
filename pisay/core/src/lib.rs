//! Pisay Core - Command Dispatch and Scripted UI Harness
//!
//! This crate holds the logic behind the `/pisay` command: a π mascot that
//! exercises every UI primitive an agent shell offers to its extensions.
//! It is independent of any terminal library. A host plugs in its own UI
//! surface and process runner, and receives rendered speech bubbles over a
//! channel.
//!
//! # Architecture
//!
//! ```text
//!   raw args ──► Dispatcher ──► Command (normalized token)
//!                    │
//!        ┌───────────┴──────────────┐
//!        │ subcommand               │ anything else
//!        ▼                          ▼
//!   Sequence (steps)          echo / fortune path
//!        │                          │  ProcessRunner
//!        ▼                          │
//!   SequenceEngine ──► UiSurface    │
//!        │                          │
//!        └──────────► ResponseEmitter ◄┘
//!                          │
//!                   render_bubble()
//!                          │
//!                          ▼
//!               mpsc::Sender<ResponseMessage>
//! ```
//!
//! # Key Types
//!
//! - [`Dispatcher`]: routes one command line to a sequence or the echo path
//! - [`UiSurface`]: the host's dialogs, notifications, status line, widgets and title
//! - [`SequenceEngine`]: runs ordered [`SequenceStep`]s with timed waits
//! - [`ResponseEmitter`]: packages bubbles into [`ResponseMessage`]s
//! - [`CompletionNotifier`]: desktop notification when the agent finishes
//!
//! # Quick Start
//!
//! ```ignore
//! use pisay_core::{Dispatcher, PisayConfig, TokioProcessRunner, UiContext};
//! use tokio::sync::mpsc;
//!
//! let (tx, mut rx) = mpsc::channel(16);
//! let dispatcher = Dispatcher::new(TokioProcessRunner::new(), PisayConfig::default(), tx);
//!
//! dispatcher.dispatch("help", &UiContext::absent()).await;
//! let message = rx.recv().await.unwrap();
//! println!("{}", message.content);
//! ```

#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bubble;
pub mod command;
pub mod completion;
pub mod config;
pub mod dispatcher;
pub mod emitter;
pub mod exec;
pub mod messages;
pub mod sequence;
pub mod sequences;
pub mod testing;
pub mod ui;

// Re-exports for convenience
pub use bubble::{render_bubble, BubbleLayout, MASCOT, MAX_WIDTH};
pub use command::{Command, Subcommand};
pub use completion::{AgentEndEvent, AgentMessage, CompletionNotifier, StopReason};
pub use config::{
    default_config_path, load_config, load_config_from_path, load_config_with_env,
    CompletionConfig, ConfigError, ConfigOverrides, ConfigSource, FortuneConfig, PisayConfig,
    PisayToml,
};
pub use dispatcher::Dispatcher;
pub use emitter::ResponseEmitter;
pub use exec::{ExecError, ExecOutput, ProcessRunner, TokioProcessRunner};
pub use messages::{MessageId, MessageRole, NotifyLevel, ResponseMessage, PISAY_MESSAGE_TYPE};
pub use sequence::{
    DialogAnswer, Rule, Rulebook, Sequence, SequenceEngine, SequenceReport, SequenceStep, Verdict,
};
pub use ui::{UiContext, UiSurface, WidgetPlacement};
