//! pisay
//!
//! Terminal host for the π mascot. Runs `/pisay` commands against a
//! line-oriented UI: dialogs are prompts, widgets and the status line are
//! printed, bubbles are drawn in a padded box.
//!
//! # Usage
//!
//! ```bash
//! # One command
//! pisay say help
//! pisay say select
//!
//! # Interactive, one command per line until EOF or /quit
//! pisay shell
//!
//! # Pretend the host has no UI
//! pisay --no-ui say widget
//!
//! # Fire the completion notification for the current directory
//! pisay agent-end
//! ```
//!
//! # Environment Variables
//!
//! - `PISAY_CONFIG`: Config file path (default: `$XDG_CONFIG_HOME/pisay/pisay.toml`)
//! - `PISAY_FORTUNE_CMD`, `PISAY_FORTUNE_TIMEOUT_MS`, `PISAY_DEFAULT_TITLE`,
//!   `PISAY_COMPLETION`: configuration overrides
//! - `NO_COLOR`: Disable colors
//! - `RUST_LOG`: Log level (trace, debug, info, warn, error)
//!
//! # Signals
//!
//! - SIGINT: Abandons the running command, including a pending prompt.
//!   Status entries and widgets it set are cleared on the way out.

mod render;
mod shell;
mod terminal;
mod theme;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tokio::sync::mpsc;
use tracing::{debug, info};

use pisay_core::{
    load_config, load_config_from_path, AgentEndEvent, AgentMessage, CompletionNotifier,
    ConfigOverrides, Dispatcher, PisayConfig, StopReason, TokioProcessRunner, UiContext,
};

use crate::terminal::{ChannelLines, OutputMode, TerminalHost};
use crate::theme::Palette;

/// Responses buffered between the dispatcher and the terminal
const RESPONSE_BUFFER: usize = 32;

#[derive(Parser, Debug)]
#[command(name = "pisay", version, about = "π speaks, judges and occasionally notifies")]
struct Cli {
    /// Run as a host without UI (dialogs, widgets and status are unavailable)
    #[arg(long, global = true)]
    no_ui: bool,

    /// Configuration file
    #[arg(long, global = true, env = "PISAY_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Fortune program used when there is nothing to echo
    #[arg(long, global = true, value_name = "CMD")]
    fortune_command: Option<String>,

    /// Milliseconds the fortune program may run
    #[arg(long, global = true, value_name = "MS")]
    fortune_timeout_ms: Option<u64>,

    /// Title restored by `title-reset`
    #[arg(long, global = true, value_name = "TITLE")]
    default_title: Option<String>,

    /// Skip the completion notification in `agent-end`
    #[arg(long, global = true)]
    no_completion: bool,

    /// Print responses as JSON lines instead of boxes
    #[arg(long, global = true)]
    json: bool,

    /// When to color output
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Run one command, e.g. `pisay say confirm`
    Say {
        /// Command arguments, joined with spaces
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Read commands from stdin until EOF or `/quit`
    Shell,
    /// Send the completion notification once
    AgentEnd {
        /// Treat the turn as aborted by the user
        #[arg(long)]
        aborted: bool,

        /// Agent-end event as JSON (`{"messages": [...]}`)
        #[arg(long, value_name = "JSON", conflicts_with = "aborted")]
        event: Option<String>,

        /// Directory reported in the notification (default: current)
        #[arg(long, value_name = "DIR")]
        cwd: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn palette(self) -> Palette {
        match self {
            Self::Auto => Palette::detect(),
            Self::Always => Palette::colored(),
            Self::Never => Palette::plain(),
        }
    }
}

/// Initialize logging on stderr so stdout only carries output
fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("pisay={level}").parse()?)
                .add_directive(format!("pisay_core={level}").parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
    Ok(())
}

/// Load configuration: flags over environment over file over defaults
fn build_config(cli: &Cli) -> anyhow::Result<PisayConfig> {
    let mut config = match cli.config {
        Some(ref path) => load_config_from_path(Some(path.clone())),
        None => load_config(),
    }
    .context("Failed to load configuration")?;

    let mut overrides = ConfigOverrides::new();
    if let Some(ref command) = cli.fortune_command {
        overrides = overrides.with_fortune_command(command.clone());
    }
    if let Some(ms) = cli.fortune_timeout_ms {
        overrides = overrides.with_fortune_timeout_ms(ms);
    }
    if let Some(ref title) = cli.default_title {
        overrides = overrides.with_default_title(title.clone());
    }
    if cli.no_completion {
        overrides = overrides.with_completion_enabled(false);
    }
    overrides.apply(&mut config);
    config.validate().context("Invalid command-line override")?;

    Ok(config)
}

/// The event `agent-end` reports
fn agent_end_event(aborted: bool, json: Option<&str>) -> anyhow::Result<AgentEndEvent> {
    if let Some(json) = json {
        return serde_json::from_str(json).context("Failed to parse agent-end event");
    }
    let stop_reason = if aborted {
        StopReason::Aborted
    } else {
        StopReason::Stop
    };
    Ok(AgentEndEvent {
        messages: vec![AgentMessage::user(), AgentMessage::assistant(stop_reason)],
    })
}

async fn agent_end(
    config: PisayConfig,
    aborted: bool,
    event: Option<String>,
    cwd: Option<PathBuf>,
) -> anyhow::Result<()> {
    let event = agent_end_event(aborted, event.as_deref())?;
    let cwd = match cwd {
        Some(cwd) => cwd,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    let notifier = CompletionNotifier::new(Arc::new(TokioProcessRunner::new()), config.completion);
    notifier.on_agent_end(&event, &cwd).await;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = build_config(&cli)?;
    info!(source = %config.source(), "Configuration loaded");

    let (args, interactive) = match cli.mode {
        Mode::AgentEnd {
            aborted,
            event,
            cwd,
        } => return agent_end(config, aborted, event, cwd).await,
        Mode::Say { ref args } => (args.join(" "), false),
        Mode::Shell => (String::new(), true),
    };

    let (tx, rx) = mpsc::channel(RESPONSE_BUFFER);
    let dispatcher = Dispatcher::new(TokioProcessRunner::new(), config, tx);
    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Boxed
    };
    let input = ChannelLines::stdin().context("Failed to start reading stdin")?;
    let host = TerminalHost::new(input, std::io::stdout(), rx, cli.color.palette())
        .with_output_mode(mode);

    let run = async {
        if interactive {
            let count = shell::run(&dispatcher, &host, !cli.no_ui).await;
            debug!(commands = count, "Shell finished");
        } else {
            let ctx = if cli.no_ui {
                UiContext::absent()
            } else {
                UiContext::present(&host)
            };
            dispatcher.dispatch(&args, &ctx).await;
        }
    };

    tokio::select! {
        () = run => {}
        () = host.print_responses() => {}
        result = tokio::signal::ctrl_c() => {
            result.context("Failed to listen for interrupt")?;
            info!("Interrupted");
        }
    }

    host.flush_responses();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::time::Duration;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_say_joins_trailing_args() {
        let cli = Cli::try_parse_from(["pisay", "--no-ui", "say", "hello", "--there", "π"]).unwrap();
        assert!(cli.no_ui);
        match cli.mode {
            Mode::Say { args } => assert_eq!(args.join(" "), "hello --there π"),
            other => panic!("unexpected mode {other:?}"),
        }
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pisay.toml");
        std::fs::write(
            &path,
            "[fortune]\ncommand = \"cowsay\"\ntimeout_ms = 500\n\n[title]\ndefault_title = \"from file\"\n",
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "pisay",
            "--config",
            path.to_str().unwrap(),
            "--default-title",
            "from flag",
            "shell",
        ])
        .unwrap();
        let config = build_config(&cli).unwrap();

        assert_eq!(config.default_title, "from flag");
        assert_eq!(config.fortune.timeout, Duration::from_millis(500));
        assert_eq!(config.source(), pisay_core::ConfigSource::Cli);
    }

    #[test]
    fn test_timeout_and_completion_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let cli = Cli::try_parse_from([
            "pisay",
            "--config",
            path.to_str().unwrap(),
            "--fortune-timeout-ms",
            "250",
            "--no-completion",
            "agent-end",
        ])
        .unwrap();
        let config = build_config(&cli).unwrap();

        assert_eq!(config.fortune.timeout, Duration::from_millis(250));
        assert!(!config.completion.enabled);

        let zero = Cli::try_parse_from([
            "pisay",
            "--config",
            path.to_str().unwrap(),
            "--fortune-timeout-ms",
            "0",
            "shell",
        ])
        .unwrap();
        assert!(build_config(&zero).is_err());
    }

    #[test]
    fn test_agent_end_event() {
        assert!(agent_end_event(true, None).unwrap().was_aborted());
        assert!(!agent_end_event(false, None).unwrap().was_aborted());

        let event = agent_end_event(
            false,
            Some(r#"{"messages":[{"role":"assistant","stopReason":"aborted"}]}"#),
        )
        .unwrap();
        assert!(event.was_aborted());
        assert!(agent_end_event(false, Some("not json")).is_err());
    }

    #[test]
    fn test_aborted_conflicts_with_event() {
        let result = Cli::try_parse_from(["pisay", "agent-end", "--aborted", "--event", "{}"]);
        assert!(result.is_err());
    }
}
