//! Interactive Shell
//!
//! Reads command lines one at a time and dispatches each to completion
//! before reading the next. Lines may carry the `/pisay` prefix an agent
//! shell would see, or just the arguments.

use std::io::Write;

use pisay_core::{Dispatcher, ProcessRunner, UiContext};

use crate::terminal::{LineSource, TerminalHost};

/// Command prefix accepted in front of the arguments
const COMMAND_PREFIX: &str = "/pisay";

/// Prompt shown while waiting for a command
const PROMPT: &str = "π› ";

/// One line of shell input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellLine<'a> {
    /// Leave the shell
    Quit,
    /// Nothing to do
    Blank,
    /// Arguments to dispatch
    Command(&'a str),
}

/// Classify a line of input
#[must_use]
pub fn parse_line(line: &str) -> ShellLine<'_> {
    let line = line.trim();
    match line {
        "" => ShellLine::Blank,
        "/quit" | "/exit" => ShellLine::Quit,
        _ => match line.strip_prefix(COMMAND_PREFIX) {
            Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => {
                ShellLine::Command(rest)
            }
            _ => ShellLine::Command(line),
        },
    }
}

/// Run the shell until end of input or `/quit`
///
/// Returns the number of commands dispatched.
pub async fn run<P, R, W>(dispatcher: &Dispatcher<P>, host: &TerminalHost<R, W>, ui: bool) -> usize
where
    P: ProcessRunner,
    R: LineSource,
    W: Write + Send,
{
    let ctx = if ui {
        UiContext::present(host)
    } else {
        UiContext::absent()
    };

    let mut dispatched = 0;
    loop {
        host.prompt(PROMPT);
        let Some(line) = host.read_line().await else {
            tracing::debug!("End of input");
            break;
        };

        match parse_line(&line) {
            ShellLine::Quit => break,
            ShellLine::Blank => continue,
            ShellLine::Command(args) => {
                tracing::debug!(args = %args, "Shell command");
                dispatcher.dispatch(args, &ctx).await;
                host.flush_responses();
                dispatched += 1;
            }
        }
    }

    dispatched
}
