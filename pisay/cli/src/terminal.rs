//! Terminal Host
//!
//! A line-oriented [`UiSurface`]: dialogs become prompts on stdin, the status
//! line, widgets and notifications become styled lines on stdout, and the
//! title goes out as the terminal's title escape.
//!
//! The host also owns the receiving end of the dispatcher's response
//! channel. Pending bubbles are printed before every line the host writes,
//! so output appears in the order the command produced it, and
//! [`TerminalHost::print_responses`] prints the rest as they arrive.

use std::io::{self, Write};

use async_trait::async_trait;
use crossterm::terminal::SetTitle;
use parking_lot::Mutex;
use pisay_core::{NotifyLevel, ResponseMessage, UiSurface, WidgetPlacement};
use tokio::sync::mpsc;

use crate::render::render_message;
use crate::theme::{notify_color, Palette, BERRY, DIM_GRAY, PI_GOLD};

/// Line that ends a multi-line editor submission
const EDITOR_END: &str = ".";

/// Lines buffered between the stdin thread and the host
const STDIN_BUFFER: usize = 16;

// ============================================================================
// Line Sources
// ============================================================================

/// Where the host reads answers from
#[async_trait]
pub trait LineSource: Send {
    /// Next line without its terminator, `None` at end of input
    async fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Lines delivered over a channel
///
/// Input ends when the sender goes away. Waiting on the channel can be
/// abandoned at any time, unlike a blocking read of stdin.
#[derive(Debug)]
pub struct ChannelLines {
    rx: mpsc::Receiver<io::Result<String>>,
}

impl ChannelLines {
    #[must_use]
    pub fn new(rx: mpsc::Receiver<io::Result<String>>) -> Self {
        Self { rx }
    }

    /// Read stdin on its own thread
    ///
    /// The thread is never joined; it ends with the process or at end of
    /// input.
    pub fn stdin() -> io::Result<Self> {
        use std::io::BufRead as _;

        let (tx, rx) = mpsc::channel(STDIN_BUFFER);
        std::thread::Builder::new()
            .name("pisay-stdin".to_string())
            .spawn(move || {
                for line in std::io::stdin().lock().lines() {
                    let failed = line.is_err();
                    if tx.blocking_send(line).is_err() || failed {
                        break;
                    }
                }
            })?;
        Ok(Self::new(rx))
    }
}

#[async_trait]
impl LineSource for ChannelLines {
    async fn next_line(&mut self) -> io::Result<Option<String>> {
        self.rx.recv().await.transpose()
    }
}

// ============================================================================
// Terminal Host
// ============================================================================

/// How response messages are printed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Padded box over the message background
    #[default]
    Boxed,
    /// One JSON object per message
    Json,
}

/// Terminal implementation of the UI facade
pub struct TerminalHost<R, W> {
    reader: tokio::sync::Mutex<R>,
    writer: Mutex<W>,
    responses: Mutex<mpsc::Receiver<ResponseMessage>>,
    palette: Palette,
    mode: OutputMode,
}

impl<R, W> TerminalHost<R, W>
where
    R: LineSource,
    W: Write + Send,
{
    /// Create a host reading answers from `reader` and drawing on `writer`
    pub fn new(
        reader: R,
        writer: W,
        responses: mpsc::Receiver<ResponseMessage>,
        palette: Palette,
    ) -> Self {
        Self {
            reader: tokio::sync::Mutex::new(reader),
            writer: Mutex::new(writer),
            responses: Mutex::new(responses),
            palette,
            mode: OutputMode::default(),
        }
    }

    /// Print responses as `mode`
    #[must_use]
    pub fn with_output_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Print every response received so far
    pub fn flush_responses(&self) {
        let mut responses = self.responses.lock();
        while let Ok(message) = responses.try_recv() {
            self.print_response(&message);
        }
    }

    /// Print responses as they arrive, until every sender is gone
    ///
    /// Meant to run alongside the command, so a bubble shows up while its
    /// sequence is still waiting. The receiver is only locked while polled.
    pub async fn print_responses(&self) {
        while let Some(message) =
            std::future::poll_fn(|cx| self.responses.lock().poll_recv(cx)).await
        {
            self.print_response(&message);
        }
    }

    fn print_response(&self, message: &ResponseMessage) {
        let text = match self.mode {
            OutputMode::Boxed => render_message(message, self.palette),
            OutputMode::Json => match serde_json::to_string(message) {
                Ok(json) => Some(json),
                Err(e) => {
                    tracing::warn!(id = %message.id.0, error = %e, "Failed to serialize response");
                    None
                }
            },
        };
        let Some(text) = text else {
            tracing::debug!(id = %message.id.0, kind = %message.custom_type, "Skipping response");
            return;
        };
        let mut writer = self.writer.lock();
        if let Err(e) = writeln!(writer, "{text}").and_then(|()| writer.flush()) {
            tracing::warn!(error = %e, "Failed to write response");
        }
    }

    /// Write one line after any pending responses
    fn write_line(&self, line: &str) {
        self.flush_responses();
        let mut writer = self.writer.lock();
        if let Err(e) = writeln!(writer, "{line}").and_then(|()| writer.flush()) {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }

    /// Write a prompt without a line break
    pub fn prompt(&self, text: &str) {
        self.flush_responses();
        let painted = self.palette.fg(text, PI_GOLD);
        let mut writer = self.writer.lock();
        if let Err(e) = write!(writer, "{painted}").and_then(|()| writer.flush()) {
            tracing::warn!(error = %e, "Failed to write prompt");
        }
    }

    /// Read one line, `None` at end of input
    pub async fn read_line(&self) -> Option<String> {
        let mut reader = self.reader.lock().await;
        match reader.next_line().await {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read from terminal");
                None
            }
        }
    }

    /// Consume the host, returning its writer
    pub fn into_writer(self) -> W {
        self.writer.into_inner()
    }
}

fn placement_label(placement: WidgetPlacement) -> &'static str {
    match placement {
        WidgetPlacement::AboveEditor => "above editor",
        WidgetPlacement::BelowEditor => "below editor",
    }
}

#[async_trait]
impl<R, W> UiSurface for TerminalHost<R, W>
where
    R: LineSource,
    W: Write + Send,
{
    async fn confirm(&self, title: &str, question: &str) -> bool {
        self.write_line(&self.palette.fg(title, PI_GOLD));
        self.prompt(&format!("{question} [y/N] "));
        let answer = self.read_line().await.unwrap_or_default();
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }

    async fn select(&self, title: &str, options: &[String]) -> Option<String> {
        self.write_line(&self.palette.fg(title, PI_GOLD));
        for (i, option) in options.iter().enumerate() {
            self.write_line(&format!("  {}. {option}", i + 1));
        }
        self.prompt(&format!("pick 1-{}, empty to cancel › ", options.len()));

        let answer = self.read_line().await?;
        let choice = answer.trim().parse::<usize>().ok()?;
        choice
            .checked_sub(1)
            .and_then(|i| options.get(i))
            .cloned()
    }

    async fn input(&self, title: &str, placeholder: &str) -> Option<String> {
        self.write_line(&self.palette.fg(title, PI_GOLD));
        self.prompt(&format!("({placeholder}) › "));
        self.read_line().await
    }

    async fn editor(&self, title: &str, prefill: &str) -> Option<String> {
        self.write_line(&self.palette.fg(title, PI_GOLD));
        for line in prefill.lines() {
            self.write_line(&self.palette.fg(&format!("│ {line}"), DIM_GRAY));
        }
        self.write_line(&self.palette.fg(
            "end with a line containing only '.', an empty entry keeps the text above",
            DIM_GRAY,
        ));

        let mut lines = Vec::new();
        loop {
            let line = self.read_line().await?;
            if line.trim() == EDITOR_END {
                break;
            }
            lines.push(line);
        }

        if lines.is_empty() {
            Some(prefill.to_string())
        } else {
            Some(lines.join("\n"))
        }
    }

    fn notify(&self, text: &str, level: NotifyLevel) {
        let marker = self.palette.fg(&format!("● {level}:"), notify_color(level));
        self.write_line(&format!("{marker} {text}"));
    }

    fn set_status(&self, key: &str, text: Option<&str>) {
        let line = match text {
            Some(text) => format!("[{key}] {text}"),
            None => format!("[{key}] cleared"),
        };
        self.write_line(&self.palette.fg(&line, DIM_GRAY));
    }

    fn set_widget(&self, key: &str, lines: Option<&[String]>, placement: WidgetPlacement) {
        let Some(lines) = lines else {
            self.write_line(&self.palette.fg(&format!("└ {key} cleared"), BERRY));
            return;
        };
        self.write_line(&self.palette.fg(
            &format!("┌ {key} ({})", placement_label(placement)),
            BERRY,
        ));
        for line in lines {
            self.write_line(&format!("{} {line}", self.palette.fg("│", BERRY)));
        }
    }

    fn set_title(&self, text: &str) {
        self.flush_responses();
        let mut writer = self.writer.lock();
        if let Err(e) = crossterm::execute!(writer, SetTitle(text)) {
            tracing::warn!(error = %e, "Failed to set terminal title");
        }
    }

    fn set_editor_text(&self, text: &str) {
        self.write_line(&format!("{} {text}", self.palette.fg("✎ editor ←", PI_GOLD)));
    }
}

impl<R, W> std::fmt::Debug for TerminalHost<R, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalHost")
            .field("palette", &self.palette)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
