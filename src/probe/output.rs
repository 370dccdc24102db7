use std::io::{self, Write};

use crossterm::cursor::MoveToPreviousLine;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use super::config::OutputMode;
use super::outcome::AttemptOutcome;

/// `chrono` format for the local timestamp that starts every attempt line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Presentation of probe progress. The loop only hands over outcomes; how
/// (and whether) they stay on screen is up to the implementation.
pub trait ProbeOutput {
    /// # Errors
    ///
    /// Returns an error when the underlying writer fails.
    fn attempt(&mut self, outcome: &AttemptOutcome) -> io::Result<()>;

    /// Called once, right after the error code was reported.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying writer fails.
    fn rate_limit_summary(&mut self, requests_before_limit: u64) -> io::Result<()>;
}

/// Line-oriented output for a terminal (or any writer).
pub struct TerminalOutput<W> {
    writer: W,
    mode: OutputMode,
}

impl<W: Write> TerminalOutput<W> {
    #[must_use]
    pub const fn new(writer: W, mode: OutputMode) -> Self {
        Self { writer, mode }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ProbeOutput for TerminalOutput<W> {
    fn attempt(&mut self, outcome: &AttemptOutcome) -> io::Result<()> {
        let line = format_attempt(outcome);
        writeln!(self.writer, "{}", line)?;
        if matches!(outcome, AttemptOutcome::Unexpected { .. })
            && self.mode == OutputMode::EraseUnexpected
        {
            queue!(
                self.writer,
                MoveToPreviousLine(1),
                Clear(ClearType::CurrentLine)
            )?;
        }
        self.writer.flush()
    }

    fn rate_limit_summary(&mut self, requests_before_limit: u64) -> io::Result<()> {
        writeln!(self.writer, "{}", format_rate_limit_summary(requests_before_limit))?;
        self.writer.flush()
    }
}

#[must_use]
pub(crate) fn format_attempt(outcome: &AttemptOutcome) -> String {
    let timestamp = outcome.at().format(TIMESTAMP_FORMAT);
    let status = outcome.status();
    match outcome {
        AttemptOutcome::Success { .. } => format!(
            "{} Success! Expected HTTP success code received: {}",
            timestamp, status
        ),
        AttemptOutcome::ErrorMatched { .. } => format!(
            "{} Error! Expected HTTP error code received: {}",
            timestamp, status
        ),
        AttemptOutcome::Unexpected { .. } => format!(
            "{} Unexpected HTTP response code received: {}",
            timestamp, status
        ),
    }
}

#[must_use]
pub(crate) fn format_rate_limit_summary(requests_before_limit: u64) -> String {
    format!("Rate limit hit: {} requests", requests_before_limit)
}
