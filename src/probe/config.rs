use std::time::Duration;

use tokio::time::Instant;

use crate::args::ProbeArgs;
use crate::error::{AppError, AppResult, ValidationError};

/// What happens to the line printed for a status that is neither the
/// success nor the error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Erase the line right after printing it.
    EraseUnexpected,
    /// Leave every line in place.
    KeepAll,
}

/// Immutable settings for one probe run, frozen from the CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub url: String,
    pub header_spec: String,
    pub success_code: u16,
    pub error_code: u16,
    pub duration: Duration,
    pub output_mode: OutputMode,
}

impl RunConfig {
    #[must_use]
    pub fn from_args(args: &ProbeArgs) -> Self {
        let output_mode = if args.keep_unexpected {
            OutputMode::KeepAll
        } else {
            OutputMode::EraseUnexpected
        };
        Self {
            url: args.url.clone(),
            header_spec: args.headers.clone(),
            success_code: args.success_code,
            error_code: args.error_code,
            duration: Duration::from_secs(u64::try_from(args.duration_secs).unwrap_or(0)),
            output_mode,
        }
    }

    /// Checks the settings that must hold before any request is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingUrl`] when no URL was given.
    pub fn validate(&self) -> AppResult<()> {
        if self.url.is_empty() {
            return Err(AppError::validation(ValidationError::MissingUrl));
        }
        Ok(())
    }

    /// Deadline for a run starting at `start`. A zero duration yields
    /// `start` itself, so the loop body never runs.
    ///
    /// # Errors
    ///
    /// Returns an error when the duration cannot be represented as an
    /// instant.
    pub fn deadline_from(&self, start: Instant) -> AppResult<Instant> {
        start.checked_add(self.duration).ok_or_else(|| {
            AppError::validation(ValidationError::DurationOverflow {
                seconds: self.duration.as_secs(),
            })
        })
    }
}
