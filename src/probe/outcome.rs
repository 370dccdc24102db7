use chrono::{DateTime, Local};

/// Classification of one received response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    Success { status: u16, at: DateTime<Local> },
    ErrorMatched { status: u16, at: DateTime<Local> },
    Unexpected { status: u16, at: DateTime<Local> },
}

impl AttemptOutcome {
    /// Success wins when both codes are configured to the same value.
    #[must_use]
    pub const fn classify(
        status: u16,
        success_code: u16,
        error_code: u16,
        at: DateTime<Local>,
    ) -> Self {
        if status == success_code {
            AttemptOutcome::Success { status, at }
        } else if status == error_code {
            AttemptOutcome::ErrorMatched { status, at }
        } else {
            AttemptOutcome::Unexpected { status, at }
        }
    }

    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            AttemptOutcome::Success { status, .. }
            | AttemptOutcome::ErrorMatched { status, .. }
            | AttemptOutcome::Unexpected { status, .. } => *status,
        }
    }

    #[must_use]
    pub const fn at(&self) -> &DateTime<Local> {
        match self {
            AttemptOutcome::Success { at, .. }
            | AttemptOutcome::ErrorMatched { at, .. }
            | AttemptOutcome::Unexpected { at, .. } => at,
        }
    }
}

/// Number of responses received so far, whatever their status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestCounter(u64);

impl RequestCounter {
    /// Records one more response and returns the new total.
    pub const fn increment(&mut self) -> u64 {
        self.0 = self.0.saturating_add(1);
        self.0
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The deadline passed without the error code showing up.
    DeadlineReached,
    /// The error code was received on request number `requests_before_limit + 1`.
    RateLimited {
        status: u16,
        requests_before_limit: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeSummary {
    pub requests_sent: u64,
    pub termination: Termination,
}

impl ProbeSummary {
    #[must_use]
    pub const fn rate_limited(&self) -> bool {
        matches!(self.termination, Termination::RateLimited { .. })
    }
}
