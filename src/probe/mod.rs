//! The probe loop: send one request until the deadline, classify each
//! status, and stop at the first rate-limit hit.
mod config;
mod outcome;
mod output;
mod runner;


pub use config::{OutputMode, RunConfig};
pub use outcome::{AttemptOutcome, ProbeSummary, RequestCounter, Termination};
pub use output::{ProbeOutput, TerminalOutput, TIMESTAMP_FORMAT};
pub use runner::run_probe;
