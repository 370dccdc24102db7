//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod test_support;

pub use cli::ProbeArgs;
pub use defaults::{DEFAULT_ERROR_CODE, DEFAULT_SUCCESS_CODE, DEFAULT_USER_AGENT};
pub use parsers::{normalize_legacy_flags, parse_headers};
pub use types::HeaderMapping;
