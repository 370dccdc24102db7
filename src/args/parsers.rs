use std::convert::Infallible;
use std::ffi::OsString;

use super::types::HeaderMapping;
use crate::error::{AppError, AppResult, ValidationError};

/// Single-dash long flags accepted for compatibility with older invocations.
const LEGACY_LONG_FLAGS: [(&str, &str); 2] = [("-success", "--success"), ("-error", "--error")];

/// Parses a `Key1: Val1, Key2: Val2` spec into a header mapping.
///
/// Entries are split on every comma, then on the first colon only, so values
/// keep any further colons. Entries without a colon are dropped. Later
/// duplicates replace earlier ones.
#[must_use]
pub fn parse_headers(spec: &str) -> HeaderMapping {
    let mut headers = HeaderMapping::new();
    if spec.is_empty() {
        return headers;
    }

    for entry in spec.split(',') {
        if let Some((key, value)) = entry.split_once(':') {
            headers.insert(key.trim().to_owned(), value.trim().to_owned());
        }
    }

    headers
}

/// Rewrites `-success`/`-error` (and their `=value` forms) to the
/// double-dash spelling clap understands. Everything else passes through.
#[must_use]
pub fn normalize_legacy_flags<I>(raw_args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    raw_args
        .into_iter()
        .map(|arg| {
            let Some(text) = arg.to_str() else {
                return arg;
            };
            for (legacy, modern) in LEGACY_LONG_FLAGS {
                if text == legacy {
                    return OsString::from(modern);
                }
                if let Some(value) = text
                    .strip_prefix(legacy)
                    .and_then(|rest| rest.strip_prefix('='))
                {
                    return OsString::from(format!("{}={}", modern, value));
                }
            }
            arg
        })
        .collect()
}

/// Any value other than an explicit "off" spelling disables color, following
/// the `NO_COLOR` convention.
pub(crate) fn parse_no_color(s: &str) -> Result<bool, Infallible> {
    Ok(parse_bool_env(s).unwrap_or(true))
}

pub(crate) fn parse_bool_env(s: &str) -> AppResult<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" => Ok(false),
        _ => Err(AppError::validation(ValidationError::InvalidBoolean {
            value: s.to_owned(),
        })),
    }
}
