use clap::Parser;

use super::defaults::{DEFAULT_ERROR_CODE, DEFAULT_SUCCESS_CODE};
use super::parsers::parse_no_color;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "limitprobe",
    version,
    about = "Send one fixed GET request in a loop and report when the target starts rate limiting."
)]
pub struct ProbeArgs {
    /// URL to test
    #[arg(long, short = 'u', default_value = "")]
    pub url: String,

    /// Request headers, e.g. "Myheader: test, Other: value"
    #[arg(long = "headers", short = 'H', default_value = "")]
    pub headers: String,

    /// Expected HTTP success code
    #[arg(long = "success", default_value_t = DEFAULT_SUCCESS_CODE)]
    pub success_code: u16,

    /// Expected HTTP error (rate limit) code
    #[arg(long = "error", default_value_t = DEFAULT_ERROR_CODE)]
    pub error_code: u16,

    /// Duration in seconds to keep sending requests (zero or negative sends nothing)
    #[arg(
        long = "duration",
        short = 't',
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub duration_secs: i64,

    /// Keep lines for unexpected status codes instead of erasing them
    #[arg(long = "keep-unexpected")]
    pub keep_unexpected: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_no_color)]
    pub no_color: bool,

    /// Enable verbose logging (sets log level to debug unless overridden by LIMITPROBE_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
