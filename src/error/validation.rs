use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Please provide a URL using the -u flag")]
    MissingUrl,
    #[error("Invalid boolean '{value}'. Expected true/false, yes/no, on/off, or 1/0.")]
    InvalidBoolean { value: String },
    #[error("Duration of {seconds}s is too large.")]
    DurationOverflow { seconds: u64 },
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
