use chrono::Local;
use tokio::time::Instant;
use tracing::{debug, info};

use super::config::RunConfig;
use super::outcome::{AttemptOutcome, ProbeSummary, RequestCounter, Termination};
use super::output::ProbeOutput;
use crate::args::parse_headers;
use crate::error::{AppError, AppResult};
use crate::http::{RequestTemplate, Transport};

/// Runs one probe: builds the request template, then sends it until the
/// deadline passes or the configured error code comes back.
///
/// Requests go out strictly one after another; a send is awaited before the
/// deadline is checked again, so a slow response can overrun the deadline.
///
/// # Errors
///
/// Returns an error when the configuration is invalid, the template cannot
/// be built (no request is sent in either case), a send fails, or the output
/// cannot be written. Hitting the rate limit is not an error; it is reported
/// through [`Termination::RateLimited`].
pub async fn run_probe<T, O>(
    config: &RunConfig,
    transport: &T,
    output: &mut O,
) -> AppResult<ProbeSummary>
where
    T: Transport + ?Sized,
    O: ProbeOutput + ?Sized,
{
    config.validate()?;

    let headers = parse_headers(&config.header_spec);
    let template = RequestTemplate::get(&config.url)?.with_headers(&headers)?;

    let deadline = config.deadline_from(Instant::now())?;
    info!(
        url = %template.url(),
        headers = template.headers().len(),
        duration_secs = config.duration.as_secs(),
        success_code = config.success_code,
        error_code = config.error_code,
        "Starting probe"
    );

    let mut counter = RequestCounter::default();
    while Instant::now() < deadline {
        let status = match transport.send(&template).await {
            Ok(status) => status,
            Err(err) => {
                debug!(sent = counter.get(), "Transport failure: {}", err);
                return Err(AppError::http(err));
            }
        };

        let sent = counter.increment();
        let outcome =
            AttemptOutcome::classify(status, config.success_code, config.error_code, Local::now());
        debug!(request = sent, status, "Attempt classified");
        output.attempt(&outcome)?;

        if let AttemptOutcome::ErrorMatched { status, .. } = outcome {
            let requests_before_limit = sent.saturating_sub(1);
            output.rate_limit_summary(requests_before_limit)?;
            info!(status, requests_before_limit, "Rate limit reached");
            return Ok(ProbeSummary {
                requests_sent: sent,
                termination: Termination::RateLimited {
                    status,
                    requests_before_limit,
                },
            });
        }
    }

    info!(requests = counter.get(), "Deadline reached");
    Ok(ProbeSummary {
        requests_sent: counter.get(),
        termination: Termination::DeadlineReached,
    })
}
