use std::process::ExitCode;

use clap::{CommandFactory, FromArgMatches};

use limitprobe::args::{ProbeArgs, normalize_legacy_flags};
use limitprobe::error::{AppError, AppResult};
use limitprobe::http::ReqwestTransport;
use limitprobe::probe::{ProbeSummary, RunConfig, TerminalOutput, Termination, run_probe};

use crate::system::{banner, logger};

/// Parses the command line, runs the probe, and turns the outcome into the
/// process exit status. This is the only place that decides how the process
/// ends.
pub(crate) fn run() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    logger::init_logging(args.verbose, args.no_color);
    banner::print_cli_banner(args.no_color);

    let config = RunConfig::from_args(&args);
    match execute(&config) {
        Ok(summary) => ExitCode::from(exit_status(&summary)),
        Err(err) => {
            report_failure(&err);
            ExitCode::FAILURE
        }
    }
}

fn parse_args() -> AppResult<ProbeArgs> {
    let raw_args = normalize_legacy_flags(std::env::args_os());
    // Exits on its own for --help, --version and malformed flags.
    let matches = ProbeArgs::command().get_matches_from(raw_args);
    let args = ProbeArgs::from_arg_matches(&matches)?;
    Ok(args)
}

fn execute(config: &RunConfig) -> AppResult<ProbeSummary> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let transport = ReqwestTransport::new()?;
        let mut output = TerminalOutput::new(std::io::stdout().lock(), config.output_mode);
        run_probe(config, &transport, &mut output).await
    })
}

/// 0 when the deadline passed cleanly, 1 when the limit was hit.
const fn exit_status(summary: &ProbeSummary) -> u8 {
    match summary.termination {
        Termination::DeadlineReached => 0,
        Termination::RateLimited { .. } => 1,
    }
}

fn report_failure(err: &AppError) {
    match err {
        AppError::Validation(_) => {
            tracing::debug!("Setup failed before any request was sent.");
        }
        AppError::Http(http_err) if http_err.is_transport() => {
            tracing::debug!("Run aborted by transport failure.");
        }
        AppError::Http(_) | AppError::Io { .. } | AppError::Clap { .. } => {}
    }
    eprintln!("{}", err);
}
