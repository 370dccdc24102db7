use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the global subscriber. Logs go to stderr; stdout carries the
/// probe report.
pub(crate) fn init_logging(verbose: bool, no_color: bool) {
    let filter = std::env::var("LIMITPROBE_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| EnvFilter::new(default_level(verbose)),
            |value| {
                EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new(default_level(false)))
            },
        );

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

/// Quiet unless asked: stderr stays empty on a normal run.
const fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_is_idempotent() {
        init_logging(false, false);
        init_logging(true, true);
    }

    #[test]
    fn default_level_is_quiet_without_verbose() -> Result<(), String> {
        if default_level(false) != "warn" {
            return Err("run progress should not be logged by default".to_owned());
        }
        if default_level(true) != "debug" {
            return Err("--verbose should enable debug".to_owned());
        }
        Ok(())
    }
}
