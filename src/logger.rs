use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const QUIET: &str = "parking_commands=warn";
const VERBOSE: &str = "parking_commands=debug,info";

/// Filter directives in order of precedence: `RUST_LOG`, then `log_filter`
/// from the settings file, then the default for `verbose`.
fn filter_directives(rust_log: Option<String>, configured: Option<&str>, verbose: bool) -> String {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| if verbose { VERBOSE } else { QUIET }.to_string())
}

/// Installs the global subscriber writing compact lines to stderr, so stdout
/// carries only protocol output.
pub fn init_cli_logger(configured: Option<&str>, verbose: bool) {
    let directives = filter_directives(std::env::var("RUST_LOG").ok(), configured, verbose);
    let (filter, rejected) = match EnvFilter::try_new(&directives) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(QUIET), Some(err)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();

    if let Some(err) = rejected {
        tracing::warn!(%directives, %err, "invalid log filter, using {}", QUIET);
    }
}
