use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding a tracing filter when `--verbose` is not given.
pub const LOG_ENV: &str = "PHRASE_LOG";

/// Installs the stderr tracing subscriber.
///
/// `--verbose` turns on debug output for this crate; otherwise `PHRASE_LOG`
/// is read as a filter directive and tracing stays silent when it is unset.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("phrase_cli=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"))
    };

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .try_init();
}
