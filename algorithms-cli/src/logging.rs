//! Logging setup for the CLI binary.

use tracing_subscriber::EnvFilter;

/// Install a stderr formatter filtered by `RUST_LOG`, falling back to `level`.
///
/// The engines log through the `log` facade; those records are bridged into
/// the subscriber.
pub(crate) fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(err) = installed {
        log::debug!("logging already initialised: {err}");
    }
}
