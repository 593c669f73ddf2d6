use tracing_subscriber::EnvFilter;

/// Install the diagnostic logger.
///
/// Logs go to stderr so stdout only carries the event feed. The level defaults
/// to `warn` and can be raised with `RUST_LOG`, e.g. `RUST_LOG=room_listener=debug`.
pub fn init_log() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
