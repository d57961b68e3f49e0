use tracing_subscriber::{EnvFilter, fmt};

/// Initialize diagnostic logging on stderr.
///
/// Stdout is reserved for the test narration, so log lines never interleave
/// with it. The filter comes from `RUST_LOG` and defaults to `warn`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
