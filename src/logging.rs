use tracing_subscriber::EnvFilter;

/// Initialize tracing output. Log lines go to stderr so they never
/// interleave with the progress stream on stdout; `RUST_LOG` overrides
/// the default `warn` filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
