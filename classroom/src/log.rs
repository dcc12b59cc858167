use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs a stderr logger filtered by `RUST_LOG`, defaulting to `info`
///
/// Records from the `log` crate are forwarded too. Calling this more than once
/// is harmless; only the first subscriber is kept.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
