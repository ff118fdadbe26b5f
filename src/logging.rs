use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Maps the count of `-v` flags to a log level.
pub fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over `verbose`.
///
/// Logs go to stderr so listings on stdout stay clean.
pub fn init_logging(verbose: u8) {
    let default_filter = format!("rolodex_store={}", level_for(verbose));

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false),
    );

    // ignore error if a subscriber is already set
    let _ = subscriber.try_init();
}
