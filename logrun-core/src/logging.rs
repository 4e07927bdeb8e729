use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system with environment-based filtering
///
/// Diagnostics are written to stderr so they never interleave with the
/// rendered report on stdout:
/// - `RUST_LOG` wins when set, otherwise `default_level` is used
/// - `json` switches to the flattened JSON formatter
pub fn init_logging(default_level: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);

    // A second init (e.g. from tests) keeps the first subscriber.
    let result = if json {
        builder.json().flatten_event(true).try_init()
    } else {
        builder.with_target(false).try_init()
    };

    if let Err(err) = result {
        tracing::debug!("logging already initialized: {err}");
    }
}
