use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber. The level comes from
/// `RUST_LOG` and defaults to errors only; everything goes to stderr
/// so stdout stays reserved for the report.
pub fn setup_logging() {
    let timer = LocalTime::new(format_description!("[hour]:[minute]:[second]"));
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_timer(timer)
        .with_writer(std::io::stderr)
        .init();
}
