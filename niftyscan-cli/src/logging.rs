use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Matches every `niftyscan*` crate target.
pub const DEFAULT_FILTER: &str = "niftyscan=info";

/// Install the global subscriber. Diagnostics go to stderr so stdout carries
/// only the reports. `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let format_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(format_layer)
        .init();
}
