use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. `level` accepts anything `EnvFilter` does,
/// e.g. `info` or `folio_server=debug,tower_http=info`.
pub fn init_logging(level: &str, json: bool) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|e| {
        eprintln!("Invalid log filter '{}': {}, falling back to info", level, e);
        EnvFilter::new("info")
    });

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(fmt::layer().json().with_target(true).with_current_span(false))
            .init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}
