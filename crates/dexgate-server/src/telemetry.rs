//! Tracing subscriber setup.

use tracing::Subscriber;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, EnvFilter, Layer,
    Registry,
};

use crate::error::ServerError;

/// Installs the global subscriber. `RUST_LOG` wins over `log_level`.
pub fn init_tracing(log_level: &str, json_format: bool) -> Result<(), ServerError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let registry = Registry::default().with(env_filter);

    let installed = if json_format {
        registry.with(json_layer()).try_init()
    } else {
        registry.with(pretty_layer()).try_init()
    };

    installed.map_err(|error| ServerError::Telemetry(error.to_string()))
}

fn json_layer<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(false)
        .with_target(true)
        .with_level(true)
}

fn pretty_layer<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer().pretty().with_target(true).with_level(true)
}
