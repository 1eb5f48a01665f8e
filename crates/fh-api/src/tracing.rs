//! Tracing and logging configuration for the application
//!
//! Structured logging with different configurations for development and
//! production environments.

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Environment;

/// Default filter directives used when `RUST_LOG` is unset.
///
/// Development turns the forum crates up to debug while keeping dependencies
/// at info. `sqlx` stays at warn in both modes: its statement logging echoes
/// query text, and topic/reply message bodies travel through those queries.
fn default_filter(env: &Environment) -> &'static str {
    if env.is_development() {
        "info,fh_api=debug,fh_db=debug,serv=debug,tower_http=debug,sqlx=warn"
    } else {
        "info,sqlx=warn"
    }
}

/// Initialize tracing/logging based on the environment
///
/// Development: pretty-printed, human-readable logs, forum crates at DEBUG.
/// Production: JSON-formatted structured logs, default level INFO, for log
/// aggregation systems.
///
/// `RUST_LOG` overrides the default filter in both modes.
pub fn init_tracing(env: &Environment) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(env)));

    if env.is_development() {
        init_development_tracing(env_filter);
    } else {
        init_production_tracing(env_filter);
    }
}

fn init_development_tracing(env_filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true)
                .with_file(true)
                .pretty()
                .with_filter(env_filter),
        )
        .init();

    tracing::info!("Tracing initialized in development mode");
}

fn init_production_tracing(env_filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .flatten_event(true)
                .with_target(true)
                .with_filter(env_filter),
        )
        .init();

    tracing::info!("Tracing initialized in production mode");
}
