//! message-backend entry point.
//!
//! Loads configuration, initializes tracing, builds the Axum router over the
//! live process environment, and serves it until SIGTERM/SIGINT.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use message_backend::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER, MESSAGE_ENV_VAR};
use message_backend::env::ProcessEnv;
use message_backend::http::start_server;
use message_backend::{create_router, AppState};

/// message-backend: health check and environment-configured message over HTTP
#[derive(Parser, Debug)]
#[command(name = "message-backend", version, about)]
struct Args {
    /// Path to configuration file [default: config/default.toml, if present]
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "message_backend=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let log_filter = resolve_log_filter(args.log_level, std::env::var("RUST_LOG").ok());

    // Configuration decides the log format, so it loads before tracing starts
    let config = match AppConfig::resolve(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            init_tracing(&log_filter, LogFormat::default());
            tracing::error!(error = %e, "Failed to load configuration");
            return Err(e.into());
        }
    };
    init_tracing(&log_filter, config.logging.format);

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        shutdown_grace_seconds = config.http.shutdown_grace_seconds,
        "Loaded configuration"
    );
    tracing::info!(
        override_set = std::env::var_os(MESSAGE_ENV_VAR).is_some(),
        "Message is read from {} on each request",
        MESSAGE_ENV_VAR
    );

    let app = create_router(AppState::new(ProcessEnv));

    if let Err(e) = start_server(app, &config.http).await {
        tracing::error!(error = %e, "Server failed");
        return Err(e.into());
    }

    Ok(())
}

/// Log filter priority: CLI > RUST_LOG > default
fn resolve_log_filter(cli: Option<String>, env: Option<String>) -> String {
    cli.or(env)
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

fn init_tracing(filter: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}
