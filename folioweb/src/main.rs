//! folioweb crate entrypoint.
//!
//! Installs the tracing subscriber, starts the Tokio runtime, and launches
//! the web server defined in the `server` module. Keep this file minimal —
//! most application logic lives in `server`, `config`, and `html`.
//!
/// HTTP server implementation and request handling
mod server;
/// Configuration management and settings
mod config;
/// HTML content and image slot substitution
mod html;

/// Entry point for the async Tokio runtime
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    server::run().await;
}
