use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use hcfy_deeplx::translator::redact_url;
use hcfy_deeplx::{Config, DeepLxClient, LanguageRegistry, config};
use hcfy_deeplx_web::{AppState, router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let backend = match DeepLxClient::from_config(&config) {
        Ok(backend) => backend,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    info!(
        endpoint = %redact_url(backend.endpoint()),
        timeout = ?config.timeout,
        "Using DeepLX backend"
    );
    if !config.auth_enabled() {
        warn!(
            "{} is not set; requests are accepted regardless of name",
            config::NAME_VAR
        );
    }

    let state = AppState::new(
        Arc::new(LanguageRegistry::new()),
        Arc::new(backend),
        config.name.clone(),
    );
    let app = router(state, &config.route);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(
        "🚀 Relay listening on http://{}{}",
        listener.local_addr()?,
        config.route
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested"),
        Err(e) => {
            error!("failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    }
}
