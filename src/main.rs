mod config;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, ServerConfig};

/// Errors that stop the preview server from starting or serving.
#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("server io failed: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    if !config.site_dir.is_dir() {
        tracing::warn!(site_dir = %config.site_dir.display(), "site directory missing; only /healthz will answer");
    }

    let app = routes::app(&config);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(port = config.port, site_dir = %config.site_dir.display(), "folio preview listening");
    axum::serve(listener, app).await?;
    Ok(())
}
