mod config;
mod routes;

use config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: std::net::SocketAddr, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "site host stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    if !config.dist_dir.join("index.html").is_file() {
        tracing::warn!(dist_dir = %config.dist_dir.display(), "index.html not found; run `trunk build` in client/");
    }

    let app = routes::app(&config.dist_dir);
    let addr = config.addr();
    let listener =
        tokio::net::TcpListener::bind(addr).await.map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, dist_dir = %config.dist_dir.display(), "lumiq site listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
