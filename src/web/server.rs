//! Web server for ProjectHub.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;

use crate::config::Config;
use crate::file::FileStorage;
use crate::{Database, HubError, Result};

use super::handlers::AppState;
use super::router::create_router;

/// Web server for the API.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    app_state: Arc<AppState>,
    /// Allowed CORS origins.
    cors_origins: Vec<String>,
    /// Request body limit in bytes.
    body_limit: usize,
}

impl WebServer {
    /// Create a new web server.
    pub fn new(config: &Config, db: Database, storage: FileStorage) -> Result<Self> {
        let addr = format!("{}:{}", config.server.host, config.server.port)
            .parse()
            .map_err(|e| HubError::Config(format!("invalid server address: {}", e)))?;

        let app_state = AppState::new(db, storage)
            .with_base_dir(config.files.base_dir.clone())
            .with_max_upload_size(config.files.max_upload_size_bytes);

        Ok(Self {
            addr,
            app_state: Arc::new(app_state),
            cors_origins: config.server.cors_origins.clone(),
            body_limit: config.files.max_request_body_bytes,
        })
    }

    /// Get the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    async fn bind(self) -> std::io::Result<(TcpListener, axum::Router)> {
        let router = create_router(self.app_state, &self.cors_origins, self.body_limit)
            .layer(CompressionLayer::new());

        let listener = TcpListener::bind(self.addr).await?;
        tracing::info!("Web server listening on http://{}", listener.local_addr()?);
        Ok((listener, router))
    }

    /// Run the web server.
    pub async fn run(self) -> std::io::Result<()> {
        let (listener, router) = self.bind().await?;
        axum::serve(listener, router).await
    }
}
