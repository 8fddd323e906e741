//! HTTP API Server
//!
//! Axum-based HTTP server for the novel editor.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::http::Method;
use chapter_split::TxtLibrary;
use log::{info, warn};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::config::EditorConfig;

use super::handlers::AppState;
use super::routes::create_router;

/// HTTP API server
pub struct HttpServer {
    config: EditorConfig,
}

impl HttpServer {
    pub fn new(config: EditorConfig) -> Self {
        Self { config }
    }

    /// Run the server until Ctrl-C
    pub async fn run(&self) -> Result<()> {
        let addr: SocketAddr = self
            .config
            .listen_addr
            .parse()
            .with_context(|| format!("Invalid listen address: {}", self.config.listen_addr))?;

        if !self.config.input_dir.is_dir() {
            warn!(
                "Input directory {} does not exist; file listing will fail",
                self.config.input_dir.display()
            );
        }

        let app_state = AppState::new(TxtLibrary::new(&self.config.input_dir));
        let mut app = create_router(app_state, self.config.max_body_bytes);

        if self.config.cors_enabled {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers(Any)
                .allow_origin(Any);
            app = app.layer(cors);
        }

        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind HTTP server to {}", addr))?;

        info!("Serving {} on http://{}", self.config.input_dir.display(), addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("HTTP server shutting down");
}
