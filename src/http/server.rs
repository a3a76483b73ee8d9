//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with all route handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Serve with graceful shutdown (Ctrl+C or an explicit trigger)

use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::http::handlers;
use crate::http::request::RequestIdLayer;
use crate::upstream::UpstreamClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server from configuration and an upstream client.
    pub fn new(config: &GatewayConfig, upstream: UpstreamClient) -> Self {
        let state = AppState { upstream };
        let router = Self::build_router(config, state);
        Self { router }
    }

    /// Build the Axum router with all routes and middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::home))
            .route("/tokens/search", get(handlers::search_tokens))
            .route("/tokens/trending", get(handlers::trending_tokens))
            .route("/tokens/price", post(handlers::token_price))
            .route("/tokens/{id}", get(handlers::token_details))
            .route("/tokens/{id}/holders", get(handlers::token_holders))
            .route("/tokens/{id}/risk", get(handlers::contract_risk))
            .route("/tokens/{id}/transactions", get(handlers::token_transactions))
            .route("/tokens/{id}/summary", get(handlers::token_summary))
            .route("/tokens/{id}/info", get(handlers::token_info))
            .route("/klines/pair/{id}", get(handlers::pair_klines))
            .route("/klines/token/{id}", get(handlers::token_klines))
            .route("/ranks", get(handlers::ranks))
            .route("/ranks/topics", get(handlers::rank_topics))
            .route("/chains", get(handlers::supported_chains))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until shutdown is signalled.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown.recv() => {}
                    _ = ctrl_c() => {}
                }
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn ctrl_c() {
    if tokio::signal::ctrl_c().await.is_err() {
        // Signal handler installation failed; wait on the broadcast side only.
        std::future::pending::<()>().await;
    }
}
