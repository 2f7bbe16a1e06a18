//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum router with one top-level handler
//! - Wire up middleware (tracing, request timeout)
//! - Look up Host + path in the route table and render the response
//! - Serve the `.ping` diagnostic for registered roots
//!
//! # Design Decisions
//! - A single handler consults the table; routes are not registered as
//!   individual framework callbacks, so the resolver stays unit-testable
//! - The lookup key is the Host header plus the URI path; query and
//!   fragment never participate

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::any,
    Router,
};
use axum_server::tls_rustls::RustlsConfig;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::RedirectorConfig;
use crate::http::render::{RenderModel, Renderer};
use crate::routing::{resolve, Resolution, RouteTable};

/// Error type for server construction.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Table(#[from] crate::routing::TableError),

    #[error("failed to compile redirect template: {0}")]
    Template(#[from] tera::Error),
}

/// Application state injected into the handler.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RouteTable>,
    pub renderer: Arc<Renderer>,
    pub vcs: String,
}

/// HTTP server for the import redirector.
pub struct HttpServer {
    router: Router,
    table: Arc<RouteTable>,
}

impl HttpServer {
    /// Build the route table, compile the template, and assemble the
    /// router. Any failure here aborts startup.
    pub fn new(config: &RedirectorConfig) -> Result<Self, StartupError> {
        let table = Arc::new(RouteTable::build(&config.routes)?);
        let renderer = Arc::new(Renderer::new()?);

        let state = AppState {
            table: table.clone(),
            renderer,
            vcs: config.vcs.clone(),
        };

        let router = Self::build_router(config, state);
        Ok(Self { router, table })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &RedirectorConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(redirect_handler))
            .route("/", any(redirect_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.request_timeout_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Hosts of the registered import roots, for TLS certificate lookup.
    pub fn hosts(&self) -> Vec<String> {
        self.table.hosts()
    }

    /// Serve plain HTTP on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Serve HTTPS with the given rustls configuration.
    pub async fn run_tls(
        self,
        addr: SocketAddr,
        tls: RustlsConfig,
    ) -> Result<(), std::io::Error> {
        tracing::info!(address = %addr, "HTTPS server starting");

        axum_server::bind_rustls(addr, tls)
            .serve(self.router.into_make_service())
            .await
    }
}

/// Top-level handler: diagnostic ping, then table lookup, then render.
async fn redirect_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");
    let path = format!("{}{}", host, request.uri().path());

    // Non-redirecting URL for debugging TLS certificates.
    if let Some(base) = path.strip_suffix("/.ping") {
        if state.table.is_registered(base) {
            return "pong".into_response();
        }
    }

    match resolve(&path, &state.table) {
        Resolution::Package {
            import_root,
            repo_root,
            suffix,
        } => {
            let model = RenderModel {
                import_root,
                vcs: state.vcs.clone(),
                repo_root,
                suffix,
            };
            match state.renderer.render(&model) {
                Ok(html) => Html(html).into_response(),
                Err(e) => {
                    tracing::error!(path = %path, error = %e, "Template render failed");
                    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
                }
            }
        }
        Resolution::DocRedirect { url } => {
            (StatusCode::FOUND, [(header::LOCATION, url)]).into_response()
        }
        Resolution::NotFound => {
            tracing::debug!(path = %path, "No route matched");
            (StatusCode::NOT_FOUND, "404 page not found").into_response()
        }
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
