//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum router and wire up middleware (tracing)
//! - Serve the router on the plaintext and TLS listeners
//! - Classify every request and hand it to the relay or the file streamer
//! - Convert every escaped error into a plain-text 500
//!
//! # Design Decisions
//! - A single fallback handler owns every method and path, so the relay
//!   prefix check sees the raw request target
//! - Both listeners share one router and one outbound client
//! - No error leaves `dispatch`; the response always completes

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::files::streamer::serve_file;
use crate::http::response::internal_error;
use crate::lifecycle::ShutdownSignal;
use crate::net::tls::RelayClient;
use crate::proxy::relay::{relay, RelayError};
use crate::proxy::target::ProxyTarget;
use crate::routing::{route, RouteDecision};

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub client: RelayClient,
}

/// HTTP server for the static relay.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new server over the given configuration and outbound client.
    pub fn new(config: Arc<ServerConfig>, client: RelayClient) -> Self {
        let state = AppState { config, client };
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router. The fallback owns everything; there are no
    /// fixed routes.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .fallback(dispatch)
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Serve plaintext connections until the shutdown signal resolves.
    pub async fn run(
        self,
        listener: TcpListener,
        signal: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(signal.wait())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Serve TLS connections until the shutdown signal resolves.
    pub async fn run_tls(
        self,
        addr: SocketAddr,
        tls: RustlsConfig,
        signal: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        tracing::info!(address = %addr, "HTTPS server starting");

        let handle = Handle::new();
        let watcher = handle.clone();
        tokio::spawn(async move {
            signal.wait().await;
            watcher.graceful_shutdown(None);
        });

        axum_server::bind_rustls(addr, tls)
            .handle(handle)
            .serve(self.router.into_make_service())
            .await?;

        tracing::info!("HTTPS server stopped");
        Ok(())
    }
}

/// Classify the request target and dispatch it. The error boundary for the
/// whole request lives here: anything the relay or the streamer cannot map
/// to a response of its own becomes a plain-text 500.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let target = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| request.uri().path())
        .to_string();

    match route(&target) {
        RouteDecision::Proxy(raw) => match relay_to(&state, raw, request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(target = %raw, error = %err, "relay failed");
                internal_error(err)
            }
        },
        RouteDecision::Local(path) => {
            match serve_file(&state.config, path, request.headers()).await {
                Ok(response) => response,
                Err(err) => {
                    tracing::error!(path = %path, error = %err, "local serve failed");
                    internal_error(err)
                }
            }
        }
    }
}

async fn relay_to(
    state: &AppState,
    raw: &str,
    request: Request<Body>,
) -> Result<Response, RelayError> {
    let target = ProxyTarget::parse(raw)?;
    relay(&state.client, &target, request).await
}
