//! Outbound relay of proxied requests.
//!
//! # Responsibilities
//! - Build the outbound request: method, absolute URI, filtered headers
//! - Stream the inbound body upstream and the upstream body back
//! - Overlay the permissive CORS set on the relayed response
//! - Surface transport failures for the dispatch boundary to report
//!
//! # Design Decisions
//! - Host is never forwarded; the client derives it from the target URI
//! - Hop-by-hop headers belong to each connection leg and are dropped
//! - No retries and no timeouts beyond the transport's own

use axum::body::Body;
use axum::http::header;
use axum::http::request::Parts;
use axum::http::{HeaderName, Request, Response};
use thiserror::Error;

use crate::http::cors;
use crate::net::tls::RelayClient;
use crate::proxy::target::ProxyTarget;

/// Failures on the outbound leg. All of them surface to the client as a
/// plain-text 500 at the dispatch boundary.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The embedded URL did not parse into a usable target.
    #[error("invalid relay target '{target}': {reason}")]
    Target { target: String, reason: String },

    /// Outbound request assembly failed.
    #[error("could not build request for '{target}': {source}")]
    Request {
        target: String,
        #[source]
        source: axum::http::Error,
    },

    /// DNS, connect, TLS, or transport failure talking to the origin.
    #[error("{source}")]
    Upstream {
        target: String,
        #[source]
        source: hyper_util::client::legacy::Error,
    },
}

/// Forward a request to its embedded origin and relay the response back.
///
/// The inbound body is handed to the outbound request unread, and the
/// origin's body is handed back unread; both stream chunk by chunk.
pub async fn relay(
    client: &RelayClient,
    target: &ProxyTarget,
    request: Request<Body>,
) -> Result<Response<Body>, RelayError> {
    let (parts, body) = request.into_parts();
    let outbound = outbound_request(target, &parts, body)?;

    let upstream: Response<hyper::body::Incoming> = client
        .request(outbound)
        .await
        .map_err(|source| RelayError::Upstream {
            target: target.to_string(),
            source,
        })?;

    tracing::debug!(
        target = %target,
        status = %upstream.status(),
        "relaying upstream response"
    );

    let (mut head, upstream_body) = upstream.into_parts();
    cors::overlay_response_headers(&mut head.headers, &parts.headers);
    Ok(Response::from_parts(head, Body::new(upstream_body)))
}

/// Assemble the outbound request from the inbound parts.
fn outbound_request(
    target: &ProxyTarget,
    parts: &Parts,
    body: Body,
) -> Result<Request<Body>, RelayError> {
    let mut builder = Request::builder()
        .method(parts.method.clone())
        .uri(target.uri().clone());

    if let Some(headers) = builder.headers_mut() {
        for (name, value) in parts.headers.iter() {
            if name == header::HOST || is_hop_by_hop(name) {
                continue;
            }
            headers.append(name.clone(), value.clone());
        }
        for (name, value) in cors::relay_request_headers() {
            headers.insert(name, value);
        }
    }

    builder.body(body).map_err(|source| RelayError::Request {
        target: target.to_string(),
        source,
    })
}

/// Connection-scoped header fields; each leg negotiates its own.
fn is_hop_by_hop(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-connection"
            | "transfer-encoding"
            | "upgrade"
            | "te"
            | "trailer"
    )
}
