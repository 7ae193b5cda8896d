//! Static file server with an embedded CORS relay.
//!
//! Serves the process working directory over HTTP (and HTTPS when a
//! `key.pem`/`cert.pem` pair is present). A request path that embeds an
//! absolute `http://` or `https://` URL is relayed to that origin instead,
//! with permissive CORS headers overlaid on the response.

// Core subsystems
pub mod config;
pub mod files;
pub mod http;
pub mod net;
pub mod proxy;
pub mod routing;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
