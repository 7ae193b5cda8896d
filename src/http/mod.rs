//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, dispatch boundary, 500 conversion)
//!     → routing decides: relay or local file
//!     → cors.rs (permissive header kit for relayed exchanges)
//!     → response.rs (plain-text 404/500 builders)
//!     → Send to client
//! ```

pub mod cors;
pub mod response;
pub mod server;

pub use server::HttpServer;
