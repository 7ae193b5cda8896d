//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Startup
//!     → listener.rs (bind plaintext port)
//!     → tls.rs (load listener certificates; build outbound relay client)
//!     → Hand off to HTTP layer
//! ```
//!
//! # Design Decisions
//! - Missing TLS credentials degrade the process to HTTP-only
//! - One outbound client is built at startup and shared by every request

pub mod listener;
pub mod tls;

pub use tls::RelayClient;
