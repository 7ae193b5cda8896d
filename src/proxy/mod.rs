//! Relay subsystem: forwards proxied requests to their embedded origin.
//!
//! # Data Flow
//! ```text
//! RouteDecision::Proxy(embedded URL)
//!     → target.rs (parse scheme/host/port/path+query once)
//!     → relay.rs (outbound request, bodies streamed both directions)
//!     → CORS overlay on the relayed response
//! ```
//!
//! # Design Decisions
//! - One attempt per request; failures surface as plain-text 500s
//! - Bodies stream in both directions; nothing is buffered whole
//! - The upstream status code passes through untouched, whatever it is

pub mod relay;
pub mod target;

pub use relay::relay;
pub use relay::RelayError;
pub use target::ProxyTarget;
