//! Observability subsystem.
//!
//! Structured logging only; request/response spans come from the HTTP
//! layer's `TraceLayer`.

pub mod logging;
