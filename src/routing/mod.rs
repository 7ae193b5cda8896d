//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! request target (path + optional query)
//!     → decision.rs (prefix inspection only)
//!     → RouteDecision::Proxy(embedded URL) → proxy subsystem
//!     → RouteDecision::Local(path)         → files subsystem
//! ```
//!
//! # Design Decisions
//! - Pure string classification; no filesystem or network access here
//! - No regex in hot path (prefix matching only)
//! - Deterministic: same target always classifies the same way
//! - Every string classifies; downstream owns all failure handling

pub mod decision;

pub use decision::route;
pub use decision::RouteDecision;
