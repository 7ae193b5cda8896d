//! Request target classification.
//!
//! # Responsibilities
//! - Decide whether a request target names a local file or carries an
//!   embedded absolute URL to relay
//! - Keep query strings attached to relay targets and cut them from local
//!   paths
//!
//! # Design Decisions
//! - Literal prefix match on `http://` / `https://` after stripping the
//!   leading slash; no URL parsing at this stage
//! - Case-sensitive, exact schemes only; `/HTTP://...` is a local path
//! - A single-slash scheme (`/http:/host`) is a local path, matching how
//!   browsers collapse nothing here

/// Where a request is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision<'a> {
    /// Relay to the absolute URL embedded in the target, query included.
    Proxy(&'a str),

    /// Serve from the local root; leading slash preserved, query removed.
    Local(&'a str),
}

/// Classify a request target (path plus optional query).
pub fn route(target: &str) -> RouteDecision<'_> {
    let stripped = target.strip_prefix('/').unwrap_or(target);
    if stripped.starts_with("http://") || stripped.starts_with("https://") {
        return RouteDecision::Proxy(stripped);
    }
    let path = match target.find('?') {
        Some(idx) => &target[..idx],
        None => target,
    };
    RouteDecision::Local(path)
}
