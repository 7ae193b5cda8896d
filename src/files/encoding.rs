//! Response encoding negotiation.
//!
//! # Design Decisions
//! - Case-sensitive substring match on the raw header value, with `deflate`
//!   checked before `gzip`; fixed precedence, not q-value negotiation
//! - Anything absent or unreadable falls back to identity

use axum::http::HeaderValue;

/// Content coding applied to a streamed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    /// Zlib-wrapped deflate, the `deflate` content coding.
    Deflate,
    /// Gzip container.
    Gzip,
    /// Bytes as they are on disk.
    Identity,
}

impl ContentEncoding {
    /// `content-encoding` label, `None` for identity.
    pub fn label(self) -> Option<&'static str> {
        match self {
            ContentEncoding::Deflate => Some("deflate"),
            ContentEncoding::Gzip => Some("gzip"),
            ContentEncoding::Identity => None,
        }
    }
}

/// Pick the response coding from the client's `Accept-Encoding` value.
pub fn negotiate(accept_encoding: Option<&HeaderValue>) -> ContentEncoding {
    let accepted = accept_encoding
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    if accepted.contains("deflate") {
        ContentEncoding::Deflate
    } else if accepted.contains("gzip") {
        ContentEncoding::Gzip
    } else {
        ContentEncoding::Identity
    }
}
