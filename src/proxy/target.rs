//! Relay target parsing.
//!
//! # Responsibilities
//! - Parse the URL embedded in a request path into connection parameters
//! - Reject targets with no usable host before any connection is attempted
//!
//! # Design Decisions
//! - Parsed once per request; the result is immutable
//! - Default ports follow the scheme (80/443) when the URL names none

use std::fmt;

use axum::http::Uri;
use url::Url;

use crate::proxy::relay::RelayError;

/// Absolute URL extracted from a request path, parsed and validated.
#[derive(Debug, Clone)]
pub struct ProxyTarget {
    url: Url,
    uri: Uri,
}

impl ProxyTarget {
    /// Parse an embedded absolute URL (everything after the leading slash).
    pub fn parse(raw: &str) -> Result<Self, RelayError> {
        let url = Url::parse(raw).map_err(|err| RelayError::Target {
            target: raw.to_string(),
            reason: err.to_string(),
        })?;
        if url.host_str().is_none() {
            return Err(RelayError::Target {
                target: raw.to_string(),
                reason: "no host in URL".to_string(),
            });
        }
        // Url normalizes to ASCII (punycode hosts, percent-encoded paths),
        // so the round-trip into the http Uri type only fails on inputs the
        // parse above already rejected.
        let uri: Uri = url.as_str().parse().map_err(|_| RelayError::Target {
            target: raw.to_string(),
            reason: "URL is not a valid request URI".to_string(),
        })?;
        Ok(Self { url, uri })
    }

    /// Target scheme, `http` or `https`.
    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    /// Host name of the origin.
    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    /// Effective port: explicit when given, otherwise the scheme default.
    pub fn port(&self) -> u16 {
        self.url
            .port_or_known_default()
            .unwrap_or(if self.url.scheme() == "https" { 443 } else { 80 })
    }

    /// Absolute URI for the outbound request line.
    pub fn uri(&self) -> &Uri {
        &self.uri
    }
}

impl fmt::Display for ProxyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_defaults_fill_missing_ports() {
        let http = ProxyTarget::parse("http://example.com/x").expect("parses");
        assert_eq!(http.port(), 80);

        let https = ProxyTarget::parse("https://example.com/x").expect("parses");
        assert_eq!(https.port(), 443);
    }

    #[test]
    fn explicit_port_wins() {
        let target = ProxyTarget::parse("http://example.com:9999/x").expect("parses");
        assert_eq!(target.port(), 9999);
        assert_eq!(target.host(), "example.com");
        assert_eq!(target.scheme(), "http");
    }

    #[test]
    fn bare_host_gets_root_path() {
        let target = ProxyTarget::parse("http://example.com").expect("parses");
        assert_eq!(target.uri().path(), "/");
    }

    #[test]
    fn path_and_query_survive_parsing() {
        let target = ProxyTarget::parse("http://example.com/a/b?x=1&y=2").expect("parses");
        let pq = target.uri().path_and_query().expect("has path");
        assert_eq!(pq.as_str(), "/a/b?x=1&y=2");
    }

    #[test]
    fn hostless_url_is_rejected() {
        assert!(ProxyTarget::parse("http://").is_err());
    }

    #[test]
    fn relative_target_is_rejected() {
        assert!(ProxyTarget::parse("example.com/api").is_err());
    }
}
