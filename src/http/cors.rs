//! Permissive CORS header kit for the relay.
//!
//! # Responsibilities
//! - Provide the static header trio added to every relayed exchange
//! - Overlay the relayed response with echoes of the client's preflight
//!   request headers
//!
//! # Design Decisions
//! - `Access-Control-Allow-Method` (singular) is kept alongside the plural
//!   form; clients in the wild read both
//! - Echo lookups go through `HeaderMap`, so they are case-insensitive
//! - Overlay uses `insert`, replacing whatever the origin sent

use axum::http::header::{
    HeaderMap, HeaderName, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE, ACCESS_CONTROL_REQUEST_HEADERS,
    ACCESS_CONTROL_REQUEST_METHOD,
};

/// Singular companion to `Access-Control-Allow-Methods`.
pub const ACCESS_CONTROL_ALLOW_METHOD: HeaderName =
    HeaderName::from_static("access-control-allow-method");

const ALLOW_ORIGIN_ANY: HeaderValue = HeaderValue::from_static("*");
const ALLOW_METHODS: HeaderValue = HeaderValue::from_static("OPTIONS, POST, GET");

/// 30 days, in seconds.
const MAX_AGE: HeaderValue = HeaderValue::from_static("2592000");

/// Headers attached preemptively to every outbound relay request.
pub fn relay_request_headers() -> [(HeaderName, HeaderValue); 3] {
    [
        (ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN_ANY),
        (ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS),
        (ACCESS_CONTROL_MAX_AGE, MAX_AGE),
    ]
}

/// Overlay the relayed response headers with the permissive CORS set.
///
/// `inbound` is the original client request's header map; its preflight
/// `Access-Control-Request-*` values are echoed back, falling back to `*`
/// when absent.
pub fn overlay_response_headers(response: &mut HeaderMap, inbound: &HeaderMap) {
    for (name, value) in relay_request_headers() {
        response.insert(name, value);
    }
    response.insert(
        ACCESS_CONTROL_ALLOW_METHOD,
        echo_or_any(inbound, &ACCESS_CONTROL_REQUEST_METHOD),
    );
    response.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        echo_or_any(inbound, &ACCESS_CONTROL_REQUEST_HEADERS),
    );
}

fn echo_or_any(inbound: &HeaderMap, name: &HeaderName) -> HeaderValue {
    inbound.get(name).cloned().unwrap_or(ALLOW_ORIGIN_ANY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_echoes_preflight_request_headers() {
        let mut inbound = HeaderMap::new();
        inbound.insert(ACCESS_CONTROL_REQUEST_METHOD, HeaderValue::from_static("PUT"));
        inbound.insert(
            ACCESS_CONTROL_REQUEST_HEADERS,
            HeaderValue::from_static("x-custom, content-type"),
        );

        let mut response = HeaderMap::new();
        overlay_response_headers(&mut response, &inbound);

        assert_eq!(response.get(ACCESS_CONTROL_ALLOW_METHOD).unwrap(), "PUT");
        assert_eq!(
            response.get(ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
            "x-custom, content-type"
        );
    }

    #[test]
    fn overlay_falls_back_to_wildcard() {
        let mut response = HeaderMap::new();
        overlay_response_headers(&mut response, &HeaderMap::new());

        assert_eq!(response.get(ACCESS_CONTROL_ALLOW_METHOD).unwrap(), "*");
        assert_eq!(response.get(ACCESS_CONTROL_ALLOW_HEADERS).unwrap(), "*");
    }

    #[test]
    fn overlay_carries_the_static_trio() {
        let mut response = HeaderMap::new();
        overlay_response_headers(&mut response, &HeaderMap::new());

        assert_eq!(response.get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
        assert_eq!(
            response.get(ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
            "OPTIONS, POST, GET"
        );
        assert_eq!(response.get(ACCESS_CONTROL_MAX_AGE).unwrap(), "2592000");
    }

    #[test]
    fn overlay_replaces_origin_supplied_values() {
        let mut response = HeaderMap::new();
        response.insert(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("https://locked-down.example"),
        );

        overlay_response_headers(&mut response, &HeaderMap::new());
        assert_eq!(response.get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
    }

    #[test]
    fn preflight_lookup_is_case_insensitive() {
        let mut inbound = HeaderMap::new();
        // HeaderMap normalizes names on insert; mixed-case wire forms land
        // under the lowercase key.
        inbound.insert(
            HeaderName::from_bytes(b"Access-Control-Request-Method".to_ascii_uppercase().as_slice())
                .unwrap(),
            HeaderValue::from_static("DELETE"),
        );

        let mut response = HeaderMap::new();
        overlay_response_headers(&mut response, &inbound);
        assert_eq!(response.get(ACCESS_CONTROL_ALLOW_METHOD).unwrap(), "DELETE");
    }
}
