//! Plain-text response builders.
//!
//! # Responsibilities
//! - Build the two error responses this server ever produces
//!
//! # Design Decisions
//! - Everything is `text/plain`, human-readable, newline-terminated
//! - 404 carries no detail; absence and refusal look identical

use axum::body::Body;
use axum::http::header::{HeaderValue, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::Response;

const TEXT_PLAIN: HeaderValue = HeaderValue::from_static("text/plain");

/// The single local-lookup failure response.
pub fn not_found() -> Response {
    plain_text(StatusCode::NOT_FOUND, "404 Not Found\n".to_string())
}

/// Diagnostic 500 for relay transport failures and escaped errors.
pub fn internal_error(detail: impl std::fmt::Display) -> Response {
    plain_text(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Error connect to remote server: exception={detail}\n"),
    )
}

fn plain_text(status: StatusCode, body: String) -> Response {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    response.headers_mut().insert(CONTENT_TYPE, TEXT_PLAIN);
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn not_found_is_plain_text() {
        let response = not_found();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers().get(CONTENT_TYPE).unwrap(), "text/plain");
        assert_eq!(body_string(response).await, "404 Not Found\n");
    }

    #[tokio::test]
    async fn internal_error_names_the_cause() {
        let response = internal_error("connection refused");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_string(response).await;
        assert!(body.contains("connection refused"));
        assert!(body.ends_with('\n'));
    }
}
