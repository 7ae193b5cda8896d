//! Local file resolution and streaming.
//!
//! # Responsibilities
//! - Resolve request paths under the canonical root
//! - Refuse credential files and anything escaping the root
//! - Fall back to `index.html` for directory hits, once
//! - Stream file bytes, optionally through a negotiated compressor
//!
//! # Design Decisions
//! - Missing, escaped, denied, and credential paths are one 404 class;
//!   callers cannot distinguish absence from refusal
//! - Unexpected I/O failures bubble up for the 500 boundary instead
//! - Escape checks run on the canonicalized path, so symlinks cannot
//!   smuggle reads outside the root

use std::io;
use std::path::{Path, PathBuf};

use async_compression::tokio::bufread::{GzipEncoder, ZlibEncoder};
use axum::body::Body;
use axum::http::header::{self, HeaderMap, HeaderValue};
use axum::response::Response;
use tokio::fs::File;
use tokio::io::BufReader;
use tokio_util::io::ReaderStream;

use crate::config::{ServerConfig, INDEX_FILE};
use crate::files::encoding::{self, ContentEncoding};
use crate::http::response::not_found;

/// Outcome of resolving one candidate path.
enum Resolution {
    /// Missing, unreadable, escaped, or credential: the 404 class.
    Denied,
    /// Canonical path is a directory.
    Directory,
    /// Canonical path is a servable file.
    File(PathBuf),
}

/// Serve `path` (leading-slash form, query already removed) from the
/// configured root.
pub async fn serve_file(
    config: &ServerConfig,
    path: &str,
    request_headers: &HeaderMap,
) -> io::Result<Response> {
    let relative = path.trim_start_matches('/');
    let mut candidate = config.root.join(relative);

    // A directory hit retries once with index.html appended; a directory on
    // the second pass resolves to nothing.
    for _ in 0..2 {
        match resolve(&config.root, &candidate).await? {
            Resolution::Denied => return Ok(not_found()),
            Resolution::Directory => candidate = candidate.join(INDEX_FILE),
            Resolution::File(canonical) => {
                let encoding = encoding::negotiate(request_headers.get(header::ACCEPT_ENCODING));
                return stream(&canonical, encoding).await;
            }
        }
    }
    Ok(not_found())
}

async fn resolve(root: &Path, candidate: &Path) -> io::Result<Resolution> {
    let canonical = match tokio::fs::canonicalize(candidate).await {
        Ok(path) => path,
        Err(err) if denies(&err) => return Ok(Resolution::Denied),
        Err(err) => return Err(err),
    };

    if !canonical.starts_with(root) {
        // Escapes the served directory; indistinguishable from absence.
        return Ok(Resolution::Denied);
    }
    if is_credential_file(&canonical) {
        return Ok(Resolution::Denied);
    }

    let metadata = match tokio::fs::metadata(&canonical).await {
        Ok(metadata) => metadata,
        Err(err) if denies(&err) => return Ok(Resolution::Denied),
        Err(err) => return Err(err),
    };
    if metadata.is_dir() {
        return Ok(Resolution::Directory);
    }
    Ok(Resolution::File(canonical))
}

/// Expected lookup failures that map to the 404 class. Anything else is a
/// server-side problem and propagates.
fn denies(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied | io::ErrorKind::NotADirectory
    )
}

/// Credential files are never served, whatever the request path looked like
/// before resolution.
fn is_credential_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(".pem"))
        .unwrap_or(false)
}

async fn stream(path: &Path, encoding: ContentEncoding) -> io::Result<Response> {
    // The file can vanish between resolution and open; that is still a 404.
    let file = match File::open(path).await {
        Ok(file) => file,
        Err(err) if denies(&err) => return Ok(not_found()),
        Err(err) => return Err(err),
    };

    tracing::debug!(path = %path.display(), encoding = ?encoding, "streaming local file");

    let reader = BufReader::new(file);
    let body = match encoding {
        ContentEncoding::Deflate => Body::from_stream(ReaderStream::new(ZlibEncoder::new(reader))),
        ContentEncoding::Gzip => Body::from_stream(ReaderStream::new(GzipEncoder::new(reader))),
        ContentEncoding::Identity => Body::from_stream(ReaderStream::new(reader)),
    };

    let mut response = Response::new(body);
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    if let Some(label) = encoding.label() {
        response
            .headers_mut()
            .insert(header::CONTENT_ENCODING, HeaderValue::from_static(label));
    }
    Ok(response)
}
