//! Local file subsystem.
//!
//! # Data Flow
//! ```text
//! RouteDecision::Local(path)
//!     → streamer.rs (resolve under the canonical root, credential and
//!       escape checks, one index.html retry for directories)
//!     → encoding.rs (Accept-Encoding negotiation)
//!     → streamed body, optionally through a compressor
//! ```
//!
//! # Design Decisions
//! - All expected local failures collapse into one 404 class
//! - Compression wraps the reader; the file is never buffered whole
//! - No MIME detection; content-type is left to client inference

pub mod encoding;
pub mod streamer;

pub use encoding::negotiate;
pub use encoding::ContentEncoding;
pub use streamer::serve_file;
