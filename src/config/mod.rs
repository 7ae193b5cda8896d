//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! argv + environment
//!     → cli.rs (clap parse, strict port validation)
//!     → schema.rs (ServerConfig: ports, canonical root, credential paths)
//!     → shared via Arc to the request dispatcher
//! ```
//!
//! # Design Decisions
//! - Zero configuration: the served directory is always the working
//!   directory, credential file names are fixed
//! - Defaults are named constants, not argument-position heuristics
//! - The struct is immutable once built; there is no reload path

pub mod cli;
pub mod schema;

pub use cli::Cli;
pub use schema::ServerConfig;
pub use schema::{CERT_FILE, INDEX_FILE, KEY_FILE};
pub use schema::{DEFAULT_HTTPS_PORT, DEFAULT_HTTP_PORT};
