//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Ctrl-C (or a test)
//!     → shutdown.rs (watch channel, one coordinator, many signals)
//!     → both serve loops drain and stop
//! ```

pub mod shutdown;

pub use shutdown::{Shutdown, ShutdownSignal};
