//! Configuration schema definitions.
//!
//! This server is zero-configuration: everything is derived from the command
//! line, the environment, and the process working directory. The struct here
//! is built once at startup and never mutated.

use std::io;
use std::path::{Path, PathBuf};

/// Plaintext port when none is given on the command line.
pub const DEFAULT_HTTP_PORT: u16 = 8888;

/// TLS port when none is given on the command line.
pub const DEFAULT_HTTPS_PORT: u16 = 8443;

/// Private key file expected in the served directory.
pub const KEY_FILE: &str = "key.pem";

/// Certificate file expected in the served directory.
pub const CERT_FILE: &str = "cert.pem";

/// File served when a request resolves to a directory.
pub const INDEX_FILE: &str = "index.html";

/// Immutable server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Plaintext listener port.
    pub http_port: u16,

    /// TLS listener port; active only when the credential pair loads.
    pub https_port: u16,

    /// Canonicalized directory local requests are resolved under. Canonical
    /// form is what the escape check in the file streamer compares against.
    pub root: PathBuf,

    /// Private key path (`root/key.pem`).
    pub key_path: PathBuf,

    /// Certificate path (`root/cert.pem`).
    pub cert_path: PathBuf,

    /// Skip certificate verification on outbound relay connections.
    pub insecure_upstream: bool,
}

impl ServerConfig {
    /// Build a configuration rooted at `dir`, which must exist.
    pub fn new(
        dir: &Path,
        http_port: u16,
        https_port: u16,
        insecure_upstream: bool,
    ) -> io::Result<Self> {
        let root = dir.canonicalize()?;
        let key_path = root.join(KEY_FILE);
        let cert_path = root.join(CERT_FILE);
        Ok(Self {
            http_port,
            https_port,
            root,
            key_path,
            cert_path,
            insecure_upstream,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_root_and_fixes_credential_names() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = ServerConfig::new(dir.path(), DEFAULT_HTTP_PORT, DEFAULT_HTTPS_PORT, false)
            .expect("config builds");

        assert_eq!(config.root, dir.path().canonicalize().unwrap());
        assert_eq!(config.key_path, config.root.join("key.pem"));
        assert_eq!(config.cert_path, config.root.join("cert.pem"));
        assert_eq!(config.http_port, 8888);
        assert_eq!(config.https_port, 8443);
        assert!(!config.insecure_upstream);
    }

    #[test]
    fn rejects_missing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let gone = dir.path().join("does-not-exist");
        assert!(ServerConfig::new(&gone, 1, 2, false).is_err());
    }
}
