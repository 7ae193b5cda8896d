//! Command-line interface.
//!
//! Two optional positional ports and one flag. Anything that does not parse
//! as a port is rejected up front instead of being silently replaced with a
//! default.

use std::io;

use clap::Parser;

use crate::config::schema::{ServerConfig, DEFAULT_HTTPS_PORT, DEFAULT_HTTP_PORT};

/// Serve the working directory over HTTP, relay embedded absolute URLs.
#[derive(Debug, Parser)]
#[command(name = "static-relay", version, about)]
pub struct Cli {
    /// Plaintext HTTP port.
    #[arg(value_name = "PORT", default_value_t = DEFAULT_HTTP_PORT)]
    pub port: u16,

    /// HTTPS port, used when key.pem and cert.pem exist in the served
    /// directory.
    #[arg(value_name = "HTTPS_PORT", default_value_t = DEFAULT_HTTPS_PORT)]
    pub https_port: u16,

    /// Skip certificate verification when relaying to https origins.
    #[arg(long, env = "STATIC_RELAY_INSECURE_TLS")]
    pub insecure_tls: bool,
}

impl Cli {
    /// Resolve the arguments against the process working directory.
    pub fn into_config(self) -> io::Result<ServerConfig> {
        let cwd = std::env::current_dir()?;
        ServerConfig::new(&cwd, self.port, self.https_port, self.insecure_tls)
    }
}
