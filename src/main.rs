//! static-relay binary.
//!
//! Startup sequence: logging → CLI → config → outbound client → listeners.
//! The working directory is always the served root; `key.pem`/`cert.pem`
//! there enable the HTTPS listener, and their absence degrades to
//! HTTP-only.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use clap::Parser;

use static_relay::config::Cli;
use static_relay::lifecycle::Shutdown;
use static_relay::observability::logging;
use static_relay::{net, HttpServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let cli = Cli::parse();
    let config = Arc::new(cli.into_config()?);

    tracing::info!("Command line format: static-relay [port] [https_port]");
    tracing::info!(
        root = %config.root.display(),
        insecure_upstream = config.insecure_upstream,
        "Configuration loaded"
    );

    let client = net::tls::build_relay_client(config.insecure_upstream)?;
    let listener = net::listener::bind(config.http_port).await?;

    let tls = match net::tls::load_tls_config(&config.cert_path, &config.key_path).await {
        Ok(tls) => Some(tls),
        Err(err) => {
            tracing::warn!(
                key = %config.key_path.display(),
                cert = %config.cert_path.display(),
                error = %err,
                "Error start https: missing key.pem and cert.pem in current directory"
            );
            None
        }
    };

    let shutdown = Shutdown::new();

    let http = HttpServer::new(config.clone(), client.clone());
    let http_task = tokio::spawn(http.run(listener, shutdown.subscribe()));
    tracing::info!(
        "Static file server running at http://localhost:{}",
        config.http_port
    );

    let https_task = tls.map(|tls| {
        let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.https_port));
        let server = HttpServer::new(config.clone(), client.clone());
        tracing::info!("https at https://localhost:{}", config.https_port);
        tokio::spawn(server.run_tls(addr, tls, shutdown.subscribe()))
    });

    tracing::info!("CTRL + C to shutdown");

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received");
    shutdown.trigger();

    http_task.await??;
    if let Some(task) = https_task {
        task.await??;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
