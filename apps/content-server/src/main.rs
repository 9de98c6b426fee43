//! Content service REST API server.
//!
//! Builds the shared content store, loads the Swagger document, and serves
//! the API until Ctrl+C.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use content_api::config::ApiConfig;
use content_api::handlers::load_swagger_spec;
use content_api::{router::Router, server::Server};
use content_store::config::StoreConfig;
use content_store::ContentStore;
use tokio::signal;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the content server.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8000)]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Swagger document served at /docs/swagger.json
    #[arg(long, default_value = "swagger.json")]
    swagger_path: PathBuf,

    /// Request body read timeout in milliseconds
    #[arg(long, default_value_t = 5000)]
    request_timeout_ms: u64,

    /// Base URL that media stream requests redirect to
    #[arg(long, default_value = "https://example.com/stream")]
    stream_base_url: String,

    /// Initial capacity of each store collection
    #[arg(long, default_value_t = 1024)]
    initial_capacity: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("content_server=info,content_api=info,content_store=info")
            }),
        )
        .init();

    let store = Arc::new(ContentStore::with_config(&StoreConfig {
        initial_capacity: args.initial_capacity,
    }));
    let config = Arc::new(ApiConfig {
        request_timeout_ms: args.request_timeout_ms,
        stream_base_url: args.stream_base_url.clone(),
    });
    let swagger_spec = load_swagger_spec(&args.swagger_path);

    let router = Router::new(Arc::clone(&store), config, swagger_spec);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", args.host, args.port))?;
    let server = Server::new(addr, router);

    tracing::info!(
        host = %args.host,
        port = args.port,
        request_timeout_ms = args.request_timeout_ms,
        stream_base_url = %args.stream_base_url,
        "Starting content service"
    );

    let mut server_handle = tokio::spawn(server.serve());

    tokio::select! {
        result = &mut server_handle => {
            // The accept loop only returns on error
            result
                .context("Server task failed")?
                .with_context(|| format!("Failed to serve on {}", addr))?;
        }
        result = signal::ctrl_c() => {
            result.context("Failed to listen for ctrl_c")?;
            tracing::info!("Shutting down server");
            server_handle.abort();
        }
    }

    let counts = store.counts()?;
    tracing::info!(
        courses = counts.courses,
        sections = counts.sections,
        materials = counts.materials,
        "Store discarded on exit"
    );
    Ok(())
}
