//! HTTP server command

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use qa_server::db::{create_pool_with_options, pool, schema, PgStore};
use qa_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "QA_BIND", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = pool::DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Seconds a request waits for a free connection before failing with 503
    #[arg(long, default_value_t = pool::DEFAULT_ACQUIRE_TIMEOUT.as_secs())]
    pub acquire_timeout: u64,

    /// Create the tags/questions tables if they do not exist yet
    #[arg(long)]
    pub bootstrap_schema: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, database_url: &str) -> Result<()> {
    tracing::info!("Starting qa server on {}", args.bind);

    let pool = create_pool_with_options(
        database_url,
        args.max_connections,
        Duration::from_secs(args.acquire_timeout),
    )
    .await
    .context("Failed to create database pool")?;

    if args.bootstrap_schema {
        schema::bootstrap(&pool)
            .await
            .context("Failed to bootstrap schema")?;
    }

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Run server (blocks until shutdown)
    run_server(Arc::new(PgStore::new(pool)), config)
        .await
        .context("Server error")?;

    Ok(())
}
