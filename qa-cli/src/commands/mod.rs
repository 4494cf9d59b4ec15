//! Command implementations for the qa CLI

pub mod db;
pub mod serve;
pub mod tags;

// Re-export main dispatcher functions for flat access from main.rs
pub use db::run_db;
pub use serve::run_serve;
pub use tags::run_tags;

use anyhow::{Context, Result};
use qa_server::db::create_pool;
use qa_server::db::pool::PgPool;

/// Open a pool with default limits for one-shot admin commands.
async fn connect(database_url: &str) -> Result<PgPool> {
    create_pool(database_url)
        .await
        .context("Failed to connect to database")
}
