//! Database maintenance

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use qa_server::db::schema;

use super::connect;

#[derive(Parser, Debug)]
pub struct DbArgs {
    #[command(subcommand)]
    pub command: DbCommand,
}

#[derive(Subcommand, Debug)]
pub enum DbCommand {
    /// Create the tags/questions tables if missing (safe to re-run)
    Init,
}

pub async fn run_db(args: DbArgs, database_url: &str) -> Result<()> {
    match args.command {
        DbCommand::Init => {
            let pool = connect(database_url).await?;
            schema::bootstrap(&pool)
                .await
                .context("Failed to bootstrap schema")?;
            println!("✓ Schema ready");
        }
    }
    Ok(())
}
