//! qa CLI - entry point for the question/answer service
//!
//! - `serve`: run the HTTP API
//! - `tags`: list and add tags
//! - `db init`: create the tables if missing

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "qa",
    author,
    version,
    about = "Tag-organised questions and answers with up/down voting, served over HTTP"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// PostgreSQL connection string
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    /// key=value file consulted when DATABASE_URL is not set
    /// (`$VAR` is expanded unless the value is single-quoted)
    #[arg(long, global = true, default_value = ".env")]
    env_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// List and add tags
    Tags(commands::tags::TagsArgs),
    /// Database maintenance (init)
    Db(commands::db::DbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    let database_url = config::resolve_database_url(cli.database_url, &cli.env_file)?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, &database_url).await?,
        Commands::Tags(args) => commands::run_tags(args, &database_url).await?,
        Commands::Db(args) => commands::run_db(args, &database_url).await?,
    }

    Ok(())
}
