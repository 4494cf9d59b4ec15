//! Tag administration: list and add
//!
//! Tags have no HTTP create route, so this is how they get into the table.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use qa_server::db::{PgStore, QaStore};
use qa_server::models::{NewTag, Tag};

use super::connect;

#[derive(Parser, Debug)]
pub struct TagsArgs {
    #[command(subcommand)]
    pub command: TagsCommand,
}

#[derive(Subcommand, Debug)]
pub enum TagsCommand {
    /// List all tags
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Add a tag
    Add {
        /// Display name
        #[arg(long)]
        name: String,
        /// Unique URL slug (lowercase, digits, '-' and '_')
        #[arg(long)]
        slug: String,
        /// Free-form description
        #[arg(long, default_value = "")]
        description: String,
    },
}

pub async fn run_tags(args: TagsArgs, database_url: &str) -> Result<()> {
    match args.command {
        TagsCommand::List { json } => {
            let store = PgStore::new(connect(database_url).await?);
            let tags = store.list_tags().await.context("Failed to list tags")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tags)?);
            } else {
                print!("{}", render_table(&tags));
            }
        }
        TagsCommand::Add {
            name,
            slug,
            description,
        } => {
            // Validate before touching the database
            let new_tag = NewTag::new(&name, &description, &slug)?;
            let store = PgStore::new(connect(database_url).await?);
            let tag = store
                .insert_tag(new_tag)
                .await
                .with_context(|| format!("Failed to insert tag '{}'", slug))?;
            println!("✓ Tag created: {} (id: {})", tag.slug, tag.id);
        }
    }
    Ok(())
}

fn render_table(tags: &[Tag]) -> String {
    if tags.is_empty() {
        return "(no tags)\n".to_string();
    }

    let slug_width = tags.iter().map(|t| t.slug.len()).max().unwrap_or(0).max(4);
    let mut out = format!("{:>4}  {:<slug_width$}  NAME\n", "ID", "SLUG");
    for tag in tags {
        out.push_str(&format!(
            "{:>4}  {:<slug_width$}  {}\n",
            tag.id.to_string(),
            tag.slug,
            tag.name
        ));
    }
    out
}
