//! Connection string resolution
//!
//! Precedence: `--database-url` flag, then the `DATABASE_URL` environment
//! variable (both handled by clap), then the first `DATABASE_URL=` entry of
//! a local key=value file (`.env` by default).
//!
//! The file is read with dotenv rules: `$VAR` and `${VAR}` are expanded in
//! unquoted and double-quoted values. Single-quote the URL when the password
//! contains `$`, e.g. `DATABASE_URL='postgres://qa:pa$w0rd@db/qa'`.

use std::path::Path;

use anyhow::{bail, Result};

pub const DATABASE_URL_KEY: &str = "DATABASE_URL";

/// Resolve the database URL or fail with a message naming every source tried.
pub fn resolve_database_url(explicit: Option<String>, env_file: &Path) -> Result<String> {
    if let Some(url) = explicit.filter(|u| !u.trim().is_empty()) {
        return Ok(url);
    }

    if let Some(url) = read_env_file_key(env_file, DATABASE_URL_KEY) {
        tracing::debug!(file = %env_file.display(), "DATABASE_URL loaded from env file");
        return Ok(url);
    }

    bail!(
        "{} not set. Set via --database-url, the {} environment variable, or {}",
        DATABASE_URL_KEY,
        DATABASE_URL_KEY,
        env_file.display()
    )
}

/// First value for `key` in a dotenv-style file. Missing file or key yields None.
pub fn read_env_file_key(path: &Path, key: &str) -> Option<String> {
    let entries = dotenvy::from_path_iter(path).ok()?;

    entries
        .filter_map(|entry| match entry {
            Ok(pair) => Some(pair),
            Err(e) => {
                tracing::warn!(file = %path.display(), "skipping unparsable env line: {}", e);
                None
            }
        })
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}
