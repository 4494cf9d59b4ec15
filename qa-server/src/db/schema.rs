//! Table bootstrap
//!
//! Creates the two tables when they are missing. There is no versioning:
//! existing tables are left exactly as they are.

use sqlx::PgPool;

use super::DbError;

/// Create `tags` and `questions` if absent
pub async fn bootstrap(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Ensuring tags/questions tables exist...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tags (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            slug TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id SERIAL PRIMARY KEY,
            tag_id INTEGER NOT NULL REFERENCES tags(id),
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            votes_up INTEGER NOT NULL DEFAULT 0 CHECK (votes_up >= 0),
            votes_down INTEGER NOT NULL DEFAULT 0 CHECK (votes_down >= 0)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_tag_id ON questions(tag_id)")
        .execute(pool)
        .await?;

    tracing::info!("Schema ready");
    Ok(())
}
