//! Tag repository
//!
//! Tags are only ever inserted and read; nothing here updates or deletes.

use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{NewTag, Tag, TagId};

/// Tag repository
pub struct TagRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TagRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every tag in storage order.
    pub async fn list(&self) -> Result<Vec<Tag>, DbError> {
        let tags = sqlx::query_as::<_, Tag>(
            r#"
            SELECT id, name, description, slug
            FROM tags
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(tags)
    }

    pub async fn exists(&self, id: TagId) -> Result<bool, DbError> {
        let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM tags WHERE id = $1)")
            .bind(id)
            .fetch_one(self.pool)
            .await?;

        Ok(exists)
    }

    /// Look a tag up by its public slug.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Tag>, DbError> {
        let tag = sqlx::query_as::<_, Tag>(
            r#"
            SELECT id, name, description, slug
            FROM tags
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool)
        .await?;

        Ok(tag)
    }

    /// Insert a tag and return the stored row.
    ///
    /// A duplicate slug comes back as `DbError::Constraint`.
    pub async fn insert(&self, tag: NewTag) -> Result<Tag, DbError> {
        let tag = sqlx::query_as::<_, Tag>(
            r#"
            INSERT INTO tags (name, description, slug)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, slug
            "#,
        )
        .bind(&tag.name)
        .bind(&tag.description)
        .bind(tag.slug.as_str())
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(id = %tag.id, slug = %tag.slug, "tag inserted");
        Ok(tag)
    }
}
