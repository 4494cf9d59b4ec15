//! Storage accessor seam used by the HTTP handlers

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, QuestionRepo, TagRepo};
use crate::models::{NewQuestion, NewTag, Question, QuestionId, Tag, TagId, VoteType};

/// Everything the handlers need from storage.
#[async_trait]
pub trait QaStore: Send + Sync + 'static {
    async fn list_tags(&self) -> Result<Vec<Tag>, DbError>;

    async fn tag_exists(&self, id: TagId) -> Result<bool, DbError>;

    async fn get_tag_by_slug(&self, slug: &str) -> Result<Option<Tag>, DbError>;

    async fn insert_tag(&self, tag: NewTag) -> Result<Tag, DbError>;

    async fn list_questions_by_tag(&self, tag_id: TagId) -> Result<Vec<Question>, DbError>;

    async fn get_question_by_id(&self, id: QuestionId) -> Result<Option<Question>, DbError>;

    async fn insert_question(&self, question: NewQuestion) -> Result<QuestionId, DbError>;

    /// Persist both vote counters of `question`. `DbError::NotFound` when the id is unknown.
    async fn update_question(&self, question: &Question) -> Result<(), DbError>;

    /// Apply a single vote atomically. `None` when the id is unknown.
    async fn record_vote(
        &self,
        id: QuestionId,
        vote: &VoteType,
    ) -> Result<Option<Question>, DbError>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl QaStore for PgStore {
    async fn list_tags(&self) -> Result<Vec<Tag>, DbError> {
        TagRepo::new(&self.pool).list().await
    }

    async fn tag_exists(&self, id: TagId) -> Result<bool, DbError> {
        TagRepo::new(&self.pool).exists(id).await
    }

    async fn get_tag_by_slug(&self, slug: &str) -> Result<Option<Tag>, DbError> {
        TagRepo::new(&self.pool).get_by_slug(slug).await
    }

    async fn insert_tag(&self, tag: NewTag) -> Result<Tag, DbError> {
        TagRepo::new(&self.pool).insert(tag).await
    }

    async fn list_questions_by_tag(&self, tag_id: TagId) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).list_for_tag(tag_id).await
    }

    async fn get_question_by_id(&self, id: QuestionId) -> Result<Option<Question>, DbError> {
        QuestionRepo::new(&self.pool).get(id).await
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<QuestionId, DbError> {
        QuestionRepo::new(&self.pool).insert(&question).await
    }

    async fn update_question(&self, question: &Question) -> Result<(), DbError> {
        QuestionRepo::new(&self.pool).update_votes(question).await
    }

    async fn record_vote(
        &self,
        id: QuestionId,
        vote: &VoteType,
    ) -> Result<Option<Question>, DbError> {
        QuestionRepo::new(&self.pool).record_vote(id, vote).await
    }
}
