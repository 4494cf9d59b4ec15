//! Question repository
//!
//! Votes are applied with a single `UPDATE ... SET votes_up = votes_up + 1`
//! so concurrent voters never overwrite each other.

use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{NewQuestion, Question, QuestionId, TagId, VoteType};

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all questions filed under a tag.
    pub async fn list_for_tag(&self, tag_id: TagId) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, tag_id, question, answer, votes_up, votes_down
            FROM questions
            WHERE tag_id = $1
            ORDER BY id
            "#,
        )
        .bind(tag_id)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn get(&self, id: QuestionId) -> Result<Option<Question>, DbError> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, tag_id, question, answer, votes_up, votes_down
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(question)
    }

    /// Insert a question and return its new id.
    pub async fn insert(&self, question: &NewQuestion) -> Result<QuestionId, DbError> {
        let id = sqlx::query_scalar::<_, QuestionId>(
            r#"
            INSERT INTO questions (tag_id, question, answer, votes_up, votes_down)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(question.tag_id)
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.votes_up)
        .bind(question.votes_down)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(%id, tag_id = %question.tag_id, "question inserted");
        Ok(id)
    }

    /// Overwrite both vote counters.
    pub async fn update_votes(&self, question: &Question) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            UPDATE questions
            SET votes_up = $1, votes_down = $2
            WHERE id = $3
            "#,
        )
        .bind(question.votes_up)
        .bind(question.votes_down)
        .bind(question.id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "Question",
                id: question.id.to_string(),
            });
        }

        Ok(())
    }

    /// Apply one vote atomically and return the row as stored afterwards.
    ///
    /// `VoteType::Other` is a read: the counters are left as they are.
    pub async fn record_vote(
        &self,
        id: QuestionId,
        vote: &VoteType,
    ) -> Result<Option<Question>, DbError> {
        let sql = match vote {
            VoteType::Up => {
                r#"
                UPDATE questions
                SET votes_up = votes_up + 1
                WHERE id = $1
                RETURNING id, tag_id, question, answer, votes_up, votes_down
                "#
            }
            VoteType::Down => {
                r#"
                UPDATE questions
                SET votes_down = votes_down + 1
                WHERE id = $1
                RETURNING id, tag_id, question, answer, votes_up, votes_down
                "#
            }
            VoteType::Other(kind) => {
                tracing::debug!(%id, vote = %kind, "unrecognized vote type, counters unchanged");
                return self.get(id).await;
            }
        };

        let question = sqlx::query_as::<_, Question>(sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(question)
    }
}
