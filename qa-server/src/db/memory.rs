//! In-memory `QaStore` for handler tests

use std::sync::Mutex;

use async_trait::async_trait;

use super::{DbError, QaStore};
use crate::models::{NewQuestion, NewTag, Question, QuestionId, Tag, TagId, VoteType};

#[derive(Default)]
struct Tables {
    tags: Vec<Tag>,
    questions: Vec<Question>,
}

/// Vec-backed store mirroring the PostgreSQL semantics the handlers rely on.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    unavailable: bool,
    skip_readback: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails as if the pool timed out.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Inserts succeed but `get_question_by_id` never finds anything.
    pub fn without_readback() -> Self {
        Self {
            skip_readback: true,
            ..Self::default()
        }
    }

    pub fn seed_tag(&self, name: &str, slug: &str) -> Tag {
        let mut tables = self.tables.lock().unwrap();
        let tag = Tag {
            id: TagId(tables.tags.len() as i32 + 1),
            name: name.to_owned(),
            description: format!("{name} questions"),
            slug: slug.to_owned(),
        };
        tables.tags.push(tag.clone());
        tag
    }

    pub fn seed_question(&self, tag_id: TagId, question: &str, answer: &str) -> Question {
        let mut tables = self.tables.lock().unwrap();
        let q = Question {
            id: QuestionId(tables.questions.len() as i32 + 1),
            tag_id,
            question: question.to_owned(),
            answer: answer.to_owned(),
            votes_up: 0,
            votes_down: 0,
        };
        tables.questions.push(q.clone());
        q
    }

    pub fn question_count(&self) -> usize {
        self.tables.lock().unwrap().questions.len()
    }

    fn check(&self) -> Result<(), DbError> {
        if self.unavailable {
            return Err(DbError::Unavailable(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl QaStore for MemoryStore {
    async fn list_tags(&self) -> Result<Vec<Tag>, DbError> {
        self.check()?;
        Ok(self.tables.lock().unwrap().tags.clone())
    }

    async fn tag_exists(&self, id: TagId) -> Result<bool, DbError> {
        self.check()?;
        Ok(self.tables.lock().unwrap().tags.iter().any(|t| t.id == id))
    }

    async fn get_tag_by_slug(&self, slug: &str) -> Result<Option<Tag>, DbError> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables.tags.iter().find(|t| t.slug == slug).cloned())
    }

    async fn insert_tag(&self, tag: NewTag) -> Result<Tag, DbError> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        if tables.tags.iter().any(|t| t.slug == tag.slug.as_str()) {
            return Err(DbError::Constraint {
                constraint: "tags_slug_key".into(),
                message: "duplicate key value violates unique constraint".into(),
            });
        }
        let tag = Tag {
            id: TagId(tables.tags.len() as i32 + 1),
            name: tag.name,
            description: tag.description,
            slug: tag.slug.as_str().to_owned(),
        };
        tables.tags.push(tag.clone());
        Ok(tag)
    }

    async fn list_questions_by_tag(&self, tag_id: TagId) -> Result<Vec<Question>, DbError> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .questions
            .iter()
            .filter(|q| q.tag_id == tag_id)
            .cloned()
            .collect())
    }

    async fn get_question_by_id(&self, id: QuestionId) -> Result<Option<Question>, DbError> {
        self.check()?;
        if self.skip_readback {
            return Ok(None);
        }
        let tables = self.tables.lock().unwrap();
        Ok(tables.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<QuestionId, DbError> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        if !tables.tags.iter().any(|t| t.id == question.tag_id) {
            return Err(DbError::Constraint {
                constraint: "questions_tag_id_fkey".into(),
                message: "insert violates foreign key constraint".into(),
            });
        }
        let id = QuestionId(tables.questions.len() as i32 + 1);
        tables.questions.push(Question {
            id,
            tag_id: question.tag_id,
            question: question.question,
            answer: question.answer,
            votes_up: question.votes_up,
            votes_down: question.votes_down,
        });
        Ok(id)
    }

    async fn update_question(&self, question: &Question) -> Result<(), DbError> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        match tables.questions.iter_mut().find(|q| q.id == question.id) {
            Some(stored) => {
                stored.votes_up = question.votes_up;
                stored.votes_down = question.votes_down;
                Ok(())
            }
            None => Err(DbError::NotFound {
                resource: "Question",
                id: question.id.to_string(),
            }),
        }
    }

    async fn record_vote(
        &self,
        id: QuestionId,
        vote: &VoteType,
    ) -> Result<Option<Question>, DbError> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        let Some(stored) = tables.questions.iter_mut().find(|q| q.id == id) else {
            return Ok(None);
        };
        match vote {
            VoteType::Up => stored.votes_up += 1,
            VoteType::Down => stored.votes_down += 1,
            VoteType::Other(_) => {}
        }
        Ok(Some(stored.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn update_question_overwrites_counters() {
        let store = MemoryStore::new();
        let tag = store.seed_tag("Rust", "rust");
        let mut q = store.seed_question(tag.id, "q", "a");

        q.votes_up = 4;
        q.votes_down = 2;
        store.update_question(&q).await.unwrap();

        let stored = store.get_question_by_id(q.id).await.unwrap().unwrap();
        assert_eq!((stored.votes_up, stored.votes_down), (4, 2));
    }

    #[tokio::test]
    async fn update_unknown_question_is_not_found() {
        let store = MemoryStore::new();
        let tag = store.seed_tag("Rust", "rust");
        let mut q = store.seed_question(tag.id, "q", "a");
        q.id = QuestionId(99);

        let err = store.update_question(&q).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "Question", .. }));
        assert_eq!(err.to_string(), "not found: Question '99'");
    }

    #[tokio::test]
    async fn duplicate_slug_is_constraint_error() {
        let store = MemoryStore::new();
        store.insert_tag(NewTag::new("Rust", "", "rust").unwrap()).await.unwrap();

        let err = store
            .insert_tag(NewTag::new("Rust again", "", "rust").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Constraint { .. }));
    }
}
