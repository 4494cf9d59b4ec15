//! Question endpoints: listing by tag slug, voting, creation

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::http::error::ApiError;
use crate::http::extractors::JsonObject;
use crate::http::server::AppState;
use crate::models::{NewQuestion, Question, QuestionId, TagId, ValidationError, VoteType};

/// Question list response
#[derive(Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
}

/// Single question response
#[derive(Serialize)]
pub struct QuestionResponse {
    pub question: Question,
}

/// GET /api/questions/tag/slug/{slug} - questions filed under a tag
async fn list_by_tag_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let tag = state
        .store
        .get_tag_by_slug(&slug)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            resource: "Tag",
            id: slug.clone(),
        })?;

    let questions = state.store.list_questions_by_tag(tag.id).await?;
    Ok(Json(QuestionsResponse { questions }))
}

/// PUT /api/questions/{id}/vote - apply an up/down vote
async fn vote(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonObject(body): JsonObject,
) -> Result<Json<QuestionResponse>, ApiError> {
    // Body is validated before the question is looked up.
    let vote = parse_vote(&body)?;

    let not_found = || ApiError::NotFound {
        resource: "Question",
        id: id.clone(),
    };
    let question_id = QuestionId::parse(&id).map_err(|_| not_found())?;

    let question = state
        .store
        .record_vote(question_id, &vote)
        .await?
        .ok_or_else(not_found)?;

    tracing::info!(
        id = %question.id,
        vote = vote.as_str(),
        votes_up = question.votes_up,
        votes_down = question.votes_down,
        "vote recorded"
    );
    Ok(Json(QuestionResponse { question }))
}

/// POST /api/questions - create a question under an existing tag
async fn create_question(
    State(state): State<Arc<AppState>>,
    JsonObject(body): JsonObject,
) -> Result<Json<QuestionResponse>, ApiError> {
    let new_question = parse_new_question(&body)?;
    let tag_id = new_question.tag_id;

    if !state.store.tag_exists(tag_id).await? {
        return Err(ApiError::NotFound {
            resource: "Tag",
            id: tag_id.to_string(),
        });
    }

    let id = state.store.insert_question(new_question).await?;
    let question = state
        .store
        .get_question_by_id(id)
        .await?
        .ok_or_else(|| ApiError::Internal {
            message: format!("inserted question {} could not be read back", id),
        })?;

    tracing::info!(%id, %tag_id, "question created");
    Ok(Json(QuestionResponse { question }))
}

/// Extract `voteType`; any string is accepted, other JSON types are not.
fn parse_vote(body: &Map<String, Value>) -> Result<VoteType, ValidationError> {
    match body.get("voteType") {
        None => Err(ValidationError::MissingFields {
            fields: vec!["voteType"],
        }),
        Some(Value::String(s)) => Ok(VoteType::from(s.as_str())),
        Some(_) => Err(ValidationError::WrongType {
            field: "voteType",
            expected: "a string",
        }),
    }
}

/// Validate a create-question body.
///
/// Checks run in order: required fields present, `tagId` numeric,
/// text fields are strings, optional counters are non-negative integers.
fn parse_new_question(body: &Map<String, Value>) -> Result<NewQuestion, ValidationError> {
    let missing: Vec<&'static str> = ["question", "answer", "tagId"]
        .into_iter()
        .filter(|field| !body.contains_key(*field))
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields { fields: missing });
    }

    let tag_id = match &body["tagId"] {
        Value::String(s) => TagId::parse(s)?,
        other => {
            return Err(ValidationError::InvalidTagId {
                value: other.to_string(),
            })
        }
    };

    Ok(NewQuestion {
        tag_id,
        question: string_field(body, "question")?,
        answer: string_field(body, "answer")?,
        votes_up: counter_field(body, "votesUp")?,
        votes_down: counter_field(body, "votesDown")?,
    })
}

fn string_field(body: &Map<String, Value>, field: &'static str) -> Result<String, ValidationError> {
    body[field]
        .as_str()
        .map(str::to_owned)
        .ok_or(ValidationError::WrongType {
            field,
            expected: "a string",
        })
}

/// Absent or null counts as 0.
fn counter_field(body: &Map<String, Value>, field: &'static str) -> Result<i32, ValidationError> {
    let value = match body.get(field) {
        None | Some(Value::Null) => return Ok(0),
        Some(v) => v,
    };

    let n = value.as_i64().ok_or(ValidationError::WrongType {
        field,
        expected: "an integer",
    })?;
    if n < 0 {
        return Err(ValidationError::Negative { field });
    }

    i32::try_from(n).map_err(|_| ValidationError::WrongType {
        field,
        expected: "a 32-bit integer",
    })
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/questions", post(create_question))
        .route("/api/questions/tag/slug/{slug}", get(list_by_tag_slug))
        .route("/api/questions/{id}/vote", put(vote))
}
