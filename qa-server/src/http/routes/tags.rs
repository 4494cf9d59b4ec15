//! Tag endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::Tag;

/// Tag list response
#[derive(Serialize)]
pub struct TagsResponse {
    pub tags: Vec<Tag>,
}

/// GET /api/tags - list all tags
async fn list_tags(State(state): State<Arc<AppState>>) -> Result<Json<TagsResponse>, ApiError> {
    let tags = state.store.list_tags().await?;
    Ok(Json(TagsResponse { tags }))
}

/// Tag routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/tags", get(list_tags))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::json;

    use crate::db::memory::MemoryStore;
    use crate::http::testing::{app, get, send};

    #[tokio::test]
    async fn empty_table_returns_empty_list() {
        let (status, _, body) = send(app(Arc::new(MemoryStore::new())), get("/api/tags")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "tags": [] }));
    }

    #[tokio::test]
    async fn lists_tags_in_storage_order() {
        let store = Arc::new(MemoryStore::new());
        store.seed_tag("Rust", "rust");
        store.seed_tag("SQL", "sql");

        let (status, headers, body) = send(app(store), get("/api/tags")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers["content-type"], "application/json");
        assert_eq!(
            body,
            json!({
                "tags": [
                    { "id": "1", "name": "Rust", "description": "Rust questions", "slug": "rust" },
                    { "id": "2", "name": "SQL", "description": "SQL questions", "slug": "sql" }
                ]
            })
        );
    }

    #[tokio::test]
    async fn storage_outage_is_503_not_empty_list() {
        let (status, _, body) =
            send(app(Arc::new(MemoryStore::unavailable())), get("/api/tags")).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "Database unavailable");
    }
}
