//! HTTP handlers for the story module.
//!
//! Every handler performs exactly one persistence call and maps the outcome
//! onto the wire contract: confirmations and errors are `{"message": ...}`,
//! the list is `{"stories": [...]}`, and a single fetch spreads the story's
//! fields at the top level.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use saga_http::error::ApiError;

use super::models::{Story, StoryDraft};
use super::store::StoryStore;

/// Query parameters accepted by the list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub author: Option<String>,
}

/// `POST /api/story`: validate, derive the slug, persist.
pub async fn create_story(
    State(store): State<StoryStore>,
    Json(draft): Json<StoryDraft>,
) -> Result<Json<Value>, ApiError> {
    draft.validate()?;

    let slug = draft.slug();
    store.insert(&draft, &slug).await?;

    tracing::debug!(target: "saga::story", %slug, "story saved");
    Ok(Json(json!({ "message": "The story is saved successfully." })))
}

/// `GET /api/story`: all stories, newest update first, optionally filtered
/// by exact author match.
pub async fn list_stories(
    State(store): State<StoryStore>,
    Query(params): Query<ListParams>,
) -> Result<Json<Value>, ApiError> {
    let stories = store.list(params.author.as_deref()).await?;

    Ok(Json(json!({ "stories": stories })))
}

/// `GET /api/story/{slug}`: exact-match point lookup.
///
/// An unknown slug still responds 200, with a null body; not-found is not an
/// error in this contract.
pub async fn get_story(
    State(store): State<StoryStore>,
    Path(slug): Path<String>,
) -> Result<Json<Option<Story>>, ApiError> {
    let story = store.find_by_slug(&slug).await?;

    Ok(Json(story))
}

/// `DELETE /api/story/{slug}`: remove the record if present.
///
/// A no-match delete affects zero rows and still confirms success.
pub async fn delete_story(
    State(store): State<StoryStore>,
    Path(slug): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let removed = store.delete_by_slug(&slug).await?;

    tracing::debug!(target: "saga::story", %slug, removed, "story delete handled");
    Ok(Json(json!({ "message": "The story is deleted successfully." })))
}
