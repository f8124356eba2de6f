//! REST handlers for the issue collection.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::error::ApiError;
use crate::http::server::AppState;
use crate::issues::model::{Issue, IssueUpdate, NewIssuePayload};

/// Envelope for write responses: a human message plus the affected record.
#[derive(Serialize)]
pub struct IssueEnvelope {
    pub message: &'static str,
    pub data: Issue,
}

#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Routes for the `/Issues` collection. Paths are case-sensitive.
pub fn issues_router() -> Router<AppState> {
    Router::new()
        .route("/Issues", post(create_issue).get(list_issues))
        .route(
            "/Issues/{id}",
            get(get_issue).put(update_issue).delete(delete_issue),
        )
}

pub async fn create_issue(
    State(state): State<AppState>,
    Json(payload): Json<NewIssuePayload>,
) -> Result<(StatusCode, Json<IssueEnvelope>), ApiError> {
    let new = payload.validate()?;
    let issue = state.store.insert(new).await?;

    tracing::info!(id = %issue.id, "Issue created");
    Ok((
        StatusCode::CREATED,
        Json(IssueEnvelope {
            message: "Issue reported successfully",
            data: issue,
        }),
    ))
}

pub async fn list_issues(State(state): State<AppState>) -> Result<Json<Vec<Issue>>, ApiError> {
    let issues = state.store.list().await?;
    Ok(Json(issues))
}

pub async fn get_issue(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Issue>, ApiError> {
    let issue = state.store.find(&id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(issue))
}

pub async fn update_issue(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<IssueUpdate>,
) -> Result<Json<IssueEnvelope>, ApiError> {
    let issue = state
        .store
        .update(&id, update)
        .await?
        .ok_or(ApiError::NotFound)?;

    tracing::info!(id = %issue.id, "Issue updated");
    Ok(Json(IssueEnvelope {
        message: "Issue updated successfully",
        data: issue,
    }))
}

pub async fn delete_issue(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    if !state.store.delete(&id).await? {
        return Err(ApiError::NotFound);
    }

    tracing::info!(id = %id, "Issue deleted");
    Ok(Json(MessageBody {
        message: "Issue deleted successfully",
    }))
}
