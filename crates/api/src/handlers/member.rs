//! Handlers for `/projects/{project_id}/members`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pagewatch_core::error::CoreError;
use pagewatch_core::types::DbId;
use pagewatch_db::models::member::{MemberPayload, RemoveOutcome};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidJson, ValidPath};
use crate::middleware::membership::ProjectMember;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MemberPath {
    pub project_id: DbId,
    pub user_id: DbId,
}

/// GET /api/v1/projects/{project_id}/members
pub async fn list(access: ProjectMember) -> AppResult<Json<Vec<DbId>>> {
    Ok(Json(access.members))
}

/// POST /api/v1/projects/{project_id}/members
///
/// Returns the member list after the addition.
pub async fn add(
    State(state): State<AppState>,
    access: ProjectMember,
    ValidJson(input): ValidJson<MemberPayload>,
) -> AppResult<(StatusCode, Json<Vec<DbId>>)> {
    let project_id = access.project.uuid;
    let user_id = input.into_user()?;

    if !state.store.add_member(project_id, user_id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "User {user_id} is already a member of project {project_id}"
        ))));
    }

    tracing::info!(%project_id, %user_id, added_by = %access.user.user_id, "Member added");

    let members = state.store.list_members(project_id).await?;
    Ok((StatusCode::CREATED, Json(members)))
}

/// DELETE /api/v1/projects/{project_id}/members/{user_id}
///
/// The last member cannot be removed.
pub async fn remove(
    State(state): State<AppState>,
    access: ProjectMember,
    ValidPath(path): ValidPath<MemberPath>,
) -> AppResult<StatusCode> {
    let MemberPath {
        project_id,
        user_id,
    } = path;

    match state
        .store
        .remove_member_unless_last(project_id, user_id)
        .await?
    {
        RemoveOutcome::Removed => {
            tracing::info!(%project_id, %user_id, removed_by = %access.user.user_id, "Member removed");
            Ok(StatusCode::NO_CONTENT)
        }
        RemoveOutcome::NotMember => Err(AppError::not_found("Member", user_id)),
        RemoveOutcome::LastMember => Err(AppError::Core(CoreError::Conflict(
            "Cannot remove the last member of a project".into(),
        ))),
    }
}
