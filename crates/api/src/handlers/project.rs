//! Handlers for the `/projects` resource.
//!
//! Every project is returned as a [`ProjectDetail`]: the stored row plus its
//! member UUIDs and a summary of its pages.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pagewatch_db::models::project::{Project, ProjectDetail, ProjectPayload};
use pagewatch_db::store::Store;

use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::middleware::auth::AuthUser;
use crate::middleware::membership::ProjectMember;
use crate::state::AppState;

/// Load members and page summaries for `project`.
async fn load_detail(store: &dyn Store, project: Project) -> AppResult<ProjectDetail> {
    let members = store.list_members(project.uuid).await?;
    let pages = store.list_page_summaries(project.uuid).await?;
    Ok(ProjectDetail {
        project,
        members,
        pages,
    })
}

/// GET /api/v1/projects
///
/// Projects the caller is a member of, newest first.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<ProjectDetail>>> {
    let projects = state.store.list_projects_for_member(user.user_id).await?;

    let mut details = Vec::with_capacity(projects.len());
    for project in projects {
        details.push(load_detail(state.store.as_ref(), project).await?);
    }
    Ok(Json(details))
}

/// POST /api/v1/projects
///
/// The caller becomes the project's first member.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    ValidJson(input): ValidJson<ProjectPayload>,
) -> AppResult<(StatusCode, Json<ProjectDetail>)> {
    let fields = input.into_fields()?;
    let project = state.store.create_project(&fields, user.user_id).await?;

    tracing::info!(project_id = %project.uuid, user_id = %user.user_id, "Project created");

    Ok((
        StatusCode::CREATED,
        Json(ProjectDetail {
            project,
            members: vec![user.user_id],
            pages: Vec::new(),
        }),
    ))
}

/// GET /api/v1/projects/{project_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    access: ProjectMember,
) -> AppResult<Json<ProjectDetail>> {
    let pages = state.store.list_page_summaries(access.project.uuid).await?;
    Ok(Json(ProjectDetail {
        project: access.project,
        members: access.members,
        pages,
    }))
}

/// PUT /api/v1/projects/{project_id}
pub async fn update(
    State(state): State<AppState>,
    access: ProjectMember,
    ValidJson(input): ValidJson<ProjectPayload>,
) -> AppResult<Json<ProjectDetail>> {
    let id = access.project.uuid;
    let fields = input.into_fields()?;
    let project = state
        .store
        .update_project(id, &fields)
        .await?
        .ok_or(AppError::not_found("Project", id))?;

    Ok(Json(load_detail(state.store.as_ref(), project).await?))
}

/// DELETE /api/v1/projects/{project_id}
///
/// Pages and memberships go with the project.
pub async fn delete(
    State(state): State<AppState>,
    access: ProjectMember,
) -> AppResult<StatusCode> {
    let id = access.project.uuid;
    if state.store.delete_project(id).await? {
        tracing::info!(project_id = %id, user_id = %access.user.user_id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Project", id))
    }
}
