//! Handlers for pages nested under `/projects/{project_id}/pages`.
//!
//! Membership of the path's project is checked by [`ProjectMember`] before
//! the page is loaded. A page that exists but belongs to another project is
//! rejected with `OWNERSHIP_MISMATCH`, never reported as missing.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pagewatch_core::error::CoreError;
use pagewatch_core::types::DbId;
use pagewatch_db::models::page::{Page, PagePayload};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidJson, ValidPath};
use crate::middleware::membership::ProjectMember;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PagePath {
    pub project_id: DbId,
    pub page_id: DbId,
}

/// Fetch a page and confirm it belongs to `project_id`.
async fn load_owned_page(state: &AppState, project_id: DbId, page_id: DbId) -> AppResult<Page> {
    let page = state
        .store
        .find_page(page_id)
        .await?
        .ok_or(AppError::not_found("Page", page_id))?;

    if page.project_uuid != project_id {
        return Err(AppError::Core(CoreError::OwnershipMismatch {
            child: "Page",
            child_id: page_id,
            parent: "Project",
            parent_id: project_id,
        }));
    }
    Ok(page)
}

/// GET /api/v1/projects/{project_id}/pages
pub async fn list_by_project(
    State(state): State<AppState>,
    access: ProjectMember,
) -> AppResult<Json<Vec<Page>>> {
    let pages = state.store.list_pages(access.project.uuid).await?;
    Ok(Json(pages))
}

/// POST /api/v1/projects/{project_id}/pages
pub async fn create(
    State(state): State<AppState>,
    access: ProjectMember,
    ValidJson(input): ValidJson<PagePayload>,
) -> AppResult<(StatusCode, Json<Page>)> {
    let fields = input.into_fields()?;
    let page = state.store.create_page(access.project.uuid, &fields).await?;

    tracing::info!(page_id = %page.uuid, project_id = %page.project_uuid, "Page created");

    Ok((StatusCode::CREATED, Json(page)))
}

/// GET /api/v1/projects/{project_id}/pages/{page_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _access: ProjectMember,
    ValidPath(path): ValidPath<PagePath>,
) -> AppResult<Json<Page>> {
    let page = load_owned_page(&state, path.project_id, path.page_id).await?;
    Ok(Json(page))
}

/// PUT /api/v1/projects/{project_id}/pages/{page_id}
pub async fn update(
    State(state): State<AppState>,
    _access: ProjectMember,
    ValidPath(path): ValidPath<PagePath>,
    ValidJson(input): ValidJson<PagePayload>,
) -> AppResult<Json<Page>> {
    load_owned_page(&state, path.project_id, path.page_id).await?;
    let fields = input.into_fields()?;

    let page = state
        .store
        .update_page(path.page_id, &fields)
        .await?
        .ok_or(AppError::not_found("Page", path.page_id))?;
    Ok(Json(page))
}

/// DELETE /api/v1/projects/{project_id}/pages/{page_id}
pub async fn delete(
    State(state): State<AppState>,
    _access: ProjectMember,
    ValidPath(path): ValidPath<PagePath>,
) -> AppResult<StatusCode> {
    load_owned_page(&state, path.project_id, path.page_id).await?;

    if state.store.delete_page(path.page_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Page", path.page_id))
    }
}
