//! Project membership extractor.
//!
//! Every route below `/projects/{project_id}` takes a [`ProjectMember`],
//! so the membership check runs uniformly before any handler code:
//!
//! 1. authenticate ([`AuthUser`], 401)
//! 2. load the project named in the path (404)
//! 3. apply [`access::authorize`] to its member list (403)

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use pagewatch_core::access;
use pagewatch_core::types::DbId;
use pagewatch_db::models::project::Project;
use serde::Deserialize;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct ProjectPath {
    project_id: DbId,
}

/// An authenticated member of the project in the request path.
///
/// ```ignore
/// async fn detail(access: ProjectMember) -> AppResult<Json<Project>> {
///     Ok(Json(access.project))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ProjectMember {
    pub user: AuthUser,
    pub project: Project,
    /// Members at the time of the check, in join order.
    pub members: Vec<DbId>,
}

impl FromRequestParts<AppState> for ProjectMember {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        let Path(ProjectPath { project_id }) =
            Path::<ProjectPath>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let project = state
            .store
            .find_project(project_id)
            .await?
            .ok_or(AppError::not_found("Project", project_id))?;

        let members = state.store.list_members(project_id).await?;

        access::authorize(user.user_id, project_id, &members)
            .into_result()
            .inspect_err(|_| {
                tracing::warn!(user_id = %user.user_id, %project_id, "Project access denied");
            })?;

        Ok(ProjectMember {
            user,
            project,
            members,
        })
    }
}
