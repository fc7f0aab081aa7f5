pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                        list, create
/// /projects/{project_id}                           get, update, delete
/// /projects/{project_id}/pages                     list, create
/// /projects/{project_id}/pages/{page_id}           get, update, delete
/// /projects/{project_id}/members                   list, add
/// /projects/{project_id}/members/{user_id}         remove
/// ```
///
/// Every route requires a Bearer token; everything below
/// `/projects/{project_id}` also requires membership of that project.
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/projects", project::router())
}
