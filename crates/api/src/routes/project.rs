//! Route definitions for the `/projects` resource.
//!
//! Also nests page and member routes under `/projects/{project_id}/...`.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::{member, page, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{project_id}                      -> get_by_id
/// PUT    /{project_id}                      -> update
/// DELETE /{project_id}                      -> delete
///
/// GET    /{project_id}/pages                -> list_by_project
/// POST   /{project_id}/pages                -> create
/// GET    /{project_id}/pages/{page_id}      -> get_by_id
/// PUT    /{project_id}/pages/{page_id}      -> update
/// DELETE /{project_id}/pages/{page_id}      -> delete
///
/// GET    /{project_id}/members              -> list
/// POST   /{project_id}/members              -> add
/// DELETE /{project_id}/members/{user_id}    -> remove
/// ```
pub fn router() -> Router<AppState> {
    let page_routes = Router::new()
        .route("/", get(page::list_by_project).post(page::create))
        .route(
            "/{page_id}",
            get(page::get_by_id).put(page::update).delete(page::delete),
        );

    let member_routes = Router::new()
        .route("/", get(member::list).post(member::add))
        .route("/{user_id}", delete(member::remove));

    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{project_id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .nest("/{project_id}/pages", page_routes)
        .nest("/{project_id}/members", member_routes)
}
