//! Repository for the `pages` table.

use pagewatch_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::page::{Page, PageFields, PageSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "uuid, project_uuid, name, url, created_at, updated_at";

/// Provides CRUD operations for pages.
pub struct PageRepo;

impl PageRepo {
    /// Insert a new page owned by `project_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &PageFields,
    ) -> Result<Page, sqlx::Error> {
        let query = format!(
            "INSERT INTO pages (uuid, project_uuid, name, url)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(Uuid::new_v4())
            .bind(project_id)
            .bind(&input.name)
            .bind(&input.url)
            .fetch_one(pool)
            .await
    }

    /// Find a page by its UUID, regardless of project.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE uuid = $1");
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the pages of a project in creation order.
    pub async fn list_by_project(pool: &PgPool, project_id: DbId) -> Result<Vec<Page>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pages WHERE project_uuid = $1 ORDER BY created_at, uuid"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Like [`PageRepo::list_by_project`] but only `uuid` and `name`.
    pub async fn summaries_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<PageSummary>, sqlx::Error> {
        sqlx::query_as::<_, PageSummary>(
            "SELECT uuid, name FROM pages WHERE project_uuid = $1 ORDER BY created_at, uuid",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    /// Replace the editable fields of a page. The owning project is untouched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &PageFields,
    ) -> Result<Option<Page>, sqlx::Error> {
        let query = format!(
            "UPDATE pages SET
                name = $2,
                url = $3,
                updated_at = NOW()
             WHERE uuid = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.url)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a page. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pages WHERE uuid = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
