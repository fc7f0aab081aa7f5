//! Repository for the `projects` table.

use pagewatch_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::project::{Project, ProjectFields};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "uuid, name, wpt_api_key, is_active, created_at, updated_at";

/// Same columns qualified with the `p` alias for joined queries.
const JOINED_COLUMNS: &str =
    "p.uuid, p.name, p.wpt_api_key, p.is_active, p.created_at, p.updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project and record `creator` as its first member.
    ///
    /// Both inserts run in one transaction.
    pub async fn create_with_member(
        pool: &PgPool,
        input: &ProjectFields,
        creator: DbId,
    ) -> Result<Project, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO projects (uuid, name, wpt_api_key, is_active)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.name)
            .bind(&input.wpt_api_key)
            .bind(input.is_active)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("INSERT INTO project_members (project_uuid, user_uuid) VALUES ($1, $2)")
            .bind(project.uuid)
            .bind(creator)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(project)
    }

    /// Find a project by its UUID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE uuid = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the projects `user_id` is a member of, most recently created first.
    pub async fn list_for_member(pool: &PgPool, user_id: DbId) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM projects p
             JOIN project_members m ON m.project_uuid = p.uuid
             WHERE m.user_uuid = $1
             ORDER BY p.created_at DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Replace every editable field of a project.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProjectFields,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = $2,
                wpt_api_key = $3,
                is_active = $4,
                updated_at = NOW()
             WHERE uuid = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.wpt_api_key)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project. Pages and memberships cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE uuid = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
