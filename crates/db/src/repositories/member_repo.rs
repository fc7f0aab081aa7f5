//! Repository for the `project_members` table.

use pagewatch_core::types::DbId;
use sqlx::PgPool;

use crate::models::member::RemoveOutcome;

/// Provides membership lookups and changes.
pub struct MemberRepo;

impl MemberRepo {
    /// User UUIDs of every member of a project, in the order they joined.
    pub async fn list(pool: &PgPool, project_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT user_uuid FROM project_members
             WHERE project_uuid = $1
             ORDER BY created_at, user_uuid",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    /// Add a member. Returns `false` if the user already was one.
    pub async fn add(pool: &PgPool, project_id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO project_members (project_uuid, user_uuid)
             VALUES ($1, $2)
             ON CONFLICT (project_uuid, user_uuid) DO NOTHING",
        )
        .bind(project_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove a member unless they are the project's last one.
    ///
    /// The project row is locked first, so concurrent removals on the same
    /// project are serialized and cannot leave it without members.
    pub async fn remove_unless_last(
        pool: &PgPool,
        project_id: DbId,
        user_id: DbId,
    ) -> Result<RemoveOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT uuid FROM projects WHERE uuid = $1 FOR UPDATE")
            .bind(project_id)
            .fetch_optional(&mut *tx)
            .await?;

        let members = sqlx::query_scalar::<_, DbId>(
            "SELECT user_uuid FROM project_members WHERE project_uuid = $1",
        )
        .bind(project_id)
        .fetch_all(&mut *tx)
        .await?;

        let outcome = if !members.contains(&user_id) {
            RemoveOutcome::NotMember
        } else if members.len() == 1 {
            RemoveOutcome::LastMember
        } else {
            sqlx::query("DELETE FROM project_members WHERE project_uuid = $1 AND user_uuid = $2")
                .bind(project_id)
                .bind(user_id)
                .execute(&mut *tx)
                .await?;
            RemoveOutcome::Removed
        };

        tx.commit().await?;
        Ok(outcome)
    }
}
