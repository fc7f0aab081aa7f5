//! The storage seam used by the HTTP layer.
//!
//! Handlers talk to an `Arc<dyn Store>` so the same routes run against
//! PostgreSQL in production and against [`crate::memory::MemoryStore`] in
//! tests. Lookups return `Option`; mapping absence to a not-found error is
//! the caller's job.

use async_trait::async_trait;
use pagewatch_core::types::DbId;

use crate::models::member::RemoveOutcome;
use crate::models::page::{Page, PageFields, PageSummary};
use crate::models::project::{Project, ProjectFields};
use crate::repositories::{MemberRepo, PageRepo, ProjectRepo};
use crate::DbPool;

/// Result type shared by every store operation.
pub type StoreResult<T> = Result<T, sqlx::Error>;

/// Persistence operations for projects, memberships and pages.
#[async_trait]
pub trait Store: Send + Sync {
    /// Verify the backing store is reachable.
    async fn health_check(&self) -> StoreResult<()>;

    /// Create a project with `creator` as its only member.
    async fn create_project(&self, input: &ProjectFields, creator: DbId) -> StoreResult<Project>;
    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>>;
    async fn list_projects_for_member(&self, user_id: DbId) -> StoreResult<Vec<Project>>;
    async fn update_project(&self, id: DbId, input: &ProjectFields) -> StoreResult<Option<Project>>;
    /// Delete a project with its pages and memberships.
    async fn delete_project(&self, id: DbId) -> StoreResult<bool>;

    async fn list_members(&self, project_id: DbId) -> StoreResult<Vec<DbId>>;
    async fn add_member(&self, project_id: DbId, user_id: DbId) -> StoreResult<bool>;
    /// Remove a member atomically, refusing to remove the last one.
    async fn remove_member_unless_last(
        &self,
        project_id: DbId,
        user_id: DbId,
    ) -> StoreResult<RemoveOutcome>;

    async fn create_page(&self, project_id: DbId, input: &PageFields) -> StoreResult<Page>;
    async fn find_page(&self, id: DbId) -> StoreResult<Option<Page>>;
    async fn list_pages(&self, project_id: DbId) -> StoreResult<Vec<Page>>;
    async fn list_page_summaries(&self, project_id: DbId) -> StoreResult<Vec<PageSummary>>;
    async fn update_page(&self, id: DbId, input: &PageFields) -> StoreResult<Option<Page>>;
    async fn delete_page(&self, id: DbId) -> StoreResult<bool>;
}

/// [`Store`] backed by PostgreSQL through the static repositories.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await
    }

    async fn create_project(&self, input: &ProjectFields, creator: DbId) -> StoreResult<Project> {
        ProjectRepo::create_with_member(&self.pool, input, creator).await
    }

    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        ProjectRepo::find_by_id(&self.pool, id).await
    }

    async fn list_projects_for_member(&self, user_id: DbId) -> StoreResult<Vec<Project>> {
        ProjectRepo::list_for_member(&self.pool, user_id).await
    }

    async fn update_project(&self, id: DbId, input: &ProjectFields) -> StoreResult<Option<Project>> {
        ProjectRepo::update(&self.pool, id, input).await
    }

    async fn delete_project(&self, id: DbId) -> StoreResult<bool> {
        ProjectRepo::delete(&self.pool, id).await
    }

    async fn list_members(&self, project_id: DbId) -> StoreResult<Vec<DbId>> {
        MemberRepo::list(&self.pool, project_id).await
    }

    async fn add_member(&self, project_id: DbId, user_id: DbId) -> StoreResult<bool> {
        MemberRepo::add(&self.pool, project_id, user_id).await
    }

    async fn remove_member_unless_last(
        &self,
        project_id: DbId,
        user_id: DbId,
    ) -> StoreResult<RemoveOutcome> {
        MemberRepo::remove_unless_last(&self.pool, project_id, user_id).await
    }

    async fn create_page(&self, project_id: DbId, input: &PageFields) -> StoreResult<Page> {
        PageRepo::create(&self.pool, project_id, input).await
    }

    async fn find_page(&self, id: DbId) -> StoreResult<Option<Page>> {
        PageRepo::find_by_id(&self.pool, id).await
    }

    async fn list_pages(&self, project_id: DbId) -> StoreResult<Vec<Page>> {
        PageRepo::list_by_project(&self.pool, project_id).await
    }

    async fn list_page_summaries(&self, project_id: DbId) -> StoreResult<Vec<PageSummary>> {
        PageRepo::summaries_by_project(&self.pool, project_id).await
    }

    async fn update_page(&self, id: DbId, input: &PageFields) -> StoreResult<Option<Page>> {
        PageRepo::update(&self.pool, id, input).await
    }

    async fn delete_page(&self, id: DbId) -> StoreResult<bool> {
        PageRepo::delete(&self.pool, id).await
    }
}
