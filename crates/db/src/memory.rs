//! In-memory [`Store`] used by the HTTP integration tests.
//!
//! All tables live behind one `RwLock`, so each operation is atomic with
//! respect to the others. Rows are kept in insertion order to mirror the
//! `ORDER BY created_at` of the SQL repositories.

use async_trait::async_trait;
use pagewatch_core::types::DbId;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::member::RemoveOutcome;
use crate::models::page::{Page, PageFields, PageSummary};
use crate::models::project::{Project, ProjectFields};
use crate::store::{Store, StoreResult};

#[derive(Default)]
struct Tables {
    projects: Vec<Project>,
    /// `(project, user)` pairs in the order members joined.
    members: Vec<(DbId, DbId)>,
    pages: Vec<Page>,
}

impl Tables {
    fn has_project(&self, id: DbId) -> bool {
        self.projects.iter().any(|p| p.uuid == id)
    }
}

/// Thread-safe in-memory store; wrap it in an `Arc` to share.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored pages across all projects.
    pub async fn page_count(&self) -> usize {
        self.tables.read().await.pages.len()
    }

    /// Total number of stored projects.
    pub async fn project_count(&self) -> usize {
        self.tables.read().await.projects.len()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn create_project(&self, input: &ProjectFields, creator: DbId) -> StoreResult<Project> {
        let now = chrono::Utc::now();
        let project = Project {
            uuid: Uuid::new_v4(),
            name: input.name.clone(),
            wpt_api_key: input.wpt_api_key.clone(),
            is_active: input.is_active,
            created_at: now,
            updated_at: now,
        };

        let mut tables = self.tables.write().await;
        tables.projects.push(project.clone());
        tables.members.push((project.uuid, creator));
        Ok(project)
    }

    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        let tables = self.tables.read().await;
        Ok(tables.projects.iter().find(|p| p.uuid == id).cloned())
    }

    async fn list_projects_for_member(&self, user_id: DbId) -> StoreResult<Vec<Project>> {
        let tables = self.tables.read().await;
        let projects = tables
            .projects
            .iter()
            .rev()
            .filter(|p| tables.members.contains(&(p.uuid, user_id)))
            .cloned()
            .collect();
        Ok(projects)
    }

    async fn update_project(&self, id: DbId, input: &ProjectFields) -> StoreResult<Option<Project>> {
        let mut tables = self.tables.write().await;
        let Some(project) = tables.projects.iter_mut().find(|p| p.uuid == id) else {
            return Ok(None);
        };
        project.name = input.name.clone();
        project.wpt_api_key = input.wpt_api_key.clone();
        project.is_active = input.is_active;
        project.updated_at = chrono::Utc::now();
        Ok(Some(project.clone()))
    }

    async fn delete_project(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.projects.len();
        tables.projects.retain(|p| p.uuid != id);
        if tables.projects.len() == before {
            return Ok(false);
        }
        tables.members.retain(|(project, _)| *project != id);
        tables.pages.retain(|page| page.project_uuid != id);
        Ok(true)
    }

    async fn list_members(&self, project_id: DbId) -> StoreResult<Vec<DbId>> {
        let tables = self.tables.read().await;
        Ok(tables
            .members
            .iter()
            .filter(|(project, _)| *project == project_id)
            .map(|(_, user)| *user)
            .collect())
    }

    async fn add_member(&self, project_id: DbId, user_id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        if !tables.has_project(project_id) {
            return Err(sqlx::Error::RowNotFound);
        }
        if tables.members.contains(&(project_id, user_id)) {
            return Ok(false);
        }
        tables.members.push((project_id, user_id));
        Ok(true)
    }

    async fn remove_member_unless_last(
        &self,
        project_id: DbId,
        user_id: DbId,
    ) -> StoreResult<RemoveOutcome> {
        let mut tables = self.tables.write().await;
        let count = tables
            .members
            .iter()
            .filter(|(project, _)| *project == project_id)
            .count();

        if !tables.members.contains(&(project_id, user_id)) {
            return Ok(RemoveOutcome::NotMember);
        }
        if count == 1 {
            return Ok(RemoveOutcome::LastMember);
        }
        tables.members.retain(|pair| *pair != (project_id, user_id));
        Ok(RemoveOutcome::Removed)
    }

    async fn create_page(&self, project_id: DbId, input: &PageFields) -> StoreResult<Page> {
        let mut tables = self.tables.write().await;
        if !tables.has_project(project_id) {
            return Err(sqlx::Error::RowNotFound);
        }
        let now = chrono::Utc::now();
        let page = Page {
            uuid: Uuid::new_v4(),
            project_uuid: project_id,
            name: input.name.clone(),
            url: input.url.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.pages.push(page.clone());
        Ok(page)
    }

    async fn find_page(&self, id: DbId) -> StoreResult<Option<Page>> {
        let tables = self.tables.read().await;
        Ok(tables.pages.iter().find(|p| p.uuid == id).cloned())
    }

    async fn list_pages(&self, project_id: DbId) -> StoreResult<Vec<Page>> {
        let tables = self.tables.read().await;
        Ok(tables
            .pages
            .iter()
            .filter(|p| p.project_uuid == project_id)
            .cloned()
            .collect())
    }

    async fn list_page_summaries(&self, project_id: DbId) -> StoreResult<Vec<PageSummary>> {
        let tables = self.tables.read().await;
        Ok(tables
            .pages
            .iter()
            .filter(|p| p.project_uuid == project_id)
            .map(PageSummary::from)
            .collect())
    }

    async fn update_page(&self, id: DbId, input: &PageFields) -> StoreResult<Option<Page>> {
        let mut tables = self.tables.write().await;
        let Some(page) = tables.pages.iter_mut().find(|p| p.uuid == id) else {
            return Ok(None);
        };
        page.name = input.name.clone();
        page.url = input.url.clone();
        page.updated_at = chrono::Utc::now();
        Ok(Some(page.clone()))
    }

    async fn delete_page(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.pages.len();
        tables.pages.retain(|p| p.uuid != id);
        Ok(tables.pages.len() < before)
    }
}
