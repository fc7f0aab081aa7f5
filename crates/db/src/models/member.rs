//! Project membership DTOs.

use pagewatch_core::error::CoreError;
use pagewatch_core::types::DbId;
use pagewatch_core::validation;
use serde::Deserialize;
use validator::Validate;

/// Result of removing a member while keeping at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotMember,
    /// The user is the project's only member and was kept.
    LastMember,
}

/// Request body for `POST /projects/{id}/members`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MemberPayload {
    #[validate(required(message = "This field is required."))]
    pub user: Option<DbId>,
}

impl MemberPayload {
    /// Validate and return the user to add.
    pub fn into_user(self) -> Result<DbId, CoreError> {
        validation::finish(validation::collect(&self))?;
        self.user
            .ok_or_else(|| CoreError::Validation("user is required".into()))
    }
}
