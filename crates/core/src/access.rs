//! Project membership decisions.
//!
//! Every project-scoped request is authorized by [`authorize`], which is a
//! pure function of the caller, the project and its member list. The HTTP
//! layer is responsible for loading the members and applying the decision.

use crate::error::CoreError;
use crate::types::DbId;

/// Outcome of a membership check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny { reason: String },
}

impl AccessDecision {
    /// Convert a denial into [`CoreError::Forbidden`].
    pub fn into_result(self) -> Result<(), CoreError> {
        match self {
            AccessDecision::Allow => Ok(()),
            AccessDecision::Deny { reason } => Err(CoreError::Forbidden(reason)),
        }
    }
}

/// Allow `user_id` only if it appears in `members` of `project_id`.
pub fn authorize(user_id: DbId, project_id: DbId, members: &[DbId]) -> AccessDecision {
    if members.contains(&user_id) {
        AccessDecision::Allow
    } else {
        AccessDecision::Deny {
            reason: format!("User {user_id} is not a member of project {project_id}"),
        }
    }
}
