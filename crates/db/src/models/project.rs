//! Project entity model and DTOs.

use pagewatch_core::error::CoreError;
use pagewatch_core::types::{DbId, Timestamp};
use pagewatch_core::validation;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::page::PageSummary;

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Project {
    pub uuid: DbId,
    pub name: String,
    pub wpt_api_key: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project together with its members and a summary of its pages.
///
/// This is the representation returned by every project endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub members: Vec<DbId>,
    pub pages: Vec<PageSummary>,
}

/// Request body for `POST /projects` and `PUT /projects/{id}`.
///
/// PUT is a full replace: omitted optional fields fall back to their
/// defaults rather than keeping the stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProjectPayload {
    #[validate(
        required(message = "This field is required."),
        length(min = 1, max = 100, message = "Ensure this field has between 1 and 100 characters.")
    )]
    pub name: Option<String>,
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub wpt_api_key: Option<String>,
    pub is_active: Option<bool>,
}

/// Validated, editable project fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectFields {
    pub name: String,
    pub wpt_api_key: Option<String>,
    pub is_active: bool,
}

impl ProjectPayload {
    /// Trim, validate and convert into [`ProjectFields`].
    ///
    /// Blank strings are treated as absent for the optional key.
    pub fn into_fields(self) -> Result<ProjectFields, CoreError> {
        let payload = ProjectPayload {
            name: self.name.map(|n| n.trim().to_string()),
            wpt_api_key: self
                .wpt_api_key
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
            is_active: self.is_active,
        };

        validation::finish(validation::collect(&payload))?;

        Ok(ProjectFields {
            name: payload.name.unwrap_or_default(),
            wpt_api_key: payload.wpt_api_key,
            is_active: payload.is_active.unwrap_or(true),
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use pagewatch_core::validation::REQUIRED_MESSAGE;

    use super::*;

    #[test]
    fn defaults_apply_to_omitted_optional_fields() {
        let fields = ProjectPayload {
            name: Some("  Storefront ".into()),
            ..Default::default()
        }
        .into_fields()
        .unwrap();

        assert_eq!(fields.name, "Storefront");
        assert_eq!(fields.wpt_api_key, None);
        assert!(fields.is_active);
    }

    #[test]
    fn missing_name_is_a_field_error() {
        let result = ProjectPayload::default().into_fields();
        assert_matches!(
            result,
            Err(CoreError::InvalidFields(errors)) if errors["name"] == vec![REQUIRED_MESSAGE.to_string()]
        );
    }

    #[test]
    fn blank_name_is_rejected() {
        let result = ProjectPayload {
            name: Some("   ".into()),
            ..Default::default()
        }
        .into_fields();
        assert_matches!(result, Err(CoreError::InvalidFields(errors)) if errors.contains_key("name"));
    }

    #[test]
    fn overlong_key_is_rejected() {
        let result = ProjectPayload {
            name: Some("ok".into()),
            wpt_api_key: Some("k".repeat(101)),
            is_active: Some(false),
        }
        .into_fields();
        assert_matches!(result, Err(CoreError::InvalidFields(errors)) if errors.contains_key("wpt_api_key"));
    }
}
