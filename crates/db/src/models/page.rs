//! Page entity model and DTOs.

use pagewatch_core::error::CoreError;
use pagewatch_core::types::{DbId, Timestamp};
use pagewatch_core::validation;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A page row from the `pages` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Page {
    pub uuid: DbId,
    /// Owning project. Set at creation, never changed.
    #[serde(rename = "project")]
    pub project_uuid: DbId,
    pub name: String,
    pub url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The subset of a page embedded in project representations.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PageSummary {
    pub uuid: DbId,
    pub name: String,
}

impl From<&Page> for PageSummary {
    fn from(page: &Page) -> Self {
        Self {
            uuid: page.uuid,
            name: page.name.clone(),
        }
    }
}

/// Request body for `POST /projects/{id}/pages` and `PUT .../pages/{id}`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PagePayload {
    #[validate(
        required(message = "This field is required."),
        length(min = 1, max = 100, message = "Ensure this field has between 1 and 100 characters.")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "This field is required."),
        length(max = 500, message = "Ensure this field has no more than 500 characters."),
        url(message = "Enter a valid URL.")
    )]
    pub url: Option<String>,
}

/// Validated, editable page fields.
#[derive(Debug, Clone, PartialEq)]
pub struct PageFields {
    pub name: String,
    pub url: String,
}

impl PagePayload {
    /// Trim, validate and convert into [`PageFields`].
    pub fn into_fields(self) -> Result<PageFields, CoreError> {
        let payload = PagePayload {
            name: self.name.map(|n| n.trim().to_string()),
            url: self.url.map(|u| u.trim().to_string()),
        };

        let mut errors = validation::collect(&payload);
        if let Some(url) = payload.url.as_deref() {
            if !errors.contains_key("url") {
                if let Err(message) = validation::check_http_scheme(url) {
                    validation::push(&mut errors, "url", message);
                }
            }
        }
        validation::finish(errors)?;

        Ok(PageFields {
            name: payload.name.unwrap_or_default(),
            url: payload.url.unwrap_or_default(),
        })
    }
}
