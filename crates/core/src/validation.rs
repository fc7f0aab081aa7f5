//! Field-level validation results.
//!
//! Request payloads derive [`validator::Validate`]; the resulting
//! [`ValidationErrors`] are flattened into a [`FieldErrors`] map keyed by
//! field name so the HTTP layer can return them verbatim.

use std::collections::BTreeMap;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Field name -> list of human-readable messages, ordered by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Message used for every missing required field.
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Key under which errors that are not tied to a single field are reported.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Run the derived validators on `payload` and collect their failures.
pub fn collect<T: Validate>(payload: &T) -> FieldErrors {
    match payload.validate() {
        Ok(()) => FieldErrors::new(),
        Err(errors) => field_errors(&errors),
    }
}

/// Flatten [`ValidationErrors`] into a [`FieldErrors`] map.
///
/// Nested struct and list errors are not produced by any payload in this
/// workspace and are ignored.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    for (field, errs) in errors.field_errors() {
        let messages = errs.iter().map(describe).collect::<Vec<_>>();
        out.entry(field.to_string()).or_default().extend(messages);
    }
    out
}

/// Append a message for `field`.
pub fn push(errors: &mut FieldErrors, field: &str, message: impl Into<String>) {
    errors.entry(field.to_string()).or_default().push(message.into());
}

/// Turn a collected error map into a result; an empty map is success.
pub fn finish(errors: FieldErrors) -> Result<(), CoreError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(CoreError::InvalidFields(errors))
    }
}

/// Require an `http://` or `https://` scheme.
///
/// The derived `url` validator accepts any scheme; audited pages must be
/// reachable over HTTP.
pub fn check_http_scheme(value: &str) -> Result<(), String> {
    let lower = value.trim_start().to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Ok(())
    } else {
        Err("Enter a valid URL starting with http:// or https://.".to_string())
    }
}

fn describe(error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => match error.code.as_ref() {
            "required" => REQUIRED_MESSAGE.to_string(),
            "url" => "Enter a valid URL.".to_string(),
            code => format!("Invalid value ({code})."),
        },
    }
}
