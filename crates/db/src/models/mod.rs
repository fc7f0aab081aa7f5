//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` payload DTO with every field optional, so
//!   missing required fields surface as validation errors
//! - A validated `*Fields` struct that the repositories persist

pub mod member;
pub mod page;
pub mod project;
