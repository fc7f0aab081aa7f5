//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`membership::ProjectMember`] -- Requires membership of the project named
//!   by the `{project_id}` path segment.

pub mod auth;
pub mod membership;
