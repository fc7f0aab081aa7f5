//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod member_repo;
pub mod page_repo;
pub mod project_repo;

pub use member_repo::MemberRepo;
pub use page_repo::PageRepo;
pub use project_repo::ProjectRepo;
