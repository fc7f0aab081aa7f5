pub mod member;
pub mod page;
pub mod project;
