//! Domain primitives shared by the store and the HTTP layer.

pub mod access;
pub mod error;
pub mod types;
pub mod validation;
