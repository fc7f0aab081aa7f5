//! Authentication primitives.
//!
//! Tokens are issued by the identity service that shares `JWT_SECRET`;
//! this crate only verifies them. [`jwt::generate_access_token`] exists for
//! tooling and tests.

pub mod jwt;
