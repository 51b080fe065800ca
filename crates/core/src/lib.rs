//! Shared domain primitives for the Workhive backend.
//!
//! Deliberately small: the error taxonomy, primitive type aliases, and the
//! well-known role names. Everything database- or HTTP-shaped lives in
//! `workhive-db` and `workhive-api` respectively.

pub mod error;
pub mod roles;
pub mod types;
