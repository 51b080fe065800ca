//! Request handlers, one module per resource.
//!
//! Handlers are deliberately thin: extract, check preconditions, call
//! repositories, serialize. Anything that must be atomic across tables
//! lives in the repository layer.

pub mod auth;
pub mod bids;
pub mod contracts;
pub mod gigs;
pub mod payments;
pub mod projects;
pub mod sellers;
pub mod skills;
pub mod users;
