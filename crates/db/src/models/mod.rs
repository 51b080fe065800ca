//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Joined list rows (entity + a few columns from a related table) also
//! live here, using `#[sqlx(flatten)]` on the entity part.

pub mod bid;
pub mod contract;
pub mod gig;
pub mod gig_order;
pub mod payment;
pub mod profile;
pub mod project;
pub mod review;
pub mod session;
pub mod skill;
pub mod status;
pub mod user;
