//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for partial updates
//!
//! `sequence` never appears in DTOs: it is assigned on create and rewritten
//! only by the bulk reorder operation.

pub mod auth_session;
pub mod course;
pub mod dashboard;
pub mod session_detail;
pub mod session_group;
pub mod session_template;
pub mod topic;
pub mod unit;
pub mod user;
