//! Request handlers, one module per resource.

pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod session_details;
pub mod session_groups;
pub mod session_templates;
pub mod topics;
pub mod units;
pub mod users;

use lingo_core::types::DbId;
use serde::{Deserialize, Serialize};

/// Request body for `POST /{resource}/reorder`.
///
/// `child_ids` is the complete desired ordering of the parent's children;
/// each child's `sequence` becomes its index in this list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderRequest {
    pub parent_id: DbId,
    pub child_ids: Vec<DbId>,
}

/// Response body for reorder endpoints: how many rows actually moved.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderResult {
    pub updated: u64,
}
