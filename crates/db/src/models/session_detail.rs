//! Session detail entity model and DTOs.
//!
//! A session detail is the leaf of the content hierarchy: an ordered
//! sibling under a session group carrying the typed screen/action payload
//! (persisted as JSONB).

use lingo_core::content::Screen;
use lingo_core::enums::{CefrLevel, SessionType};
use lingo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// A session detail row from the `session_details` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDetail {
    pub id: DbId,
    pub session_group_id: DbId,
    pub name: String,
    pub session_type: SessionType,
    pub cefr_level: CefrLevel,
    pub sequence: i32,
    pub screens: Json<Vec<Screen>>,
    pub is_active: bool,
    pub created_by: Option<DbId>,
    pub updated_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new session detail. Screens deserialize through the
/// typed content model, so a malformed action payload is rejected before
/// anything reaches the store.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionDetail {
    pub session_group_id: DbId,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Defaults to `lesson` if omitted.
    pub session_type: Option<SessionType>,
    /// Defaults to `A1` if omitted.
    pub cefr_level: Option<CefrLevel>,
    /// Defaults to an empty screen list if omitted.
    pub screens: Option<Vec<Screen>>,
    /// Defaults to true if omitted.
    pub is_active: Option<bool>,
}

/// DTO for updating an existing session detail. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSessionDetail {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub session_type: Option<SessionType>,
    pub cefr_level: Option<CefrLevel>,
    pub screens: Option<Vec<Screen>>,
    pub is_active: Option<bool>,
}
