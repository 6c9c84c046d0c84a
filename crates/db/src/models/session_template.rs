//! Session template catalog model and DTOs.

use lingo_core::content::TemplateScreen;
use lingo_core::enums::SessionType;
use lingo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// A session template row: a reusable skeleton of screen slots, each
/// declaring the action types it expects.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTemplate {
    pub id: DbId,
    pub name: String,
    pub session_type: SessionType,
    pub screens: Json<Vec<TemplateScreen>>,
    pub is_active: bool,
    pub created_by: Option<DbId>,
    pub updated_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a session template.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionTemplate {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Defaults to `lesson` if omitted.
    pub session_type: Option<SessionType>,
    /// Defaults to an empty screen list if omitted.
    pub screens: Option<Vec<TemplateScreen>>,
    /// Defaults to true if omitted.
    pub is_active: Option<bool>,
}

/// DTO for updating a session template. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSessionTemplate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub session_type: Option<SessionType>,
    pub screens: Option<Vec<TemplateScreen>>,
    pub is_active: Option<bool>,
}
