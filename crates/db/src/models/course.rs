//! Course entity model and DTOs.

use lingo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A course row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub purchaseable: bool,
    pub is_active: bool,
    pub created_by: Option<DbId>,
    pub updated_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new course.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourse {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub description: Option<String>,
    /// Defaults to 0 if omitted.
    #[validate(range(min = 0.0, message = "price must be non-negative"))]
    pub price: Option<f64>,
    /// Defaults to false if omitted.
    pub purchaseable: Option<bool>,
    /// Defaults to true if omitted.
    pub is_active: Option<bool>,
}

/// DTO for updating an existing course. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourse {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "price must be non-negative"))]
    pub price: Option<f64>,
    pub purchaseable: Option<bool>,
    pub is_active: Option<bool>,
}
