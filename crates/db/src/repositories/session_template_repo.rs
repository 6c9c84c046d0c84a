//! Repository for the `session_templates` table.
//!
//! Templates are an independent catalog; the hierarchy references them by
//! id only and never expands their contents at read time.

use lingo_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::session_template::{
    CreateSessionTemplate, SessionTemplate, UpdateSessionTemplate,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, session_type, screens, is_active, \
    created_by, updated_by, created_at, updated_at";

/// Provides CRUD operations for session templates.
pub struct SessionTemplateRepo;

impl SessionTemplateRepo {
    /// Insert a new session template, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSessionTemplate,
        actor: DbId,
    ) -> Result<SessionTemplate, sqlx::Error> {
        let query = format!(
            "INSERT INTO session_templates
                (name, session_type, screens, is_active, created_by, updated_by)
             VALUES ($1, COALESCE($2, 'lesson'), COALESCE($3, '[]'::jsonb),
                     COALESCE($4, TRUE), $5, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SessionTemplate>(&query)
            .bind(&input.name)
            .bind(input.session_type)
            .bind(input.screens.as_ref().map(Json))
            .bind(input.is_active)
            .bind(actor)
            .fetch_one(pool)
            .await
    }

    /// Find a session template by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SessionTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM session_templates WHERE id = $1");
        sqlx::query_as::<_, SessionTemplate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List templates, newest first, with optional search and `is_active`
    /// filter.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        is_active: Option<bool>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<SessionTemplate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM session_templates
             WHERE ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%')
               AND ($2::BOOL IS NULL OR is_active = $2)
             ORDER BY created_at DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, SessionTemplate>(&query)
            .bind(search)
            .bind(is_active)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count templates matching the same filters as
    /// [`SessionTemplateRepo::list`].
    pub async fn count(
        pool: &PgPool,
        search: Option<&str>,
        is_active: Option<bool>,
    ) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM session_templates
             WHERE ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%')
               AND ($2::BOOL IS NULL OR is_active = $2)",
        )
        .bind(search)
        .bind(is_active)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Update a session template. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSessionTemplate,
        actor: DbId,
    ) -> Result<Option<SessionTemplate>, sqlx::Error> {
        let query = format!(
            "UPDATE session_templates SET
                name = COALESCE($2, name),
                session_type = COALESCE($3, session_type),
                screens = COALESCE($4, screens),
                is_active = COALESCE($5, is_active),
                updated_by = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SessionTemplate>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.session_type)
            .bind(input.screens.as_ref().map(Json))
            .bind(input.is_active)
            .bind(actor)
            .fetch_optional(pool)
            .await
    }

    /// Delete a session template by ID. Returns `true` if a row was
    /// removed. Screens referencing the template keep their dangling id;
    /// the reference is advisory.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM session_templates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
