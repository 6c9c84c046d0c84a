//! Repository for the `session_details` table.

use lingo_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::session_detail::{CreateSessionDetail, SessionDetail, UpdateSessionDetail};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, session_group_id, name, session_type, cefr_level, \
    sequence, screens, is_active, created_by, updated_by, created_at, updated_at";

/// Provides CRUD and reorder operations for session details.
pub struct SessionDetailRepo;

impl SessionDetailRepo {
    /// Insert a new session detail, appending it after the group's current
    /// last session (sequence computed inside the INSERT).
    ///
    /// Screens default to an empty list, `session_type` to `lesson`,
    /// `cefr_level` to `A1`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSessionDetail,
        actor: DbId,
    ) -> Result<SessionDetail, sqlx::Error> {
        let query = format!(
            "INSERT INTO session_details
                (session_group_id, name, session_type, cefr_level, sequence,
                 screens, is_active, created_by, updated_by)
             VALUES ($1, $2, COALESCE($3, 'lesson'), COALESCE($4, 'A1'),
                     (SELECT COALESCE(MAX(sequence) + 1, 0)
                        FROM session_details WHERE session_group_id = $1),
                     COALESCE($5, '[]'::jsonb), COALESCE($6, TRUE), $7, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SessionDetail>(&query)
            .bind(input.session_group_id)
            .bind(&input.name)
            .bind(input.session_type)
            .bind(input.cefr_level)
            .bind(input.screens.as_ref().map(Json))
            .bind(input.is_active)
            .bind(actor)
            .fetch_one(pool)
            .await
    }

    /// Find a session detail by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SessionDetail>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM session_details WHERE id = $1");
        sqlx::query_as::<_, SessionDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all session details under a group, ordered by sequence ascending.
    pub async fn list_by_group(
        pool: &PgPool,
        session_group_id: DbId,
        is_active: Option<bool>,
    ) -> Result<Vec<SessionDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM session_details
             WHERE session_group_id = $1
               AND ($2::BOOL IS NULL OR is_active = $2)
             ORDER BY sequence ASC"
        );
        sqlx::query_as::<_, SessionDetail>(&query)
            .bind(session_group_id)
            .bind(is_active)
            .fetch_all(pool)
            .await
    }

    /// List session details globally, newest first, with optional search
    /// and `is_active` filter.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        is_active: Option<bool>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<SessionDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM session_details
             WHERE ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%')
               AND ($2::BOOL IS NULL OR is_active = $2)
             ORDER BY created_at DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, SessionDetail>(&query)
            .bind(search)
            .bind(is_active)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count session details matching the same filters as
    /// [`SessionDetailRepo::list`].
    pub async fn count(
        pool: &PgPool,
        search: Option<&str>,
        is_active: Option<bool>,
    ) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM session_details
             WHERE ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%')
               AND ($2::BOOL IS NULL OR is_active = $2)",
        )
        .bind(search)
        .bind(is_active)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Update a session detail. Only non-`None` fields in `input` are
    /// applied; `sequence` is never touched here. A supplied `screens`
    /// list replaces the stored one wholesale.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSessionDetail,
        actor: DbId,
    ) -> Result<Option<SessionDetail>, sqlx::Error> {
        let query = format!(
            "UPDATE session_details SET
                name = COALESCE($2, name),
                session_type = COALESCE($3, session_type),
                cefr_level = COALESCE($4, cefr_level),
                screens = COALESCE($5, screens),
                is_active = COALESCE($6, is_active),
                updated_by = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SessionDetail>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.session_type)
            .bind(input.cefr_level)
            .bind(input.screens.as_ref().map(Json))
            .bind(input.is_active)
            .bind(actor)
            .fetch_optional(pool)
            .await
    }

    /// Delete a session detail by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM session_details WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Rewrite sibling order under one session group; all-or-nothing via a
    /// transaction, foreign ids skip silently.
    pub async fn reorder(
        pool: &PgPool,
        session_group_id: DbId,
        session_ids: &[DbId],
        actor: DbId,
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut updated = 0;
        for (index, id) in session_ids.iter().enumerate() {
            let result = sqlx::query(
                "UPDATE session_details SET sequence = $3, updated_by = $4
                 WHERE id = $1 AND session_group_id = $2",
            )
            .bind(id)
            .bind(session_group_id)
            .bind(index as i32)
            .bind(actor)
            .execute(&mut *tx)
            .await?;
            updated += result.rows_affected();
        }
        tx.commit().await?;
        Ok(updated)
    }
}
