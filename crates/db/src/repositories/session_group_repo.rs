//! Repository for the `session_groups` table.

use lingo_core::types::DbId;
use sqlx::PgPool;

use crate::models::session_group::{CreateSessionGroup, SessionGroup, UpdateSessionGroup};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, topic_id, name, description, sequence, is_active, \
    created_by, updated_by, created_at, updated_at";

/// Provides CRUD and reorder operations for session groups.
pub struct SessionGroupRepo;

impl SessionGroupRepo {
    /// Insert a new session group, appending it after the topic's current
    /// last group (sequence computed inside the INSERT).
    pub async fn create(
        pool: &PgPool,
        input: &CreateSessionGroup,
        actor: DbId,
    ) -> Result<SessionGroup, sqlx::Error> {
        let query = format!(
            "INSERT INTO session_groups
                (topic_id, name, description, sequence, is_active, created_by, updated_by)
             VALUES ($1, $2, $3,
                     (SELECT COALESCE(MAX(sequence) + 1, 0) FROM session_groups WHERE topic_id = $1),
                     COALESCE($4, TRUE), $5, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SessionGroup>(&query)
            .bind(input.topic_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.is_active)
            .bind(actor)
            .fetch_one(pool)
            .await
    }

    /// Find a session group by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SessionGroup>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM session_groups WHERE id = $1");
        sqlx::query_as::<_, SessionGroup>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all session groups under a topic, ordered by sequence ascending.
    pub async fn list_by_topic(
        pool: &PgPool,
        topic_id: DbId,
        is_active: Option<bool>,
    ) -> Result<Vec<SessionGroup>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM session_groups
             WHERE topic_id = $1
               AND ($2::BOOL IS NULL OR is_active = $2)
             ORDER BY sequence ASC"
        );
        sqlx::query_as::<_, SessionGroup>(&query)
            .bind(topic_id)
            .bind(is_active)
            .fetch_all(pool)
            .await
    }

    /// List session groups globally, newest first, with optional search and
    /// `is_active` filter.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        is_active: Option<bool>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<SessionGroup>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM session_groups
             WHERE ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%')
               AND ($2::BOOL IS NULL OR is_active = $2)
             ORDER BY created_at DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, SessionGroup>(&query)
            .bind(search)
            .bind(is_active)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count session groups matching the same filters as
    /// [`SessionGroupRepo::list`].
    pub async fn count(
        pool: &PgPool,
        search: Option<&str>,
        is_active: Option<bool>,
    ) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM session_groups
             WHERE ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%')
               AND ($2::BOOL IS NULL OR is_active = $2)",
        )
        .bind(search)
        .bind(is_active)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Update a session group. Only non-`None` fields in `input` are
    /// applied; `sequence` is never touched here.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSessionGroup,
        actor: DbId,
    ) -> Result<Option<SessionGroup>, sqlx::Error> {
        let query = format!(
            "UPDATE session_groups SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                is_active = COALESCE($4, is_active),
                updated_by = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SessionGroup>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.is_active)
            .bind(actor)
            .fetch_optional(pool)
            .await
    }

    /// Delete a session group by ID, cascading to its sessions.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM session_groups WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Rewrite sibling order under one topic; all-or-nothing via a
    /// transaction, foreign ids skip silently.
    pub async fn reorder(
        pool: &PgPool,
        topic_id: DbId,
        group_ids: &[DbId],
        actor: DbId,
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut updated = 0;
        for (index, id) in group_ids.iter().enumerate() {
            let result = sqlx::query(
                "UPDATE session_groups SET sequence = $3, updated_by = $4
                 WHERE id = $1 AND topic_id = $2",
            )
            .bind(id)
            .bind(topic_id)
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
