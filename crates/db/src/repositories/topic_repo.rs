//! Repository for the `topics` table.

use lingo_core::types::DbId;
use sqlx::PgPool;

use crate::models::topic::{CreateTopic, Topic, UpdateTopic};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, unit_id, name, description, sequence, is_active, \
    created_by, updated_by, created_at, updated_at";

/// Provides CRUD and reorder operations for topics.
pub struct TopicRepo;

impl TopicRepo {
    /// Insert a new topic, appending it after the unit's current last
    /// topic (sequence computed inside the INSERT).
    pub async fn create(
        pool: &PgPool,
        input: &CreateTopic,
        actor: DbId,
    ) -> Result<Topic, sqlx::Error> {
        let query = format!(
            "INSERT INTO topics
                (unit_id, name, description, sequence, is_active, created_by, updated_by)
             VALUES ($1, $2, $3,
                     (SELECT COALESCE(MAX(sequence) + 1, 0) FROM topics WHERE unit_id = $1),
                     COALESCE($4, TRUE), $5, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Topic>(&query)
            .bind(input.unit_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.is_active)
            .bind(actor)
            .fetch_one(pool)
            .await
    }

    /// Find a topic by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Topic>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM topics WHERE id = $1");
        sqlx::query_as::<_, Topic>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all topics under a unit, ordered by sequence ascending.
    pub async fn list_by_unit(
        pool: &PgPool,
        unit_id: DbId,
        is_active: Option<bool>,
    ) -> Result<Vec<Topic>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM topics
             WHERE unit_id = $1
               AND ($2::BOOL IS NULL OR is_active = $2)
             ORDER BY sequence ASC"
        );
        sqlx::query_as::<_, Topic>(&query)
            .bind(unit_id)
            .bind(is_active)
            .fetch_all(pool)
            .await
    }

    /// List topics globally, newest first, with optional search and
    /// `is_active` filter.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        is_active: Option<bool>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Topic>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM topics
             WHERE ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%')
               AND ($2::BOOL IS NULL OR is_active = $2)
             ORDER BY created_at DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Topic>(&query)
            .bind(search)
            .bind(is_active)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count topics matching the same filters as [`TopicRepo::list`].
    pub async fn count(
        pool: &PgPool,
        search: Option<&str>,
        is_active: Option<bool>,
    ) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM topics
             WHERE ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%')
               AND ($2::BOOL IS NULL OR is_active = $2)",
        )
        .bind(search)
        .bind(is_active)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Update a topic. Only non-`None` fields in `input` are applied;
    /// `sequence` is never touched here.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTopic,
        actor: DbId,
    ) -> Result<Option<Topic>, sqlx::Error> {
        let query = format!(
            "UPDATE topics SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                is_active = COALESCE($4, is_active),
                updated_by = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Topic>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.is_active)
            .bind(actor)
            .fetch_optional(pool)
            .await
    }

    /// Delete a topic by ID, cascading to its subtree.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM topics WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Rewrite sibling order under one unit; see `UnitRepo::reorder` for
    /// the contract. All-or-nothing via a transaction; foreign ids skip.
    pub async fn reorder(
        pool: &PgPool,
        unit_id: DbId,
        topic_ids: &[DbId],
        actor: DbId,
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut updated = 0;
        for (index, id) in topic_ids.iter().enumerate() {
            let result = sqlx::query(
                "UPDATE topics SET sequence = $3, updated_by = $4
                 WHERE id = $1 AND unit_id = $2",
            )
            .bind(id)
            .bind(unit_id)
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
