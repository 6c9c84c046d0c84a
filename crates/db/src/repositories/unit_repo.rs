//! Repository for the `units` table.

use lingo_core::types::DbId;
use sqlx::PgPool;

use crate::models::unit::{CreateUnit, Unit, UpdateUnit};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, course_id, name, description, sequence, is_active, \
    created_by, updated_by, created_at, updated_at";

/// Provides CRUD and reorder operations for units.
pub struct UnitRepo;

impl UnitRepo {
    /// Insert a new unit, returning the created row.
    ///
    /// `sequence` is computed inside the INSERT: one past the course's
    /// current max, or 0 for the first unit. Single statement, so two
    /// concurrent creates cannot both read the same stale max.
    pub async fn create(
        pool: &PgPool,
        input: &CreateUnit,
        actor: DbId,
    ) -> Result<Unit, sqlx::Error> {
        let query = format!(
            "INSERT INTO units
                (course_id, name, description, sequence, is_active, created_by, updated_by)
             VALUES ($1, $2, $3,
                     (SELECT COALESCE(MAX(sequence) + 1, 0) FROM units WHERE course_id = $1),
                     COALESCE($4, TRUE), $5, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Unit>(&query)
            .bind(input.course_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.is_active)
            .bind(actor)
            .fetch_one(pool)
            .await
    }

    /// Find a unit by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Unit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM units WHERE id = $1");
        sqlx::query_as::<_, Unit>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all units under a course, ordered by sequence ascending.
    pub async fn list_by_course(
        pool: &PgPool,
        course_id: DbId,
        is_active: Option<bool>,
    ) -> Result<Vec<Unit>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM units
             WHERE course_id = $1
               AND ($2::BOOL IS NULL OR is_active = $2)
             ORDER BY sequence ASC"
        );
        sqlx::query_as::<_, Unit>(&query)
            .bind(course_id)
            .bind(is_active)
            .fetch_all(pool)
            .await
    }

    /// List units globally, ordered by creation time descending, with
    /// optional case-insensitive name search and `is_active` filter.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        is_active: Option<bool>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Unit>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM units
             WHERE ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%')
               AND ($2::BOOL IS NULL OR is_active = $2)
             ORDER BY created_at DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Unit>(&query)
            .bind(search)
            .bind(is_active)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count units matching the same filters as [`UnitRepo::list`].
    pub async fn count(
        pool: &PgPool,
        search: Option<&str>,
        is_active: Option<bool>,
    ) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM units
             WHERE ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%')
               AND ($2::BOOL IS NULL OR is_active = $2)",
        )
        .bind(search)
        .bind(is_active)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Update a unit. Only non-`None` fields in `input` are applied;
    /// `sequence` is never touched here.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUnit,
        actor: DbId,
    ) -> Result<Option<Unit>, sqlx::Error> {
        let query = format!(
            "UPDATE units SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                is_active = COALESCE($4, is_active),
                updated_by = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Unit>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.is_active)
            .bind(actor)
            .fetch_optional(pool)
            .await
    }

    /// Delete a unit by ID, cascading to its subtree.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM units WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Rewrite sibling order under one course: each listed unit gets
    /// `sequence = its 0-based index`. Runs in a transaction, so the batch
    /// is all-or-nothing. Ids not belonging to `course_id` are skipped
    /// without error; the returned count tells the caller how many rows
    /// actually moved.
    pub async fn reorder(
        pool: &PgPool,
        course_id: DbId,
        unit_ids: &[DbId],
        actor: DbId,
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut updated = 0;
        for (index, id) in unit_ids.iter().enumerate() {
            let result = sqlx::query(
                "UPDATE units SET sequence = $3, updated_by = $4
                 WHERE id = $1 AND course_id = $2",
            )
            .bind(id)
            .bind(course_id)
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
