//! Repository for the `courses` table.

use lingo_core::types::DbId;
use sqlx::PgPool;

use crate::models::course::{Course, CreateCourse, UpdateCourse};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, price, purchaseable, is_active, \
    created_by, updated_by, created_at, updated_at";

/// Provides CRUD operations for courses.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a new course, returning the created row.
    ///
    /// If `price` is `None`, defaults to 0. If `purchaseable` is `None`,
    /// defaults to false. If `is_active` is `None`, defaults to true.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCourse,
        actor: DbId,
    ) -> Result<Course, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses
                (name, description, price, purchaseable, is_active, created_by, updated_by)
             VALUES ($1, $2, COALESCE($3, 0), COALESCE($4, FALSE), COALESCE($5, TRUE), $6, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.purchaseable)
            .bind(input.is_active)
            .bind(actor)
            .fetch_one(pool)
            .await
    }

    /// Find a course by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List courses ordered by creation time descending, with optional
    /// case-insensitive name search and `is_active` filter.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        is_active: Option<bool>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM courses
             WHERE ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%')
               AND ($2::BOOL IS NULL OR is_active = $2)
             ORDER BY created_at DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(search)
            .bind(is_active)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count courses matching the same filters as [`CourseRepo::list`].
    pub async fn count(
        pool: &PgPool,
        search: Option<&str>,
        is_active: Option<bool>,
    ) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM courses
             WHERE ($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%')
               AND ($2::BOOL IS NULL OR is_active = $2)",
        )
        .bind(search)
        .bind(is_active)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Update a course. Only non-`None` fields in `input` are applied;
    /// `updated_by` is always set to `actor`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCourse,
        actor: DbId,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!(
            "UPDATE courses SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                purchaseable = COALESCE($5, purchaseable),
                is_active = COALESCE($6, is_active),
                updated_by = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.purchaseable)
            .bind(input.is_active)
            .bind(actor)
            .fetch_optional(pool)
            .await
    }

    /// Delete a course by ID, cascading to its subtree.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
