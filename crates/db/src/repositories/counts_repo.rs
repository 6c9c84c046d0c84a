//! Read-only count aggregations layered over the base entities.
//!
//! Child counts are grouped counting queries keyed by parent id; parents
//! with no children are filled in with 0 so callers never need to treat
//! absence specially.

use std::collections::HashMap;

use lingo_core::types::DbId;
use sqlx::PgPool;

use crate::models::dashboard::DashboardSummary;

/// Provides grouped child counts and the dashboard snapshot.
pub struct CountsRepo;

impl CountsRepo {
    /// Units per course for the given course ids.
    pub async fn units_per_course(
        pool: &PgPool,
        course_ids: &[DbId],
    ) -> Result<HashMap<DbId, i64>, sqlx::Error> {
        Self::children_by_parent(pool, "units", "course_id", course_ids).await
    }

    /// Topics per unit for the given unit ids.
    pub async fn topics_per_unit(
        pool: &PgPool,
        unit_ids: &[DbId],
    ) -> Result<HashMap<DbId, i64>, sqlx::Error> {
        Self::children_by_parent(pool, "topics", "unit_id", unit_ids).await
    }

    /// Session groups per topic for the given topic ids.
    pub async fn session_groups_per_topic(
        pool: &PgPool,
        topic_ids: &[DbId],
    ) -> Result<HashMap<DbId, i64>, sqlx::Error> {
        Self::children_by_parent(pool, "session_groups", "topic_id", topic_ids).await
    }

    /// Session details per session group for the given group ids.
    pub async fn session_details_per_group(
        pool: &PgPool,
        group_ids: &[DbId],
    ) -> Result<HashMap<DbId, i64>, sqlx::Error> {
        Self::children_by_parent(pool, "session_details", "session_group_id", group_ids).await
    }

    /// Group child rows of `table` by `parent_col` and count them,
    /// defaulting to 0 for parents with no children.
    async fn children_by_parent(
        pool: &PgPool,
        table: &str,
        parent_col: &str,
        parent_ids: &[DbId],
    ) -> Result<HashMap<DbId, i64>, sqlx::Error> {
        let mut counts: HashMap<DbId, i64> = parent_ids.iter().map(|id| (*id, 0)).collect();
        if parent_ids.is_empty() {
            return Ok(counts);
        }

        let query = format!(
            "SELECT {parent_col}, COUNT(*) FROM {table}
             WHERE {parent_col} = ANY($1)
             GROUP BY {parent_col}"
        );
        let rows: Vec<(DbId, i64)> = sqlx::query_as(&query)
            .bind(parent_ids)
            .fetch_all(pool)
            .await?;

        for (parent_id, count) in rows {
            counts.insert(parent_id, count);
        }
        Ok(counts)
    }

    /// System-wide dashboard snapshot: active rows per content entity plus
    /// total user count. Six independent counts, computed fresh.
    pub async fn dashboard_summary(pool: &PgPool) -> Result<DashboardSummary, sqlx::Error> {
        let courses = Self::count_active(pool, "courses").await?;
        let topics = Self::count_active(pool, "topics").await?;
        let session_groups = Self::count_active(pool, "session_groups").await?;
        let sessions = Self::count_active(pool, "session_details").await?;
        let templates = Self::count_active(pool, "session_templates").await?;

        let users: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;

        Ok(DashboardSummary {
            courses,
            topics,
            session_groups,
            sessions,
            templates,
            users: users.0,
        })
    }

    async fn count_active(pool: &PgPool, table: &str) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM {table} WHERE is_active = TRUE");
        let row: (i64,) = sqlx::query_as(&query).fetch_one(pool).await?;
        Ok(row.0)
    }
}
