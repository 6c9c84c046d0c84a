//! Dashboard aggregate snapshot.

use serde::Serialize;

/// System-wide counts for the backoffice dashboard. Computed fresh per
/// request; no caching.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Active courses.
    pub courses: i64,
    /// Active topics.
    pub topics: i64,
    /// Active session groups.
    pub session_groups: i64,
    /// Active session details.
    pub sessions: i64,
    /// Active session templates.
    pub templates: i64,
    /// All users, active or not.
    pub users: i64,
}
