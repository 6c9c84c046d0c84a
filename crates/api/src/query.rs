//! Shared query parameter types for API handlers.
//!
//! List endpoints accept camelCase query params per the client contract:
//! `?page=&limit=&search=&isActive=` plus an entity-specific parent id
//! param declared on each handler's own params struct.

use serde::Deserialize;

/// Default page size for unscoped list endpoints.
const DEFAULT_LIMIT: i64 = 10;
/// Hard cap on page size.
const MAX_LIMIT: i64 = 100;

/// Generic list parameters (`?page=&limit=&search=&isActive=`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub is_active: Option<bool>,
}

impl ListParams {
    /// 1-based page number, clamped to at least 1.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Page size, clamped to `1..=100`.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// Row offset derived from page and limit.
    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.limit()
    }

    /// Search term, with empty strings treated as absent.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_clamping() {
        let params = ListParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 10);
        assert_eq!(params.offset(), 0);

        let params = ListParams {
            page: Some(0),
            limit: Some(1000),
            search: Some(String::new()),
            is_active: None,
        };
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 100);
        assert_eq!(params.search(), None);

        let params = ListParams {
            page: Some(3),
            limit: Some(20),
            search: Some("engl".into()),
            is_active: Some(true),
        };
        assert_eq!(params.offset(), 40);
        assert_eq!(params.search(), Some("engl"));
    }
}
