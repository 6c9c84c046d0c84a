//! Shared response envelope types for API handlers.
//!
//! Successful responses use a `{ "data": ... }` envelope; unscoped list
//! endpoints add a `pagination` block. Use these instead of ad-hoc
//! `serde_json::json!` so serialization stays consistent.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Pagination metadata for unscoped list endpoints.
#[derive(Debug, Serialize)]
pub struct Pagination {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub pages: i64,
}

impl Pagination {
    /// Derive the page count from a total row count and page size.
    pub fn new(total: i64, page: i64, limit: i64) -> Self {
        let pages = if total == 0 { 0 } else { (total + limit - 1) / limit };
        Pagination {
            total,
            page,
            limit,
            pages,
        }
    }
}

/// Paginated `{ "data": [...], "pagination": {...} }` envelope.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}
