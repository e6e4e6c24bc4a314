//! Pagination helpers for API requests
//!
//! The dashboard API pages collections by a 1-based `page` query parameter
//! and answers with the page's items plus page metadata.

use serde::{Deserialize, Serialize};

/// First page number (the API is 1-indexed)
pub const FIRST_PAGE: u32 = 1;

/// Pagination parameters for list requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number (1-indexed)
    pub page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: FIRST_PAGE }
    }
}

impl PageRequest {
    /// Request a specific page. Page 0 is clamped to the first page.
    pub fn new(page: u32) -> Self {
        Self {
            page: page.max(FIRST_PAGE),
        }
    }

    /// Convert to query string parameters.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        vec![("page", self.page.to_string())]
    }
}

/// One page of a collection.
///
/// The item total arrives as `totalUsers` or `totalOrganizations` depending
/// on the endpoint; both map onto `total_items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The items of this page
    pub data: Vec<T>,

    /// Page number the server actually returned
    pub current_page: u32,

    /// Total number of pages
    pub total_pages: u32,

    /// Total number of items across all pages
    #[serde(default, alias = "totalUsers", alias = "totalOrganizations")]
    pub total_items: u64,
}

impl<T> Page<T> {
    /// Create a page with metadata.
    pub fn new(data: Vec<T>, current_page: u32, total_pages: u32, total_items: u64) -> Self {
        Self {
            data,
            current_page,
            total_pages,
            total_items,
        }
    }
}
