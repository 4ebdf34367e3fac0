//! Pagination types for paged queries.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Window over a filtered row set (DRY - reusable across all paged queries)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Search {
    /// Rows to skip before the page starts
    #[serde(default)]
    pub offset: u64,
    /// Requested page size
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl Search {
    /// Create a window from raw offset/limit values
    pub fn new(offset: u64, limit: u64) -> Self {
        Self { offset, limit }
    }

    /// Effective page size: always positive, capped at maximum
    pub fn page_size(&self) -> u64 {
        self.limit.clamp(1, MAX_PAGE_SIZE)
    }
}

impl Default for Search {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results plus the total matching count
#[derive(Debug, Clone, Serialize)]
pub struct Page<M> {
    /// Page contents, ordered by descending identity
    pub items: Vec<M>,
    /// Rows matching the filter, ignoring the page window
    pub total: u64,
    /// Echo of the window the page was cut with
    pub search: Search,
}

impl<M> Page<M> {
    /// Create a new page
    pub fn new(items: Vec<M>, total: u64, search: Search) -> Self {
        Self {
            items,
            total,
            search,
        }
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the page carries no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
