//! Pagination engine for ticket listings
//!
//! Turns (page, page size, sort key, optional owner filter) into an ordered
//! slice plus the total matching count, computed before slicing so callers
//! can derive a page count without a second query.

use crate::core::{Ticket, UserId};
use serde::Serialize;

/// Page size used by the caller-facing surface when none is given
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Ordering applied to a listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Descending by priority rank (critical first)
    Priority,
    /// Descending by creation time
    #[default]
    Date,
    /// Ascending by the status enum's ordinal (opened < assigned < resolved < closed)
    Status,
}

impl SortKey {
    /// Map a caller-supplied sort string to a key
    ///
    /// Unrecognized keys fall back to date ordering rather than failing.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "priority" => Self::Priority,
            "status" => Self::Status,
            _ => Self::Date,
        }
    }
}

/// Parameters for one page of a listing
#[derive(Debug, Clone, Default)]
pub struct PageRequest {
    /// 1-based page number; a page past the data yields an empty slice
    pub page: usize,
    pub page_size: usize,
    pub sort: SortKey,
    /// Restrict to tickets submitted by or assigned to this user
    pub owner: Option<UserId>,
}

impl PageRequest {
    /// Create a request for the given page with the default page size
    #[must_use]
    pub fn new(page: usize) -> Self {
        Self {
            page,
            page_size: DEFAULT_PAGE_SIZE,
            sort: SortKey::default(),
            owner: None,
        }
    }

    /// Set the page size
    #[must_use]
    pub const fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the sort key
    #[must_use]
    pub const fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Set the owner filter
    #[must_use]
    pub fn owner(mut self, owner: UserId) -> Self {
        self.owner = Some(owner);
        self
    }
}

/// One page of results plus the information needed to page further
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub page_number: usize,
    pub page_size: usize,
}

impl<T> PaginatedResult<T> {
    /// Number of pages needed for the full result set
    #[must_use]
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(self.page_size)
    }
}

/// Apply owner filter, ordering, and slicing to the full ticket set
#[must_use]
pub fn paginate(tickets: Vec<Ticket>, request: &PageRequest) -> PaginatedResult<Ticket> {
    let mut matching: Vec<Ticket> = tickets
        .into_iter()
        .filter(|t| match &request.owner {
            Some(owner) => t.submitter == *owner || t.assigned_agent.as_ref() == Some(owner),
            None => true,
        })
        .collect();

    match request.sort {
        SortKey::Priority => matching.sort_by(|a, b| b.priority.cmp(&a.priority)),
        SortKey::Date => matching.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Status => matching.sort_by(|a, b| a.status.cmp(&b.status)),
    }

    let total_count = matching.len();
    let offset = request.page.saturating_sub(1) * request.page_size;
    let items: Vec<Ticket> = matching
        .into_iter()
        .skip(offset)
        .take(request.page_size)
        .collect();

    PaginatedResult {
        items,
        total_count,
        page_number: request.page,
        page_size: request.page_size,
    }
}
