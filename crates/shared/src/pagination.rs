//! Page-numbered pagination utilities.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page size used when draining the activity history.
pub const DRAIN_PAGE_SIZE: usize = 1000;

/// Page size used by the interactive query listing.
pub const LIST_PAGE_SIZE: usize = 15;

/// Error type for page request construction.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Page numbers start at 1")]
    ZeroPage,
    #[error("Page limit must be at least 1")]
    ZeroLimit,
}

/// A request for one page of a list endpoint.
///
/// The backend numbers pages from 1 and caps each response at `limit` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub limit: usize,
}

impl PageRequest {
    /// Creates a page request, rejecting zero pages and zero limits.
    pub fn new(page: u32, limit: usize) -> Result<Self, PageError> {
        if page == 0 {
            return Err(PageError::ZeroPage);
        }
        if limit == 0 {
            return Err(PageError::ZeroLimit);
        }
        Ok(Self { page, limit })
    }

    /// The first page at the given limit.
    pub fn first(limit: usize) -> Result<Self, PageError> {
        Self::new(1, limit)
    }

    /// The request for the page after this one.
    pub fn next(self) -> Self {
        Self {
            page: self.page + 1,
            limit: self.limit,
        }
    }

    /// Whether a page of `returned` items exhausts the result set.
    ///
    /// A full page means there may be more; the first short page (including an
    /// empty one) terminates a drain.
    pub fn is_last_page(self, returned: usize) -> bool {
        returned < self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_page() {
        assert!(matches!(PageRequest::new(0, 10), Err(PageError::ZeroPage)));
    }

    #[test]
    fn test_new_rejects_zero_limit() {
        assert!(matches!(PageRequest::new(1, 0), Err(PageError::ZeroLimit)));
    }

    #[test]
    fn test_first_and_next() {
        let first = PageRequest::first(1000).unwrap();
        assert_eq!(first.page, 1);
        assert_eq!(first.limit, 1000);

        let second = first.next();
        assert_eq!(second.page, 2);
        assert_eq!(second.limit, 1000);
    }

    #[test]
    fn test_full_page_is_not_last() {
        let req = PageRequest::new(1, 1000).unwrap();
        assert!(!req.is_last_page(1000));
    }

    #[test]
    fn test_short_page_is_last() {
        let req = PageRequest::new(3, 1000).unwrap();
        assert!(req.is_last_page(999));
        assert!(req.is_last_page(1));
    }

    #[test]
    fn test_empty_page_is_last() {
        let req = PageRequest::new(2, 1000).unwrap();
        assert!(req.is_last_page(0));
    }

    #[test]
    fn test_serde_roundtrip() {
        let req = PageRequest::new(4, LIST_PAGE_SIZE).unwrap();
        let json = serde_json::to_string(&req).unwrap();
        let back: PageRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, req);
    }
}
