//! Slicing of ordered result sets into fixed-size pages.
//!
//! The persistence layer hands back the full, already ordered result set of a
//! query; this module picks out the window requested by the client. It never
//! fails: a page past the end of the result set is simply empty, and callers
//! decide what an empty page means for their endpoint.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::constants::{DEFAULT_PAGE_NUMBER, PAGE_SIZE};

/// Raw `?page=` query parameter as sent by the client.
///
/// Kept as a string so that a non-numeric value falls back to the first page
/// instead of failing query extraction.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number (default: 1)
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_query(self.page.as_deref())
    }
}

/// A one-based page number, always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
}

impl PageRequest {
    /// Zero and negative page numbers are clamped to the first page.
    pub fn new(page: i64) -> Self {
        Self {
            page: u64::try_from(page).unwrap_or(0).max(DEFAULT_PAGE_NUMBER),
        }
    }

    /// Parse the raw query value; absent or non-numeric input means page 1.
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().parse::<i64>().ok())
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    /// Zero-based index of the first item on this page.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(PAGE_SIZE)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
        }
    }
}

/// Borrow the requested page out of `result_set`.
///
/// Returns the items at offsets `[offset, offset + PAGE_SIZE)` clipped to the
/// length of the result set, in their original order.
pub fn paginate<T>(result_set: &[T], request: PageRequest) -> &[T] {
    let len = result_set.len();
    let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
    let start = offset.min(len);
    let end = offset.saturating_add(PAGE_SIZE as usize).min(len);
    &result_set[start..end]
}

/// Number of pages needed to show `total` items.
pub fn total_pages(total: u64) -> u64 {
    total.div_ceil(PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_twenty_five_items() {
        let set = items(25);
        assert_eq!(paginate(&set, PageRequest::new(1)), &set[0..10]);
        assert_eq!(paginate(&set, PageRequest::new(2)), &set[10..20]);
        assert_eq!(paginate(&set, PageRequest::new(3)), &set[20..25]);
        assert!(paginate(&set, PageRequest::new(4)).is_empty());
    }

    #[test]
    fn test_empty_result_set() {
        let set = items(0);
        for page in [-5, 0, 1, 2, 1000] {
            assert!(paginate(&set, PageRequest::new(page)).is_empty());
        }
    }

    #[test]
    fn test_exactly_one_full_page() {
        let set = items(10);
        assert_eq!(paginate(&set, PageRequest::new(1)), set.as_slice());
        assert!(paginate(&set, PageRequest::new(2)).is_empty());
    }

    #[test]
    fn test_page_length_formula() {
        for n in 0..=45usize {
            let set = items(n);
            for page in 1..=7u64 {
                let offset = ((page - 1) * PAGE_SIZE) as usize;
                let expected = n.saturating_sub(offset).min(PAGE_SIZE as usize);
                let got = paginate(&set, PageRequest::new(page as i64));
                assert_eq!(got.len(), expected, "n={n} page={page}");
            }
        }
    }

    #[test]
    fn test_pages_concatenate_to_result_set() {
        for n in 0..=45usize {
            let set = items(n);
            let pages = total_pages(n as u64);
            let joined: Vec<usize> = (1..=pages)
                .flat_map(|p| paginate(&set, PageRequest::new(p as i64)).iter().copied())
                .collect();
            assert_eq!(joined, set);
        }
    }

    #[test]
    fn test_paginate_is_idempotent() {
        let set = items(33);
        let request = PageRequest::new(2);
        assert_eq!(paginate(&set, request), paginate(&set, request));
    }

    #[test]
    fn test_huge_page_is_empty_not_a_panic() {
        let set = items(25);
        assert!(paginate(&set, PageRequest::new(i64::MAX)).is_empty());
    }

    #[test]
    fn test_non_positive_pages_clamp_to_first() {
        assert_eq!(PageRequest::new(0).page(), 1);
        assert_eq!(PageRequest::new(-7).page(), 1);
        assert_eq!(PageRequest::new(i64::MIN).page(), 1);
    }

    #[test]
    fn test_from_query() {
        assert_eq!(PageRequest::from_query(None).page(), 1);
        assert_eq!(PageRequest::from_query(Some("3")).page(), 3);
        assert_eq!(PageRequest::from_query(Some(" 2 ")).page(), 2);
        assert_eq!(PageRequest::from_query(Some("abc")).page(), 1);
        assert_eq!(PageRequest::from_query(Some("")).page(), 1);
        assert_eq!(PageRequest::from_query(Some("-4")).page(), 1);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(25), 3);
    }
}
