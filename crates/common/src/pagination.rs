//! Pagination primitives shared by the service and HTTP layers.
//!
//! Page numbers are 0-based. `Page<T>` serializes to the envelope clients
//! consume: `{content, totalElements, totalPages, pageable: {pageNumber, pageSize}}`.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;
/// Largest page index whose row offset still fits a signed 64-bit SQL OFFSET.
pub const MAX_PAGE_INDEX: u64 = i64::MAX as u64 / MAX_PAGE_SIZE;

/// Requested slice of a result set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// 0-based page index
    pub page: u64,
    /// items per page
    pub size: u64,
}

impl PageRequest {
    pub fn of(page: u64, size: u64) -> Self {
        Self { page, size }
    }

    /// Clamp size into `1..=MAX_PAGE_SIZE` and page into `0..=MAX_PAGE_INDEX`.
    pub fn normalize(self) -> Self {
        Self { page: self.page.min(MAX_PAGE_INDEX), size: self.size.clamp(1, MAX_PAGE_SIZE) }
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: DEFAULT_PAGE_SIZE }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pageable {
    pub page_number: u64,
    pub page_size: u64,
}

impl From<PageRequest> for Pageable {
    fn from(r: PageRequest) -> Self {
        Self { page_number: r.page, page_size: r.size }
    }
}

/// A bounded slice of a query result plus total count and paging metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub pageable: Pageable,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        let total_pages = if request.size == 0 { 0 } else { total_elements.div_ceil(request.size) };
        Self { content, total_elements, total_pages, pageable: request.into() }
    }

    pub fn empty(request: PageRequest) -> Self {
        Self::new(Vec::new(), request, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_clamps_zero_size() {
        let r = PageRequest::of(3, 0).normalize();
        assert_eq!(r.page, 3);
        assert_eq!(r.size, 1);
    }

    #[test]
    fn normalize_clamps_upper_bound() {
        let r = PageRequest::of(5, 1000).normalize();
        assert_eq!(r.size, MAX_PAGE_SIZE);
        assert_eq!(r.offset(), 500);
    }

    #[test]
    fn default_values_are_sane() {
        let d = PageRequest::default();
        assert_eq!(d.page, 0);
        assert_eq!(d.size, 20);
    }

    #[test]
    fn page_counts_total_pages() {
        let p = Page::new(vec![1, 2], PageRequest::of(0, 2), 5);
        assert_eq!(p.total_pages, 3);
        assert_eq!(Page::<i32>::empty(PageRequest::default()).total_pages, 0);
    }

    #[test]
    fn page_serializes_camel_case_envelope() {
        let p = Page::new(vec!["a"], PageRequest::of(0, 20), 1);
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["content"].as_array().map(|a| a.len()), Some(1));
        assert_eq!(v["totalElements"], 1);
        assert_eq!(v["pageable"]["pageNumber"], 0);
        assert_eq!(v["pageable"]["pageSize"], 20);
    }

    #[test]
    fn normalize_bounds_huge_page_index() {
        let r = PageRequest::of(u64::MAX, 1000).normalize();
        assert_eq!(r.page, MAX_PAGE_INDEX);
        assert!(r.page.checked_mul(r.size).is_some_and(|o| o <= i64::MAX as u64));
        assert_eq!(PageRequest::of(7, 20).normalize().page, 7);
    }
}
