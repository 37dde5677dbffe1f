//! Page-based pagination

use serde::Serialize;

/// Requested page (1-based) and a fixed page size chosen by the endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    #[inline]
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    #[inline]
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.per_page)
    }
}

/// One page of results plus the total row count
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: i64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            per_page: request.per_page,
        }
    }

    /// Last page number; an empty result still has page 1
    pub fn last_page(&self) -> u32 {
        let per_page = i64::from(self.per_page.max(1));
        let pages = (self.total + per_page - 1) / per_page;
        pages.max(1) as u32
    }

    /// Same page metadata over replacement items
    pub fn with_items<U>(self, items: Vec<U>) -> Page<U> {
        Page {
            items,
            total: self.total,
            page: self.page,
            per_page: self.per_page,
        }
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_zero_is_clamped() {
        let request = PageRequest::new(0, 10);
        assert_eq!(request.page, 1);
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(3, 20).offset(), 40);
        assert_eq!(PageRequest::new(3, 20).limit(), 20);
    }

    #[test]
    fn test_last_page() {
        let page: Page<()> = Page::new(vec![], 0, PageRequest::new(1, 10));
        assert_eq!(page.last_page(), 1);
        let page: Page<()> = Page::new(vec![], 21, PageRequest::new(1, 10));
        assert_eq!(page.last_page(), 3);
        let page: Page<()> = Page::new(vec![], 20, PageRequest::new(1, 10));
        assert_eq!(page.last_page(), 2);
    }

    #[test]
    fn test_map_keeps_metadata() {
        let page = Page::new(vec![1, 2], 12, PageRequest::new(2, 2)).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.total, 12);
        assert_eq!(page.page, 2);
    }
}
