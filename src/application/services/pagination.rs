//! # Pagination
//!
//! Slices the sorted candidate set and produces page metadata.

/// One page of results with its metadata.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// The 1-based page number that was requested.
    pub page: u32,
    /// Total number of pages for the full set.
    pub total_pages: u32,
    /// True when a later page exists.
    pub has_more: bool,
}

/// Assembles pages from a fully sorted candidate set.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaginationAssembler;

impl PaginationAssembler {
    /// Creates a new assembler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Slices out the requested page.
    ///
    /// `total_pages = ceil(total_count / limit)` and
    /// `has_more = page < total_pages`. A page past the end yields empty
    /// items with accurate metadata rather than an error.
    #[must_use]
    pub fn paginate<T>(&self, items: Vec<T>, total_count: usize, page: u32, limit: u32) -> Page<T> {
        let limit_usize = limit.max(1) as usize;
        let total_pages = total_count.div_ceil(limit_usize) as u32;
        let offset = (page.saturating_sub(1) as usize).saturating_mul(limit_usize);

        let items: Vec<T> = items.into_iter().skip(offset).take(limit_usize).collect();

        Page {
            items,
            page,
            total_pages,
            has_more: page < total_pages,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn paginate(count: usize, page: u32, limit: u32) -> Page<usize> {
        let items: Vec<usize> = (0..count).collect();
        PaginationAssembler::new().paginate(items, count, page, limit)
    }

    #[test]
    fn twenty_five_items_at_limit_nine_make_three_pages() {
        let page = paginate(25, 1, 9);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 9);
        assert!(page.has_more);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let page = paginate(25, 3, 9);
        assert_eq!(page.items.len(), 7);
        assert!(!page.has_more);
        assert_eq!(page.items.first(), Some(&18));
    }

    #[test]
    fn page_past_the_end_is_empty_with_metadata() {
        let page = paginate(25, 4, 9);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_more);
        assert_eq!(page.page, 4);
    }

    #[test]
    fn empty_set_has_zero_pages() {
        let page = paginate(0, 1, 9);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_more);
    }

    #[test]
    fn exact_multiple_has_no_partial_page() {
        let page = paginate(18, 2, 9);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 9);
        assert!(!page.has_more);
    }

    #[test]
    fn middle_page_slices_correct_window() {
        let page = paginate(25, 2, 9);
        assert_eq!(page.items.first(), Some(&9));
        assert_eq!(page.items.last(), Some(&17));
        assert!(page.has_more);
    }
}
