//! Offset-based pagination view model.
//!
//! Repositories return a `(items, total)` count+slice pair; [`Page::new`]
//! turns that pair into the response shape. Keeping the derivation here,
//! independent of the storage layer, means every counting rule is testable
//! without a database.

use serde::Serialize;

/// Fixed number of items per page across the whole API.
pub const PAGE_SIZE: i64 = 5;

/// A single page of a listing, with derived pagination metadata.
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    pub items: Vec<T>,
    pub total_items: i64,
    pub page_index: i64,
    pub total_pages: i64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl<T: Serialize> Page<T> {
    /// Build a page from the slice of items and the unfiltered total.
    ///
    /// `total_pages` is `ceil(total_items / PAGE_SIZE)`. There is no bounds
    /// check on `page_index`: a page past the end simply carries an empty
    /// `items` slice, and negative indexes are treated as page 0.
    pub fn new(items: Vec<T>, total_items: i64, page_index: i64) -> Self {
        let page_index = page_index.max(0);
        // Totals are never negative, so plain rounding-up division is safe.
        let total_pages = (total_items + PAGE_SIZE - 1) / PAGE_SIZE;
        Self {
            items,
            total_items,
            page_index,
            total_pages,
            has_previous_page: page_index > 0,
            has_next_page: page_index.saturating_add(1) < total_pages,
        }
    }
}

/// Row offset for the given page index.
///
/// Negative page indexes clamp to offset 0 so the database never sees a
/// negative `OFFSET`; indexes near `i64::MAX` saturate instead of
/// wrapping.
pub fn offset(page_index: i64) -> i64 {
    page_index.max(0).saturating_mul(PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DbId;

    /// A page holding `n` placeholder ids out of `total`.
    fn page_of(n: i64, total: i64, index: i64) -> Page<DbId> {
        Page::new((0..n).collect(), total, index)
    }

    #[test]
    fn total_pages_is_ceiling_division() {
        assert_eq!(page_of(5, 5, 0).total_pages, 1);
        assert_eq!(page_of(5, 6, 0).total_pages, 2);
        assert_eq!(page_of(5, 10, 0).total_pages, 2);
        assert_eq!(page_of(5, 11, 0).total_pages, 3);
    }

    #[test]
    fn empty_listing_has_zero_pages_and_no_neighbours() {
        let page = page_of(0, 0, 0);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_previous_page);
        assert!(!page.has_next_page);
    }

    #[test]
    fn first_page_of_many_has_next_but_no_previous() {
        let page = page_of(5, 12, 0);
        assert!(!page.has_previous_page);
        assert!(page.has_next_page);
    }

    #[test]
    fn middle_page_has_both_neighbours() {
        let page = page_of(5, 12, 1);
        assert!(page.has_previous_page);
        assert!(page.has_next_page);
    }

    #[test]
    fn last_page_has_previous_but_no_next() {
        let page = page_of(2, 12, 2);
        assert!(page.has_previous_page);
        assert!(!page.has_next_page);
    }

    #[test]
    fn out_of_range_page_is_empty_without_error() {
        // Requesting page ceil(N/S) or beyond yields zero items.
        let page = page_of(0, 12, 3);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_next_page);
        assert!(page.has_previous_page);
    }

    #[test]
    fn negative_page_index_clamps_to_zero() {
        let page = page_of(5, 12, -3);
        assert_eq!(page.page_index, 0);
        assert!(!page.has_previous_page);
        assert_eq!(offset(-3), 0);
    }

    #[test]
    fn offset_is_page_times_size() {
        assert_eq!(offset(0), 0);
        assert_eq!(offset(1), 5);
        assert_eq!(offset(7), 35);
    }

    #[test]
    fn maximum_page_index_yields_an_empty_page_without_overflow() {
        let page = page_of(0, 6, i64::MAX);
        assert!(page.items.is_empty());
        assert_eq!(page.page_index, i64::MAX);
        assert!(page.has_previous_page);
        assert!(!page.has_next_page);
        assert_eq!(offset(i64::MAX), i64::MAX);
    }
}
