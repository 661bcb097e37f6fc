//! Fixed-size pagination over an in-memory collection.
//!
//! The pager never errors on out-of-range requests: the requested page can go
//! stale when the underlying collection shrinks (a narrower query removing
//! the records on a later page), and every read clamps it into the valid
//! range instead.

/// Records shown per page in the list view.
pub const PAGE_SIZE: usize = 5;

/// Maximum number of page controls shown in the navigation bar.
pub const PAGE_WINDOW: usize = 5;

/// Pagination cursor: a fixed page size plus the requested current page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    current_page: usize,
}

impl Pager {
    /// A zero page size is a programming error, not a runtime condition.
    pub fn new(page_size: usize) -> Self {
        assert!(page_size > 0, "page size must be positive");
        Self {
            page_size,
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Requested page, before clamping against a collection length.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages for a collection of `total_items` records; 0 when the
    /// collection is empty.
    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.page_size)
    }

    /// Requested page clamped into `[1, max(total_pages, 1)]`.
    pub fn effective_page(&self, total_items: usize) -> usize {
        self.current_page.clamp(1, self.total_pages(total_items).max(1))
    }

    /// Back to the first page (the effective query changed).
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Advance one page, clamped to the last page; a no-op at the end.
    pub fn next_page(&mut self, total_items: usize) {
        self.go_to(self.effective_page(total_items) + 1, total_items);
    }

    /// Step back one page, clamped to the first page; a no-op at the start.
    pub fn prev_page(&mut self, total_items: usize) {
        self.go_to(self.effective_page(total_items).saturating_sub(1), total_items);
    }

    /// Jump to `page`, clamped into the valid range.
    pub fn go_to(&mut self, page: usize, total_items: usize) {
        self.current_page = page.clamp(1, self.total_pages(total_items).max(1));
    }

    /// The visible slice of `items` for the effective current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> PageView<'a, T> {
        let total_pages = self.total_pages(items.len());
        let current_page = self.effective_page(items.len());
        let start = (current_page - 1) * self.page_size;
        let end = (start + self.page_size).min(items.len());
        PageView {
            items: &items[start..end],
            current_page,
            total_pages,
            total_items: items.len(),
            offset: start,
        }
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

/// One rendered page of a collection.
#[derive(Debug)]
pub struct PageView<'a, T> {
    pub items: &'a [T],
    /// 1-based page actually shown (after clamping).
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// Index of `items[0]` within the full collection.
    pub offset: usize,
}

impl<T> PageView<'_, T> {
    pub fn is_first_page(&self) -> bool {
        self.current_page <= 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }

    /// 1-based bounds for a "showing X to Y of Z" footer; `(0, 0)` when the
    /// page is empty.
    pub fn shown_range(&self) -> (usize, usize) {
        if self.items.is_empty() {
            (0, 0)
        } else {
            (self.offset + 1, self.offset + self.items.len())
        }
    }
}

/// Page numbers to expose as navigation controls.
///
/// Returns all pages when there are at most `max_visible` of them; otherwise
/// a window of exactly `max_visible` ascending pages centered on `current`,
/// pinned flush against the nearest boundary so it never leaves
/// `[1, total_pages]`.
pub fn page_window(current: usize, total_pages: usize, max_visible: usize) -> Vec<usize> {
    if total_pages <= max_visible {
        return (1..=total_pages).collect();
    }
    let start = current
        .saturating_sub(max_visible / 2)
        .max(1)
        .min(total_pages - max_visible + 1);
    (start..start + max_visible).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_law() {
        let pager = Pager::new(5);
        assert_eq!(pager.total_pages(12), 3);
        assert_eq!(pager.total_pages(10), 2);
        assert_eq!(pager.total_pages(1), 1);
        assert_eq!(pager.total_pages(0), 0);
    }

    #[test]
    #[should_panic(expected = "page size must be positive")]
    fn zero_page_size_is_a_bug() {
        let _ = Pager::new(0);
    }

    #[test]
    fn slice_returns_contiguous_page() {
        let items: Vec<usize> = (0..12).collect();
        let mut pager = Pager::new(5);
        pager.go_to(3, items.len());

        let view = pager.slice(&items);
        assert_eq!(view.items, &[10, 11]);
        assert_eq!(view.current_page, 3);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.offset, 10);
        assert_eq!(view.shown_range(), (11, 12));
        assert!(view.is_last_page());
        assert!(!view.is_first_page());
    }

    #[test]
    fn empty_collection_yields_empty_page() {
        let items: Vec<usize> = Vec::new();
        let pager = Pager::new(5);
        let view = pager.slice(&items);
        assert!(view.items.is_empty());
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.current_page, 1);
        assert_eq!(view.shown_range(), (0, 0));
    }

    #[test]
    fn clamp_on_shrink() {
        // Page 3 is valid with 15 items, then filtering drops the
        // collection to 4: the effective page recomputes to 1.
        let mut pager = Pager::new(5);
        pager.go_to(3, 15);
        assert_eq!(pager.effective_page(15), 3);
        assert_eq!(pager.effective_page(4), 1);

        let items: Vec<usize> = (0..4).collect();
        let view = pager.slice(&items);
        assert_eq!(view.current_page, 1);
        assert_eq!(view.items, &[0, 1, 2, 3]);
    }

    #[test]
    fn navigation_clamps_and_is_idempotent_at_boundaries() {
        let mut pager = Pager::new(5);
        pager.prev_page(12);
        assert_eq!(pager.current_page(), 1);

        pager.next_page(12);
        pager.next_page(12);
        assert_eq!(pager.current_page(), 3);
        pager.next_page(12);
        assert_eq!(pager.current_page(), 3);

        pager.go_to(99, 12);
        assert_eq!(pager.current_page(), 3);
        pager.go_to(0, 12);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn window_smaller_total_shows_all_pages() {
        assert_eq!(page_window(2, 3, 5), vec![1, 2, 3]);
        assert_eq!(page_window(1, 1, 5), vec![1]);
        assert_eq!(page_window(1, 0, 5), Vec::<usize>::new());
    }

    #[test]
    fn window_bounds() {
        assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn window_pins_flush_near_boundaries() {
        // Within ceil(5/2) = 3 of an edge the window stays pinned to it.
        assert_eq!(page_window(2, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(3, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(4, 10, 5), vec![2, 3, 4, 5, 6]);
        assert_eq!(page_window(8, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(9, 10, 5), vec![6, 7, 8, 9, 10]);
    }
}
