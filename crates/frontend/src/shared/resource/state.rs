use std::sync::Arc;

use super::pagination::PageCursor;

/// Predicate set applied to the snapshot. Pages conjoin all of their
/// active facets into one closure and re-install it on every change.
pub type FilterFn<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

pub fn no_filter<T>() -> FilterFn<T> {
    Arc::new(|_| true)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingMode {
    /// The backend pages; we pass the page number and trust its total.
    Server,
    /// Everything is fetched once and sliced locally.
    Client,
}

/// Snapshot + derived view + cursor for one resource list.
///
/// `original` is the unfiltered list exactly as last fetched; `visible` is
/// always rebuilt from it in full, never patched incrementally.
#[derive(Debug, Clone)]
pub struct ResourceState<T> {
    pub original: Vec<T>,
    pub visible: Vec<T>,
    pub cursor: PageCursor,
    pub mode: PagingMode,
}

impl<T: Clone> ResourceState<T> {
    pub fn new(mode: PagingMode, page_size: usize) -> Self {
        Self {
            original: Vec::new(),
            visible: Vec::new(),
            cursor: PageCursor::new(page_size),
            mode,
        }
    }

    /// Install a completed fetch as the new snapshot and re-derive the
    /// view through the currently active predicate.
    pub fn ingest(&mut self, items: Vec<T>, server_total: Option<usize>, filter: &FilterFn<T>) {
        self.original = items;
        self.rederive(filter);
        if self.mode == PagingMode::Server {
            self.cursor.total_items = server_total.unwrap_or(self.visible.len());
        }
        self.cursor.clamp_after_refresh();
    }

    /// A fetch failed: server truth is unknown, show nothing.
    pub fn clear(&mut self) {
        self.original.clear();
        self.visible.clear();
        self.cursor.total_items = 0;
        self.cursor.reset();
    }

    /// Re-derive the view after any predicate change. Always resets the
    /// cursor to page 1.
    pub fn apply_filter(&mut self, filter: &FilterFn<T>) {
        self.rederive(filter);
        self.cursor.reset();
    }

    fn rederive(&mut self, filter: &FilterFn<T>) {
        self.visible = self.original.iter().filter(|t| filter(t)).cloned().collect();
        if self.mode == PagingMode::Client {
            self.cursor.total_items = self.visible.len();
        }
    }

    pub fn try_set_page(&mut self, page: usize) -> bool {
        self.cursor.try_set_page(page)
    }

    /// Rows of the current page. In server mode the fetch already returned
    /// exactly one page, so the whole view is shown.
    pub fn page_items(&self) -> Vec<T> {
        match self.mode {
            PagingMode::Server => self.visible.clone(),
            PagingMode::Client => {
                let (start, end) = self.cursor.slice_bounds(self.visible.len());
                self.visible[start..end].to_vec()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(items: Vec<u32>) -> ResourceState<u32> {
        let mut s = ResourceState::new(PagingMode::Client, 10);
        s.ingest(items, None, &no_filter());
        s
    }

    #[test]
    fn view_is_always_a_subset_of_the_snapshot() {
        let mut s = state_with((0..50).collect());
        let even: FilterFn<u32> = Arc::new(|n| n % 2 == 0);
        s.apply_filter(&even);
        assert!(s.visible.iter().all(|n| s.original.contains(n)));
        assert_eq!(s.visible.len(), 25);
        assert_eq!(s.original.len(), 50, "filters must never write the snapshot");
    }

    #[test]
    fn filters_compose_from_the_snapshot_not_the_previous_view() {
        let mut s = state_with((0..50).collect());
        let small: FilterFn<u32> = Arc::new(|n| *n < 10);
        s.apply_filter(&small);
        assert_eq!(s.visible.len(), 10);

        // Widening the predicate must widen the view again: the pass ran
        // against the snapshot, not against the previous 10 rows.
        let wide: FilterFn<u32> = Arc::new(|n| *n < 40);
        s.apply_filter(&wide);
        assert_eq!(s.visible.len(), 40);
    }

    #[test]
    fn filter_change_resets_to_page_one() {
        let mut s = state_with((0..50).collect());
        assert!(s.try_set_page(4));
        let any: FilterFn<u32> = Arc::new(|_| true);
        s.apply_filter(&any);
        assert_eq!(s.cursor.page, 1);
    }

    #[test]
    fn client_mode_tracks_visible_total() {
        let mut s = state_with((0..25).collect());
        assert_eq!(s.cursor.total_items, 25);
        let few: FilterFn<u32> = Arc::new(|n| *n < 5);
        s.apply_filter(&few);
        assert_eq!(s.cursor.total_items, 5);
        assert_eq!(s.page_items(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn server_mode_trusts_the_reported_total() {
        let mut s = ResourceState::new(PagingMode::Server, 10);
        s.ingest((0..10).collect(), Some(94), &no_filter());
        assert_eq!(s.cursor.total_items, 94);
        assert_eq!(s.cursor.total_pages(), 10);
        assert_eq!(s.page_items().len(), 10);
    }

    #[test]
    fn failed_fetch_clears_the_list() {
        let mut s = state_with((0..25).collect());
        s.clear();
        assert!(s.visible.is_empty());
        assert_eq!(s.cursor.total_items, 0);
        assert_eq!(s.cursor.page, 1);
    }
}
