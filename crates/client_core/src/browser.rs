//! View model of the artwork grid: one page cache plus one selection store.
//!
//! Nothing here performs I/O. Navigation returns the page that has to be
//! fetched (if any) and fetch outcomes are fed back in with
//! [`ArtworkBrowser::apply_page`], so the same type drives the desktop UI,
//! the CLI and the tests.

use std::time::{Duration, Instant};

use shared::domain::{Artwork, ArtworkId, ArtworkPage};

use crate::{
    page_cache::{PageCache, PageFailure},
    selection::{parse_row_count, SelectionStore},
    settings::Settings,
};

/// The catalog refuses to page past this many results.
pub const MAX_RESULT_WINDOW: u64 = 10_000;

#[derive(Debug)]
pub struct ArtworkBrowser {
    cache: PageCache,
    selection: SelectionStore,
    rows_per_page: u32,
}

impl ArtworkBrowser {
    pub fn new(rows_per_page: u32, stale_after: Option<Duration>) -> Self {
        Self {
            cache: PageCache::new(stale_after),
            selection: SelectionStore::new(),
            rows_per_page: rows_per_page.max(1),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.rows_per_page(), settings.stale_after())
    }

    /// Navigates to `page` and returns it if a request has to be issued.
    /// Pages below 1 are treated as 1; once the page count is known, pages
    /// past the end are clamped to the last one.
    pub fn go_to_page(&mut self, page: u32, now: Instant) -> Option<u32> {
        let mut target = page.max(1);
        if let Some(total) = self.total_pages() {
            target = target.min(total.max(1));
        }
        let decision = self.cache.request(target, now);
        tracing::debug!(page = target, ?decision, "navigate");
        decision.needs_request().then_some(target)
    }

    pub fn next_page(&mut self, now: Instant) -> Option<u32> {
        self.go_to_page(self.current_page().saturating_add(1), now)
    }

    pub fn previous_page(&mut self, now: Instant) -> Option<u32> {
        self.go_to_page(self.current_page().saturating_sub(1), now)
    }

    /// Re-requests the current page after a failure.
    pub fn retry(&mut self, now: Instant) -> Option<u32> {
        self.go_to_page(self.current_page(), now)
    }

    pub fn apply_page(
        &mut self,
        page: u32,
        result: Result<ArtworkPage, PageFailure>,
        now: Instant,
    ) -> bool {
        self.cache.complete(page, result, now)
    }

    pub fn rows(&self) -> &[Artwork] {
        self.cache.rows()
    }

    pub fn current_page(&self) -> u32 {
        self.cache.current_page()
    }

    /// Number of reachable pages, once any page has been fetched.
    pub fn total_pages(&self) -> Option<u32> {
        let pagination = self.cache.pagination()?;
        let window_pages = MAX_RESULT_WINDOW / u64::from(self.rows_per_page);
        let reachable = u64::from(pagination.total_pages).min(window_pages);
        Some(u32::try_from(reachable).unwrap_or(u32::MAX))
    }

    pub fn total_records(&self) -> Option<u64> {
        self.cache.pagination().map(|pagination| pagination.total)
    }

    pub fn rows_per_page(&self) -> u32 {
        self.rows_per_page
    }

    /// Zero-based index of the first row of the current page across the
    /// whole catalog.
    pub fn first_row_index(&self) -> u64 {
        u64::from(self.current_page().saturating_sub(1)) * u64::from(self.rows_per_page)
    }

    pub fn is_loading(&self) -> bool {
        self.cache.is_loading()
    }

    pub fn is_showing_stale(&self) -> bool {
        self.cache.is_showing_stale()
    }

    pub fn error(&self) -> Option<&PageFailure> {
        self.cache.error_for_current()
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn toggle_row(&mut self, id: ArtworkId) -> bool {
        self.selection.toggle_row(id)
    }

    pub fn toggle_select_all(&mut self) {
        self.selection.toggle_select_all_on_page(self.cache.rows());
    }

    /// Applies the "Select Rows" control. Unusable input selects nothing.
    pub fn select_first_n(&mut self, input: &str) -> usize {
        match parse_row_count(input) {
            Some(n) => self.selection.select_first_n(self.cache.rows(), n),
            None => 0,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Header checkbox state, computed from the rows currently on screen.
    pub fn select_all_checked(&self) -> bool {
        self.selection.all_selected(self.cache.rows())
    }

    pub fn selection_label(&self) -> String {
        self.selection.label()
    }
}

#[cfg(test)]
#[path = "tests/browser_tests.rs"]
mod tests;
