//! Per-page fetch cache with stale-while-revalidate display.
//!
//! Pages are keyed by their 1-based number. A page is fetched at most once
//! per session unless a staleness window is configured. While the current
//! page is outstanding, the rows of the last page that was on screen keep
//! being served.

use std::{
    collections::{HashMap, HashSet},
    time::{Duration, Instant},
};

use shared::{
    domain::{Artwork, ArtworkPage, Pagination},
    error::ErrorCode,
};

use crate::error::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchDecision {
    /// Nothing cached and nothing outstanding: issue a request.
    Fetch,
    /// A request for this page is already outstanding.
    InFlight,
    /// Fresh rows are cached; no request needed.
    Cached,
    /// Rows are cached but past the staleness window: show them and refetch.
    Revalidate,
}

impl FetchDecision {
    pub fn needs_request(self) -> bool {
        matches!(self, Self::Fetch | Self::Revalidate)
    }
}

/// Cloneable summary of a failed fetch, safe to hand across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFailure {
    pub code: ErrorCode,
    pub message: String,
    pub timed_out: bool,
}

impl From<&FetchError> for PageFailure {
    fn from(err: &FetchError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
            timed_out: err.is_timeout(),
        }
    }
}

impl From<FetchError> for PageFailure {
    fn from(err: FetchError) -> Self {
        Self::from(&err)
    }
}

#[derive(Debug, Clone)]
struct CachedPage {
    page: ArtworkPage,
    fetched_at: Instant,
}

#[derive(Debug)]
pub struct PageCache {
    pages: HashMap<u32, CachedPage>,
    in_flight: HashSet<u32>,
    failures: HashMap<u32, PageFailure>,
    current: u32,
    last_displayed: Option<u32>,
    last_pagination: Option<Pagination>,
    stale_after: Option<Duration>,
}

impl PageCache {
    pub fn new(stale_after: Option<Duration>) -> Self {
        Self {
            pages: HashMap::new(),
            in_flight: HashSet::new(),
            failures: HashMap::new(),
            current: 1,
            last_displayed: None,
            last_pagination: None,
            stale_after,
        }
    }

    /// Makes `page` current and reports whether it has to be fetched.
    /// Callers that get a decision with [`FetchDecision::needs_request`] must
    /// eventually report back through [`PageCache::complete`].
    pub fn request(&mut self, page: u32, now: Instant) -> FetchDecision {
        self.current = page;

        if self.in_flight.contains(&page) {
            return FetchDecision::InFlight;
        }

        if let Some(cached) = self.pages.get(&page) {
            self.last_displayed = Some(page);
            let stale = self
                .stale_after
                .is_some_and(|window| now.saturating_duration_since(cached.fetched_at) >= window);
            if !stale {
                return FetchDecision::Cached;
            }
            self.in_flight.insert(page);
            return FetchDecision::Revalidate;
        }

        self.failures.remove(&page);
        self.in_flight.insert(page);
        FetchDecision::Fetch
    }

    /// Records the outcome of a fetch for `page`, current or not. Returns
    /// whether the outcome concerns the page that is currently requested.
    pub fn complete(
        &mut self,
        page: u32,
        result: Result<ArtworkPage, PageFailure>,
        now: Instant,
    ) -> bool {
        self.in_flight.remove(&page);
        match result {
            Ok(data) => {
                self.failures.remove(&page);
                self.last_pagination = Some(data.pagination);
                self.pages.insert(
                    page,
                    CachedPage {
                        page: data,
                        fetched_at: now,
                    },
                );
                if page == self.current {
                    self.last_displayed = Some(page);
                }
            }
            Err(failure) => {
                self.failures.insert(page, failure);
            }
        }
        page == self.current
    }

    pub fn current_page(&self) -> u32 {
        self.current
    }

    /// Page whose rows are on screen: the current one once it has arrived,
    /// otherwise whatever was shown before.
    pub fn displayed_page(&self) -> Option<u32> {
        if self.pages.contains_key(&self.current) {
            Some(self.current)
        } else {
            self.last_displayed
        }
    }

    pub fn displayed(&self) -> Option<&ArtworkPage> {
        self.displayed_page()
            .and_then(|page| self.pages.get(&page))
            .map(|cached| &cached.page)
    }

    pub fn rows(&self) -> &[Artwork] {
        self.displayed().map_or(&[], |page| page.data.as_slice())
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.contains(&self.current)
    }

    /// True while the rows on screen belong to another page than the
    /// requested one.
    pub fn is_showing_stale(&self) -> bool {
        self.displayed_page()
            .is_some_and(|page| page != self.current)
    }

    /// Failure of the current page, only while it has no rows to show.
    pub fn error_for_current(&self) -> Option<&PageFailure> {
        if self.pages.contains_key(&self.current) || self.in_flight.contains(&self.current) {
            return None;
        }
        self.failures.get(&self.current)
    }

    pub fn pagination(&self) -> Option<Pagination> {
        self.last_pagination
    }

    pub fn is_cached(&self, page: u32) -> bool {
        self.pages.contains_key(&page)
    }

    pub fn cached_pages(&self) -> usize {
        self.pages.len()
    }
}

#[cfg(test)]
#[path = "tests/page_cache_tests.rs"]
mod tests;
