use super::*;

fn page_of(page: u32, ids: std::ops::RangeInclusive<i64>) -> ArtworkPage {
    ArtworkPage {
        pagination: Pagination {
            total: 100,
            limit: 10,
            offset: u64::from(page - 1) * 10,
            total_pages: 10,
            current_page: page,
        },
        data: ids.map(Artwork::with_id).collect(),
    }
}

fn failure(message: &str) -> PageFailure {
    PageFailure {
        code: ErrorCode::Unknown,
        message: message.to_string(),
        timed_out: false,
    }
}

fn ids(cache: &PageCache) -> Vec<i64> {
    cache.rows().iter().map(|row| row.id.0).collect()
}

#[test]
fn first_request_fetches_and_duplicate_request_waits() {
    let now = Instant::now();
    let mut cache = PageCache::new(None);

    assert_eq!(cache.request(1, now), FetchDecision::Fetch);
    assert!(cache.is_loading());
    assert!(cache.rows().is_empty());
    assert_eq!(cache.request(1, now), FetchDecision::InFlight);

    assert!(cache.complete(1, Ok(page_of(1, 1..=10)), now));
    assert!(!cache.is_loading());
    assert_eq!(ids(&cache), (1..=10).collect::<Vec<_>>());
    assert_eq!(cache.pagination().map(|p| p.total_pages), Some(10));
}

#[test]
fn revisiting_a_cached_page_does_not_refetch() {
    let now = Instant::now();
    let mut cache = PageCache::new(None);
    cache.request(1, now);
    cache.complete(1, Ok(page_of(1, 1..=10)), now);
    cache.request(2, now);
    cache.complete(2, Ok(page_of(2, 11..=20)), now);

    let later = now + Duration::from_secs(3600);
    assert_eq!(cache.request(1, later), FetchDecision::Cached);
    assert!(!cache.is_loading());
    assert_eq!(ids(&cache), (1..=10).collect::<Vec<_>>());
    assert_eq!(cache.cached_pages(), 2);
}

#[test]
fn previous_rows_stay_visible_while_next_page_loads() {
    let now = Instant::now();
    let mut cache = PageCache::new(None);
    cache.request(1, now);
    cache.complete(1, Ok(page_of(1, 1..=10)), now);

    assert_eq!(cache.request(2, now), FetchDecision::Fetch);
    assert!(cache.is_loading());
    assert!(cache.is_showing_stale());
    assert_eq!(cache.displayed_page(), Some(1));
    assert_eq!(ids(&cache), (1..=10).collect::<Vec<_>>());

    cache.complete(2, Ok(page_of(2, 11..=20)), now);
    assert!(!cache.is_showing_stale());
    assert_eq!(ids(&cache), (11..=20).collect::<Vec<_>>());
}

#[test]
fn late_response_for_abandoned_page_is_cached_but_not_shown() {
    let now = Instant::now();
    let mut cache = PageCache::new(None);
    cache.request(1, now);
    cache.complete(1, Ok(page_of(1, 1..=10)), now);

    cache.request(2, now);
    cache.request(3, now);
    assert!(!cache.complete(2, Ok(page_of(2, 11..=20)), now));
    assert_eq!(cache.current_page(), 3);
    assert_eq!(ids(&cache), (1..=10).collect::<Vec<_>>());
    assert!(cache.is_loading());

    assert!(cache.is_cached(2));
    assert_eq!(cache.request(2, now), FetchDecision::Cached);
    assert_eq!(ids(&cache), (11..=20).collect::<Vec<_>>());
}

#[test]
fn failure_is_reported_for_current_page_and_request_retries() {
    let now = Instant::now();
    let mut cache = PageCache::new(None);
    cache.request(1, now);
    cache.complete(1, Ok(page_of(1, 1..=10)), now);

    cache.request(2, now);
    assert!(cache.error_for_current().is_none());
    assert!(cache.complete(2, Err(failure("connection refused")), now));
    assert!(!cache.is_loading());
    assert_eq!(
        cache.error_for_current().map(|f| f.message.as_str()),
        Some("connection refused")
    );
    assert_eq!(ids(&cache), (1..=10).collect::<Vec<_>>());

    assert_eq!(cache.request(2, now), FetchDecision::Fetch);
    assert!(cache.error_for_current().is_none());
    cache.complete(2, Ok(page_of(2, 11..=20)), now);
    assert!(cache.error_for_current().is_none());
}

#[test]
fn failed_first_page_leaves_grid_empty_with_error() {
    let now = Instant::now();
    let mut cache = PageCache::new(None);
    cache.request(1, now);
    cache.complete(1, Err(failure("dns error")), now);

    assert!(cache.rows().is_empty());
    assert!(cache.displayed().is_none());
    assert!(cache.error_for_current().is_some());
}

#[test]
fn stale_pages_are_shown_and_revalidated() {
    let now = Instant::now();
    let mut cache = PageCache::new(Some(Duration::from_secs(60)));
    cache.request(1, now);
    cache.complete(1, Ok(page_of(1, 1..=10)), now);

    assert_eq!(
        cache.request(1, now + Duration::from_secs(30)),
        FetchDecision::Cached
    );
    let later = now + Duration::from_secs(61);
    let decision = cache.request(1, later);
    assert_eq!(decision, FetchDecision::Revalidate);
    assert!(decision.needs_request());
    assert!(cache.is_loading());
    assert_eq!(ids(&cache), (1..=10).collect::<Vec<_>>());

    cache.complete(1, Err(failure("timeout")), later);
    assert!(cache.error_for_current().is_none());
    assert_eq!(ids(&cache), (1..=10).collect::<Vec<_>>());
}
