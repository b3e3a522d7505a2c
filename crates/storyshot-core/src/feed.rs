//! Gallery feed state machine
//!
//! Cursor-paginated, append-only view over the approved shared cards.
//! The feed itself performs no IO: each operation returns a [`FeedAction`]
//! telling the driver which page to fetch (if any), and the driver feeds
//! the result back through [`GalleryFeed::apply_page`]. This keeps the
//! fetch-in-flight guard testable without a runtime and makes stale
//! completions after teardown plain no-op state writes.
//!
//! Failure policy: a first-page failure puts the feed in an error state
//! and stops pagination; a later-page failure is treated as end-of-data,
//! keeping everything already loaded. No retries, no backoff.

use async_trait::async_trait;

use crate::error::StoryError;
use crate::types::SharedCard;

/// Cards fetched per page.
pub const PAGE_SIZE: usize = 6;

/// Read side of the backend collaborator, substitutable in tests.
#[async_trait]
pub trait CardStore: Send + Sync {
    /// Page of approved cards, newest first. `page` is zero-indexed.
    async fn list_approved(
        &self,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<SharedCard>, StoryError>;
}

/// What the driver should do after a feed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedAction {
    /// Nothing to fetch (guarded off, exhausted, or errored).
    None,
    /// Fetch this page from the store and call `apply_page` with the result.
    Fetch { page: usize },
}

/// Why the first page could not be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedError {
    /// Backend missing or misconfigured; the UI shows a setup hint.
    Setup,
    /// Generic fetch failure.
    Fetch,
}

/// Feed state for one gallery session.
#[derive(Debug, Clone)]
pub struct GalleryFeed {
    items: Vec<SharedCard>,
    /// Next page index to request.
    cursor: usize,
    exhausted: bool,
    fetch_in_flight: bool,
    /// Page the in-flight fetch is for; results for any other page are stale.
    pending_page: Option<usize>,
    error: Option<FeedError>,
    page_size: usize,
}

impl Default for GalleryFeed {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl GalleryFeed {
    pub fn new(page_size: usize) -> Self {
        GalleryFeed {
            items: Vec::new(),
            cursor: 0,
            exhausted: false,
            fetch_in_flight: false,
            pending_page: None,
            error: None,
            page_size,
        }
    }

    pub fn items(&self) -> &[SharedCard] {
        &self.items
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch_in_flight
    }

    pub fn error(&self) -> Option<FeedError> {
        self.error
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Reset and request page 0. An in-flight fetch from before the reset
    /// becomes stale and its completion is dropped.
    pub fn load_initial(&mut self) -> FeedAction {
        self.items.clear();
        self.cursor = 0;
        self.exhausted = false;
        self.error = None;
        self.fetch_in_flight = true;
        self.pending_page = Some(0);
        FeedAction::Fetch { page: 0 }
    }

    /// Request the next page, unless exhausted, errored, or a fetch is
    /// already pending.
    pub fn load_more(&mut self) -> FeedAction {
        if self.exhausted || self.fetch_in_flight || self.error.is_some() {
            return FeedAction::None;
        }
        self.fetch_in_flight = true;
        self.pending_page = Some(self.cursor);
        FeedAction::Fetch { page: self.cursor }
    }

    /// Viewport signal: the trailing sentinel became visible. The
    /// in-flight guard keeps a still-visible sentinel from re-firing.
    pub fn notify_sentinel_visible(&mut self) -> FeedAction {
        self.load_more()
    }

    /// A new card was submitted; reload so it surfaces at the top.
    pub fn on_item_submitted(&mut self) -> FeedAction {
        self.load_initial()
    }

    /// Feed a fetch result back in. Results for a page we are no longer
    /// waiting on (reset raced the response) are ignored.
    pub fn apply_page(&mut self, page: usize, result: Result<Vec<SharedCard>, StoryError>) {
        if self.pending_page != Some(page) {
            tracing::debug!(page, "dropping stale gallery page result");
            return;
        }
        self.fetch_in_flight = false;
        self.pending_page = None;
        match result {
            Ok(cards) => {
                self.exhausted = cards.len() < self.page_size;
                self.items.extend(cards);
                self.cursor = page + 1;
            }
            Err(err) => {
                if page == 0 {
                    self.error = Some(if err.is_setup_problem() {
                        FeedError::Setup
                    } else {
                        FeedError::Fetch
                    });
                    tracing::warn!(%err, "gallery first page failed");
                } else {
                    // Degrade to "end of data"; keep what we have.
                    tracing::debug!(%err, page, "gallery page failed, stopping pagination");
                }
                self.exhausted = true;
            }
        }
    }

    /// Convenience driver: perform `action` against `store` and apply the
    /// result. The desktop pages use this from spawned tasks.
    pub async fn run(&mut self, action: FeedAction, store: &dyn CardStore) {
        if let FeedAction::Fetch { page } = action {
            let result = store.list_approved(page, self.page_size).await;
            self.apply_page(page, result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn card(n: usize) -> SharedCard {
        SharedCard {
            id: format!("card-{n}"),
            image_url: format!("https://cdn.example/{n}.png"),
            caption: None,
            locale: "en".into(),
            status: "approved".into(),
            created_at: Utc.timestamp_opt(1_770_000_000 - n as i64, 0).unwrap(),
        }
    }

    fn page_of(range: std::ops::Range<usize>) -> Vec<SharedCard> {
        range.map(card).collect()
    }

    #[test]
    fn test_initial_then_more_is_deterministic() {
        // Backend with 8 cards, page size 6.
        let mut feed = GalleryFeed::new(6);

        assert_eq!(feed.load_initial(), FeedAction::Fetch { page: 0 });
        feed.apply_page(0, Ok(page_of(0..6)));
        assert_eq!(feed.items().len(), 6);
        assert!(!feed.exhausted());

        assert_eq!(feed.load_more(), FeedAction::Fetch { page: 1 });
        feed.apply_page(1, Ok(page_of(6..8)));
        assert_eq!(feed.items().len(), 8);
        assert!(feed.exhausted());
        assert_eq!(feed.items()[6].id, "card-6", "server order preserved");

        // Exhausted feed never fetches again.
        assert_eq!(feed.load_more(), FeedAction::None);
        assert_eq!(feed.notify_sentinel_visible(), FeedAction::None);
    }

    #[test]
    fn test_full_last_page_is_not_exhausted() {
        let mut feed = GalleryFeed::new(6);
        feed.load_initial();
        feed.apply_page(0, Ok(page_of(0..6)));
        assert!(!feed.exhausted());
        feed.load_more();
        feed.apply_page(1, Ok(page_of(6..12)));
        assert!(!feed.exhausted(), "exactly full page keeps going");
        assert_eq!(feed.cursor(), 2);
    }

    #[test]
    fn test_double_sentinel_fire_fetches_once() {
        let mut feed = GalleryFeed::new(6);
        feed.load_initial();
        feed.apply_page(0, Ok(page_of(0..6)));

        let first = feed.notify_sentinel_visible();
        let second = feed.notify_sentinel_visible();
        assert_eq!(first, FeedAction::Fetch { page: 1 });
        assert_eq!(second, FeedAction::None, "guarded while in flight");

        feed.apply_page(1, Ok(page_of(6..8)));
        assert_eq!(feed.items().len(), 8);
    }

    #[test]
    fn test_first_page_failure_is_an_error_state() {
        let mut feed = GalleryFeed::new(6);
        feed.load_initial();
        feed.apply_page(0, Err(StoryError::Backend(500)));
        assert_eq!(feed.error(), Some(FeedError::Fetch));
        assert!(feed.items().is_empty());
        // Errored feed stops fetching entirely.
        assert_eq!(feed.load_more(), FeedAction::None);
    }

    #[test]
    fn test_disabled_backend_reports_setup_error() {
        let mut feed = GalleryFeed::new(6);
        feed.load_initial();
        feed.apply_page(0, Err(StoryError::Disabled));
        assert_eq!(feed.error(), Some(FeedError::Setup));
    }

    #[test]
    fn test_later_page_failure_degrades_to_end_of_data() {
        let mut feed = GalleryFeed::new(6);
        feed.load_initial();
        feed.apply_page(0, Ok(page_of(0..6)));
        feed.load_more();
        feed.apply_page(1, Err(StoryError::Backend(502)));
        assert_eq!(feed.error(), None, "no user-visible error");
        assert!(feed.exhausted());
        assert_eq!(feed.items().len(), 6, "loaded items kept");
    }

    #[test]
    fn test_submission_resets_and_reloads() {
        let mut feed = GalleryFeed::new(6);
        feed.load_initial();
        feed.apply_page(0, Ok(page_of(0..6)));

        assert_eq!(feed.on_item_submitted(), FeedAction::Fetch { page: 0 });
        assert!(feed.items().is_empty());
        assert_eq!(feed.cursor(), 0);
        assert!(!feed.exhausted());
    }

    #[test]
    fn test_stale_result_after_reset_is_dropped() {
        let mut feed = GalleryFeed::new(6);
        feed.load_initial();
        feed.apply_page(0, Ok(page_of(0..6)));
        feed.load_more(); // page 1 now pending

        // A submission resets the feed while page 1 is in flight.
        feed.on_item_submitted();
        feed.apply_page(1, Ok(page_of(6..8)));
        assert!(feed.items().is_empty(), "stale page ignored");

        feed.apply_page(0, Ok(page_of(0..3)));
        assert_eq!(feed.items().len(), 3);
        assert!(feed.exhausted());
    }
}
