//! State-holding shell around the view engine.
//!
//! A [`FeedSession`] owns the fetched items and the current params and
//! keeps exactly one derived [`ViewState`]. Every change to either input
//! recomputes the snapshot from scratch; nothing is patched in place.

use chrono::{DateTime, Utc};
use tracing::{debug, info_span, warn};

use crate::core::{Error, NewsItem, Result};
use crate::source::{FeedSource, PageRequest};
use crate::view::pagination::navigate;
use crate::view::{compute_view, find_item, ItemDetail, Navigation, PagingMode, ViewParams, ViewState};

/// Outcome of the most recent fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// No fetch has completed yet
    Loading,
    Loaded,
    /// The fetch failed; holds the message shown to the user
    Failed(String),
}

/// What the user should see besides the items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus<'a> {
    Loading,
    Failed(&'a str),
    /// Fetch succeeded but nothing passes the filters
    Empty,
    Ready,
}

impl FeedStatus<'_> {
    pub fn message(&self) -> Option<&str> {
        match self {
            FeedStatus::Loading => Some("Loading..."),
            FeedStatus::Failed(message) => Some(*message),
            FeedStatus::Empty => Some("No results"),
            FeedStatus::Ready => None,
        }
    }
}

pub struct FeedSession<S: FeedSource> {
    source: S,
    items: Vec<NewsItem>,
    params: ViewParams,
    view: ViewState,
    state: LoadState,
    fetched_at: Option<DateTime<Utc>>,
}

impl<S: FeedSource> FeedSession<S> {
    /// Create a session; nothing is fetched until [`Self::refresh`].
    pub fn new(source: S, params: ViewParams) -> Self {
        Self {
            source,
            items: Vec::new(),
            params,
            view: ViewState::empty(),
            state: LoadState::Loading,
            fetched_at: None,
        }
    }

    /// Fetch the feed (or the current page in server mode) and recompute.
    ///
    /// A failed fetch leaves an empty feed and a user-facing message; the
    /// view stays valid. In server mode a page past the reported total is
    /// clamped and the clamped page fetched in its place.
    pub fn refresh(&mut self) {
        self.fetch();
        if self.params.paging.is_server()
            && self.view.total_pages > 0
            && self.view.current_page != self.params.page
        {
            debug!(
                requested = self.params.page,
                page = self.view.current_page,
                "Requested page outside the feed, fetching the clamped page"
            );
            self.params.page = self.view.current_page;
            self.fetch();
        }
    }

    fn fetch(&mut self) {
        let request = self.page_request();
        let _span = info_span!("fetch", query = %request.to_query_string()).entered();

        match self.source.fetch(&request) {
            Ok(response) => {
                if let PagingMode::Server { .. } = self.params.paging {
                    self.params.paging = PagingMode::Server {
                        total: response.total,
                    };
                }
                self.items = response.news;
                self.state = LoadState::Loaded;
                self.fetched_at = Some(Utc::now());
            }
            Err(e) => {
                warn!("Feed fetch failed: {}", e);
                self.items.clear();
                if let PagingMode::Server { .. } = self.params.paging {
                    self.params.paging = PagingMode::Server { total: 0 };
                }
                self.state = LoadState::Failed(e.user_message());
            }
        }
        self.recompute();
    }

    /// Replace all params. Server mode refetches when the page changes.
    pub fn set_params(&mut self, params: ViewParams) {
        let page_changed = params.page != self.params.page;
        let paging = self.params.paging;
        self.params = params;
        if paging.is_server() {
            // The server total belongs to the session, not the caller
            self.params.paging = paging;
            if page_changed {
                self.refresh();
                return;
            }
        }
        self.recompute();
    }

    /// Move through pages. Returns false when the request is a no-op.
    pub fn navigate(&mut self, navigation: Navigation) -> bool {
        let target = navigate(self.view.current_page, self.view.total_pages, navigation);
        if target == self.view.current_page {
            return false;
        }
        let params = self.params.clone().with_page(target);
        self.set_params(params);
        true
    }

    pub fn set_stock_filter(&mut self, filter: impl Into<String>) {
        let params = self.params.clone().with_stock_filter(filter).with_page(1);
        self.set_params(params);
    }

    pub fn set_sentiment_filter(&mut self, filter: impl Into<String>) {
        let params = self.params.clone().with_sentiment_filter(filter).with_page(1);
        self.set_params(params);
    }

    pub fn set_date_filter(&mut self, filter: impl Into<String>) {
        let params = self.params.clone().with_date_filter(filter).with_page(1);
        self.set_params(params);
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn params(&self) -> &ViewParams {
        &self.params
    }

    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    pub fn load_state(&self) -> &LoadState {
        &self.state
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub fn status(&self) -> FeedStatus<'_> {
        match &self.state {
            LoadState::Loading => FeedStatus::Loading,
            LoadState::Failed(message) => FeedStatus::Failed(message),
            LoadState::Loaded if self.view.is_empty() => FeedStatus::Empty,
            LoadState::Loaded => FeedStatus::Ready,
        }
    }

    /// Detail of one fetched item.
    pub fn detail(&self, id: &str) -> Result<ItemDetail> {
        find_item(&self.items, id)
            .map(ItemDetail::from_item)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    fn page_request(&self) -> PageRequest {
        match self.params.paging {
            PagingMode::Client => PageRequest::all(),
            PagingMode::Server { .. } => {
                PageRequest::page(self.params.page.max(1), self.params.page_size().get())
            }
        }
    }

    fn recompute(&mut self) {
        self.view = compute_view(&self.items, &self.params);
        if self.view.unclassified_sentiments > 0 {
            // Left out of the sentiment chart; may undercount the feed
            warn!(
                count = self.view.unclassified_sentiments,
                "Items without a positive/negative/neutral label are excluded from sentiment counts"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RelatedStock, Sentiment};
    use crate::source::StaticSource;

    fn feed(count: usize) -> Vec<NewsItem> {
        (0..count)
            .map(|i| {
                let item = NewsItem::new(format!("n{}", i), format!("Item {}", i))
                    .with_sentiment(Sentiment::Plain("positive".into()));
                if i % 2 == 0 {
                    item.with_stock(RelatedStock::new("Acme"))
                } else {
                    item
                }
            })
            .collect()
    }

    fn client_session(count: usize) -> FeedSession<StaticSource> {
        let mut session = FeedSession::new(
            StaticSource::new(feed(count)),
            ViewParams::new(10).unwrap(),
        );
        session.refresh();
        session
    }

    #[test]
    fn test_loading_before_refresh() {
        let session = FeedSession::new(StaticSource::new(feed(3)), ViewParams::default());
        assert_eq!(session.status(), FeedStatus::Loading);
        assert_eq!(session.status().message(), Some("Loading..."));
        assert_eq!(session.view(), &ViewState::empty());
    }

    #[test]
    fn test_refresh_computes_view() {
        let session = client_session(25);
        assert_eq!(session.status(), FeedStatus::Ready);
        assert_eq!(session.view().total_pages, 3);
        assert_eq!(session.view().visible_items.len(), 10);
        assert!(session.fetched_at().is_some());
    }

    #[test]
    fn test_failed_fetch_yields_empty_view_and_message() {
        let mut session = FeedSession::new(StaticSource::failing(502), ViewParams::default());
        session.refresh();
        assert_eq!(session.status(), FeedStatus::Failed("API request failed"));
        assert_eq!(session.view(), &ViewState::empty());
    }

    #[test]
    fn test_empty_results_distinct_from_failure() {
        let mut session = client_session(5);
        session.set_stock_filter("Initech");
        assert_eq!(session.status(), FeedStatus::Empty);
        assert_eq!(session.status().message(), Some("No results"));
    }

    #[test]
    fn test_navigation() {
        let mut session = client_session(25);
        assert!(!session.navigate(Navigation::Previous));
        assert!(session.navigate(Navigation::Last));
        assert_eq!(session.view().current_page, 3);
        assert!(!session.navigate(Navigation::Next));
        assert!(session.navigate(Navigation::Previous));
        assert_eq!(session.view().current_page, 2);
        assert!(session.navigate(Navigation::First));
        assert_eq!(session.view().visible_items[0].id, "n0");
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut session = client_session(25);
        session.navigate(Navigation::Last);
        session.set_stock_filter("Acme");
        assert_eq!(session.view().current_page, 1);
        assert_eq!(session.view().total_filtered_count, 13);
        // Aggregates still cover all 25 items
        assert_eq!(session.view().sentiment_counts.positive, 25);
    }

    #[test]
    fn test_server_mode_refetches_pages() {
        let params = ViewParams::new(10)
            .unwrap()
            .with_paging(PagingMode::Server { total: 0 });
        let mut session = FeedSession::new(StaticSource::new(feed(25)), params);
        session.refresh();

        assert_eq!(session.params().paging, PagingMode::Server { total: 25 });
        assert_eq!(session.items().len(), 10);
        assert_eq!(session.view().total_pages, 3);

        assert!(session.navigate(Navigation::Last));
        assert_eq!(session.items().len(), 5);
        assert_eq!(session.view().visible_items[0].id, "n20");
        assert_eq!(session.view().current_page, 3);
    }

    #[test]
    fn test_server_mode_page_past_end_fetches_last_page() {
        let params = ViewParams::new(10)
            .unwrap()
            .with_page(99)
            .with_paging(PagingMode::Server { total: 0 });
        let mut session = FeedSession::new(StaticSource::new(feed(25)), params);
        session.refresh();

        assert_eq!(session.status(), FeedStatus::Ready);
        assert_eq!(session.view().current_page, 3);
        assert_eq!(session.view().total_pages, 3);
        assert_eq!(session.params().page, 3);
        let ids: Vec<_> = session
            .view()
            .visible_items
            .iter()
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(ids, vec!["n20", "n21", "n22", "n23", "n24"]);
    }

    #[test]
    fn test_server_mode_page_zero_fetches_first_page() {
        let params = ViewParams::new(10)
            .unwrap()
            .with_page(0)
            .with_paging(PagingMode::Server { total: 0 });
        let mut session = FeedSession::new(StaticSource::new(feed(25)), params);
        session.refresh();

        assert_eq!(session.view().current_page, 1);
        assert_eq!(session.view().visible_items[0].id, "n0");
    }

    #[test]
    fn test_detail_lookup() {
        let session = client_session(3);
        assert_eq!(session.detail("n1").unwrap().title, "Item 1");
        assert!(matches!(session.detail("zzz"), Err(Error::NotFound(_))));
    }
}
