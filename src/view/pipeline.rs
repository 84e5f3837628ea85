//! Pure assembly of a feed view.
//!
//! ```text
//! &[NewsItem]
//!        │
//!        ▼
//! ┌──────────────────┐
//! │  compute_view()  │ ← ViewParams
//! └──────────────────┘
//!        │
//!        ├─→ aggregate()     ← whole feed, ignores filters
//!        ├─→ filter_items()  ← order-preserving
//!        ├─→ paginate()      ← filtered count (or server total)
//!        └─→ slice page
//!        │
//!        ▼
//!    ViewState
//! ```
//!
//! No stage performs I/O, logs, or touches global state. The same items
//! and params always produce an equal `ViewState`.

use super::aggregation::{aggregate, SentimentCounts, StockCount};
use super::filter::filter_items;
use super::pagination::paginate;
use super::params::{PagingMode, ViewParams};
use crate::core::NewsItem;
use serde::Serialize;

/// Snapshot of everything a renderer needs for one screen of the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    /// Items of the current page, after filtering
    pub visible_items: Vec<NewsItem>,
    pub total_filtered_count: usize,
    pub total_pages: usize,
    /// Page actually shown (1-based)
    pub current_page: usize,
    pub page_window: Vec<usize>,
    /// Whole-feed stock mentions, descending
    pub stock_counts: Vec<StockCount>,
    /// Whole-feed sentiment counts
    pub sentiment_counts: SentimentCounts,
    /// Items left out of `sentiment_counts` for having no known label
    pub unclassified_sentiments: usize,
}

impl ViewState {
    /// View of an empty feed: no items, no pages, zeroed aggregates.
    pub fn empty() -> Self {
        Self {
            visible_items: Vec::new(),
            total_filtered_count: 0,
            total_pages: 0,
            current_page: 1,
            page_window: Vec::new(),
            stock_counts: Vec::new(),
            sentiment_counts: SentimentCounts::default(),
            unclassified_sentiments: 0,
        }
    }

    /// True when the filters leave nothing to show.
    pub fn is_empty(&self) -> bool {
        self.visible_items.is_empty()
    }

    /// Whether "first"/"previous" would move
    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether "next"/"last" would move
    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// The `k` most mentioned stocks, in chart order.
    pub fn top_stocks(&self, k: usize) -> &[StockCount] {
        &self.stock_counts[..k.min(self.stock_counts.len())]
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::empty()
    }
}

/// Computes the view of `items` under `params`.
///
/// Aggregates cover every item; filters and paging affect only
/// `visible_items`, `total_filtered_count` and the page metadata.
///
/// In [`PagingMode::Server`] the items are one server page: the server
/// total drives the page math, filters narrow only the fetched page, and
/// the page is capped at `page_size` rather than sliced. Aggregates then
/// describe the fetched page only.
pub fn compute_view(items: &[NewsItem], params: &ViewParams) -> ViewState {
    let aggregates = aggregate(items);
    let filtered = filter_items(items, params);

    let total_filtered_count = match params.paging {
        PagingMode::Client => filtered.len(),
        PagingMode::Server { total } => total,
    };

    let pagination = paginate(
        total_filtered_count,
        params.page_size(),
        params.page,
        params.group_size(),
    );

    let visible_items = match params.paging {
        PagingMode::Client => filtered[pagination.bounds.clone()]
            .iter()
            .map(|item| (*item).clone())
            .collect(),
        PagingMode::Server { .. } => filtered
            .into_iter()
            .take(params.page_size().get())
            .cloned()
            .collect(),
    };

    ViewState {
        visible_items,
        total_filtered_count,
        total_pages: pagination.total_pages,
        current_page: pagination.current_page,
        page_window: pagination.page_window,
        stock_counts: aggregates.stock_counts,
        sentiment_counts: aggregates.sentiment_counts,
        unclassified_sentiments: aggregates.unclassified,
    }
}

/// Finds an item by id in the raw feed.
pub fn find_item<'a>(items: &'a [NewsItem], id: &str) -> Option<&'a NewsItem> {
    items.iter().find(|item| item.id == id)
}
