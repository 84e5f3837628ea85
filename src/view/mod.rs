//! Feed view engine.
//!
//! Turns a raw news feed plus [`ViewParams`] into a [`ViewState`]: the
//! visible page, pagination metadata, and whole-feed aggregates. Every
//! function in this module is pure and synchronous; callers own the items
//! and may recompute a view whenever the feed or the params change.
//!
//! # Example
//!
//! ```
//! use newsfeed::core::{NewsItem, RelatedStock, Sentiment};
//! use newsfeed::view::{compute_view, ViewParams};
//!
//! let items = vec![
//!     NewsItem::new("a", "Acme beats estimates")
//!         .with_sentiment(Sentiment::Plain("positive".into()))
//!         .with_stock(RelatedStock::new("Acme")),
//!     NewsItem::new("b", "Quiet day"),
//! ];
//! let params = ViewParams::new(10).unwrap().with_stock_filter("Acme");
//! let view = compute_view(&items, &params);
//!
//! assert_eq!(view.visible_items.len(), 1);
//! assert_eq!(view.sentiment_counts.positive, 1);
//! ```

pub mod aggregation;
pub mod display;
pub mod filter;
pub mod pagination;
pub mod params;
pub mod pipeline;
pub mod sentiment;

pub use aggregation::{aggregate, Aggregates, SentimentCounts, StockCount, DEFAULT_TOP_STOCKS};
pub use display::{format_published, ItemDetail};
pub use filter::{filter_items, matches};
pub use pagination::{navigate, paginate, Navigation, Pagination};
pub use params::{PagingMode, ViewParams, DEFAULT_GROUP_SIZE, DEFAULT_PAGE_SIZE};
pub use pipeline::{compute_view, find_item, ViewState};
pub use sentiment::{normalize, SentimentLabel};
