//! Filter, paginate and summarize sentiment-tagged news feeds.
//!
//! The [`view`] module is the pure engine: given the fetched items and a
//! set of [`view::ViewParams`] it derives one [`view::ViewState`]. The
//! [`session`] module wraps it with fetching and load state, and [`io`]
//! renders the result.

pub mod cli;
pub mod config;
pub mod core;
pub mod formatting;
pub mod io;
pub mod session;
pub mod source;
pub mod view;

pub use crate::core::{Direction, Error, FeedResponse, NewsItem, RelatedStock, Result, Sentiment};

pub use crate::config::{load_config, FeedConfig};

pub use crate::session::{FeedSession, FeedStatus, LoadState};

pub use crate::source::{FeedSource, JsonFileSource, PageRequest, StaticSource};

pub use crate::view::{compute_view, ItemDetail, Navigation, PagingMode, ViewParams, ViewState};
