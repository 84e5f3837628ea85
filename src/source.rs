//! Feed sources.
//!
//! A [`FeedSource`] resolves a [`PageRequest`] to a [`FeedResponse`] or a
//! boundary error. Network transport is left to embedders; the crate
//! ships a JSON file source for the CLI and an in-memory source for
//! tests and embedding.

use crate::core::{Error, FeedResponse, NewsItem, Result};
use crate::view::pagination::page_bounds;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Optional server-side paging parameters of a list request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl PageRequest {
    /// Request for the whole feed
    pub fn all() -> Self {
        Self::default()
    }

    /// Request for one page of the feed
    pub fn page(page: usize, page_size: usize) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
        }
    }

    /// `page=N&page_size=M`, omitting absent parameters.
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::with_capacity(2);
        if let Some(page) = self.page {
            parts.push(format!("page={}", page));
        }
        if let Some(size) = self.page_size {
            parts.push(format!("page_size={}", size));
        }
        parts.join("&")
    }

    fn paged(&self) -> Option<(usize, NonZeroUsize)> {
        let size = NonZeroUsize::new(self.page_size?)?;
        Some((self.page.unwrap_or(1), size))
    }
}

/// Anything that can produce a page of the news feed.
pub trait FeedSource {
    fn fetch(&self, request: &PageRequest) -> Result<FeedResponse>;
}

/// Serves the page of `news` that `request` asks for, with `total` set to
/// the full feed size. Unpaged requests get everything.
fn serve(news: &[NewsItem], reported_total: usize, request: &PageRequest) -> FeedResponse {
    let total = if reported_total == 0 {
        news.len()
    } else {
        reported_total
    };
    match request.paged() {
        Some((page, size)) => FeedResponse {
            news: news[page_bounds(page, size, news.len())].to_vec(),
            total,
        },
        None => FeedResponse {
            news: news.to_vec(),
            total,
        },
    }
}

/// Reads a saved list response (`{"news": [...], "total": n}`) from disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FeedSource for JsonFileSource {
    fn fetch(&self, request: &PageRequest) -> Result<FeedResponse> {
        debug!(path = %self.path.display(), query = %request.to_query_string(), "Fetching feed");

        let contents =
            std::fs::read_to_string(&self.path).map_err(|e| Error::fetch(&self.path, e))?;
        let response: FeedResponse = serde_json::from_str(&contents)?;
        let served = serve(&response.news, response.total, request);

        info!(
            items = served.news.len(),
            total = served.total,
            "Fetched feed from {}",
            self.path.display()
        );
        Ok(served)
    }
}

/// In-memory feed, optionally failing every fetch with an HTTP status.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    items: Vec<NewsItem>,
    fail_status: Option<u16>,
}

impl StaticSource {
    pub fn new(items: Vec<NewsItem>) -> Self {
        Self {
            items,
            fail_status: None,
        }
    }

    /// Source whose every fetch fails with `status`
    pub fn failing(status: u16) -> Self {
        Self {
            items: Vec::new(),
            fail_status: Some(status),
        }
    }
}

impl FeedSource for StaticSource {
    fn fetch(&self, request: &PageRequest) -> Result<FeedResponse> {
        if let Some(status) = self.fail_status {
            return Err(Error::Http { status });
        }
        Ok(serve(&self.items, 0, request))
    }
}
