//! User-controlled view parameters.
//!
//! Pages are **1-based** everywhere in the engine. Use
//! [`crate::view::pagination::to_zero_based`] when a rendering layer
//! wants indices instead.

use crate::core::{Error, Result};
use std::num::NonZeroUsize;

/// Items per page when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page-number buttons shown at once
pub const DEFAULT_GROUP_SIZE: usize = 5;

const PAGE_SIZE: NonZeroUsize = const_nonzero(DEFAULT_PAGE_SIZE);
const GROUP_SIZE: NonZeroUsize = const_nonzero(DEFAULT_GROUP_SIZE);

/// Where pagination happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagingMode {
    /// The whole feed is fetched once and sliced locally
    #[default]
    Client,
    /// The fetched items already are the requested page; `total` is the
    /// server-reported size of the whole feed
    Server { total: usize },
}

impl PagingMode {
    pub fn is_server(&self) -> bool {
        matches!(self, PagingMode::Server { .. })
    }
}

/// Filters and paging for one view computation.
///
/// Empty filter strings are inactive. `page_size` and
/// `pagination_group_size` are validated at construction, so every
/// `ViewParams` admits a valid pagination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewParams {
    pub stock_filter: String,
    pub sentiment_filter: String,
    pub date_filter: String,
    /// Requested page, 1-based; clamped by the paginator
    pub page: usize,
    pub paging: PagingMode,
    page_size: NonZeroUsize,
    pagination_group_size: NonZeroUsize,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            stock_filter: String::new(),
            sentiment_filter: String::new(),
            date_filter: String::new(),
            page: 1,
            paging: PagingMode::Client,
            page_size: PAGE_SIZE,
            pagination_group_size: GROUP_SIZE,
        }
    }
}

impl ViewParams {
    /// Create params for the first page with the given page size.
    pub fn new(page_size: usize) -> Result<Self> {
        Ok(Self {
            page_size: positive("page_size", page_size)?,
            ..Self::default()
        })
    }

    pub fn with_group_size(mut self, group_size: usize) -> Result<Self> {
        self.pagination_group_size = positive("pagination_group_size", group_size)?;
        Ok(self)
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn with_stock_filter(mut self, filter: impl Into<String>) -> Self {
        self.stock_filter = filter.into();
        self
    }

    pub fn with_sentiment_filter(mut self, filter: impl Into<String>) -> Self {
        self.sentiment_filter = filter.into();
        self
    }

    pub fn with_date_filter(mut self, filter: impl Into<String>) -> Self {
        self.date_filter = filter.into();
        self
    }

    pub fn with_paging(mut self, paging: PagingMode) -> Self {
        self.paging = paging;
        self
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn group_size(&self) -> NonZeroUsize {
        self.pagination_group_size
    }
}

const fn const_nonzero(value: usize) -> NonZeroUsize {
    match NonZeroUsize::new(value) {
        Some(n) => n,
        None => panic!("default sizes are positive"),
    }
}

fn positive(name: &str, value: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(value)
        .ok_or_else(|| Error::InvalidParams(format!("{} must be a positive integer", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ViewParams::default();
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size().get(), DEFAULT_PAGE_SIZE);
        assert_eq!(params.group_size().get(), DEFAULT_GROUP_SIZE);
        assert_eq!(params.paging, PagingMode::Client);
        assert!(params.stock_filter.is_empty());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = ViewParams::new(0).unwrap_err();
        assert!(matches!(err, Error::InvalidParams(_)));
        assert!(err.to_string().contains("page_size"));
    }

    #[test]
    fn test_zero_group_size_rejected() {
        let err = ViewParams::new(20).unwrap().with_group_size(0).unwrap_err();
        assert!(err.to_string().contains("pagination_group_size"));
    }

    #[test]
    fn test_builder_sets_filters() {
        let params = ViewParams::new(20)
            .unwrap()
            .with_stock_filter("Acme")
            .with_page(3);
        assert_eq!(params.page_size().get(), 20);
        assert_eq!(params.page, 3);
        assert_eq!(params.stock_filter, "Acme");
    }
}
