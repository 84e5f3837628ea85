//! Display-ready projections of single items.
//!
//! Missing optional fields map to fixed placeholders here, so renderers
//! never branch on absence themselves.

use super::sentiment::{normalize, SentimentLabel};
use crate::core::{NewsItem, RelatedStock};
use serde::Serialize;

/// Shown when an item has no published timestamp
pub const NO_DATE: &str = "-";

/// Shown when an item carries no rationale
pub const NO_REASON: &str = "No reason given";

/// Shown when an item has no related stocks
pub const NO_STOCKS: &str = "-";

/// Length of `YYYY-MM-DD HH:MM:SS`
const DATE_DISPLAY_LEN: usize = 19;

/// Formats a published timestamp as `YYYY-MM-DD HH:MM:SS`.
///
/// The first `T` becomes a space and anything after the seconds is
/// dropped. Shorter values are shown as they are.
pub fn format_published(published: Option<&str>) -> String {
    match published {
        Some(value) => value.replacen('T', " ", 1).chars().take(DATE_DISPLAY_LEN).collect(),
        None => NO_DATE.to_string(),
    }
}

/// Comma-separated stock names with direction arrows, for list rows.
pub fn stock_summary(stocks: &[RelatedStock]) -> String {
    if stocks.is_empty() {
        return NO_STOCKS.to_string();
    }
    stocks
        .iter()
        .map(|stock| match stock.direction.arrow() {
            "" => stock.name.clone(),
            arrow => format!("{} {}", stock.name, arrow),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// One related stock as shown in the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockLine {
    pub name: String,
    pub code: Option<String>,
    pub sector: Option<String>,
    pub direction: Option<String>,
    pub arrow: &'static str,
}

impl From<&RelatedStock> for StockLine {
    fn from(stock: &RelatedStock) -> Self {
        Self {
            name: stock.name.clone(),
            code: stock.code.clone(),
            sector: stock.sector.clone(),
            direction: stock.direction.as_wire().map(str::to_string),
            arrow: stock.direction.arrow(),
        }
    }
}

/// Everything needed to inspect a single item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDetail {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Canonical label, empty when the item has none
    pub sentiment: String,
    pub badge: SentimentLabel,
    pub badge_text: &'static str,
    pub published: String,
    pub link: Option<String>,
    pub reason: String,
    pub stocks: Vec<StockLine>,
}

impl ItemDetail {
    pub fn from_item(item: &NewsItem) -> Self {
        let label = normalize(item.sentiment.as_ref());
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            content: item.content.clone(),
            sentiment: label.to_string(),
            badge: SentimentLabel::badge_style(label),
            badge_text: SentimentLabel::badge_text(label),
            published: format_published(item.published.as_deref()),
            link: item.link.clone().filter(|link| !link.is_empty()),
            reason: item
                .reason
                .clone()
                .filter(|reason| !reason.trim().is_empty())
                .unwrap_or_else(|| NO_REASON.to_string()),
            stocks: item.related_stocks.iter().map(StockLine::from).collect(),
        }
    }
}
