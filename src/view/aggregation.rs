//! Frequency tables for summary charts.
//!
//! Aggregates always describe the whole feed: they are computed from the
//! unfiltered items, so changing a filter never changes a chart.

use super::sentiment::{normalize, SentimentLabel};
use crate::core::NewsItem;
use serde::Serialize;
use std::collections::HashMap;

/// Number of stock bars shown in the summary chart
pub const DEFAULT_TOP_STOCKS: usize = 5;

/// Mentions of one stock across the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockCount {
    pub name: String,
    pub count: usize,
}

/// Items per counted sentiment label.
///
/// Always carries all three keys, zero when unseen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentCounts {
    pub fn get(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    fn increment(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }
}

/// Both frequency tables plus the number of items whose sentiment fell
/// outside the counted set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregates {
    /// Descending by count; ties keep first-seen order
    pub stock_counts: Vec<StockCount>,
    pub sentiment_counts: SentimentCounts,
    /// Items with an empty or unknown label, absent from `sentiment_counts`
    pub unclassified: usize,
}

/// Builds stock and sentiment frequency tables in one pass.
///
/// A stock listed twice on the same item counts twice. Labels other than
/// positive, negative and neutral are left out of the sentiment table.
pub fn aggregate(items: &[NewsItem]) -> Aggregates {
    let mut stock_counts: Vec<StockCount> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut sentiment_counts = SentimentCounts::default();
    let mut unclassified = 0;

    for item in items {
        for stock in &item.related_stocks {
            match positions.get(stock.name.as_str()) {
                Some(&idx) => stock_counts[idx].count += 1,
                None => {
                    positions.insert(stock.name.as_str(), stock_counts.len());
                    stock_counts.push(StockCount {
                        name: stock.name.clone(),
                        count: 1,
                    });
                }
            }
        }

        match SentimentLabel::from_label(normalize(item.sentiment.as_ref())) {
            Some(label) => sentiment_counts.increment(label),
            None => unclassified += 1,
        }
    }

    // Stable sort keeps first-seen order among equal counts
    stock_counts.sort_by(|a, b| b.count.cmp(&a.count));

    Aggregates {
        stock_counts,
        sentiment_counts,
        unclassified,
    }
}
