//! Filter predicates for news items.
//!
//! Three independent clauses (stock name, sentiment label, date prefix)
//! are ANDed together. An empty filter string makes its clause vacuously
//! true. All matching is exact-case.

use super::params::ViewParams;
use super::sentiment::normalize;
use crate::core::NewsItem;

/// True when `item` passes every active filter in `params`.
pub fn matches(item: &NewsItem, params: &ViewParams) -> bool {
    stock_clause(item, &params.stock_filter)
        && sentiment_clause(item, &params.sentiment_filter)
        && date_clause(item, &params.date_filter)
}

/// Order-preserving subsequence of items passing all filters.
pub fn filter_items<'a>(items: &'a [NewsItem], params: &ViewParams) -> Vec<&'a NewsItem> {
    items.iter().filter(|item| matches(item, params)).collect()
}

/// Stock clause. An item without related stocks never matches a
/// non-empty filter.
pub fn stock_clause(item: &NewsItem, needle: &str) -> bool {
    needle.is_empty()
        || item
            .related_stocks
            .iter()
            .any(|stock| stock.name.contains(needle))
}

pub fn sentiment_clause(item: &NewsItem, label: &str) -> bool {
    label.is_empty() || normalize(item.sentiment.as_ref()) == label
}

pub fn date_clause(item: &NewsItem, prefix: &str) -> bool {
    prefix.is_empty()
        || item
            .published
            .as_deref()
            .is_some_and(|published| published.starts_with(prefix))
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::core::RelatedStock;
    use proptest::prelude::*;

    proptest! {
        /// Property: `matches` agrees with substring and prefix checks
        /// done directly on the raw fields.
        #[test]
        fn matches_is_conjunction_of_clauses(
            stock in "[A-C]{0,2}",
            date in "(2024-0[12])?",
            names in prop::collection::vec("[A-C]{1,3}", 0..3),
        ) {
            let published = "2024-01-15";
            let expected = (stock.is_empty() || names.iter().any(|n| n.contains(stock.as_str())))
                && published.starts_with(date.as_str());

            let mut item = NewsItem::new("p", "").with_published(published);
            for name in names {
                item = item.with_stock(RelatedStock::new(name));
            }
            let params = ViewParams::default()
                .with_stock_filter(stock)
                .with_date_filter(date);

            prop_assert_eq!(matches(&item, &params), expected);
        }
    }
}
