//! Page math for the feed.
//!
//! All page numbers here are 1-based. Every function is total: requests
//! outside the valid range are clamped, never rejected.

use serde::Serialize;
use std::num::NonZeroUsize;
use std::ops::Range;

/// Pagination metadata for one view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Requested page after clamping
    pub current_page: usize,
    pub total_pages: usize,
    /// Page-number buttons of the group containing `current_page`
    pub page_window: Vec<usize>,
    /// Slice bounds of the current page within the paginated items
    #[serde(skip)]
    pub bounds: Range<usize>,
}

/// Navigation request from pagination controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    First,
    Previous,
    Next,
    Last,
    /// Jump to a page number (1-based)
    Goto(usize),
}

/// Computes the clamped page, page count, window and slice bounds.
pub fn paginate(
    total_count: usize,
    page_size: NonZeroUsize,
    requested_page: usize,
    group_size: NonZeroUsize,
) -> Pagination {
    let total_pages = total_pages(total_count, page_size);
    let current_page = clamp_page(requested_page, total_pages);

    Pagination {
        current_page,
        total_pages,
        page_window: page_window(current_page, total_pages, group_size),
        bounds: page_bounds(current_page, page_size, total_count),
    }
}

/// `ceil(total_count / page_size)`; zero only for an empty feed.
pub fn total_pages(total_count: usize, page_size: NonZeroUsize) -> usize {
    total_count.div_ceil(page_size.get())
}

/// Clamps a requested page into `[1, total_pages]`.
///
/// With no pages at all the current page is 1.
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    if total_pages == 0 {
        1
    } else {
        requested.clamp(1, total_pages)
    }
}

/// Slice bounds of `page` over `total_count` items, capped at the end.
pub fn page_bounds(page: usize, page_size: NonZeroUsize, total_count: usize) -> Range<usize> {
    let start = to_zero_based(page)
        .saturating_mul(page_size.get())
        .min(total_count);
    let end = start.saturating_add(page_size.get()).min(total_count);
    start..end
}

/// Fixed, non-overlapping group of page numbers containing `page`.
///
/// The window only moves when `page` crosses a group boundary.
pub fn page_window(page: usize, total_pages: usize, group_size: NonZeroUsize) -> Vec<usize> {
    if total_pages == 0 {
        return Vec::new();
    }
    let page = clamp_page(page, total_pages);
    let group = (page - 1) / group_size.get();
    let start = group * group_size.get() + 1;
    let end = (start + group_size.get() - 1).min(total_pages);
    (start..=end).collect()
}

/// Applies a navigation request to `current`, clamped to the feed.
///
/// Previous on the first page and next on the last page are no-ops.
pub fn navigate(current: usize, total_pages: usize, navigation: Navigation) -> usize {
    let target = match navigation {
        Navigation::First => 1,
        Navigation::Previous => current.saturating_sub(1),
        Navigation::Next => current.saturating_add(1),
        Navigation::Last => total_pages,
        Navigation::Goto(page) => page,
    };
    clamp_page(target, total_pages)
}

/// 1-based page to 0-based index
pub fn to_zero_based(page: usize) -> usize {
    page.saturating_sub(1)
}

/// 0-based index to 1-based page
pub fn from_zero_based(index: usize) -> usize {
    index.saturating_add(1)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: window values are in range and strictly increasing,
        /// non-empty whenever there is a page.
        #[test]
        fn window_is_valid(
            total in 0usize..500,
            size in 1usize..50,
            page in 0usize..100,
            group in 1usize..10,
        ) {
            let p = paginate(total, NonZeroUsize::new(size).unwrap(), page, NonZeroUsize::new(group).unwrap());
            prop_assert_eq!(p.page_window.is_empty(), p.total_pages == 0);
            prop_assert!(p.page_window.len() <= group);
            prop_assert!(p.page_window.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(p.page_window.iter().all(|&n| n >= 1 && n <= p.total_pages));
            if p.total_pages > 0 {
                prop_assert!(p.page_window.contains(&p.current_page));
            }
        }

        /// Property: page slices never exceed the page size or the total.
        #[test]
        fn bounds_are_within_page(
            total in 0usize..500,
            size in 1usize..50,
            page in 0usize..100,
        ) {
            let p = paginate(total, NonZeroUsize::new(size).unwrap(), page, NonZeroUsize::MIN);
            prop_assert!(p.bounds.start <= p.bounds.end);
            prop_assert!(p.bounds.end <= total);
            prop_assert!(p.bounds.len() <= size);
            if total > 0 {
                prop_assert!(!p.bounds.is_empty());
            }
        }

        /// Property: navigation never leaves the valid range.
        #[test]
        fn navigation_stays_in_range(
            current in 0usize..100,
            total_pages in 0usize..50,
            goto in 0usize..200,
        ) {
            for nav in [
                Navigation::First,
                Navigation::Previous,
                Navigation::Next,
                Navigation::Last,
                Navigation::Goto(goto),
            ] {
                let page = navigate(current, total_pages, nav);
                prop_assert!(page >= 1);
                prop_assert!(page <= total_pages.max(1));
            }
        }
    }
}
