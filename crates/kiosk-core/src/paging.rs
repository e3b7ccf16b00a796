//! # Search & Pagination Engine
//!
//! Pure, reusable list logic shared by the sub-category and product
//! screens: filter by a search query, sort by display name, slice into
//! pages.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  items ──► filter (case-insensitive substring on display name)         │
//! │        ──► stable sort by lowercased display name                      │
//! │            (fetch order breaks ties)                                    │
//! │        ──► total_pages = ceil(len / page_size)                         │
//! │        ──► clamp requested page into [1, total_pages]                  │
//! │        ──► slice [(page-1)*size, page*size)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Determinism is the contract: identical inputs always yield identical
//! output, and concatenating pages `1..=total_pages` reproduces the full
//! filtered, sorted set with no gaps or duplicates.
//!
//! Resetting the page to 1 when the query changes is an observable rule
//! of the *call site* (the browse controller), not of this function,
//! keeping this module a pure `(input) -> output` mapping.

/// Anything with a user-facing name the engine can filter and sort on.
pub trait DisplayName {
    fn display_name(&self) -> &str;
}

/// One page of a filtered, sorted collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// The items on the clamped page, in display order.
    pub items: Vec<&'a T>,

    /// Total pages for this (items, query, page_size) combination.
    /// Zero when nothing matches the query.
    pub total_pages: usize,

    /// The page actually served: the requested page clamped into
    /// `[1, total_pages]`, or 1 (with an empty slice) when nothing
    /// matched.
    pub page: usize,
}

impl<'a, T> Page<'a, T> {
    /// Whether a "previous" affordance should be enabled.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether a "next" affordance should be enabled.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Filters, sorts, and pages a collection.
///
/// * `query`: case-insensitive substring matched against each item's
///   display name; an empty query matches everything.
/// * `page`: 1-based requested page, clamped into range.
/// * `page_size`: must be >= 1; a zero page size yields an empty page
///   rather than dividing by zero.
pub fn paginate<'a, T: DisplayName>(
    items: &'a [T],
    query: &str,
    page: usize,
    page_size: usize,
) -> Page<'a, T> {
    if page_size == 0 {
        return Page {
            items: Vec::new(),
            total_pages: 0,
            page: 1,
        };
    }

    let needle = query.to_lowercase();
    let mut filtered: Vec<&T> = items
        .iter()
        .filter(|item| needle.is_empty() || item.display_name().to_lowercase().contains(&needle))
        .collect();

    // Stable sort: items with equal names keep their fetch order, so the
    // same page never shifts between identical calls.
    filtered.sort_by_cached_key(|item| item.display_name().to_lowercase());

    let total_pages = filtered.len().div_ceil(page_size);
    let page = if total_pages == 0 {
        1
    } else {
        page.clamp(1, total_pages)
    };

    let start = (page - 1) * page_size;
    let items = filtered
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect();

    Page {
        items,
        total_pages,
        page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Clone)]
    struct Named(&'static str);

    impl DisplayName for Named {
        fn display_name(&self) -> &str {
            self.0
        }
    }

    fn names<'a>(page: &Page<'a, Named>) -> Vec<&'static str> {
        page.items.iter().map(|n| n.0).collect()
    }

    #[test]
    fn test_empty_query_matches_everything_sorted() {
        let items = [Named("washer"), Named("Bolt"), Named("nut")];
        let page = paginate(&items, "", 1, 10);
        assert_eq!(names(&page), vec!["Bolt", "nut", "washer"]);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let items = [Named("Hex Bolt"), Named("Carriage BOLT"), Named("Washer")];
        let page = paginate(&items, "bolt", 1, 10);
        assert_eq!(names(&page), vec!["Carriage BOLT", "Hex Bolt"]);
    }

    #[test]
    fn test_equal_names_keep_fetch_order() {
        let items = [Named("Bolt"), Named("bolt"), Named("BOLT")];
        let page = paginate(&items, "", 1, 10);
        // All three lowercase to "bolt"; stable sort preserves input order.
        assert_eq!(names(&page), vec!["Bolt", "bolt", "BOLT"]);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let items: Vec<Named> = vec![Named("a"); 9];
        assert_eq!(paginate(&items, "", 1, 4).total_pages, 3);
        assert_eq!(paginate(&items, "", 1, 9).total_pages, 1);
        assert_eq!(paginate(&items, "", 1, 10).total_pages, 1);
    }

    #[test]
    fn test_page_clamps_into_range() {
        let items = [Named("a"), Named("b"), Named("c")];

        let past_end = paginate(&items, "", 99, 2);
        assert_eq!(past_end.page, 2);
        assert_eq!(names(&past_end), vec!["c"]);

        let before_start = paginate(&items, "", 0, 2);
        assert_eq!(before_start.page, 1);
        assert_eq!(names(&before_start), vec!["a", "b"]);
    }

    #[test]
    fn test_no_match_yields_page_one_empty() {
        let items = [Named("a")];
        let page = paginate(&items, "zzz", 5, 2);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_prev());
        assert!(!page.has_next());
    }

    #[test]
    fn test_prev_next_affordances() {
        let items: Vec<Named> = vec![Named("x"); 5];
        let first = paginate(&items, "", 1, 2);
        assert!(!first.has_prev());
        assert!(first.has_next());

        let last = paginate(&items, "", 3, 2);
        assert!(last.has_prev());
        assert!(!last.has_next());
    }

    /// Concatenating every page must reproduce the filtered, sorted set
    /// exactly: no duplicates, no omissions, for any query and page size.
    #[test]
    fn test_pages_are_exhaustive_and_disjoint() {
        let items = [
            Named("Washer"),
            Named("Bolt 10mm"),
            Named("bolt 8mm"),
            Named("Nut"),
            Named("Screw"),
            Named("Anchor"),
            Named("BOLT 12mm"),
        ];

        for query in ["", "bolt", "o", "zzz"] {
            for page_size in 1..=8 {
                let first = paginate(&items, query, 1, page_size);
                let mut concatenated: Vec<&str> = Vec::new();
                for p in 1..=first.total_pages.max(1) {
                    let page = paginate(&items, query, p, page_size);
                    assert_eq!(page.page, if first.total_pages == 0 { 1 } else { p });
                    concatenated.extend(names(&page));
                }

                let full = paginate(&items, query, 1, items.len().max(1));
                assert_eq!(concatenated, names(&full), "query={query:?} size={page_size}");
            }
        }
    }
}
