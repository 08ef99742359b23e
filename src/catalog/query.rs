//! Query construction: turning a `PageRequest` into wire query pairs.
//!
//! Pure and infallible. The two omission rules matter for correctness:
//! an empty search term is omitted entirely (never sent as `query=`), and
//! the `All` category sentinel is omitted so the catalog's default
//! unfiltered behavior applies.

use crate::browse::filter::FilterState;
use crate::catalog::types::PageRequest;

/// Build the normalized page request for the current filter snapshot.
pub fn build(filter: &FilterState, page: u32, limit: u32) -> PageRequest {
    debug_assert!(page >= 1, "pages are 1-based");
    debug_assert!(limit > 0, "limit must be positive");
    PageRequest {
        page,
        limit,
        filter: filter.clone(),
    }
}

impl PageRequest {
    /// The `(key, value)` pairs to send as the URL query string.
    ///
    /// Order is stable so identical requests produce identical URLs, which
    /// keeps the page cache keyed consistently.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("sortBy", self.filter.sort_by.as_query_value().to_string()),
            (
                "sortOrder",
                self.filter.sort_order.as_query_value().to_string(),
            ),
        ];
        if !self.filter.search_term.is_empty() {
            pairs.push(("query", self.filter.search_term.clone()));
        }
        if let Some(category) = self.filter.category.as_query_value() {
            pairs.push(("category", category.to_string()));
        }
        pairs
    }
}
