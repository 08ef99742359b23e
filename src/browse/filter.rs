//! Filter state: the immutable snapshot of search term, category, and sort
//! selection that scopes a catalog query.
//!
//! Any change to any field produces a new `FilterState` and invalidates the
//! current pagination cursor (the controller bumps its generation and resets
//! to page 1).

use std::fmt;

/// Category tags understood by the catalog service.
///
/// `All` is a client-side sentinel: it is never sent on the wire, so the
/// service applies its default (unfiltered) behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Tech,
    MovieTrailer,
    WebseriesClips,
    Sports,
    HindiMusic,
}

impl Category {
    /// Cycling order for the category selector, `All` first.
    pub const VARIANTS: &'static [Category] = &[
        Category::All,
        Category::Tech,
        Category::MovieTrailer,
        Category::WebseriesClips,
        Category::Sports,
        Category::HindiMusic,
    ];

    /// Wire name as the catalog expects it, or `None` for the `All` sentinel.
    pub fn as_query_value(self) -> Option<&'static str> {
        match self {
            Category::All => None,
            Category::Tech => Some("Tech"),
            Category::MovieTrailer => Some("Movie Trailer"),
            Category::WebseriesClips => Some("Webseries Clips"),
            Category::Sports => Some("Sports"),
            Category::HindiMusic => Some("Hindi Music"),
        }
    }

    /// Cycle to the next category, wrapping back to `All`.
    pub fn next(self) -> Self {
        let idx = Self::VARIANTS.iter().position(|c| *c == self).unwrap_or(0);
        Self::VARIANTS[(idx + 1) % Self::VARIANTS.len()]
    }

    /// Human-readable name for the filter bar.
    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Tech => "Tech",
            Category::MovieTrailer => "Movie Trailers",
            Category::WebseriesClips => "Webseries",
            Category::Sports => "Sports",
            Category::HindiMusic => "Hindi Music",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The sortable attribute a query orders by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    CreatedAt,
    Views,
}

impl SortKey {
    pub fn as_query_value(self) -> &'static str {
        match self {
            SortKey::CreatedAt => "createdAt",
            SortKey::Views => "views",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SortKey::CreatedAt => SortKey::Views,
            SortKey::Views => SortKey::CreatedAt,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::CreatedAt => "Newest",
            SortKey::Views => "Most Viewed",
        }
    }
}

/// Sort direction. The catalog defaults to descending (newest / most first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_query_value(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Immutable snapshot of the full filter selection.
///
/// Compared by value: the UI only reports a filter change to the controller
/// when the new snapshot differs from the old one, so redundant events
/// (e.g. a debounce emission equal to the committed term) are cheap to drop.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FilterState {
    /// Free-text search term. Empty means "no query" and is omitted on the wire.
    pub search_term: String,
    pub category: Category,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl FilterState {
    pub fn with_search_term(&self, term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            ..self.clone()
        }
    }

    pub fn with_category(&self, category: Category) -> Self {
        Self {
            category,
            ..self.clone()
        }
    }

    pub fn with_sort_by(&self, sort_by: SortKey) -> Self {
        Self {
            sort_by,
            ..self.clone()
        }
    }

    pub fn with_sort_order(&self, sort_order: SortOrder) -> Self {
        Self {
            sort_order,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sentinel_has_no_query_value() {
        assert_eq!(Category::All.as_query_value(), None);
        assert_eq!(Category::Tech.as_query_value(), Some("Tech"));
        assert_eq!(
            Category::MovieTrailer.as_query_value(),
            Some("Movie Trailer")
        );
    }

    #[test]
    fn test_category_cycle_wraps() {
        let mut cat = Category::All;
        for _ in 0..Category::VARIANTS.len() {
            cat = cat.next();
        }
        assert_eq!(cat, Category::All);
    }

    #[test]
    fn test_default_filter() {
        let filter = FilterState::default();
        assert!(filter.search_term.is_empty());
        assert_eq!(filter.category, Category::All);
        assert_eq!(filter.sort_by, SortKey::CreatedAt);
        assert_eq!(filter.sort_order, SortOrder::Desc);
    }

    #[test]
    fn test_with_builders_produce_distinct_snapshots() {
        let base = FilterState::default();
        let changed = base.with_category(Category::Sports);
        assert_ne!(base, changed);
        assert_eq!(changed.category, Category::Sports);
        // Untouched fields carried over
        assert_eq!(changed.sort_by, base.sort_by);
    }
}
