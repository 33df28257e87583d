//! List-view state: pagination, sort, and filter parameters for one
//! resource collection, plus the page shape the backend returns.
//!
//! Changing the filter set or the sort key invalidates the meaning of the
//! current page number, so every such transition resets the page to 1.

use serde::{Deserialize, Serialize};

use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

/// Sort keys agreed with the backend for the books collection.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SortField {
    #[default]
    Id,
    Title,
    Year,
}

impl SortField {
    /// Query-string value understood by the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Title => "title",
            SortField::Year => "year",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Query-string value understood by the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

/// Free-text search filters for the books list. An empty string means the
/// filter is inactive and is omitted from the outgoing query.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookFilters {
    pub title: String,
    pub author: String,
    pub year: String,
}

impl BookFilters {
    /// Trims each filter value the way the search inputs do.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            year: self.year.trim().to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.author.is_empty() && self.year.is_empty()
    }
}

/// Client-held pagination/sort/filter parameters for one resource's list
/// view. Mutated only through the transition methods below, which maintain
/// the `page >= 1` invariant and the reset-on-reshape rule.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListState {
    page: usize,
    page_size: usize,
    sort_field: SortField,
    sort_order: SortOrder,
    filters: BookFilters,
}

impl ListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size,
            sort_field: SortField::default(),
            sort_order: SortOrder::default(),
            filters: BookFilters::default(),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn filters(&self) -> &BookFilters {
        &self.filters
    }

    /// Replaces the filter set and resets the page to 1.
    pub fn set_filters(&mut self, filters: BookFilters) {
        self.filters = filters.normalized();
        self.page = 1;
    }

    /// Drops all filters and resets the page to 1.
    pub fn clear_filters(&mut self) {
        self.filters = BookFilters::default();
        self.page = 1;
    }

    /// Updates the sort key and resets the page to 1.
    pub fn set_sort(&mut self, field: SortField, order: SortOrder) {
        self.sort_field = field;
        self.sort_order = order;
        self.page = 1;
    }

    /// Forward navigation is unbounded; paging past the last page yields an
    /// empty result set from the server, rendered as an explicit empty state.
    pub fn advance_page(&mut self) {
        self.page += 1;
    }

    /// Backward navigation stops at page 1. Returns whether the page actually
    /// changed, so callers can skip the fetch on the no-op case.
    pub fn retreat_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

/// One fetched page of records. Server order is display order; the client
/// never re-sorts or re-filters locally.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total_pages: 0,
            total_items: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_start_on_first_page_sorted_by_id() {
        let state = ListState::default();
        assert_eq!(state.page(), 1);
        assert_eq!(state.sort_field(), SortField::Id);
        assert_eq!(state.sort_order(), SortOrder::Ascending);
        assert!(state.filters().is_empty());
    }

    #[test]
    fn setting_filters_resets_page() {
        let mut state = ListState::default();
        state.advance_page();
        state.advance_page();
        assert_eq!(state.page(), 3);

        state.set_filters(BookFilters {
            title: " Dune ".into(),
            ..Default::default()
        });
        assert_eq!(state.page(), 1);
        assert_eq!(state.filters().title, "Dune");
    }

    #[test]
    fn clearing_filters_resets_page() {
        let mut state = ListState::default();
        state.set_filters(BookFilters {
            year: "2008".into(),
            ..Default::default()
        });
        state.advance_page();

        state.clear_filters();
        assert_eq!(state.page(), 1);
        assert!(state.filters().is_empty());
    }

    #[test]
    fn changing_sort_resets_page() {
        let mut state = ListState::default();
        state.advance_page();

        state.set_sort(SortField::Year, SortOrder::Descending);
        assert_eq!(state.page(), 1);
        assert_eq!(state.sort_field(), SortField::Year);
        assert_eq!(state.sort_order(), SortOrder::Descending);
    }

    #[test]
    fn retreat_is_a_noop_on_first_page() {
        let mut state = ListState::default();
        assert!(!state.retreat_page());
        assert_eq!(state.page(), 1);

        state.advance_page();
        assert!(state.retreat_page());
        assert_eq!(state.page(), 1);
    }
}
