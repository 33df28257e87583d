//! Aggregated view models for the dashboard and for mutation outcomes.

use serde::Serialize;

use crate::dto::authors::{AuthorOption, AuthorsPageData};
use crate::dto::books::BooksPageData;

/// Snapshot counters shown above the tables. Fetched once at startup and
/// not kept live afterwards.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatsData {
    /// Distinct publication years across the books sample.
    pub published_years: usize,
    /// Total author count as reported by the collection endpoint.
    pub total_authors: usize,
}

/// Everything the initial page load renders.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardData {
    pub books: BooksPageData,
    pub authors: AuthorsPageData,
    pub author_options: Vec<AuthorOption>,
    pub stats: StatsData,
}

/// Views refreshed after a book mutation: the book table plus the author
/// table, whose derived book counts embed book state.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookMutationView {
    pub books: BooksPageData,
    pub authors: AuthorsPageData,
}

/// Views refreshed after an author mutation: the author table plus the
/// author-selection dropdown used by the book form.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AuthorMutationView {
    pub authors: AuthorsPageData,
    pub author_options: Vec<AuthorOption>,
}
