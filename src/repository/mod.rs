use crate::domain::author::{Author, NewAuthor, UpdateAuthor};
use crate::domain::book::{Book, NewBook, UpdateBook};
use crate::domain::list::{Page, SortField, SortOrder};
use crate::domain::product::Product;
use crate::domain::types::{AuthorId, BookId};
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod rest;

#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct BookSort {
    pub field: SortField,
    pub order: SortOrder,
}

/// Outgoing query for the books collection. Absent fields are omitted from
/// the query string entirely; the builder drops empty filter strings so an
/// inactive search input never reaches the wire.
#[derive(Debug, Clone, Default)]
pub struct BookListQuery {
    pub pagination: Option<Pagination>,
    pub sort: Option<BookSort>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<String>,
}

impl BookListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }

    pub fn sort(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort = Some(BookSort { field, order });
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into()).filter(|s| !s.is_empty());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into()).filter(|s| !s.is_empty());
        self
    }

    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into()).filter(|s| !s.is_empty());
        self
    }
}

/// Outgoing query for the authors collection. With no pagination the
/// request carries no parameters at all and the backend's default page size
/// applies.
#[derive(Debug, Clone, Default)]
pub struct AuthorListQuery {
    pub pagination: Option<Pagination>,
}

impl AuthorListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait BookReader {
    fn get_book_by_id(&self, id: BookId) -> RepositoryResult<Option<Book>>;
    fn list_books(&self, query: BookListQuery) -> RepositoryResult<Page<Book>>;
}

pub trait BookWriter {
    fn create_book(&self, new_book: &NewBook) -> RepositoryResult<()>;
    fn update_book(&self, book_id: BookId, updates: &UpdateBook) -> RepositoryResult<()>;
    fn delete_book(&self, book_id: BookId) -> RepositoryResult<()>;
}

pub trait AuthorReader {
    fn get_author_by_id(&self, id: AuthorId) -> RepositoryResult<Option<Author>>;
    fn list_authors(&self, query: AuthorListQuery) -> RepositoryResult<Page<Author>>;
}

pub trait AuthorWriter {
    fn create_author(&self, new_author: &NewAuthor) -> RepositoryResult<()>;
    fn update_author(&self, author_id: AuthorId, updates: &UpdateAuthor) -> RepositoryResult<()>;
    fn delete_author(&self, author_id: AuthorId) -> RepositoryResult<()>;
}

pub trait ProductReader {
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
}
