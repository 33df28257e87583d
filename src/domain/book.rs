use serde::{Deserialize, Serialize};

use crate::domain::types::{AuthorId, BookTitle};

/// Author summary embedded in a book as returned by the backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookAuthor {
    pub id: i32,
    pub name: String,
    pub city: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub year: i32,
    pub isbn: Option<String>,
    /// Absent when the backend has no author linked to the book.
    pub author: Option<BookAuthor>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewBook {
    pub title: BookTitle,
    pub year: i32,
    pub isbn: Option<String>,
    pub author_id: AuthorId,
}

impl NewBook {
    #[must_use]
    pub fn new(title: BookTitle, year: i32, isbn: Option<String>, author_id: AuthorId) -> Self {
        Self {
            title,
            year,
            isbn: isbn
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            author_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateBook {
    pub title: BookTitle,
    pub year: i32,
    pub isbn: Option<String>,
    pub author_id: AuthorId,
}

impl UpdateBook {
    #[must_use]
    pub fn new(title: BookTitle, year: i32, isbn: Option<String>, author_id: AuthorId) -> Self {
        Self {
            title,
            year,
            isbn: isbn
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            author_id,
        }
    }
}
