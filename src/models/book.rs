use serde::{Deserialize, Serialize};

use crate::domain::book::{Book, BookAuthor, NewBook, UpdateBook};

/// Author summary as embedded in book payloads.
#[derive(Debug, Clone, Deserialize)]
pub struct BookAuthorModel {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub city: String,
}

/// Book row as returned by the backend. Fields the panel does not use
/// (`created_at`) are ignored during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct BookModel {
    pub id: i32,
    pub title: String,
    pub year: i32,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub author: Option<BookAuthorModel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookListResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub books: Vec<BookModel>,
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub total_pages: usize,
    #[serde(default)]
    pub total_items: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookItemResponse {
    pub success: bool,
    #[serde(default)]
    pub book: Option<BookModel>,
}

/// Request body for book create and update calls.
#[derive(Debug, Clone, Serialize)]
pub struct BookPayload {
    pub title: String,
    pub year: i32,
    pub isbn: Option<String>,
    pub author_id: i32,
}

impl From<BookAuthorModel> for BookAuthor {
    fn from(model: BookAuthorModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            city: model.city,
        }
    }
}

impl From<BookModel> for Book {
    fn from(model: BookModel) -> Self {
        Self {
            id: model.id,
            title: model.title,
            year: model.year,
            isbn: model.isbn,
            author: model.author.map(Into::into),
        }
    }
}

impl From<&NewBook> for BookPayload {
    fn from(new_book: &NewBook) -> Self {
        Self {
            title: new_book.title.as_str().to_string(),
            year: new_book.year,
            isbn: new_book.isbn.clone(),
            author_id: new_book.author_id.get(),
        }
    }
}

impl From<&UpdateBook> for BookPayload {
    fn from(updates: &UpdateBook) -> Self {
        Self {
            title: updates.title.as_str().to_string(),
            year: updates.year,
            isbn: updates.isbn.clone(),
            author_id: updates.author_id.get(),
        }
    }
}
