//! REST implementation of the repository traits.
//!
//! The backend signals application-level failure through the `success` flag
//! in the body; HTTP status codes are not inspected. The collection path for
//! authors is singular (`/api/author`) while the item and create paths are
//! plural (`/api/authors`) — that asymmetry is part of the consumed contract
//! and is reproduced here on purpose.

use reqwest::Url;
use reqwest::blocking::Client;

use crate::domain::author::{Author, NewAuthor, UpdateAuthor};
use crate::domain::book::{Book, NewBook, UpdateBook};
use crate::domain::list::Page;
use crate::domain::product::Product;
use crate::domain::types::{AuthorId, BookId};
use crate::models::StatusResponse;
use crate::models::author::{AuthorItemResponse, AuthorListResponse, AuthorPayload};
use crate::models::book::{BookItemResponse, BookListResponse, BookPayload};
use crate::models::product::ProductListResponse;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    AuthorListQuery, AuthorReader, AuthorWriter, BookListQuery, BookReader, BookWriter,
    ProductReader,
};

/// Repository talking to the backend REST service over blocking HTTP.
pub struct RestRepository {
    http: Client,
    base_url: Url,
}

impl RestRepository {
    /// Builds a repository for the given base URL. No request timeout is
    /// configured: a hung backend call blocks its caller until the OS gives
    /// up, which matches the panel's historical behavior.
    pub fn new(base_url: &str) -> RepositoryResult<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| RepositoryError::BaseUrl(e.to_string()))?;
        let http = Client::builder().build()?;

        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> RepositoryResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| RepositoryError::BaseUrl(e.to_string()))
    }
}

fn book_list_url(base: &Url, query: &BookListQuery) -> RepositoryResult<Url> {
    let mut url = base
        .join("/api/books")
        .map_err(|e| RepositoryError::BaseUrl(e.to_string()))?;

    {
        let mut pairs = url.query_pairs_mut();
        if let Some(pagination) = &query.pagination {
            pairs.append_pair("page", &pagination.page.to_string());
            pairs.append_pair("limit", &pagination.per_page.to_string());
        }
        if let Some(sort) = &query.sort {
            pairs.append_pair("sort_by", sort.field.as_str());
            pairs.append_pair("order", sort.order.as_str());
        }
        if let Some(title) = &query.title {
            pairs.append_pair("title", title);
        }
        if let Some(author) = &query.author {
            pairs.append_pair("author", author);
        }
        if let Some(year) = &query.year {
            pairs.append_pair("year", year);
        }
    }

    Ok(url)
}

fn author_list_url(base: &Url, query: &AuthorListQuery) -> RepositoryResult<Url> {
    // Singular collection path, see the module docs.
    let mut url = base
        .join("/api/author")
        .map_err(|e| RepositoryError::BaseUrl(e.to_string()))?;

    if let Some(pagination) = &query.pagination {
        url.query_pairs_mut()
            .append_pair("page", &pagination.page.to_string())
            .append_pair("limit", &pagination.per_page.to_string());
    }

    Ok(url)
}

fn rejection(error: Option<String>) -> RepositoryError {
    RepositoryError::Rejected(error.unwrap_or_else(|| "success flag was false".to_string()))
}

impl BookReader for RestRepository {
    fn get_book_by_id(&self, id: BookId) -> RepositoryResult<Option<Book>> {
        let url = self.endpoint(&format!("/api/books/{id}"))?;
        let response: BookItemResponse = self.http.get(url).send()?.json()?;

        if !response.success {
            return Ok(None);
        }

        Ok(response.book.map(Into::into))
    }

    fn list_books(&self, query: BookListQuery) -> RepositoryResult<Page<Book>> {
        let url = book_list_url(&self.base_url, &query)?;
        let response: BookListResponse = self.http.get(url).send()?.json()?;

        if !response.success {
            return Err(rejection(response.error));
        }

        Ok(Page {
            items: response.books.into_iter().map(Into::into).collect(),
            page: response.page,
            total_pages: response.total_pages,
            total_items: response.total_items,
        })
    }
}

impl BookWriter for RestRepository {
    fn create_book(&self, new_book: &NewBook) -> RepositoryResult<()> {
        let url = self.endpoint("/api/books")?;
        let payload = BookPayload::from(new_book);
        let response: StatusResponse = self.http.post(url).json(&payload).send()?.json()?;

        if !response.success {
            return Err(rejection(response.error));
        }

        Ok(())
    }

    fn update_book(&self, book_id: BookId, updates: &UpdateBook) -> RepositoryResult<()> {
        let url = self.endpoint(&format!("/api/books/{book_id}"))?;
        let payload = BookPayload::from(updates);
        let response: StatusResponse = self.http.put(url).json(&payload).send()?.json()?;

        if !response.success {
            return Err(rejection(response.error));
        }

        Ok(())
    }

    fn delete_book(&self, book_id: BookId) -> RepositoryResult<()> {
        let url = self.endpoint(&format!("/api/books/{book_id}"))?;
        // Completion alone is what gates the caller's reload; the body is
        // not inspected.
        self.http.delete(url).send()?;

        Ok(())
    }
}

impl AuthorReader for RestRepository {
    fn get_author_by_id(&self, id: AuthorId) -> RepositoryResult<Option<Author>> {
        let url = self.endpoint(&format!("/api/authors/{id}"))?;
        let response: AuthorItemResponse = self.http.get(url).send()?.json()?;

        if !response.success {
            return Ok(None);
        }

        Ok(response.author.map(Into::into))
    }

    fn list_authors(&self, query: AuthorListQuery) -> RepositoryResult<Page<Author>> {
        let url = author_list_url(&self.base_url, &query)?;
        let response: AuthorListResponse = self.http.get(url).send()?.json()?;

        if !response.success {
            return Err(rejection(response.error));
        }

        Ok(Page {
            items: response.authors.into_iter().map(Into::into).collect(),
            page: response.page,
            total_pages: response.total_pages,
            total_items: response.total_items,
        })
    }
}

impl AuthorWriter for RestRepository {
    fn create_author(&self, new_author: &NewAuthor) -> RepositoryResult<()> {
        let url = self.endpoint("/api/authors")?;
        let payload = AuthorPayload::from(new_author);
        let response: StatusResponse = self.http.post(url).json(&payload).send()?.json()?;

        if !response.success {
            return Err(rejection(response.error));
        }

        Ok(())
    }

    fn update_author(&self, author_id: AuthorId, updates: &UpdateAuthor) -> RepositoryResult<()> {
        let url = self.endpoint(&format!("/api/authors/{author_id}"))?;
        let payload = AuthorPayload::from(updates);
        let response: StatusResponse = self.http.put(url).json(&payload).send()?.json()?;

        if !response.success {
            return Err(rejection(response.error));
        }

        Ok(())
    }

    fn delete_author(&self, author_id: AuthorId) -> RepositoryResult<()> {
        let url = self.endpoint(&format!("/api/authors/{author_id}"))?;
        self.http.delete(url).send()?;

        Ok(())
    }
}

impl ProductReader for RestRepository {
    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        let response: ProductListResponse =
            self.http.get(self.base_url.clone()).send()?.json()?;

        if !response.success {
            return Err(rejection(None));
        }

        Ok(response.products.into_iter().map(Into::into).collect())
    }
}
