//! In-memory repository fake with backend-faithful list semantics:
//! case-insensitive substring filters, honest sorting, and page/limit
//! pagination with the backend's defaults.

use std::cell::RefCell;

use bookdesk::domain::author::{Author, NewAuthor, UpdateAuthor};
use bookdesk::domain::book::{Book, BookAuthor, NewBook, UpdateBook};
use bookdesk::domain::list::{Page, SortField, SortOrder};
use bookdesk::domain::product::Product;
use bookdesk::domain::types::{AuthorId, BookId};
use bookdesk::repository::errors::{RepositoryError, RepositoryResult};
use bookdesk::repository::{
    AuthorListQuery, AuthorReader, AuthorWriter, BookListQuery, BookReader, BookWriter,
    Pagination, ProductReader,
};

const DEFAULT_LIMIT: usize = 5;

#[derive(Clone, Debug)]
struct StoredBook {
    id: i32,
    title: String,
    year: i32,
    isbn: Option<String>,
    author_id: i32,
}

#[derive(Default)]
pub struct InMemoryRepository {
    books: RefCell<Vec<StoredBook>>,
    authors: RefCell<Vec<Author>>,
    products: RefCell<Vec<Product>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_author(&self, name: &str, bio: &str, city: &str) -> i32 {
        let mut authors = self.authors.borrow_mut();
        let id = authors.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        authors.push(Author {
            id,
            name: name.to_string(),
            bio: bio.to_string(),
            city: city.to_string(),
        });
        id
    }

    pub fn seed_book(&self, title: &str, year: i32, isbn: Option<&str>, author_id: i32) -> i32 {
        let mut books = self.books.borrow_mut();
        let id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        books.push(StoredBook {
            id,
            title: title.to_string(),
            year,
            isbn: isbn.map(str::to_string),
            author_id,
        });
        id
    }

    pub fn seed_product(&self, name: &str, quantity: i64, price: f64) {
        let mut products = self.products.borrow_mut();
        let id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        products.push(Product {
            id,
            name: name.to_string(),
            quantity,
            price,
        });
    }

    fn resolve(&self, stored: &StoredBook) -> Book {
        let author = self
            .authors
            .borrow()
            .iter()
            .find(|author| author.id == stored.author_id)
            .map(|author| BookAuthor {
                id: author.id,
                name: author.name.clone(),
                city: author.city.clone(),
            });

        Book {
            id: stored.id,
            title: stored.title.clone(),
            year: stored.year,
            isbn: stored.isbn.clone(),
            author,
        }
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn paginate<T>(mut items: Vec<T>, pagination: Option<Pagination>) -> Page<T> {
    let (page, per_page) = pagination
        .map(|p| (p.page.max(1), p.per_page))
        .unwrap_or((1, DEFAULT_LIMIT));

    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);
    let offset = (page - 1) * per_page;

    let items: Vec<T> = if offset >= items.len() {
        Vec::new()
    } else {
        items.drain(offset..).take(per_page).collect()
    };

    Page {
        items,
        page,
        total_pages,
        total_items,
    }
}

impl BookReader for InMemoryRepository {
    fn get_book_by_id(&self, id: BookId) -> RepositoryResult<Option<Book>> {
        let books = self.books.borrow();
        Ok(books
            .iter()
            .find(|book| book.id == id.get())
            .map(|book| self.resolve(book)))
    }

    fn list_books(&self, query: BookListQuery) -> RepositoryResult<Page<Book>> {
        let mut matches: Vec<Book> = self
            .books
            .borrow()
            .iter()
            .map(|book| self.resolve(book))
            .filter(|book| {
                query
                    .title
                    .as_ref()
                    .is_none_or(|title| contains_ci(&book.title, title))
            })
            .filter(|book| {
                query.author.as_ref().is_none_or(|author| {
                    book.author
                        .as_ref()
                        .is_some_and(|embedded| contains_ci(&embedded.name, author))
                })
            })
            .filter(|book| {
                query
                    .year
                    .as_ref()
                    .is_none_or(|year| book.year.to_string() == *year)
            })
            .collect();

        let (field, order) = query
            .sort
            .map(|sort| (sort.field, sort.order))
            .unwrap_or((SortField::Id, SortOrder::Ascending));

        matches.sort_by(|a, b| {
            let ordering = match field {
                SortField::Id => a.id.cmp(&b.id),
                SortField::Title => a.title.cmp(&b.title),
                SortField::Year => a.year.cmp(&b.year),
            };
            match order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });

        Ok(paginate(matches, query.pagination))
    }
}

impl BookWriter for InMemoryRepository {
    fn create_book(&self, new_book: &NewBook) -> RepositoryResult<()> {
        if let Some(isbn) = &new_book.isbn {
            let books = self.books.borrow();
            if books.iter().any(|book| book.isbn.as_deref() == Some(isbn)) {
                return Err(RepositoryError::Rejected("ISBN already exists".into()));
            }
        }

        self.seed_book(
            new_book.title.as_str(),
            new_book.year,
            new_book.isbn.as_deref(),
            new_book.author_id.get(),
        );
        Ok(())
    }

    fn update_book(&self, book_id: BookId, updates: &UpdateBook) -> RepositoryResult<()> {
        let mut books = self.books.borrow_mut();
        let book = books
            .iter_mut()
            .find(|book| book.id == book_id.get())
            .ok_or_else(|| RepositoryError::Rejected("Book not found".into()))?;

        book.title = updates.title.as_str().to_string();
        book.year = updates.year;
        book.isbn = updates.isbn.clone();
        book.author_id = updates.author_id.get();
        Ok(())
    }

    fn delete_book(&self, book_id: BookId) -> RepositoryResult<()> {
        self.books.borrow_mut().retain(|book| book.id != book_id.get());
        Ok(())
    }
}

impl AuthorReader for InMemoryRepository {
    fn get_author_by_id(&self, id: AuthorId) -> RepositoryResult<Option<Author>> {
        let authors = self.authors.borrow();
        Ok(authors.iter().find(|author| author.id == id.get()).cloned())
    }

    fn list_authors(&self, query: AuthorListQuery) -> RepositoryResult<Page<Author>> {
        let authors: Vec<Author> = self.authors.borrow().clone();
        Ok(paginate(authors, query.pagination))
    }
}

impl AuthorWriter for InMemoryRepository {
    fn create_author(&self, new_author: &NewAuthor) -> RepositoryResult<()> {
        self.seed_author(
            new_author.name.as_str(),
            new_author.bio.as_str(),
            new_author.city.as_str(),
        );
        Ok(())
    }

    fn update_author(&self, author_id: AuthorId, updates: &UpdateAuthor) -> RepositoryResult<()> {
        let mut authors = self.authors.borrow_mut();
        let author = authors
            .iter_mut()
            .find(|author| author.id == author_id.get())
            .ok_or_else(|| RepositoryError::Rejected("author not found".into()))?;

        author.name = updates.name.as_str().to_string();
        author.bio = updates.bio.as_str().to_string();
        author.city = updates.city.as_str().to_string();
        Ok(())
    }

    fn delete_author(&self, author_id: AuthorId) -> RepositoryResult<()> {
        self.authors
            .borrow_mut()
            .retain(|author| author.id != author_id.get());
        Ok(())
    }
}

impl ProductReader for InMemoryRepository {
    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        Ok(self.products.borrow().clone())
    }
}
