//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::author::{Author, NewAuthor, UpdateAuthor};
use crate::domain::book::{Book, NewBook, UpdateBook};
use crate::domain::list::Page;
use crate::domain::product::Product;
use crate::domain::types::{AuthorId, BookId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AuthorListQuery, AuthorReader, AuthorWriter, BookListQuery, BookReader, BookWriter,
    ProductReader,
};

mock! {
    pub Repository {}

    impl BookReader for Repository {
        fn get_book_by_id(&self, id: BookId) -> RepositoryResult<Option<Book>>;
        fn list_books(&self, query: BookListQuery) -> RepositoryResult<Page<Book>>;
    }

    impl BookWriter for Repository {
        fn create_book(&self, new_book: &NewBook) -> RepositoryResult<()>;
        fn update_book(&self, book_id: BookId, updates: &UpdateBook) -> RepositoryResult<()>;
        fn delete_book(&self, book_id: BookId) -> RepositoryResult<()>;
    }

    impl AuthorReader for Repository {
        fn get_author_by_id(&self, id: AuthorId) -> RepositoryResult<Option<Author>>;
        fn list_authors(&self, query: AuthorListQuery) -> RepositoryResult<Page<Author>>;
    }

    impl AuthorWriter for Repository {
        fn create_author(&self, new_author: &NewAuthor) -> RepositoryResult<()>;
        fn update_author(&self, author_id: AuthorId, updates: &UpdateAuthor) -> RepositoryResult<()>;
        fn delete_author(&self, author_id: AuthorId) -> RepositoryResult<()>;
    }

    impl ProductReader for Repository {
        fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    }
}
