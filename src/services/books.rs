//! List-view controller for the books panel.

use validator::Validate;

use crate::domain::book::{NewBook, UpdateBook};
use crate::domain::list::{BookFilters, ListState, SortField, SortOrder};
use crate::domain::types::BookId;
use crate::dto::books::{BookFormView, BooksPageData, render_book_form, render_books};
use crate::forms::books::BookForm;
use crate::repository::errors::RepositoryError;
use crate::repository::{BookListQuery, BookReader, BookWriter};
use crate::services::{ServiceError, ServiceResult};

/// Message surfaced when the required fields are missing.
pub const BOOK_REQUIRED_FIELDS: &str = "Title, Year and Author are required";
/// Message surfaced when the backend rejects a write.
pub const BOOK_SAVE_FAILED: &str = "Failed to save book";

#[derive(Clone, Debug)]
struct BookEdit {
    id: BookId,
    form: BookForm,
}

/// Owns the list state and edit state for the books collection, projects
/// them into backend queries, and reconciles fetched pages into view
/// models. The repository is passed explicitly per call so the controller
/// can be exercised against mocks.
#[derive(Clone, Debug, Default)]
pub struct BookListController {
    state: ListState,
    edit: Option<BookEdit>,
}

impl BookListController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Identifier of the record currently in edit mode, if any.
    pub fn editing_id(&self) -> Option<BookId> {
        self.edit.as_ref().map(|edit| edit.id)
    }

    /// Current form view: prefilled in edit mode, blank otherwise.
    pub fn form(&self) -> BookFormView {
        render_book_form(self.edit.as_ref().map(|edit| &edit.form))
    }

    fn query(&self) -> BookListQuery {
        let filters = self.state.filters();
        BookListQuery::new()
            .paginate(self.state.page(), self.state.page_size())
            .sort(self.state.sort_field(), self.state.sort_order())
            .title(filters.title.clone())
            .author(filters.author.clone())
            .year(filters.year.clone())
    }

    /// Fetches the page matching the current state and renders it. On any
    /// failure the caller keeps its previously rendered view; no retry.
    pub fn reload<R>(&self, repo: &R) -> ServiceResult<BooksPageData>
    where
        R: BookReader + ?Sized,
    {
        let page = repo.list_books(self.query()).map_err(|err| {
            log::error!("Failed to load books: {err}");
            err
        })?;

        Ok(render_books(&page, self.edit.as_ref().map(|edit| &edit.form)))
    }

    /// Replaces the search filters and reloads from page 1.
    pub fn search<R>(&mut self, repo: &R, filters: BookFilters) -> ServiceResult<BooksPageData>
    where
        R: BookReader + ?Sized,
    {
        self.state.set_filters(filters);
        self.reload(repo)
    }

    /// Drops the search filters and reloads from page 1.
    pub fn clear_search<R>(&mut self, repo: &R) -> ServiceResult<BooksPageData>
    where
        R: BookReader + ?Sized,
    {
        self.state.clear_filters();
        self.reload(repo)
    }

    /// Changes the sort key and reloads from page 1.
    pub fn set_sort<R>(
        &mut self,
        repo: &R,
        field: SortField,
        order: SortOrder,
    ) -> ServiceResult<BooksPageData>
    where
        R: BookReader + ?Sized,
    {
        self.state.set_sort(field, order);
        self.reload(repo)
    }

    /// Advances one page and reloads. Paging past the last page yields an
    /// empty page, rendered as the explicit empty state.
    pub fn next_page<R>(&mut self, repo: &R) -> ServiceResult<BooksPageData>
    where
        R: BookReader + ?Sized,
    {
        self.state.advance_page();
        self.reload(repo)
    }

    /// Goes back one page and reloads; a no-op on page 1 that issues no
    /// request and returns `None`.
    pub fn prev_page<R>(&mut self, repo: &R) -> ServiceResult<Option<BooksPageData>>
    where
        R: BookReader + ?Sized,
    {
        if self.state.retreat_page() {
            self.reload(repo).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Fetches a single record and enters edit mode with a form snapshot.
    /// Leaves the list state untouched and triggers no table reload.
    pub fn begin_edit<R>(&mut self, repo: &R, id: BookId) -> ServiceResult<BookFormView>
    where
        R: BookReader + ?Sized,
    {
        let book = repo
            .get_book_by_id(id)
            .map_err(|err| {
                log::error!("Failed to load book {id}: {err}");
                err
            })?
            .ok_or(ServiceError::NotFound)?;

        let form = BookForm::prefill(&book);
        self.edit = Some(BookEdit {
            id,
            form: form.clone(),
        });

        Ok(render_book_form(Some(&form)))
    }

    /// Creates or updates depending on edit mode. On success the edit state
    /// clears and the form returns to defaults; on failure both stay put so
    /// the user does not lose entered values.
    pub fn save<R>(&mut self, repo: &R, form: BookForm) -> ServiceResult<()>
    where
        R: BookWriter + ?Sized,
    {
        if form.validate().is_err() {
            return Err(ServiceError::Form(BOOK_REQUIRED_FIELDS.to_string()));
        }

        let result = match &self.edit {
            Some(edit) => {
                let updates = UpdateBook::try_from(&form)?;
                repo.update_book(edit.id, &updates)
            }
            None => {
                let new_book = NewBook::try_from(&form)?;
                repo.create_book(&new_book)
            }
        };

        match result {
            Ok(()) => {
                self.edit = None;
                Ok(())
            }
            Err(err) => {
                log::error!("Failed to save book: {err}");
                match err {
                    RepositoryError::Rejected(_) => {
                        Err(ServiceError::Form(BOOK_SAVE_FAILED.to_string()))
                    }
                    other => Err(ServiceError::Repository(other)),
                }
            }
        }
    }

    /// Deletes the record. Completion alone gates the caller's reload; the
    /// edit state is deliberately left as-is, matching the panel's
    /// historical behavior.
    pub fn remove<R>(&mut self, repo: &R, id: BookId) -> ServiceResult<()>
    where
        R: BookWriter + ?Sized,
    {
        repo.delete_book(id).map_err(|err| {
            log::error!("Failed to delete book {id}: {err}");
            err
        })?;

        Ok(())
    }
}
