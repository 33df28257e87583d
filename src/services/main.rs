//! Panel-level orchestration: the initial load and the affected-view
//! reloads after each mutation.
//!
//! Denormalization repair is refetch-based: instead of patching author
//! names or counts cached inside other views, every mutation reloads the
//! full set of views whose data could have changed.

use std::collections::HashSet;

use crate::domain::types::{AuthorId, BookId};
use crate::dto::main::{AuthorMutationView, BookMutationView, DashboardData, StatsData};
use crate::forms::authors::AuthorForm;
use crate::forms::books::BookForm;
use crate::repository::{AuthorListQuery, AuthorReader, AuthorWriter, BookListQuery, BookReader, BookWriter};
use crate::services::authors::{AuthorListController, load_author_options};
use crate::services::books::BookListController;
use crate::services::{BOOKS_SAMPLE_LIMIT, ServiceResult};

/// Snapshot counters for the dashboard header: distinct publication years
/// across the bounded books sample, and the backend's total author count.
pub fn load_stats<R>(repo: &R) -> ServiceResult<StatsData>
where
    R: BookReader + AuthorReader + ?Sized,
{
    let sample = repo
        .list_books(BookListQuery::new().paginate(1, BOOKS_SAMPLE_LIMIT))
        .map_err(|err| {
            log::error!("Failed to load stats sample: {err}");
            err
        })?;

    let years: HashSet<i32> = sample.items.iter().map(|book| book.year).collect();

    let authors = repo.list_authors(AuthorListQuery::new()).map_err(|err| {
        log::error!("Failed to load author count: {err}");
        err
    })?;

    Ok(StatsData {
        published_years: years.len(),
        total_authors: authors.total_items,
    })
}

/// Initial page load: dropdown, authors table, books table, stats — the
/// same sequence the panel has always performed at startup.
pub fn load_dashboard<R>(
    repo: &R,
    books: &BookListController,
    authors: &AuthorListController,
) -> ServiceResult<DashboardData>
where
    R: BookReader + AuthorReader + ?Sized,
{
    let author_options = load_author_options(repo)?;
    let authors_page = authors.reload(repo)?;
    let books_page = books.reload(repo)?;
    let stats = load_stats(repo)?;

    Ok(DashboardData {
        books: books_page,
        authors: authors_page,
        author_options,
        stats,
    })
}

/// Saves a book and reloads every view its data feeds: the book table and
/// the author table with its derived book counts.
pub fn save_book<R>(
    repo: &R,
    books: &mut BookListController,
    authors: &AuthorListController,
    form: BookForm,
) -> ServiceResult<BookMutationView>
where
    R: BookReader + BookWriter + AuthorReader + ?Sized,
{
    books.save(repo, form)?;

    Ok(BookMutationView {
        books: books.reload(repo)?,
        authors: authors.reload(repo)?,
    })
}

/// Deletes a book and reloads the same affected-view set as [`save_book`].
/// The reload is unconditional on request completion.
pub fn delete_book<R>(
    repo: &R,
    books: &mut BookListController,
    authors: &AuthorListController,
    id: BookId,
) -> ServiceResult<BookMutationView>
where
    R: BookReader + BookWriter + AuthorReader + ?Sized,
{
    books.remove(repo, id)?;

    Ok(BookMutationView {
        books: books.reload(repo)?,
        authors: authors.reload(repo)?,
    })
}

/// Saves an author and reloads the views embedding author data: the author
/// table and the author-selection dropdown, so edited names and cities show
/// up immediately.
pub fn save_author<R>(
    repo: &R,
    authors: &mut AuthorListController,
    form: AuthorForm,
) -> ServiceResult<AuthorMutationView>
where
    R: BookReader + AuthorReader + AuthorWriter + ?Sized,
{
    authors.save(repo, form)?;

    Ok(AuthorMutationView {
        authors: authors.reload(repo)?,
        author_options: load_author_options(repo)?,
    })
}

/// Deletes an author and reloads the same affected-view set as
/// [`save_author`].
pub fn delete_author<R>(
    repo: &R,
    authors: &mut AuthorListController,
    id: AuthorId,
) -> ServiceResult<AuthorMutationView>
where
    R: BookReader + AuthorReader + AuthorWriter + ?Sized,
{
    authors.remove(repo, id)?;

    Ok(AuthorMutationView {
        authors: authors.reload(repo)?,
        author_options: load_author_options(repo)?,
    })
}
