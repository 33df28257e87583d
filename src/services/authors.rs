//! List-view controller for the authors panel.
//!
//! Authors are listed page by page without sort or filter controls, so the
//! controller leaves those parts of its list state at their defaults and
//! projects only the pagination into the outgoing query.

use validator::Validate;

use crate::domain::author::{NewAuthor, UpdateAuthor};
use crate::domain::list::ListState;
use crate::domain::types::AuthorId;
use crate::dto::authors::{
    AuthorFormView, AuthorOption, AuthorsPageData, render_author_form, render_author_options,
    render_authors,
};
use crate::forms::authors::AuthorForm;
use crate::repository::errors::RepositoryError;
use crate::repository::{AuthorListQuery, AuthorReader, AuthorWriter, BookListQuery, BookReader};
use crate::services::{BOOKS_SAMPLE_LIMIT, ServiceError, ServiceResult};

/// Message surfaced when the required fields are missing.
pub const AUTHOR_REQUIRED_FIELDS: &str = "Name, bio and city are required";
/// Message surfaced when the backend rejects a write.
pub const AUTHOR_SAVE_FAILED: &str = "Failed to save author";

#[derive(Clone, Debug)]
struct AuthorEdit {
    id: AuthorId,
    form: AuthorForm,
}

#[derive(Clone, Debug, Default)]
pub struct AuthorListController {
    state: ListState,
    edit: Option<AuthorEdit>,
}

impl AuthorListController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn editing_id(&self) -> Option<AuthorId> {
        self.edit.as_ref().map(|edit| edit.id)
    }

    pub fn form(&self) -> AuthorFormView {
        render_author_form(self.edit.as_ref().map(|edit| &edit.form))
    }

    /// Fetches the author page together with the bounded books sample the
    /// per-author book counts are derived from, then renders both into the
    /// authors view.
    pub fn reload<R>(&self, repo: &R) -> ServiceResult<AuthorsPageData>
    where
        R: AuthorReader + BookReader + ?Sized,
    {
        let authors = repo
            .list_authors(
                AuthorListQuery::new().paginate(self.state.page(), self.state.page_size()),
            )
            .map_err(|err| {
                log::error!("Failed to load authors: {err}");
                err
            })?;

        let sample = repo
            .list_books(BookListQuery::new().paginate(1, BOOKS_SAMPLE_LIMIT))
            .map_err(|err| {
                log::error!("Failed to load books sample: {err}");
                err
            })?;

        Ok(render_authors(
            &authors,
            &sample.items,
            self.edit.as_ref().map(|edit| &edit.form),
        ))
    }

    pub fn next_page<R>(&mut self, repo: &R) -> ServiceResult<AuthorsPageData>
    where
        R: AuthorReader + BookReader + ?Sized,
    {
        self.state.advance_page();
        self.reload(repo)
    }

    /// A no-op on page 1 that issues no request and returns `None`.
    pub fn prev_page<R>(&mut self, repo: &R) -> ServiceResult<Option<AuthorsPageData>>
    where
        R: AuthorReader + BookReader + ?Sized,
    {
        if self.state.retreat_page() {
            self.reload(repo).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Fetches a single record and enters edit mode with a form snapshot.
    pub fn begin_edit<R>(&mut self, repo: &R, id: AuthorId) -> ServiceResult<AuthorFormView>
    where
        R: AuthorReader + ?Sized,
    {
        let author = repo
            .get_author_by_id(id)
            .map_err(|err| {
                log::error!("Failed to load author {id}: {err}");
                err
            })?
            .ok_or(ServiceError::NotFound)?;

        let form = AuthorForm::prefill(&author);
        self.edit = Some(AuthorEdit {
            id,
            form: form.clone(),
        });

        Ok(render_author_form(Some(&form)))
    }

    /// Creates or updates depending on edit mode; clears edit state only on
    /// success.
    pub fn save<R>(&mut self, repo: &R, form: AuthorForm) -> ServiceResult<()>
    where
        R: AuthorWriter + ?Sized,
    {
        if form.validate().is_err() {
            return Err(ServiceError::Form(AUTHOR_REQUIRED_FIELDS.to_string()));
        }

        let result = match &self.edit {
            Some(edit) => {
                let updates = UpdateAuthor::try_from(&form)?;
                repo.update_author(edit.id, &updates)
            }
            None => {
                let new_author = NewAuthor::try_from(&form)?;
                repo.create_author(&new_author)
            }
        };

        match result {
            Ok(()) => {
                self.edit = None;
                Ok(())
            }
            Err(err) => {
                log::error!("Failed to save author: {err}");
                match err {
                    RepositoryError::Rejected(_) => {
                        Err(ServiceError::Form(AUTHOR_SAVE_FAILED.to_string()))
                    }
                    other => Err(ServiceError::Repository(other)),
                }
            }
        }
    }

    /// Deletes the record; completion alone gates the caller's reload.
    pub fn remove<R>(&mut self, repo: &R, id: AuthorId) -> ServiceResult<()>
    where
        R: AuthorWriter + ?Sized,
    {
        repo.delete_author(id).map_err(|err| {
            log::error!("Failed to delete author {id}: {err}");
            err
        })?;

        Ok(())
    }
}

/// Loads the author-selection dropdown. The query carries no pagination
/// parameters, so the backend's default page size bounds the option list —
/// a deliberate reproduction of the panel's historical sampling.
pub fn load_author_options<R>(repo: &R) -> ServiceResult<Vec<AuthorOption>>
where
    R: AuthorReader + ?Sized,
{
    let authors = repo.list_authors(AuthorListQuery::new()).map_err(|err| {
        log::error!("Failed to load author dropdown: {err}");
        err
    })?;

    Ok(render_author_options(&authors.items))
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::author::Author;
    use crate::domain::list::Page;
    use crate::repository::mock::MockRepository;

    fn sample_author() -> Author {
        Author {
            id: 3,
            name: "Gaurav".into(),
            bio: "Software Engineer".into(),
            city: "Nashik".into(),
        }
    }

    #[test]
    fn begin_edit_on_missing_author_reports_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_author_by_id().returning(|_| Ok(None));

        let mut controller = AuthorListController::new();
        let err = controller
            .begin_edit(&repo, AuthorId::new(9).unwrap())
            .unwrap_err();

        assert!(matches!(err, ServiceError::NotFound));
        assert_eq!(controller.editing_id(), None);
    }

    #[test]
    fn edit_then_save_sends_unchanged_fields() {
        let mut repo = MockRepository::new();
        repo.expect_get_author_by_id()
            .returning(|_| Ok(Some(sample_author())));
        repo.expect_update_author()
            .withf(|id, updates| {
                id.get() == 3
                    && updates.name.as_str() == "Gaurav"
                    && updates.bio.as_str() == "Software Engineer"
                    && updates.city.as_str() == "Nashik"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let mut controller = AuthorListController::new();
        let view = controller
            .begin_edit(&repo, AuthorId::new(3).unwrap())
            .unwrap();

        let snapshot = AuthorForm {
            name: view.name,
            bio: view.bio,
            city: view.city,
        };
        controller.save(&repo, snapshot).unwrap();
        assert_eq!(controller.editing_id(), None);
    }

    #[test]
    fn dropdown_is_loaded_without_pagination_parameters() {
        let mut repo = MockRepository::new();
        repo.expect_list_authors()
            .withf(|query| query.pagination.is_none())
            .times(1)
            .returning(|_| {
                Ok(Page {
                    items: vec![sample_author()],
                    page: 1,
                    total_pages: 1,
                    total_items: 1,
                })
            });

        let options = load_author_options(&repo).unwrap();
        assert_eq!(options[0].label, "Gaurav (Nashik)");
    }

    #[test]
    fn reload_joins_the_bounded_books_sample() {
        let mut repo = MockRepository::new();
        repo.expect_list_authors().returning(|_| {
            Ok(Page {
                items: vec![sample_author()],
                page: 1,
                total_pages: 1,
                total_items: 1,
            })
        });
        repo.expect_list_books()
            .withf(|query| {
                query
                    .pagination
                    .is_some_and(|p| p.per_page == BOOKS_SAMPLE_LIMIT)
            })
            .times(1)
            .returning(|_| Ok(Page::empty()));

        let controller = AuthorListController::new();
        let data = controller.reload(&repo).unwrap();
        assert_eq!(data.table.items[0].book_count, 0);
    }
}
