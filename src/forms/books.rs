use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::book::{Book, NewBook, UpdateBook};
use crate::domain::types::{AuthorId, BookTitle, TypeConstraintError};

/// Form data for adding or updating a book. Field values mirror the text
/// inputs of the panel, so everything is a string until conversion.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct BookForm {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub year: String,
    pub isbn: String,
    #[validate(length(min = 1))]
    pub author_id: String,
}

impl BookForm {
    /// Snapshot of an existing record used to prefill the form in edit mode.
    #[must_use]
    pub fn prefill(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            year: book.year.to_string(),
            isbn: book.isbn.clone().unwrap_or_default(),
            author_id: book
                .author
                .as_ref()
                .map(|author| author.id.to_string())
                .unwrap_or_default(),
        }
    }

    fn parsed_fields(&self) -> Result<(BookTitle, i32, AuthorId), TypeConstraintError> {
        let title = BookTitle::new(self.title.as_str())?;
        let year: i32 = self
            .year
            .trim()
            .parse()
            .map_err(|_| TypeConstraintError::InvalidValue("year must be a number".to_string()))?;
        let author_id: i32 = self.author_id.trim().parse().map_err(|_| {
            TypeConstraintError::InvalidValue("author id must be a number".to_string())
        })?;

        Ok((title, year, AuthorId::new(author_id)?))
    }
}

impl TryFrom<&BookForm> for NewBook {
    type Error = TypeConstraintError;

    fn try_from(form: &BookForm) -> Result<Self, Self::Error> {
        let (title, year, author_id) = form.parsed_fields()?;
        Ok(NewBook::new(title, year, Some(form.isbn.clone()), author_id))
    }
}

impl TryFrom<&BookForm> for UpdateBook {
    type Error = TypeConstraintError;

    fn try_from(form: &BookForm) -> Result<Self, Self::Error> {
        let (title, year, author_id) = form.parsed_fields()?;
        Ok(UpdateBook::new(
            title,
            year,
            Some(form.isbn.clone()),
            author_id,
        ))
    }
}
