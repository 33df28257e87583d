pub mod authors;
pub mod books;
pub mod main;
pub mod products;

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

/// Cross-resource joins (author book counts, year stats) draw on a books
/// sample capped at this size rather than the full collection.
pub const BOOKS_SAMPLE_LIMIT: usize = 100;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// User-facing form or write failure; the message is what the surface
    /// shows verbatim.
    #[error("{0}")]
    Form(String),

    #[error("Entity not found")]
    NotFound,
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::Form(err.to_string())
    }
}
