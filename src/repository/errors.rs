use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The response parsed but carried `success: false`.
    #[error("Backend rejected the request: {0}")]
    Rejected(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Response decode error: {0}")]
    Decode(String),

    #[error("Invalid backend url: {0}")]
    BaseUrl(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RepositoryError::Decode(err.to_string())
        } else if err.is_builder() {
            RepositoryError::Unexpected(err.to_string())
        } else {
            RepositoryError::Transport(err.to_string())
        }
    }
}
