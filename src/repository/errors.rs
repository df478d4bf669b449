use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Unexpected HTTP status: {0}")]
    UnexpectedStatus(u16),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return if status == reqwest::StatusCode::NOT_FOUND {
                RepositoryError::NotFound
            } else {
                RepositoryError::UnexpectedStatus(status.as_u16())
            };
        }

        if err.is_decode() {
            RepositoryError::Deserialization(err.to_string())
        } else if err.is_connect() || err.is_timeout() || err.is_request() {
            RepositoryError::ConnectionError(err.to_string())
        } else {
            RepositoryError::Unexpected(format!("Unexpected HTTP client error: {err}"))
        }
    }
}
