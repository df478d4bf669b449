//! Services driving the artist list view on top of a repository.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod artists;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,

    #[error("fetch error: {0}")]
    Fetch(String),

    #[error("form error: {0}")]
    Form(String),

    #[error("type constraint error: {0}")]
    TypeConstraint(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Fetch(other.to_string()),
        }
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
