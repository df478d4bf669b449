//! Form definitions backing the artist list view.

use thiserror::Error;
use validator::ValidationErrors;

pub mod artists;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("malformed query string: {0}")]
    Query(String),
}
