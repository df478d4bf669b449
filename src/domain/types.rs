//! Strongly-typed value objects used by the artist view.
//!
//! These wrappers enforce basic invariants (positive identifiers, non-zero
//! page sizes) so that once a value reaches the view state it can be treated
//! as trusted.
use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of artists shown per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Page sizes offered by the pager.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [12, 24, 48];

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided page size is zero.
    #[error("page size must be greater than zero")]
    ZeroPageSize,
}

/// Unique identifier of an artist as assigned by the backend.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "i64", into = "i64")]
pub struct ArtistId(i64);

impl ArtistId {
    /// Creates a new identifier ensuring it is greater than zero.
    pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositiveId)
        }
    }

    /// Returns the raw `i64` backing this identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Display for ArtistId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for ArtistId {
    type Error = TypeConstraintError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ArtistId> for i64 {
    fn from(value: ArtistId) -> Self {
        value.0
    }
}

/// Number of artists in one page window. Always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    pub fn new(value: usize) -> Result<Self, TypeConstraintError> {
        NonZeroUsize::new(value)
            .map(Self)
            .ok_or(TypeConstraintError::ZeroPageSize)
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN))
    }
}

impl Display for PageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = TypeConstraintError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Trims a free-text criterion and drops it when nothing is left.
pub(crate) fn non_blank<S: AsRef<str>>(value: S) -> Option<String> {
    let trimmed = value.as_ref().trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
