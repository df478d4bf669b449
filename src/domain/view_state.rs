//! Immutable state of the artist list view.
//!
//! Every transition consumes the current state and returns the next one. The
//! derived collections (`filtered_artists`, `page_artists`, `total_matched`)
//! are recomputed inside each transition, so a `ViewState` value is always
//! internally consistent:
//!
//! * `page_artists` is the slice of `filtered_artists` starting at
//!   `(current_page - 1) * page_size`, at most `page_size` long;
//! * `total_matched == filtered_artists.len()`;
//! * changing the criteria or the page size puts the view back on page 1.
//!
//! Pages past the end of the filtered list yield an empty window rather than
//! being clamped.

use std::fmt::Display;

use crate::domain::artist::Artist;
use crate::domain::filter::FilterCriteria;
use crate::domain::types::PageSize;

/// Message shown to the user when the artist collection cannot be fetched.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load artists. Please try again later.";

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    raw_artists: Vec<Artist>,
    filtered_artists: Vec<Artist>,
    page_artists: Vec<Artist>,
    criteria: FilterCriteria,
    current_page: usize,
    page_size: PageSize,
    total_matched: usize,
    is_loading: bool,
    last_error: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl ViewState {
    /// Empty view on page 1 with no criteria.
    pub fn new(page_size: PageSize) -> Self {
        Self {
            raw_artists: Vec::new(),
            filtered_artists: Vec::new(),
            page_artists: Vec::new(),
            criteria: FilterCriteria::default(),
            current_page: 1,
            page_size,
            total_matched: 0,
            is_loading: false,
            last_error: None,
        }
    }

    /// Marks a fetch as in flight and clears the previous error.
    #[must_use]
    pub fn begin_load(self) -> Self {
        Self {
            is_loading: true,
            last_error: None,
            ..self
        }
    }

    /// Stores the outcome of a fetch.
    ///
    /// A successful fetch replaces the raw collection and recomputes the
    /// derived data under the current criteria and page. A failed fetch empties
    /// every collection and records [`LOAD_ERROR_MESSAGE`]. Either way the view
    /// stops loading, so when fetches overlap the last one to finish wins.
    #[must_use]
    pub fn finish_load<E: Display>(self, result: Result<Vec<Artist>, E>) -> Self {
        match result {
            Ok(artists) => Self {
                raw_artists: artists,
                is_loading: false,
                last_error: None,
                ..self
            }
            .refilter(),
            Err(err) => {
                log::error!("Failed to load artists: {err}");
                Self {
                    raw_artists: Vec::new(),
                    is_loading: false,
                    last_error: Some(LOAD_ERROR_MESSAGE.to_string()),
                    ..self
                }
                .refilter()
            }
        }
    }

    /// Replaces the criteria wholesale and returns to page 1.
    #[must_use]
    pub fn apply_filter(self, criteria: FilterCriteria) -> Self {
        log::debug!("Applying artist filter {criteria:?}");
        Self {
            criteria,
            current_page: 1,
            ..self
        }
        .refilter()
    }

    /// Moves to the 1-indexed `page`. Page 0 is read as page 1.
    #[must_use]
    pub fn set_page(self, page: usize) -> Self {
        Self {
            current_page: page.max(1),
            ..self
        }
        .repaginate()
    }

    /// Changes the page size and returns to page 1.
    #[must_use]
    pub fn set_page_size(self, page_size: PageSize) -> Self {
        Self {
            page_size,
            current_page: 1,
            ..self
        }
        .repaginate()
    }

    fn refilter(mut self) -> Self {
        self.filtered_artists = self.criteria.apply(&self.raw_artists);
        self.total_matched = self.filtered_artists.len();
        self.repaginate()
    }

    fn repaginate(mut self) -> Self {
        let size = self.page_size.get();
        let start = (self.current_page - 1).saturating_mul(size);
        self.page_artists = self
            .filtered_artists
            .iter()
            .skip(start)
            .take(size)
            .cloned()
            .collect();
        log::debug!(
            "Showing page {} ({} of {} matched artists)",
            self.current_page,
            self.page_artists.len(),
            self.total_matched
        );
        self
    }

    pub fn raw_artists(&self) -> &[Artist] {
        &self.raw_artists
    }

    pub fn filtered_artists(&self) -> &[Artist] {
        &self.filtered_artists
    }

    pub fn page_artists(&self) -> &[Artist] {
        &self.page_artists
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn total_matched(&self) -> usize {
        self.total_matched
    }

    /// Number of pages needed for the filtered list. Zero when nothing matched.
    pub fn total_pages(&self) -> usize {
        self.total_matched.div_ceil(self.page_size.get())
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Loaded without error but nothing matched the criteria.
    pub fn is_empty_result(&self) -> bool {
        !self.is_loading && self.last_error.is_none() && self.total_matched == 0
    }
}
