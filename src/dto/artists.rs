use serde::Serialize;

use crate::domain::artist::Artist;
use crate::domain::filter::FilterCriteria;
use crate::domain::types::PAGE_SIZE_OPTIONS;
use crate::domain::view_state::ViewState;
use crate::pagination::Paginated;

/// Data required to render the artists page.
#[derive(Debug, Serialize)]
pub struct ArtistsPageData {
    /// Current page window of matching artists plus pager links.
    pub artists: Paginated<Artist>,
    /// Criteria echoed back to the filter form.
    pub criteria: FilterCriteria,
    pub is_loading: bool,
    /// User-facing message of the last failed load.
    pub error: Option<String>,
    /// Page sizes the pager offers.
    pub page_size_options: Vec<usize>,
}

impl ArtistsPageData {
    /// Nothing matched and nothing went wrong; shown as "No artists found".
    pub fn is_empty_result(&self) -> bool {
        !self.is_loading && self.error.is_none() && self.artists.total == 0
    }

    /// The pager is only shown when there is something to page through.
    pub fn show_pager(&self) -> bool {
        !self.is_loading && !self.artists.items.is_empty()
    }
}

impl From<&ViewState> for ArtistsPageData {
    fn from(state: &ViewState) -> Self {
        Self {
            artists: Paginated::from(state),
            criteria: state.criteria().clone(),
            is_loading: state.is_loading(),
            error: state.last_error().map(str::to_string),
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
        }
    }
}
