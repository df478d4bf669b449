use crate::domain::artist::Artist;
use crate::domain::filter::FilterCriteria;
use crate::domain::types::{ArtistId, PageSize};
use crate::domain::view_state::ViewState;
use crate::dto::artists::ArtistsPageData;
use crate::forms::artists::ArtistFilterForm;
use crate::models::config::ClientConfig;
use crate::repository::{ArtistReader, HttpArtistRepository};
use crate::services::{ServiceError, ServiceResult};

/// Artist list view bound to a repository.
///
/// Only [`load`](Self::load) talks to the repository; filtering and paging
/// work on the collection fetched by the last load.
pub struct ArtistListView<R> {
    repo: R,
    state: ViewState,
}

impl ArtistListView<HttpArtistRepository> {
    /// Builds a view over the HTTP repository described by `config`.
    pub fn from_config(config: &ClientConfig) -> ServiceResult<Self> {
        let repo = HttpArtistRepository::from_config(config).map_err(|err| {
            log::error!("Failed to create artist repository: {err}");
            ServiceError::from(err)
        })?;
        Ok(Self::new(repo, config.page_size()?))
    }
}

impl<R> ArtistListView<R>
where
    R: ArtistReader,
{
    pub fn new(repo: R, page_size: PageSize) -> Self {
        Self {
            repo,
            state: ViewState::new(page_size),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn into_state(self) -> ViewState {
        self.state
    }

    pub fn page_data(&self) -> ArtistsPageData {
        ArtistsPageData::from(&self.state)
    }

    /// Fetches the whole collection and rebuilds the derived lists.
    ///
    /// Failures are not returned: they end up as the view's `last_error` and
    /// the view stays usable, so calling `load` again is the retry.
    pub async fn load(&mut self) -> &ViewState {
        self.transition(ViewState::begin_load);

        let result = self.repo.list_artists().await;
        if let Ok(artists) = &result {
            log::info!("Loaded {} artists", artists.len());
        }

        self.transition(|state| state.finish_load(result));
        &self.state
    }

    pub fn apply_filter(&mut self, criteria: FilterCriteria) -> &ViewState {
        self.transition(|state| state.apply_filter(criteria));
        &self.state
    }

    pub fn set_page(&mut self, page: usize) -> &ViewState {
        self.transition(|state| state.set_page(page));
        &self.state
    }

    pub fn set_page_size(&mut self, size: usize) -> ServiceResult<&ViewState> {
        let size = PageSize::new(size)?;
        self.transition(|state| state.set_page_size(size));
        Ok(&self.state)
    }

    /// Applies a parsed query string: criteria, then page size, then page.
    pub fn apply_form(&mut self, form: &ArtistFilterForm) -> ServiceResult<&ViewState> {
        let page_size = form.page_size.map(PageSize::new).transpose()?;

        self.transition(|state| {
            let mut state = state.apply_filter(form.to_criteria());
            if let Some(size) = page_size {
                state = state.set_page_size(size);
            }
            match form.page {
                Some(page) => state.set_page(page),
                None => state,
            }
        });

        Ok(&self.state)
    }

    /// Parses, validates and applies a raw query string.
    pub fn apply_query(&mut self, query: &str) -> ServiceResult<&ViewState> {
        let form = ArtistFilterForm::from_query(query).map_err(|err| {
            log::error!("Failed to validate artist filter: {err}");
            ServiceError::from(err)
        })?;
        self.apply_form(&form)
    }

    fn transition(&mut self, f: impl FnOnce(ViewState) -> ViewState) {
        let state = std::mem::take(&mut self.state);
        self.state = f(state);
    }
}

/// Loads a single artist for the detail page.
pub async fn load_artist<R>(repo: &R, id: i64) -> ServiceResult<Artist>
where
    R: ArtistReader + ?Sized,
{
    let id = ArtistId::new(id)?;

    repo.get_artist_by_id(id)
        .await
        .map_err(|err| {
            log::error!("Failed to load artist {id}: {err}");
            ServiceError::from(err)
        })?
        .ok_or(ServiceError::NotFound)
}
