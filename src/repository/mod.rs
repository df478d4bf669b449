use async_trait::async_trait;

use crate::domain::artist::Artist;
use crate::domain::types::ArtistId;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use http::HttpArtistRepository;

/// Read access to the Artist Data API.
///
/// The backend offers no server-side filtering or pagination; callers fetch
/// the whole collection and narrow it down locally.
#[async_trait]
pub trait ArtistReader: Send + Sync {
    /// Fetches the complete artist collection in backend order.
    async fn list_artists(&self) -> RepositoryResult<Vec<Artist>>;
    async fn get_artist_by_id(&self, id: ArtistId) -> RepositoryResult<Option<Artist>>;
}
