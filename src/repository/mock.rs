//! Mock repository implementation for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::artist::Artist;
use crate::domain::types::ArtistId;
use crate::repository::ArtistReader;
use crate::repository::errors::RepositoryResult;

mock! {
    pub Repository {}

    #[async_trait]
    impl ArtistReader for Repository {
        async fn list_artists(&self) -> RepositoryResult<Vec<Artist>>;
        async fn get_artist_by_id(&self, id: ArtistId) -> RepositoryResult<Option<Artist>>;
    }
}
