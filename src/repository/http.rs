//! `reqwest`-backed implementation of [`ArtistReader`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::domain::artist::Artist;
use crate::domain::types::ArtistId;
use crate::models::config::ClientConfig;
use crate::repository::ArtistReader;
use crate::repository::errors::{RepositoryError, RepositoryResult};

/// HTTP client for the Artist Data API rooted at `base_url`.
#[derive(Clone, Debug)]
pub struct HttpArtistRepository {
    client: reqwest::Client,
    base_url: String,
}

impl HttpArtistRepository {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> RepositoryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RepositoryError::Unexpected(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn from_config(config: &ClientConfig) -> RepositoryResult<Self> {
        Self::new(
            config.api_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn artists_url(&self) -> String {
        format!("{}/artists/", self.base_url)
    }

    fn artist_url(&self, id: ArtistId) -> String {
        format!("{}/artists/{id}", self.base_url)
    }
}

#[async_trait]
impl ArtistReader for HttpArtistRepository {
    async fn list_artists(&self) -> RepositoryResult<Vec<Artist>> {
        let url = self.artists_url();
        log::debug!("GET {url}");

        let artists = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Artist>>()
            .await?;

        Ok(artists)
    }

    async fn get_artist_by_id(&self, id: ArtistId) -> RepositoryResult<Option<Artist>> {
        let url = self.artist_url(id);
        log::debug!("GET {url}");

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let artist = response.error_for_status()?.json::<Artist>().await?;
        Ok(Some(artist))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_ignore_trailing_slash() {
        let repo =
            HttpArtistRepository::with_client(reqwest::Client::new(), "http://localhost:8000/api/v1/");

        assert_eq!(repo.base_url(), "http://localhost:8000/api/v1");
        assert_eq!(repo.artists_url(), "http://localhost:8000/api/v1/artists/");
        assert_eq!(
            repo.artist_url(ArtistId::new(5).unwrap()),
            "http://localhost:8000/api/v1/artists/5"
        );
    }
}
