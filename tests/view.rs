use std::sync::atomic::{AtomicUsize, Ordering};

use artist_db::domain::artist::Artist;
use artist_db::domain::filter::FilterCriteria;
use artist_db::domain::types::{ArtistId, PageSize};
use artist_db::repository::ArtistReader;
use artist_db::repository::errors::{RepositoryError, RepositoryResult};
use artist_db::services::artists::ArtistListView;
use async_trait::async_trait;

/// In-memory backend that counts how often the collection is fetched.
#[derive(Default)]
struct InMemoryArtists {
    artists: Vec<Artist>,
    fail: bool,
    fetches: AtomicUsize,
}

#[async_trait]
impl ArtistReader for InMemoryArtists {
    async fn list_artists(&self) -> RepositoryResult<Vec<Artist>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(RepositoryError::ConnectionError("network down".to_string()))
        } else {
            Ok(self.artists.clone())
        }
    }

    async fn get_artist_by_id(&self, id: ArtistId) -> RepositoryResult<Option<Artist>> {
        Ok(self.artists.iter().find(|a| a.id == id).cloned())
    }
}

fn artist(id: i64) -> Artist {
    Artist::new(ArtistId::new(id).unwrap(), format!("Artist #{id}"))
}

#[tokio::test]
async fn fifteen_artists_second_page_has_three() {
    let repo = InMemoryArtists {
        artists: (1..=15).map(artist).collect(),
        ..InMemoryArtists::default()
    };
    let mut view = ArtistListView::new(repo, PageSize::new(12).unwrap());

    view.load().await;
    let state = view.set_page(2);

    assert_eq!(state.page_artists(), &state.filtered_artists()[12..15]);
}

#[tokio::test]
async fn min_year_keeps_unknown_birth_years() {
    let repo = InMemoryArtists {
        artists: vec![artist(1).birth_year(1750), artist(2).birth_year(1850), artist(3)],
        ..InMemoryArtists::default()
    };
    let mut view = ArtistListView::new(repo, PageSize::default());
    view.load().await;

    let state = view.apply_filter(FilterCriteria::new().min_year(1800));
    let ids: Vec<i64> = state.filtered_artists().iter().map(|a| a.id.get()).collect();

    assert_eq!(ids, vec![2, 3]);
    assert_eq!(state.total_matched(), 2);
}

#[tokio::test]
async fn network_failure_leaves_an_error_and_no_artists() {
    let repo = InMemoryArtists {
        artists: (1..=3).map(artist).collect(),
        fail: true,
        ..InMemoryArtists::default()
    };
    let mut view = ArtistListView::new(repo, PageSize::default());

    let state = view.load().await;

    assert!(state.raw_artists().is_empty());
    assert!(!state.last_error().unwrap_or_default().is_empty());
    assert!(!state.is_loading());
}

#[tokio::test]
async fn only_load_fetches() {
    let repo = InMemoryArtists {
        artists: (1..=40).map(|id| artist(id).birth_year(1700 + id as i32)).collect(),
        ..InMemoryArtists::default()
    };
    let mut view = ArtistListView::new(repo, PageSize::default());

    view.load().await;
    view.apply_filter(FilterCriteria::new().max_year(1730));
    view.set_page(3);
    view.set_page_size(24).unwrap();
    view.apply_filter(FilterCriteria::default());

    let state = view.state().clone();
    assert_eq!(state.filtered_artists(), state.raw_artists());
    assert_eq!(state.current_page(), 1);

    view.load().await;
    let data = view.page_data();
    assert_eq!(data.artists.total, 40);
    assert_eq!(data.artists.total_pages, 2);
    assert_eq!(view.repository().fetches.load(Ordering::SeqCst), 2);
}
