use serde::{Deserialize, Serialize};

use crate::domain::types::ArtistId;

/// Artist record as served by the Artist Data API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default)]
    pub death_year: Option<i32>,
    #[serde(default)]
    pub nationality: Option<String>,
    /// Movement or style the artist is associated with.
    #[serde(default)]
    pub art_movement: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub notable_works: Vec<String>,
}

impl Artist {
    #[must_use]
    pub fn new(id: ArtistId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            birth_year: None,
            death_year: None,
            nationality: None,
            art_movement: None,
            bio: None,
            image_url: None,
            notable_works: Vec::new(),
        }
    }

    #[must_use]
    pub fn birth_year(mut self, year: i32) -> Self {
        self.birth_year = Some(year);
        self
    }

    #[must_use]
    pub fn death_year(mut self, year: i32) -> Self {
        self.death_year = Some(year);
        self
    }

    #[must_use]
    pub fn nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = Some(nationality.into());
        self
    }

    #[must_use]
    pub fn art_movement(mut self, movement: impl Into<String>) -> Self {
        self.art_movement = Some(movement.into());
        self
    }

    /// Lifespan label such as `1840–1926` or `b. 1881`.
    pub fn lifespan(&self) -> Option<String> {
        match (self.birth_year, self.death_year) {
            (Some(born), Some(died)) => Some(format!("{born}–{died}")),
            (Some(born), None) => Some(format!("b. {born}")),
            (None, Some(died)) => Some(format!("d. {died}")),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_sparse_backend_payload() {
        let artist: Artist = serde_json::from_str(
            r#"{"id": 3, "name": "Claude Monet", "birth_year": 1840, "nationality": null}"#,
        )
        .unwrap();

        assert_eq!(artist.id.get(), 3);
        assert_eq!(artist.birth_year, Some(1840));
        assert_eq!(artist.death_year, None);
        assert_eq!(artist.nationality, None);
        assert!(artist.notable_works.is_empty());
    }

    #[test]
    fn lifespan_covers_partial_dates() {
        let id = ArtistId::new(1).unwrap();
        assert_eq!(
            Artist::new(id, "Monet").birth_year(1840).death_year(1926).lifespan(),
            Some("1840–1926".to_string())
        );
        assert_eq!(
            Artist::new(id, "Picasso").birth_year(1881).lifespan(),
            Some("b. 1881".to_string())
        );
        assert_eq!(Artist::new(id, "Anonymous").lifespan(), None);
    }
}
