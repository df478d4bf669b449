//! Client-side artist filter criteria.

use serde::{Deserialize, Serialize};

use crate::domain::artist::Artist;
use crate::domain::types::non_blank;

/// Optional constraints an artist must satisfy to stay in the filtered list.
///
/// Every present field is ANDed; an absent field places no constraint. Text
/// fields holding only whitespace are treated as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the artist name.
    pub name: Option<String>,
    /// Case-insensitive exact nationality.
    pub nationality: Option<String>,
    /// Case-insensitive exact art movement.
    pub style: Option<String>,
    /// Lowest accepted birth year, inclusive.
    pub min_year: Option<i32>,
    /// Highest accepted birth year, inclusive.
    pub max_year: Option<i32>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl AsRef<str>) -> Self {
        self.name = non_blank(name);
        self
    }

    pub fn nationality(mut self, nationality: impl AsRef<str>) -> Self {
        self.nationality = non_blank(nationality);
        self
    }

    pub fn style(mut self, style: impl AsRef<str>) -> Self {
        self.style = non_blank(style);
        self
    }

    pub fn min_year(mut self, year: i32) -> Self {
        self.min_year = Some(year);
        self
    }

    pub fn max_year(mut self, year: i32) -> Self {
        self.max_year = Some(year);
        self
    }

    /// True when no field constrains the result.
    pub fn is_empty(&self) -> bool {
        text(&self.name).is_none()
            && text(&self.nationality).is_none()
            && text(&self.style).is_none()
            && self.min_year.is_none()
            && self.max_year.is_none()
    }

    /// Tests `artist` against every present constraint.
    pub fn matches(&self, artist: &Artist) -> bool {
        if let Some(name) = text(&self.name) {
            if !artist.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }

        if let Some(nationality) = text(&self.nationality) {
            if !eq_ignore_case(artist.nationality.as_deref(), nationality) {
                return false;
            }
        }

        if let Some(style) = text(&self.style) {
            if !eq_ignore_case(artist.art_movement.as_deref(), style) {
                return false;
            }
        }

        // Missing birth years never disqualify.
        if let (Some(min), Some(born)) = (self.min_year, artist.birth_year) {
            if born < min {
                return false;
            }
        }

        if let (Some(max), Some(born)) = (self.max_year, artist.birth_year) {
            if born > max {
                return false;
            }
        }

        true
    }

    /// Returns the artists of `artists` that satisfy the criteria, in order.
    pub fn apply(&self, artists: &[Artist]) -> Vec<Artist> {
        artists
            .iter()
            .filter(|artist| self.matches(artist))
            .cloned()
            .collect()
    }
}

fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn eq_ignore_case(value: Option<&str>, expected: &str) -> bool {
    value.is_some_and(|v| v.to_lowercase() == expected.to_lowercase())
}
