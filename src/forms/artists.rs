use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::filter::FilterCriteria;
use crate::forms::FormError;

/// Upper bound accepted for year filters.
pub const MAX_YEAR: i32 = 3000;

#[derive(Debug, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_year_range"))]
/// Filter and paging parameters of the artists page query string.
pub struct ArtistFilterForm {
    #[validate(length(max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 100))]
    pub nationality: Option<String>,
    #[validate(length(max = 100))]
    pub style: Option<String>,
    #[validate(range(min = 0, max = MAX_YEAR))]
    pub min_year: Option<i32>,
    #[validate(range(min = 0, max = MAX_YEAR))]
    pub max_year: Option<i32>,
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    #[validate(range(min = 1))]
    pub page_size: Option<usize>,
}

fn validate_year_range(form: &ArtistFilterForm) -> Result<(), ValidationError> {
    match (form.min_year, form.max_year) {
        (Some(min), Some(max)) if min > max => Err(ValidationError::new("year_range")
            .with_message("min_year must not exceed max_year".into())),
        _ => Ok(()),
    }
}

impl ArtistFilterForm {
    /// Parses and validates a query string such as `name=monet&min_year=1800`.
    pub fn from_query(query: &str) -> Result<Self, FormError> {
        let form: Self =
            serde_html_form::from_str(query).map_err(|e| FormError::Query(e.to_string()))?;
        form.validate()?;
        Ok(form)
    }

    /// Builds the filter criteria; blank text fields become "no constraint".
    pub fn to_criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new();
        if let Some(name) = &self.name {
            criteria = criteria.name(name);
        }
        if let Some(nationality) = &self.nationality {
            criteria = criteria.nationality(nationality);
        }
        if let Some(style) = &self.style {
            criteria = criteria.style(style);
        }
        criteria.min_year = self.min_year;
        criteria.max_year = self.max_year;
        criteria
    }
}
