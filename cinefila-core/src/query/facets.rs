//! Per-film values for each filter dimension.

use crate::catalog::{MergedFilm, completion_year};
use crate::runtime::length_bucket;
use cinefila_model::{FilterDimension, LengthBucket};

/// Filterable values of one film, extracted once per catalogue load.
///
/// Text values keep their written form for option lists; matching goes
/// through the lower-cased copies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilmFacets {
    pub genres: Vec<String>,
    pub year: Option<String>,
    pub length: Option<LengthBucket>,
    pub audience: Option<String>,
    pub keywords: Vec<String>,
    genres_folded: Vec<String>,
    audience_folded: Option<String>,
    keywords_folded: Vec<String>,
}

impl FilmFacets {
    /// Extract every dimension of `film`.
    pub fn of(film: &MergedFilm) -> Self {
        let record = &film.record;
        let genres: Vec<String> = record.genre_list().map(str::to_string).collect();
        let keywords: Vec<String> = record.keyword_list().into_iter().map(str::to_string).collect();
        let audience = record.audience().map(str::to_string);

        Self {
            genres_folded: fold_all(&genres),
            keywords_folded: fold_all(&keywords),
            audience_folded: audience.as_deref().map(str::to_lowercase),
            year: record
                .film
                .date_of_completion
                .as_deref()
                .and_then(completion_year)
                .map(str::to_string),
            length: length_bucket(record),
            genres,
            audience,
            keywords,
        }
    }

    /// Written values for `dimension`.
    pub fn values(&self, dimension: FilterDimension) -> Vec<String> {
        match dimension {
            FilterDimension::Genre => self.genres.clone(),
            FilterDimension::Year => self.year.iter().cloned().collect(),
            FilterDimension::Length => self
                .length
                .iter()
                .map(|bucket| bucket.label().to_string())
                .collect(),
            FilterDimension::Audience => self.audience.iter().cloned().collect(),
            FilterDimension::Keyword => self.keywords.clone(),
        }
    }

    pub(crate) fn genres_folded(&self) -> &[String] {
        &self.genres_folded
    }

    pub(crate) fn audience_folded(&self) -> Option<&str> {
        self.audience_folded.as_deref()
    }

    pub(crate) fn keywords_folded(&self) -> &[String] {
        &self.keywords_folded
    }
}

fn fold_all(values: &[String]) -> Vec<String> {
    values.iter().map(|value| value.to_lowercase()).collect()
}
