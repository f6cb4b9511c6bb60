//! Free-text search over a film's descriptive fields.

use crate::catalog::MergedFilm;

/// Lower-cased text of every searchable field of one film.
///
/// Searched fields: preferred title, original title, logline, synopsis,
/// director, country, producer, festival names and award names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchDocument {
    fields: Vec<String>,
}

impl SearchDocument {
    /// Collect the searchable fields of `film`.
    pub fn of(film: &MergedFilm) -> Self {
        let record = &film.record;
        let mut fields: Vec<String> = [
            record.preferred_title(),
            record.original_title(),
            record.logline(),
            record.synopsis(),
            record.director(),
            record.country(),
        ]
        .into_iter()
        .flatten()
        .map(str::to_lowercase)
        .collect();

        fields.extend(record.producer_text().map(|text| text.to_lowercase()));
        fields.extend(record.festival_names().map(str::to_lowercase));
        fields.extend(record.award_names().map(str::to_lowercase));

        Self { fields }
    }

    /// `term` must already be lower-cased; see
    /// [`FilterSelection::search_term`](super::FilterSelection::search_term).
    pub fn matches(&self, term: &str) -> bool {
        self.fields.iter().any(|field| field.contains(term))
    }
}
