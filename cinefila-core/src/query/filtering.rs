//! Catalogue filtering with cascading option availability.
//!
//! A film is visible when it matches the search text and, for every
//! dimension with a non-empty selection, at least one of its own values is
//! selected. Genre, audience and keyword compare case-insensitively; year and
//! length compare exactly.
//!
//! The available options for a dimension are computed from the films that
//! pass every *other* active restriction, so picking a value never hides
//! that value itself.

use std::collections::{BTreeMap, BTreeSet};

use cinefila_model::{FilterDimension, LengthBucket};
use serde::Serialize;
use tracing::trace;

use super::facets::FilmFacets;
use super::search::SearchDocument;
use super::types::{FilterOptions, FilterSelection};
use crate::catalog::MergedFilm;

/// Selection prepared for matching: text sets folded to lower case and the
/// search term trimmed.
#[derive(Debug, Clone, Default)]
struct Criteria {
    search: Option<String>,
    genres: BTreeSet<String>,
    years: BTreeSet<String>,
    lengths: BTreeSet<LengthBucket>,
    audiences: BTreeSet<String>,
    keywords: BTreeSet<String>,
}

impl Criteria {
    fn from_selection(selection: &FilterSelection) -> Self {
        let fold = |values: &BTreeSet<String>| -> BTreeSet<String> {
            values
                .iter()
                .map(|value| value.trim().to_lowercase())
                .filter(|value| !value.is_empty())
                .collect()
        };

        Self {
            search: selection.search_term(),
            genres: fold(&selection.genres),
            years: selection
                .years
                .iter()
                .map(|year| year.trim().to_string())
                .filter(|year| !year.is_empty())
                .collect(),
            lengths: selection.lengths.clone(),
            audiences: fold(&selection.audiences),
            keywords: fold(&selection.keywords),
        }
    }

    fn dimension_matches(&self, dimension: FilterDimension, facets: &FilmFacets) -> bool {
        match dimension {
            FilterDimension::Genre => {
                self.genres.is_empty()
                    || facets.genres_folded().iter().any(|genre| self.genres.contains(genre))
            }
            FilterDimension::Year => {
                self.years.is_empty()
                    || facets.year.as_ref().is_some_and(|year| self.years.contains(year))
            }
            FilterDimension::Length => {
                self.lengths.is_empty()
                    || facets.length.is_some_and(|bucket| self.lengths.contains(&bucket))
            }
            FilterDimension::Audience => {
                self.audiences.is_empty()
                    || facets
                        .audience_folded()
                        .is_some_and(|audience| self.audiences.contains(audience))
            }
            FilterDimension::Keyword => {
                self.keywords.is_empty()
                    || facets
                        .keywords_folded()
                        .iter()
                        .any(|keyword| self.keywords.contains(keyword))
            }
        }
    }
}

/// Visible films and the options still selectable alongside them.
#[derive(Debug, Clone, Serialize)]
pub struct FilterOutcome<'a> {
    pub visible: Vec<&'a MergedFilm>,
    pub available: FilterOptions,
}

/// Stateless evaluator over one catalogue snapshot.
///
/// Facets and search text are extracted once in [`FilterEngine::new`]; every
/// query afterwards is a pure function of the selection.
#[derive(Debug)]
pub struct FilterEngine<'a> {
    films: &'a [MergedFilm],
    facets: Vec<FilmFacets>,
    documents: Vec<SearchDocument>,
}

impl<'a> FilterEngine<'a> {
    /// Index `films`; results keep their order.
    pub fn new(films: &'a [MergedFilm]) -> Self {
        Self {
            facets: films.iter().map(FilmFacets::of).collect(),
            documents: films.iter().map(SearchDocument::of).collect(),
            films,
        }
    }

    /// Films indexed, regardless of any selection.
    pub fn len(&self) -> usize {
        self.films.len()
    }

    /// True for an empty catalogue.
    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    /// Facets of the film at `index` in catalogue order.
    pub fn facets(&self, index: usize) -> Option<&FilmFacets> {
        self.facets.get(index)
    }

    /// Positions (in catalogue order) of films passing `selection`.
    pub fn visible_indices(&self, selection: &FilterSelection) -> Vec<usize> {
        let criteria = Criteria::from_selection(selection);
        self.matching(&criteria, None)
    }

    pub fn visible(&self, selection: &FilterSelection) -> Vec<&'a MergedFilm> {
        let films = self.films;
        self.visible_indices(selection)
            .into_iter()
            .map(|index| &films[index])
            .collect()
    }

    /// For each dimension, the distinct values present among films that pass
    /// the selection with that dimension's own restriction lifted.
    pub fn available_options(&self, selection: &FilterSelection) -> FilterOptions {
        let criteria = Criteria::from_selection(selection);
        let mut candidates = BTreeMap::new();

        for dimension in FilterDimension::all().iter().copied() {
            let indices = self.matching(&criteria, Some(dimension));
            trace!(%dimension, candidates = indices.len(), "computed option availability");
            candidates.insert(dimension, indices);
        }

        self.collect_options(&candidates)
    }

    /// Option lists of the whole catalogue, ignoring any selection.
    pub fn all_options(&self) -> FilterOptions {
        let candidates: BTreeMap<FilterDimension, Vec<usize>> = FilterDimension::all()
            .iter()
            .map(|dimension| (*dimension, (0..self.films.len()).collect()))
            .collect();
        self.collect_options(&candidates)
    }

    pub fn evaluate(&self, selection: &FilterSelection) -> FilterOutcome<'a> {
        FilterOutcome {
            visible: self.visible(selection),
            available: self.available_options(selection),
        }
    }

    fn matching(&self, criteria: &Criteria, skip: Option<FilterDimension>) -> Vec<usize> {
        self.facets
            .iter()
            .zip(&self.documents)
            .enumerate()
            .filter(|(_, (facets, document))| {
                criteria
                    .search
                    .as_deref()
                    .is_none_or(|term| document.matches(term))
                    && FilterDimension::all()
                        .iter()
                        .copied()
                        .filter(|dimension| Some(*dimension) != skip)
                        .all(|dimension| criteria.dimension_matches(dimension, facets))
            })
            .map(|(index, _)| index)
            .collect()
    }

    fn collect_options(
        &self,
        candidates: &BTreeMap<FilterDimension, Vec<usize>>,
    ) -> FilterOptions {
        let indices_for = |dimension: FilterDimension| {
            candidates
                .get(&dimension)
                .map(Vec::as_slice)
                .unwrap_or_default()
        };

        let text_values = |dimension: FilterDimension| -> BTreeSet<String> {
            indices_for(dimension)
                .iter()
                .flat_map(|&index| self.facets[index].values(dimension))
                .collect()
        };

        let lengths: BTreeSet<LengthBucket> = indices_for(FilterDimension::Length)
            .iter()
            .filter_map(|&index| self.facets[index].length)
            .collect();

        FilterOptions {
            genres: text_values(FilterDimension::Genre).into_iter().collect(),
            years: text_values(FilterDimension::Year).into_iter().rev().collect(),
            lengths: lengths.into_iter().collect(),
            audiences: text_values(FilterDimension::Audience).into_iter().collect(),
            keywords: text_values(FilterDimension::Keyword).into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinefila_model::FilmRecord;

    struct Fixture {
        title: &'static str,
        genres: &'static [&'static str],
        completed: &'static str,
        runtime: &'static str,
        audience: &'static str,
        keywords: &'static str,
    }

    fn build(fixtures: &[Fixture]) -> Vec<MergedFilm> {
        fixtures
            .iter()
            .map(|fixture| {
                let mut record = FilmRecord::default();
                record.film.title_english = Some(fixture.title.to_string());
                record.film.genres = fixture.genres.iter().map(|g| g.to_string()).collect();
                record.film.date_of_completion = Some(fixture.completed.to_string());
                record.film.runtime = Some(fixture.runtime.to_string());
                record.film.target_group.audience = Some(fixture.audience.to_string());
                record.film.keywords = Some(fixture.keywords.to_string());
                MergedFilm::unmatched(record)
            })
            .collect()
    }

    fn catalogue() -> Vec<MergedFilm> {
        build(&[
            Fixture {
                title: "Wolfie",
                genres: &["Drama"],
                completed: "2021",
                runtime: "25",
                audience: "Children",
                keywords: "family, animals",
            },
            Fixture {
                title: "Soul Shift",
                genres: &["Documentary", "Drama"],
                completed: "03/2019",
                runtime: "1:20:00",
                audience: "Adults",
                keywords: "memory",
            },
            Fixture {
                title: "Old Reel",
                genres: &["Documentary"],
                completed: "1990",
                runtime: "55",
                audience: "adults",
                keywords: "Archive, Memory",
            },
        ])
    }

    fn titles(films: &[&MergedFilm]) -> Vec<String> {
        films.iter().map(|film| film.display_title().to_string()).collect()
    }

    #[test]
    fn empty_selection_shows_everything_in_order() {
        let films = catalogue();
        let engine = FilterEngine::new(&films);
        assert_eq!(
            titles(&engine.visible(&FilterSelection::default())),
            vec!["Wolfie", "Soul Shift", "Old Reel"]
        );
    }

    #[test]
    fn dimensions_combine_with_and() {
        let films = catalogue();
        let engine = FilterEngine::new(&films);
        let selection = FilterSelection::new()
            .with_genre("drama")
            .with_length(LengthBucket::FullLength);
        assert_eq!(titles(&engine.visible(&selection)), vec!["Soul Shift"]);
    }

    #[test]
    fn values_within_a_dimension_combine_with_or() {
        let films = catalogue();
        let engine = FilterEngine::new(&films);
        let selection = FilterSelection::new().with_year("2021").with_year("1990");
        assert_eq!(titles(&engine.visible(&selection)), vec!["Wolfie", "Old Reel"]);
    }

    #[test]
    fn text_dimensions_ignore_case() {
        let films = catalogue();
        let engine = FilterEngine::new(&films);
        let by_audience = FilterSelection::new().with_audience("ADULTS");
        assert_eq!(titles(&engine.visible(&by_audience)), vec!["Soul Shift", "Old Reel"]);
        let by_keyword = FilterSelection::new().with_keyword("memory");
        assert_eq!(titles(&engine.visible(&by_keyword)), vec!["Soul Shift", "Old Reel"]);
    }

    #[test]
    fn search_is_trimmed_substring_match() {
        let films = catalogue();
        let engine = FilterEngine::new(&films);
        let selection = FilterSelection::new().with_search("  SHIFT ");
        assert_eq!(titles(&engine.visible(&selection)), vec!["Soul Shift"]);
        let blank = FilterSelection::new().with_search("   ");
        assert_eq!(engine.visible(&blank).len(), 3);
    }

    #[test]
    fn filtering_is_idempotent() {
        let films = catalogue();
        let engine = FilterEngine::new(&films);
        let selection = FilterSelection::new().with_genre("Documentary").with_search("o");
        let first = engine.visible_indices(&selection);
        let second = engine.visible_indices(&selection);
        assert_eq!(first, second);
        assert_eq!(engine.available_options(&selection), engine.available_options(&selection));
    }

    #[test]
    fn cascading_availability_hides_empty_combinations() {
        let films = catalogue();
        let engine = FilterEngine::new(&films);

        assert!(engine.all_options().years.contains(&"1990".to_string()));

        let drama = FilterSelection::new().with_genre("Drama");
        assert!(engine.visible(&drama.clone().with_year("1990")).is_empty());

        let available = engine.available_options(&drama);
        assert!(!available.years.contains(&"1990".to_string()));
        assert_eq!(available.years, vec!["2021", "2019"]);
        // The genre dimension ignores its own selection.
        assert_eq!(available.genres, vec!["Documentary", "Drama"]);
    }

    #[test]
    fn each_dimension_is_narrowed_by_the_others() {
        let films = catalogue();
        let engine = FilterEngine::new(&films);
        let selection = FilterSelection::new()
            .with_length(LengthBucket::Short)
            .with_audience("Adults");
        assert!(engine.visible(&selection).is_empty());
        let available = engine.available_options(&selection);
        assert_eq!(
            available.lengths,
            vec![LengthBucket::MidLength, LengthBucket::FullLength]
        );
        assert_eq!(available.audiences, vec!["Children"]);
    }

    #[test]
    fn all_options_are_sorted_per_dimension() {
        let films = catalogue();
        let engine = FilterEngine::new(&films);
        let options = engine.all_options();
        assert_eq!(options.genres, vec!["Documentary", "Drama"]);
        assert_eq!(options.years, vec!["2021", "2019", "1990"]);
        assert_eq!(
            options.lengths,
            vec![LengthBucket::Short, LengthBucket::MidLength, LengthBucket::FullLength]
        );
        assert_eq!(options.audiences, vec!["Adults", "Children", "adults"]);
        assert_eq!(
            options.keywords,
            vec!["Archive", "Memory", "animals", "family", "memory"]
        );
    }

    #[test]
    fn evaluate_returns_both_views() {
        let films = catalogue();
        let engine = FilterEngine::new(&films);
        let selection = FilterSelection::new().with_genre("Drama").with_keyword("family");
        let outcome = engine.evaluate(&selection);
        assert_eq!(titles(&outcome.visible), vec!["Wolfie"]);
        assert_eq!(outcome.available.keywords, vec!["animals", "family", "memory"]);
        assert_eq!(outcome.available.genres, vec!["Drama"]);
    }
}
