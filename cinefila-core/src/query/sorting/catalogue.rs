//! Display order of the merged catalogue.

use super::keys::{OptionalDateKey, RankKey};
use super::traits::SortKey;
use crate::catalog::MergedFilm;
use std::cmp::Ordering;

/// Composite key: rank ascending, then completion date descending with
/// undated films last.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CatalogueKey {
    rank: RankKey,
    completed: OptionalDateKey,
}

impl CatalogueKey {
    /// Key of `film` in catalogue order.
    pub fn of(film: &MergedFilm) -> Self {
        Self {
            rank: RankKey::new(film.rank),
            completed: OptionalDateKey::new(film.completion_date()),
        }
    }
}

impl Ord for CatalogueKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .compare_with_order(&other.rank, false)
            .then_with(|| self.completed.compare_with_order(&other.completed, true))
    }
}

impl PartialOrd for CatalogueKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Catalogue order: ranked ascending, then newest completion first.
pub fn compare_films(a: &MergedFilm, b: &MergedFilm) -> Ordering {
    CatalogueKey::of(a).cmp(&CatalogueKey::of(b))
}

/// Sort in place. Stable: films with equal keys keep their input order.
pub fn sort_catalogue(films: &mut [MergedFilm]) {
    films.sort_by_cached_key(CatalogueKey::of);
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinefila_model::{FilmRecord, Rank};

    fn film(title: &str, rank: Rank, completed: Option<&str>) -> MergedFilm {
        let mut record = FilmRecord::default();
        record.film.title_english = Some(title.to_string());
        record.film.date_of_completion = completed.map(str::to_string);
        MergedFilm {
            record,
            supplemental: None,
            rank,
        }
    }

    fn titles(films: &[MergedFilm]) -> Vec<&str> {
        films.iter().map(MergedFilm::display_title).collect()
    }

    #[test]
    fn ranked_ascending_then_unranked_by_recency() {
        let mut films = vec![
            film("Old", Rank::Unranked, Some("2015")),
            film("Third", Rank::Ranked(3), None),
            film("Undated", Rank::Unranked, None),
            film("Recent", Rank::Unranked, Some("05/2022")),
            film("First", Rank::Ranked(1), Some("1999")),
            film("Middle", Rank::Unranked, Some("11/2019")),
        ];
        sort_catalogue(&mut films);
        assert_eq!(
            titles(&films),
            vec!["First", "Third", "Recent", "Middle", "Old", "Undated"]
        );
    }

    #[test]
    fn equal_ranks_fall_back_to_date() {
        let mut films = vec![
            film("Older", Rank::Ranked(2), Some("2010")),
            film("Newer", Rank::Ranked(2), Some("2020")),
        ];
        sort_catalogue(&mut films);
        assert_eq!(titles(&films), vec!["Newer", "Older"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let mut films = vec![
            film("B", Rank::Unranked, None),
            film("A", Rank::Unranked, Some("no date")),
            film("C", Rank::Unranked, None),
            film("Same 1", Rank::Unranked, Some("2018")),
            film("Same 2", Rank::Unranked, Some("03/2018 ")),
        ];
        sort_catalogue(&mut films);
        // "03/2018 " trims to a month/year and is later than Jan 1st.
        assert_eq!(titles(&films), vec!["Same 2", "Same 1", "B", "A", "C"]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let mut films = vec![
            film("x", Rank::Unranked, Some("2001")),
            film("y", Rank::Ranked(4), None),
            film("z", Rank::Unranked, Some("2001")),
        ];
        sort_catalogue(&mut films);
        let once: Vec<String> = titles(&films).into_iter().map(String::from).collect();
        sort_catalogue(&mut films);
        assert_eq!(titles(&films), once);
    }
}
