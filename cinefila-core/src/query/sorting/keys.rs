//! Sort key types for comparing catalogue entries
//!
//! These types wrap the values extracted from a merged film and handle
//! missing data in their `Ord` implementations.

use super::traits::SortKey;
use chrono::NaiveDate;
use cinefila_model::Rank;
use std::cmp::Ordering;

/// Editorial rank; unranked films compare after every ranked one.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct RankKey(Rank);

impl RankKey {
    /// Wrap a rank.
    pub fn new(rank: Rank) -> Self {
        RankKey(rank)
    }
}

impl SortKey for RankKey {
    fn missing() -> Self {
        RankKey(Rank::Unranked)
    }

    fn is_missing(&self) -> bool {
        !self.0.is_ranked()
    }
}

/// Completion date key for temporal sorting
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OptionalDateKey(Option<NaiveDate>);

impl OptionalDateKey {
    /// Wrap an optional completion date.
    pub fn new(value: Option<NaiveDate>) -> Self {
        OptionalDateKey(value)
    }
}

impl Ord for OptionalDateKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less, // Items with dates come first
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialOrd for OptionalDateKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl SortKey for OptionalDateKey {
    fn missing() -> Self {
        OptionalDateKey(None)
    }

    fn is_missing(&self) -> bool {
        self.0.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32) -> OptionalDateKey {
        OptionalDateKey::new(NaiveDate::from_ymd_opt(year, 1, 1))
    }

    #[test]
    fn missing_dates_sort_last_in_both_directions() {
        let missing = OptionalDateKey::missing();
        assert_eq!(date(2020).compare_with_order(&missing, false), Ordering::Less);
        assert_eq!(date(2020).compare_with_order(&missing, true), Ordering::Less);
        assert_eq!(missing.compare_with_order(&date(1990), true), Ordering::Greater);
    }

    #[test]
    fn reversed_dates_put_recent_first() {
        assert_eq!(date(2021).compare_with_order(&date(2019), true), Ordering::Less);
        assert_eq!(date(2021).compare_with_order(&date(2019), false), Ordering::Greater);
    }

    #[test]
    fn ranked_before_unranked() {
        let first = RankKey::new(Rank::Ranked(1));
        let tenth = RankKey::new(Rank::Ranked(10));
        assert_eq!(first.compare_with_order(&tenth, false), Ordering::Less);
        assert_eq!(tenth.compare_with_order(&RankKey::missing(), false), Ordering::Less);
        assert_eq!(
            RankKey::missing().compare_with_order(&RankKey::missing(), false),
            Ordering::Equal
        );
    }
}
