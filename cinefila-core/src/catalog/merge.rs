//! Joins primary film records with supplemental editorial data.
//!
//! The join is a heuristic: both sides are reduced to normalized title keys
//! and the first supplemental entry registered under a key wins. Unrelated
//! films with colliding titles would share metadata; collisions are logged
//! at debug level but not resolved.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use cinefila_model::{FilmInfo, FilmRecord, SupplementalEntry};
use tracing::{debug, info};

use super::merged::MergedFilm;
use super::normalize::normalize_title_key;
use crate::query::sorting::sort_catalogue;

/// Lookup from normalized title key to supplemental entry.
#[derive(Debug)]
pub struct SupplementalIndex<'a> {
    entries: &'a [SupplementalEntry],
    by_key: HashMap<String, usize>,
}

impl<'a> SupplementalIndex<'a> {
    /// Register every entry under each of its non-empty title keys. A key
    /// already taken by an earlier entry keeps that earlier entry.
    pub fn build(entries: &'a [SupplementalEntry]) -> Self {
        let mut by_key = HashMap::new();

        for (position, entry) in entries.iter().enumerate() {
            for title in entry.film.variants() {
                let key = normalize_title_key(title);
                if key.is_empty() {
                    continue;
                }
                match by_key.entry(key) {
                    Entry::Vacant(slot) => {
                        slot.insert(position);
                    }
                    Entry::Occupied(slot) if *slot.get() != position => {
                        debug!(
                            key = %slot.key(),
                            kept = *slot.get(),
                            ignored = position,
                            "supplemental title key already registered"
                        );
                    }
                    Entry::Occupied(_) => {}
                }
            }
        }

        Self { entries, by_key }
    }

    /// Number of distinct title keys registered, not entries.
    ///
    /// ```
    /// use cinefila_core::catalog::SupplementalIndex;
    ///
    /// assert_eq!(SupplementalIndex::build(&[]).len(), 0);
    /// ```
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// True when no entry contributed a usable title key.
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Probe the film's titles in order original, English, other and return
    /// the first hit.
    pub fn lookup(&self, film: &FilmInfo) -> Option<&'a SupplementalEntry> {
        let entries = self.entries;
        film.title_variants()
            .map(normalize_title_key)
            .find_map(|key| self.by_key.get(&key).map(|&idx| &entries[idx]))
    }
}

/// Options that only affect diagnostics, never the merged data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOptions {
    /// Log the titles that ended up unranked.
    pub dev_diagnostics: bool,
}

/// Attach supplemental data to each primary record. Output has the same
/// length and order as `primary`.
pub fn merge_records(
    primary: Vec<FilmRecord>,
    supplemental: &[SupplementalEntry],
) -> Vec<MergedFilm> {
    let index = SupplementalIndex::build(supplemental);

    primary
        .into_iter()
        .map(|record| match index.lookup(&record.film) {
            Some(entry) => MergedFilm::matched(record, entry),
            None => MergedFilm::unmatched(record),
        })
        .collect()
}

/// Merge, then order the result for display.
pub fn merge_and_sort(
    primary: Vec<FilmRecord>,
    supplemental: &[SupplementalEntry],
    options: MergeOptions,
) -> Vec<MergedFilm> {
    let mut films = merge_records(primary, supplemental);
    sort_catalogue(&mut films);

    let matched = films.iter().filter(|film| film.supplemental.is_some()).count();
    let unranked = unranked_titles(&films);
    debug!(
        total = films.len(),
        matched,
        unranked = unranked.len(),
        "merged catalogue documents"
    );

    if options.dev_diagnostics && !unranked.is_empty() {
        info!(titles = ?unranked, "films without ranking (no additional-info match)");
    }

    films
}

/// Titles of unranked films: English, else original, else "Unknown".
pub fn unranked_titles(films: &[MergedFilm]) -> Vec<&str> {
    films
        .iter()
        .filter(|film| !film.rank.is_ranked())
        .map(|film| film.record.preferred_title().unwrap_or("Unknown"))
        .collect()
}
