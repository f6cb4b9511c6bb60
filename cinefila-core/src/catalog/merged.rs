use cinefila_model::{FilmRecord, Rank, Slug, SupplementalEntry};
use serde::Serialize;

use super::completion::parse_completion_date;

/// Editorial fields copied from the matching supplemental entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SupplementalInfo {
    /// Ranking exactly as written; see [`MergedFilm::rank`] for the number.
    pub ranking: String,
    pub review: Option<String>,
    pub sales: Option<String>,
    pub status: Option<String>,
    pub festival_distribution_only: Option<String>,
    pub download_poster: Option<String>,
    pub download_stills: Option<String>,
    pub download_presskit: Option<String>,
    pub sharing: Option<String>,
    pub trailer_url: Option<String>,
}

impl From<&SupplementalEntry> for SupplementalInfo {
    fn from(entry: &SupplementalEntry) -> Self {
        Self {
            ranking: entry.ranking.clone().unwrap_or_default(),
            review: entry.review.clone(),
            sales: entry.sales.clone(),
            status: entry.status.clone(),
            festival_distribution_only: entry.festival_distribution_only.clone(),
            download_poster: entry.download_poster.clone(),
            download_stills: entry.download_stills.clone(),
            download_presskit: entry.download_presskit.clone(),
            sharing: entry.sharing.clone(),
            trailer_url: entry.trailer_url.clone(),
        }
    }
}

/// A primary record together with whatever the supplemental document said
/// about it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedFilm {
    pub record: FilmRecord,
    pub supplemental: Option<SupplementalInfo>,
    pub rank: Rank,
}

impl MergedFilm {
    /// A film no supplemental entry matched; always unranked.
    pub fn unmatched(record: FilmRecord) -> Self {
        Self {
            record,
            supplemental: None,
            rank: Rank::Unranked,
        }
    }

    /// A film joined with `entry`, ranked from its ranking text.
    pub fn matched(record: FilmRecord, entry: &SupplementalEntry) -> Self {
        let info = SupplementalInfo::from(entry);
        Self {
            rank: Rank::parse(&info.ranking),
            record,
            supplemental: Some(info),
        }
    }

    /// Slug of the display title.
    pub fn slug(&self) -> Slug {
        self.record.slug()
    }

    /// English title, else original, else "Untitled".
    pub fn display_title(&self) -> &str {
        self.record.display_title()
    }

    /// Completion date used for ordering, if it parses.
    pub fn completion_date(&self) -> Option<chrono::NaiveDate> {
        self.record
            .film
            .date_of_completion
            .as_deref()
            .and_then(parse_completion_date)
    }

    /// Non-blank trailer link from the supplemental entry.
    pub fn trailer_url(&self) -> Option<&str> {
        self.supplemental
            .as_ref()
            .and_then(|info| info.trailer_url.as_deref())
            .filter(|url| !url.trim().is_empty())
    }
}
