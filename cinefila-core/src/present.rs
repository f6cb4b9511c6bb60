//! Formatting rules shared by every front end. No layout lives here.

use cinefila_model::{FilmRecord, Rank, Slug};
use serde::Serialize;

use crate::assets::AssetConventions;
use crate::catalog::{MergedFilm, completion_year};
use crate::runtime::{display_runtime, parse_runtime_minutes};

/// Shown when a record names no director.
pub const UNKNOWN_DIRECTOR: &str = "Unknown Director";
/// Genres shown on a catalogue card.
pub const CARD_GENRES: usize = 3;
/// Characters of logline shown on a card before it is cut.
pub const CARD_LOGLINE_CHARS: usize = 180;

/// `"1 film"`, `"0 films"`, `"12 films"`.
pub fn film_count_label(count: usize) -> String {
    if count == 1 {
        "1 film".to_string()
    } else {
        format!("{count} films")
    }
}

/// Cut `text` to at most `max_chars` characters plus a trailing `…`,
/// backing off to the last word boundary when there is one.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut = text
        .char_indices()
        .nth(max_chars)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len());
    let head = &text[..cut];
    let head = match head.rfind(char::is_whitespace) {
        Some(space) if space > 0 => &head[..space],
        _ => head,
    };
    format!("{}…", head.trim_end())
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Director, or [`UNKNOWN_DIRECTOR`].
pub fn director_label(record: &FilmRecord) -> &str {
    record.director().unwrap_or(UNKNOWN_DIRECTOR)
}

/// Four-digit completion year, if one can be read.
pub fn year_label(record: &FilmRecord) -> Option<&str> {
    record.film.date_of_completion.as_deref().and_then(completion_year)
}

/// `"Title | 2021 | 25 min"`, leaving out the parts that are unknown.
pub fn card_heading(record: &FilmRecord) -> String {
    let mut heading = record.display_title().to_string();
    if let Some(year) = year_label(record) {
        heading.push_str(" | ");
        heading.push_str(year);
    }
    if let Some(minutes) = record
        .film
        .runtime
        .as_deref()
        .and_then(parse_runtime_minutes)
        .filter(|minutes| *minutes > 0)
    {
        heading.push_str(&format!(" | {minutes} min"));
    }
    heading
}

/// Everything a catalogue grid shows for one film.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilmCard {
    pub slug: Slug,
    pub title: String,
    pub heading: String,
    pub director: String,
    pub year: Option<String>,
    pub genres: Vec<String>,
    pub logline: Option<String>,
    pub poster: Option<String>,
    pub rank: Rank,
}

impl FilmCard {
    /// Card for `film`. The poster is the conventional path, unprobed.
    pub fn new(film: &MergedFilm, assets: &AssetConventions) -> Self {
        let record = &film.record;
        Self {
            slug: film.slug(),
            title: record.display_title().to_string(),
            heading: card_heading(record),
            director: director_label(record).to_string(),
            year: year_label(record).map(str::to_string),
            genres: record.genre_list().take(CARD_GENRES).map(str::to_string).collect(),
            logline: record.logline().map(|text| excerpt(text, CARD_LOGLINE_CHARS)),
            poster: assets.poster_path(record),
            rank: film.rank,
        }
    }
}

/// Festival or award line: name/section, then country and date when known.
fn appearance_line(label: Option<&str>, country: Option<&str>, date: Option<&str>) -> Option<String> {
    let label = label.map(str::trim).filter(|label| !label.is_empty())?;
    let details: Vec<&str> = [country, date]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    if details.is_empty() {
        Some(label.to_string())
    } else {
        Some(format!("{label} ({})", details.join(", ")))
    }
}

/// The film page: card fields plus the long-form sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilmDetail {
    #[serde(flatten)]
    pub card: FilmCard,
    pub original_title: Option<String>,
    pub runtime: Option<String>,
    pub country: Option<String>,
    pub audience: Option<String>,
    pub keywords: Vec<String>,
    pub synopsis: Option<String>,
    pub directors_note: Option<String>,
    pub producer: Option<String>,
    pub festivals: Vec<String>,
    pub awards: Vec<String>,
    pub review: Option<String>,
    pub status: Option<String>,
    pub trailer_url: Option<String>,
    pub director_photo: Option<String>,
    pub still_candidates: Vec<String>,
}

impl FilmDetail {
    /// Film page for `film`, with unprobed image paths.
    pub fn new(film: &MergedFilm, assets: &AssetConventions) -> Self {
        let record = &film.record;
        let supplemental = film.supplemental.as_ref();
        let original_title = record
            .original_title()
            .filter(|original| *original != record.display_title())
            .map(str::to_string);

        Self {
            card: FilmCard::new(film, assets),
            original_title,
            runtime: display_runtime(record),
            country: record.country().map(str::to_string),
            audience: record.audience().map(capitalize_first),
            keywords: record.keyword_list().into_iter().map(str::to_string).collect(),
            synopsis: record.synopsis().map(str::to_string),
            directors_note: record
                .directors_note
                .as_deref()
                .map(str::trim)
                .filter(|note| !note.is_empty())
                .map(str::to_string),
            producer: record.producer_text(),
            festivals: record
                .festivals
                .iter()
                .filter_map(|entry| {
                    appearance_line(entry.name.as_deref(), entry.country.as_deref(), entry.date.as_deref())
                })
                .collect(),
            awards: record
                .awards
                .iter()
                .filter_map(|entry| {
                    appearance_line(entry.section.as_deref(), entry.country.as_deref(), entry.date.as_deref())
                })
                .collect(),
            review: supplemental.and_then(|info| info.review.clone()),
            status: supplemental.and_then(|info| info.status.clone()),
            trailer_url: film.trailer_url().map(str::to_string),
            director_photo: record
                .director()
                .and_then(|director| assets.director_photo_path(director)),
            still_candidates: assets.still_candidates(record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinefila_model::FestivalEntry;

    #[test]
    fn pluralizes_film_count() {
        assert_eq!(film_count_label(0), "0 films");
        assert_eq!(film_count_label(1), "1 film");
        assert_eq!(film_count_label(42), "42 films");
    }

    #[test]
    fn excerpt_is_word_aware_and_char_safe() {
        assert_eq!(excerpt("short", 10), "short");
        assert_eq!(excerpt("a wolf cub is born", 9), "a wolf…");
        assert_eq!(excerpt("žluťoučký kůň", 5), "žluťo…");
        assert_eq!(excerpt("  padded  ", 6), "padded");
    }

    #[test]
    fn capitalizes_like_a_sentence() {
        assert_eq!(capitalize_first("ADULTS"), "Adults");
        assert_eq!(capitalize_first("élan"), "Élan");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn card_heading_skips_unknown_parts() {
        let mut record = FilmRecord::default();
        record.film.title_original = Some("Wolfie".into());
        assert_eq!(card_heading(&record), "Wolfie");

        record.film.date_of_completion = Some("05/2021".into());
        record.film.runtime = Some("24:40".into());
        assert_eq!(card_heading(&record), "Wolfie | 2021 | 25 min");
        assert_eq!(director_label(&record), UNKNOWN_DIRECTOR);
    }

    #[test]
    fn card_takes_three_genres() {
        let mut record = FilmRecord::default();
        record.film.title_english = Some("Soul Shift".into());
        record.film.genres = vec!["Drama".into(), "Fantasy".into(), "Family".into(), "Short".into()];
        let card = FilmCard::new(&MergedFilm::unmatched(record), &AssetConventions::default());
        assert_eq!(card.genres, vec!["Drama", "Fantasy", "Family"]);
        assert_eq!(card.slug, "soul-shift");
        assert_eq!(card.rank, Rank::Unranked);
    }

    #[test]
    fn detail_lists_festivals_with_details() {
        let mut record = FilmRecord::default();
        record.film.title_english = Some("Wolfie".into());
        record.film.title_original = Some("Vlk".into());
        record.festivals = vec![
            FestivalEntry {
                name: Some("Zlín Film Festival".into()),
                country: Some("Czech Republic".into()),
                date: Some("2021".into()),
            },
            FestivalEntry::default(),
        ];
        let detail = FilmDetail::new(&MergedFilm::unmatched(record), &AssetConventions::default());
        assert_eq!(detail.original_title.as_deref(), Some("Vlk"));
        assert_eq!(detail.festivals, vec!["Zlín Film Festival (Czech Republic, 2021)"]);
        assert_eq!(detail.still_candidates.len(), 20);
        assert_eq!(detail.trailer_url, None);
    }
}
