//! Primary catalogue records as published in `all_html_data.json`.
//!
//! Field names follow the document keys, so the serde renames below are the
//! wire contract. Every field is optional: editors leave blanks, write
//! numbers where strings are expected, or drop whole sections.

use crate::party::PartyInfo;
use crate::slug::Slug;

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FilmRecord {
    #[cfg_attr(feature = "serde", serde(rename = "Film"))]
    pub film: FilmInfo,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Premiere", deserialize_with = "crate::serde_util::null_default")
    )]
    pub premieres: Vec<PremiereEntry>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Festivals", deserialize_with = "crate::serde_util::null_default")
    )]
    pub festivals: Vec<FestivalEntry>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Awards", deserialize_with = "crate::serde_util::null_default")
    )]
    pub awards: Vec<AwardEntry>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Logline", deserialize_with = "crate::serde_util::text")
    )]
    pub logline: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Synopsis", deserialize_with = "crate::serde_util::text")
    )]
    pub synopsis: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Directors_Note", deserialize_with = "crate::serde_util::text")
    )]
    pub directors_note: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Crew", deserialize_with = "crate::serde_util::null_default")
    )]
    pub crew: Crew,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Director_Bio", deserialize_with = "crate::serde_util::null_default")
    )]
    pub director_bio: DirectorBio,
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "Director_Filmography",
            deserialize_with = "crate::serde_util::null_default"
        )
    )]
    pub director_filmography: Vec<PartyInfo>,
    #[cfg_attr(feature = "serde", serde(rename = "Technical_Details"))]
    pub technical_details: Option<PartyInfo>,
    #[cfg_attr(feature = "serde", serde(rename = "Production_Company"))]
    pub production_company: Option<PartyInfo>,
    #[cfg_attr(feature = "serde", serde(rename = "Producer_Representative"))]
    pub producer_representative: Option<PartyInfo>,
    #[cfg_attr(feature = "serde", serde(rename = "Contact"))]
    pub contact: Option<PartyInfo>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FilmInfo {
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Title_Original", deserialize_with = "crate::serde_util::text")
    )]
    pub title_original: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Title_English", deserialize_with = "crate::serde_util::text")
    )]
    pub title_english: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Title_Other", deserialize_with = "crate::serde_util::text")
    )]
    pub title_other: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Language_Original", deserialize_with = "crate::serde_util::text")
    )]
    pub language_original: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Language_Subtitles", deserialize_with = "crate::serde_util::text")
    )]
    pub language_subtitles: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "Country_of_production",
            deserialize_with = "crate::serde_util::text"
        )
    )]
    pub country_of_production: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Date_of_completion", deserialize_with = "crate::serde_util::text")
    )]
    pub date_of_completion: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Runtime", deserialize_with = "crate::serde_util::text")
    )]
    pub runtime: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Number_of_series", deserialize_with = "crate::serde_util::text")
    )]
    pub number_of_series: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Number_of_episodes", deserialize_with = "crate::serde_util::text")
    )]
    pub number_of_episodes: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "Titles_and_runtime_of_episodes",
            deserialize_with = "crate::serde_util::text"
        )
    )]
    pub episodes_summary: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "First_Film", deserialize_with = "crate::serde_util::text")
    )]
    pub first_film: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Genre_List", deserialize_with = "crate::serde_util::null_default")
    )]
    pub genres: Vec<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Genre_Other", deserialize_with = "crate::serde_util::text")
    )]
    pub genre_other: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Keywords", deserialize_with = "crate::serde_util::text")
    )]
    pub keywords: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Target_Group", deserialize_with = "crate::serde_util::null_default")
    )]
    pub target_group: TargetGroup,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TargetGroup {
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Rating", deserialize_with = "crate::serde_util::text")
    )]
    pub rating: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Audience", deserialize_with = "crate::serde_util::text")
    )]
    pub audience: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Other", deserialize_with = "crate::serde_util::text")
    )]
    pub other: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PremiereEntry {
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Date", deserialize_with = "crate::serde_util::text")
    )]
    pub date: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Country", deserialize_with = "crate::serde_util::text")
    )]
    pub country: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "Name_of_place_of_premiere",
            deserialize_with = "crate::serde_util::text"
        )
    )]
    pub place: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FestivalEntry {
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Date", deserialize_with = "crate::serde_util::text")
    )]
    pub date: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Country", deserialize_with = "crate::serde_util::text")
    )]
    pub country: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Name_of_Festival", deserialize_with = "crate::serde_util::text")
    )]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AwardEntry {
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Date", deserialize_with = "crate::serde_util::text")
    )]
    pub date: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Country", deserialize_with = "crate::serde_util::text")
    )]
    pub country: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "Festival_Section_of_Competition",
            deserialize_with = "crate::serde_util::text"
        )
    )]
    pub section: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Crew {
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Director(s)", deserialize_with = "crate::serde_util::text")
    )]
    pub directors: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Screenplay_writer(s)", deserialize_with = "crate::serde_util::text")
    )]
    pub writers: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "Director(s)_of_Photography",
            deserialize_with = "crate::serde_util::text"
        )
    )]
    pub cinematographers: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Editor(s)", deserialize_with = "crate::serde_util::text")
    )]
    pub editors: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Sound_director(s)", deserialize_with = "crate::serde_util::text")
    )]
    pub sound_directors: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Art_director(s)", deserialize_with = "crate::serde_util::text")
    )]
    pub art_directors: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Music_composer(s)", deserialize_with = "crate::serde_util::text")
    )]
    pub composers: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Cast", deserialize_with = "crate::serde_util::null_default")
    )]
    pub cast: Vec<PartyInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DirectorBio {
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Date_of_birth", deserialize_with = "crate::serde_util::text")
    )]
    pub date_of_birth: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Bio_Text", deserialize_with = "crate::serde_util::text")
    )]
    pub bio_text: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.trim().is_empty())
}

impl FilmInfo {
    /// Title variants in join preference order: original, English, other.
    pub fn title_variants(&self) -> impl Iterator<Item = &str> {
        [
            non_blank(&self.title_original),
            non_blank(&self.title_english),
            non_blank(&self.title_other),
        ]
        .into_iter()
        .flatten()
    }
}

impl FilmRecord {
    /// English title when present, otherwise the original title.
    pub fn preferred_title(&self) -> Option<&str> {
        non_blank(&self.film.title_english)
            .or_else(|| non_blank(&self.film.title_original))
    }

    pub fn display_title(&self) -> &str {
        self.preferred_title().unwrap_or("Untitled")
    }

    pub fn original_title(&self) -> Option<&str> {
        non_blank(&self.film.title_original)
    }

    pub fn slug(&self) -> Slug {
        Slug::from_title(self.preferred_title().unwrap_or_default())
    }

    pub fn director(&self) -> Option<&str> {
        non_blank(&self.crew.directors)
    }

    pub fn country(&self) -> Option<&str> {
        non_blank(&self.film.country_of_production)
    }

    pub fn logline(&self) -> Option<&str> {
        non_blank(&self.logline)
    }

    pub fn synopsis(&self) -> Option<&str> {
        non_blank(&self.synopsis)
    }

    pub fn audience(&self) -> Option<&str> {
        non_blank(&self.film.target_group.audience).map(str::trim)
    }

    /// Comma separated keywords, trimmed, blanks dropped.
    pub fn keyword_list(&self) -> Vec<&str> {
        self.film
            .keywords
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|keyword| !keyword.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn genre_list(&self) -> impl Iterator<Item = &str> {
        self.film
            .genres
            .iter()
            .map(|genre| genre.trim())
            .filter(|genre| !genre.is_empty())
    }

    /// Rendered production company and producer representative.
    pub fn producer_text(&self) -> Option<String> {
        let parts: Vec<String> = [&self.production_company, &self.producer_representative]
            .into_iter()
            .flatten()
            .map(PartyInfo::render)
            .filter(|text| !text.is_empty())
            .collect();
        (!parts.is_empty()).then(|| parts.join(" / "))
    }

    pub fn festival_names(&self) -> impl Iterator<Item = &str> {
        self.festivals.iter().filter_map(|entry| non_blank(&entry.name))
    }

    pub fn award_names(&self) -> impl Iterator<Item = &str> {
        self.awards.iter().filter_map(|entry| non_blank(&entry.section))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(original: Option<&str>, english: Option<&str>) -> FilmRecord {
        FilmRecord {
            film: FilmInfo {
                title_original: original.map(str::to_string),
                title_english: english.map(str::to_string),
                ..FilmInfo::default()
            },
            ..FilmRecord::default()
        }
    }

    #[test]
    fn prefers_english_title() {
        let film = titled(Some("Umřel jsem v Irpini"), Some("I Died in Irpin"));
        assert_eq!(film.display_title(), "I Died in Irpin");
        assert_eq!(film.slug(), "i-died-in-irpin");
    }

    #[test]
    fn blank_titles_fall_back() {
        let film = titled(Some("Wolfie"), Some("  "));
        assert_eq!(film.display_title(), "Wolfie");

        let untitled = titled(None, Some(""));
        assert_eq!(untitled.display_title(), "Untitled");
        assert!(untitled.slug().is_empty());
    }

    #[test]
    fn title_variants_follow_join_order() {
        let mut film = titled(Some("Orig"), Some("Eng"));
        film.film.title_other = Some("Other".into());
        let variants: Vec<_> = film.film.title_variants().collect();
        assert_eq!(variants, vec!["Orig", "Eng", "Other"]);
    }

    #[test]
    fn keywords_split_and_trim() {
        let mut film = FilmRecord::default();
        film.film.keywords = Some(" war, family ,, memory ".into());
        assert_eq!(film.keyword_list(), vec!["war", "family", "memory"]);
    }

    #[test]
    fn producer_text_joins_both_parties() {
        let mut film = FilmRecord::default();
        assert_eq!(film.producer_text(), None);
        film.production_company = Some(PartyInfo::from("FAMU"));
        film.producer_representative = Some(PartyInfo::Structured(vec![(
            "Name".into(),
            "Jana Nováková".into(),
        )]));
        assert_eq!(film.producer_text().as_deref(), Some("FAMU / Jana Nováková"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn decodes_sparse_and_sloppy_documents() {
        let raw = r#"{
            "Film": {
                "Title_Original": "Wolfie",
                "Runtime": 45,
                "Genre_List": null,
                "Target_Group": {"Audience": "Youth"}
            },
            "Festivals": [{"Name_of_Festival": "Jihlava IDFF", "Country": "CZ"}],
            "Awards": null,
            "Crew": {"Director(s)": "Anna Kovács", "Cast": ["A", {"Name": "B"}]},
            "Production_Company": {"Name": "Studio"}
        }"#;
        let film: FilmRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(film.film.runtime.as_deref(), Some("45"));
        assert!(film.film.genres.is_empty());
        assert!(film.awards.is_empty());
        assert_eq!(film.audience(), Some("Youth"));
        assert_eq!(film.director(), Some("Anna Kovács"));
        assert_eq!(film.crew.cast.len(), 2);
        assert_eq!(film.festival_names().collect::<Vec<_>>(), vec!["Jihlava IDFF"]);
        assert_eq!(film.producer_text().as_deref(), Some("Studio"));
    }
}
