//! Editorial extras kept in `aditional_info.json` and joined onto films by
//! title.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SupplementalTitles {
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
}

impl SupplementalTitles {
    /// Non-blank title variants: original, English, other.
    pub fn variants(&self) -> impl Iterator<Item = &str> {
        [&self.title_original, &self.title_english, &self.title_other]
            .into_iter()
            .filter_map(|title| title.as_deref())
            .filter(|title| !title.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SupplementalEntry {
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Film", deserialize_with = "crate::serde_util::null_default")
    )]
    pub film: SupplementalTitles,
    /// Free text; may be a JSON number in the source document.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Ranking", deserialize_with = "crate::serde_util::text")
    )]
    pub ranking: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Review", deserialize_with = "crate::serde_util::text")
    )]
    pub review: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Sales", deserialize_with = "crate::serde_util::text")
    )]
    pub sales: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Status", deserialize_with = "crate::serde_util::text")
    )]
    pub status: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "Festival_Distribution_Only",
            deserialize_with = "crate::serde_util::text"
        )
    )]
    pub festival_distribution_only: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Download_poster", deserialize_with = "crate::serde_util::text")
    )]
    pub download_poster: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Download_stills", deserialize_with = "crate::serde_util::text")
    )]
    pub download_stills: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Download_presskit", deserialize_with = "crate::serde_util::text")
    )]
    pub download_presskit: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Sharing", deserialize_with = "crate::serde_util::text")
    )]
    pub sharing: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Trailer_url", deserialize_with = "crate::serde_util::text")
    )]
    pub trailer_url: Option<String>,
}
