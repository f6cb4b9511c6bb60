use cinefila_model::{FilterDimension, LengthBucket};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Active filter state: a free-text search plus one set per dimension.
///
/// An empty set places no restriction on its dimension. Text values are
/// compared case-insensitively when matching, but kept as entered here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSelection {
    pub search: String,
    pub genres: BTreeSet<String>,
    pub years: BTreeSet<String>,
    pub lengths: BTreeSet<LengthBucket>,
    pub audiences: BTreeSet<String>,
    pub keywords: BTreeSet<String>,
}

impl FilterSelection {
    /// A selection that restricts nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Add a genre.
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genres.insert(genre.into());
        self
    }

    /// Add a completion year.
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.years.insert(year.into());
        self
    }

    /// Add a length bucket.
    pub fn with_length(mut self, length: LengthBucket) -> Self {
        self.lengths.insert(length);
        self
    }

    /// Add a target audience.
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audiences.insert(audience.into());
        self
    }

    /// Add a keyword.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.insert(keyword.into());
        self
    }

    /// Copy of this selection with one dimension cleared.
    pub fn without(&self, dimension: FilterDimension) -> Self {
        let mut copy = self.clone();
        match dimension {
            FilterDimension::Genre => copy.genres.clear(),
            FilterDimension::Year => copy.years.clear(),
            FilterDimension::Length => copy.lengths.clear(),
            FilterDimension::Audience => copy.audiences.clear(),
            FilterDimension::Keyword => copy.keywords.clear(),
        }
        copy
    }

    /// Trimmed, lower-cased search text; `None` when blank.
    pub fn search_term(&self) -> Option<String> {
        let trimmed = self.search.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    /// No search text and no selected value in any dimension.
    pub fn is_unrestricted(&self) -> bool {
        self.search_term().is_none()
            && FilterDimension::all()
                .iter()
                .all(|dimension| self.selected_count(*dimension) == 0)
    }

    /// Values selected in `dimension`.
    pub fn selected_count(&self, dimension: FilterDimension) -> usize {
        match dimension {
            FilterDimension::Genre => self.genres.len(),
            FilterDimension::Year => self.years.len(),
            FilterDimension::Length => self.lengths.len(),
            FilterDimension::Audience => self.audiences.len(),
            FilterDimension::Keyword => self.keywords.len(),
        }
    }
}

/// Option values per filter dimension, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Alphabetical.
    pub genres: Vec<String>,
    /// Most recent first.
    pub years: Vec<String>,
    /// Ordinal: short, mid-length, full-length.
    pub lengths: Vec<LengthBucket>,
    pub audiences: Vec<String>,
    pub keywords: Vec<String>,
}

impl FilterOptions {
    /// Values of one dimension as display strings.
    pub fn values(&self, dimension: FilterDimension) -> Vec<&str> {
        match dimension {
            FilterDimension::Genre => self.genres.iter().map(String::as_str).collect(),
            FilterDimension::Year => self.years.iter().map(String::as_str).collect(),
            FilterDimension::Length => self.lengths.iter().map(LengthBucket::label).collect(),
            FilterDimension::Audience => self.audiences.iter().map(String::as_str).collect(),
            FilterDimension::Keyword => self.keywords.iter().map(String::as_str).collect(),
        }
    }

    /// Whether `value` is offered for `dimension`, ignoring case.
    pub fn contains(&self, dimension: FilterDimension, value: &str) -> bool {
        let wanted = value.trim().to_lowercase();
        self.values(dimension)
            .into_iter()
            .any(|offered| offered.to_lowercase() == wanted)
    }

    /// True when no dimension offers a value.
    pub fn is_empty(&self) -> bool {
        FilterDimension::all()
            .iter()
            .all(|dimension| self.values(*dimension).is_empty())
    }
}
