use crate::error::ModelError;
use std::fmt;
use std::str::FromStr;

/// Coarse runtime category used by the length filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LengthBucket {
    #[cfg_attr(feature = "serde", serde(rename = "short"))]
    Short,
    #[cfg_attr(feature = "serde", serde(rename = "mid-length"))]
    MidLength,
    #[cfg_attr(feature = "serde", serde(rename = "full-length"))]
    FullLength,
}

impl LengthBucket {
    pub const SHORT_UPPER_EXCLUSIVE: u32 = 40;
    pub const MID_UPPER_INCLUSIVE: u32 = 70;

    pub fn all() -> &'static [LengthBucket] {
        use LengthBucket::*;
        &[Short, MidLength, FullLength]
    }

    /// `< 40` short, `40..=70` mid-length, `> 70` full-length.
    pub fn from_minutes(minutes: u32) -> Self {
        if minutes < Self::SHORT_UPPER_EXCLUSIVE {
            LengthBucket::Short
        } else if minutes <= Self::MID_UPPER_INCLUSIVE {
            LengthBucket::MidLength
        } else {
            LengthBucket::FullLength
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LengthBucket::Short => "short",
            LengthBucket::MidLength => "mid-length",
            LengthBucket::FullLength => "full-length",
        }
    }
}

impl fmt::Display for LengthBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for LengthBucket {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        LengthBucket::all()
            .iter()
            .copied()
            .find(|bucket| bucket.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ModelError::InvalidOption {
                dimension: "length",
                value: s.to_string(),
            })
    }
}

/// Independent axes of the catalogue filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FilterDimension {
    Genre,
    Year,
    Length,
    Audience,
    Keyword,
}

impl FilterDimension {
    pub fn all() -> &'static [FilterDimension] {
        use FilterDimension::*;
        &[Genre, Year, Length, Audience, Keyword]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterDimension::Genre => "genre",
            FilterDimension::Year => "year",
            FilterDimension::Length => "length",
            FilterDimension::Audience => "audience",
            FilterDimension::Keyword => "keyword",
        }
    }

    /// Genre and keyword carry several values per film; the others one.
    pub fn is_multi_valued(&self) -> bool {
        matches!(self, FilterDimension::Genre | FilterDimension::Keyword)
    }
}

impl fmt::Display for FilterDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
