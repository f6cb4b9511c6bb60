use std::fmt;

/// Editorial position of a film in the catalogue.
///
/// The derived ordering places every ranked film before every unranked one
/// and ranked films ascending by their number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rank {
    Ranked(i64),
    #[default]
    Unranked,
}

impl Rank {
    /// Extract a rank from free text.
    ///
    /// Everything except ASCII digits and `-` is discarded; the remainder is
    /// read as an optionally negative integer prefix. Text without digits, or
    /// whose remainder does not start with a number, is unranked. Values past
    /// the `i64` range saturate.
    pub fn parse(raw: &str) -> Self {
        let kept: String = raw
            .chars()
            .filter(|ch| ch.is_ascii_digit() || *ch == '-')
            .collect();
        if !kept.chars().any(|ch| ch.is_ascii_digit()) {
            return Rank::Unranked;
        }

        let (negative, rest) = match kept.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, kept.as_str()),
        };
        let digits: String =
            rest.chars().take_while(|ch| ch.is_ascii_digit()).collect();
        if digits.is_empty() {
            return Rank::Unranked;
        }

        // Only overflow can fail here; saturate so an oversized ranking stays ranked.
        let value = digits.parse::<i64>().unwrap_or(i64::MAX);
        Rank::Ranked(if negative { -value } else { value })
    }

    /// True for `Ranked`.
    pub fn is_ranked(&self) -> bool {
        matches!(self, Rank::Ranked(_))
    }

    /// The rank number, if any.
    pub fn value(&self) -> Option<i64> {
        match self {
            Rank::Ranked(value) => Some(*value),
            Rank::Unranked => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Ranked(value) => write!(f, "#{value}"),
            Rank::Unranked => f.write_str("unranked"),
        }
    }
}
