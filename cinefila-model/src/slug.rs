use crate::error::{ModelError, Result};
use std::fmt;

/// Lower-case `title` and collapse every run of characters outside
/// `[a-z0-9]` into a single `separator`, trimming it from both ends.
///
/// Non-ASCII letters are treated as separators, so "Žižkov" becomes
/// `i-kov` with `-`. This matches the URLs the site has already published.
pub fn slugify(title: &str, separator: char) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_separator = false;

    for ch in title.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_separator && !out.is_empty() {
                out.push(separator);
            }
            pending_separator = false;
            out.push(ch);
        } else {
            pending_separator = true;
        }
    }

    out
}

/// URL-safe identifier derived from a film's preferred title.
///
/// Slugs are the only external identifier used for deep links. They are not
/// unique: titles differing only by case or punctuation collapse together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Slug(String);

impl Slug {
    pub fn from_title(title: &str) -> Self {
        Slug(slugify(title, '-'))
    }

    /// Validate an externally supplied slug, e.g. a route segment.
    pub fn parse(raw: &str) -> Result<Self> {
        let valid = !raw.is_empty()
            && !raw.starts_with('-')
            && !raw.ends_with('-')
            && !raw.contains("--")
            && raw
                .chars()
                .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-');

        if valid {
            Ok(Slug(raw.to_string()))
        } else {
            Err(ModelError::InvalidSlug(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Slug {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Slug {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_hyphenated_slug() {
        assert_eq!(Slug::from_title("I Died in Irpin"), "i-died-in-irpin");
        assert_eq!(Slug::from_title("  --Hello,  World!-- "), "hello-world");
        assert_eq!(Slug::from_title("2046"), "2046");
    }

    #[test]
    fn case_and_punctuation_variants_collide() {
        assert_eq!(Slug::from_title("Wolfie!"), Slug::from_title("wolfie"));
    }

    #[test]
    fn non_ascii_letters_become_separators() {
        assert_eq!(slugify("Mój Dom", '-'), "m-j-dom");
        assert_eq!(slugify("About a Cow", '_'), "about_a_cow");
    }

    #[test]
    fn empty_title_gives_empty_slug() {
        assert!(Slug::from_title("").is_empty());
        assert!(Slug::from_title("!!!").is_empty());
    }

    #[test]
    fn parse_rejects_malformed_segments() {
        assert!(Slug::parse("wolfie").is_ok());
        assert!(Slug::parse("soul-shift-2").is_ok());
        assert!(Slug::parse("").is_err());
        assert!(Slug::parse("-wolfie").is_err());
        assert!(Slug::parse("Wolfie").is_err());
        assert!(Slug::parse("wolfie--2").is_err());
    }
}
