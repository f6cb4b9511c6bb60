//! Completion dates are free text, usually `MM/YYYY` or a bare year.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static MONTH_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})/([0-9]{4})$").expect("static month/year pattern")
});

static STANDALONE_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)([0-9]{4})(?-u:\b)").expect("static year pattern")
});

/// First standalone four digit group, used as the year facet.
pub fn completion_year(raw: &str) -> Option<&str> {
    STANDALONE_YEAR
        .captures(raw)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Parse a completion date for ordering.
///
/// `MM/YYYY` with a valid month yields the first of that month; otherwise the
/// first standalone year yields January 1st of it.
pub fn parse_completion_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(captures) = MONTH_YEAR.captures(raw) {
        let month = captures[1].parse::<u32>().ok();
        let year = captures[2].parse::<i32>().ok();
        if let (Some(month), Some(year)) = (month, year)
            && (1..=12).contains(&month)
            && let Some(date) = NaiveDate::from_ymd_opt(year, month, 1)
        {
            return Some(date);
        }
    }

    completion_year(raw)
        .and_then(|year| year.parse::<i32>().ok())
        .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_and_year() {
        assert_eq!(parse_completion_date("05/2021"), Some(ymd(2021, 5, 1)));
        assert_eq!(parse_completion_date(" 1/2019 "), Some(ymd(2019, 1, 1)));
    }

    #[test]
    fn invalid_month_falls_back_to_year() {
        assert_eq!(parse_completion_date("13/2020"), Some(ymd(2020, 1, 1)));
    }

    #[test]
    fn bare_or_embedded_year() {
        assert_eq!(parse_completion_date("2018"), Some(ymd(2018, 1, 1)));
        assert_eq!(parse_completion_date("finished in 2017"), Some(ymd(2017, 1, 1)));
        assert_eq!(parse_completion_date("2016-03-04"), Some(ymd(2016, 1, 1)));
    }

    #[test]
    fn unparseable_dates() {
        assert_eq!(parse_completion_date(""), None);
        assert_eq!(parse_completion_date("   "), None);
        assert_eq!(parse_completion_date("soon"), None);
        assert_eq!(parse_completion_date("20210"), None);
    }

    #[test]
    fn year_facet_uses_first_match() {
        assert_eq!(completion_year("05/2021"), Some("2021"));
        assert_eq!(completion_year("2019 - 2020"), Some("2019"));
        assert_eq!(completion_year("TBA"), None);
    }
}
