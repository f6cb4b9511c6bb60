//! JSON decoding that tolerates the trailing commas hand-edited documents
//! tend to pick up.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::{CatalogueError, Result};

static TRAILING_COMMA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*([}\]])").expect("static trailing comma pattern"));

/// Drop commas directly before `}` or `]`.
///
/// Operates on raw text, so a string literal containing `,}` is rewritten
/// too. Only used after strict parsing has already failed.
pub fn repair_trailing_commas(text: &str) -> Cow<'_, str> {
    TRAILING_COMMA.replace_all(text, "$1")
}

/// Strict decode.
pub fn decode_strict<T: DeserializeOwned>(document: &str, bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|source| CatalogueError::Decode {
        document: document.to_string(),
        source,
    })
}

/// Strict decode, falling back to a trailing-comma repair. The strict error
/// is reported when the repair changes nothing or does not help.
pub fn decode_lenient<T: DeserializeOwned>(document: &str, bytes: &[u8]) -> Result<T> {
    let strict_error = match serde_json::from_slice(bytes) {
        Ok(value) => return Ok(value),
        Err(err) => err,
    };

    let text = String::from_utf8_lossy(bytes);
    let repaired = repair_trailing_commas(&text);
    if matches!(repaired, Cow::Borrowed(_)) {
        return Err(CatalogueError::Decode {
            document: document.to_string(),
            source: strict_error,
        });
    }

    match serde_json::from_str(&repaired) {
        Ok(value) => {
            warn!(document, error = %strict_error, "repaired trailing commas in document");
            Ok(value)
        }
        Err(_) => Err(CatalogueError::Decode {
            document: document.to_string(),
            source: strict_error,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinefila_model::SupplementalEntry;

    #[test]
    fn repairs_objects_and_arrays() {
        let broken = "[{\"Ranking\": \"1\",\n  },\n]";
        assert_eq!(repair_trailing_commas(broken), "[{\"Ranking\": \"1\"}]");
    }

    #[test]
    fn valid_json_is_untouched() {
        assert!(matches!(
            repair_trailing_commas(r#"{"a": [1, 2]}"#),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn lenient_decode_accepts_trailing_commas() {
        let bytes = br#"[{"Film": {"Title_Original": "Wolfie",}, "Ranking": 2,},]"#;
        let entries: Vec<SupplementalEntry> = decode_lenient("supplemental", bytes).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].ranking.as_deref(), Some("2"));
    }

    #[test]
    fn strict_decode_rejects_trailing_commas() {
        let bytes = br#"[{"Ranking": "2",}]"#;
        let err = decode_strict::<Vec<SupplementalEntry>>("supplemental", bytes).unwrap_err();
        assert!(matches!(err, CatalogueError::Decode { ref document, .. } if document == "supplemental"));
    }

    #[test]
    fn unrepairable_documents_report_the_original_error() {
        let err = decode_lenient::<Vec<SupplementalEntry>>("supplemental", b"[{,}]").unwrap_err();
        assert!(err.to_string().starts_with("failed to decode supplemental"));
    }
}
