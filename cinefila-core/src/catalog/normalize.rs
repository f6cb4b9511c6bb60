//! Title keys used to join the two catalogue documents.

use cinefila_model::slugify;
use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks block (U+0300..=U+036F).
fn is_stripped_mark(ch: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&ch)
}

/// Decompose and drop combining diacritics, so "Marčetić" becomes "Marcetic".
pub fn fold_diacritics(value: &str) -> String {
    value.nfd().filter(|ch| !is_stripped_mark(*ch)).collect()
}

/// Join key for a title: diacritics folded, lower-cased, every run of
/// characters outside `[a-z0-9]` collapsed to one space, trimmed.
pub fn normalize_title_key(value: &str) -> String {
    slugify(&fold_diacritics(value), ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents_and_punctuation() {
        assert_eq!(normalize_title_key("Umřel jsem v Irpini!"), "umrel jsem v irpini");
        assert_eq!(normalize_title_key("  Soul   Shift "), "soul shift");
        assert_eq!(normalize_title_key("Wolfie: Part 2"), "wolfie part 2");
    }

    #[test]
    fn precomposed_and_decomposed_forms_agree() {
        let precomposed = "Mar\u{010d}eti\u{0107}";
        let decomposed = "Marc\u{030c}etic\u{0301}";
        assert_eq!(normalize_title_key(precomposed), normalize_title_key(decomposed));
        assert_eq!(normalize_title_key(precomposed), "marcetic");
    }

    #[test]
    fn letters_without_decomposition_become_separators() {
        assert_eq!(normalize_title_key("Łódź"), "odz");
        assert_eq!(normalize_title_key("!!!"), "");
    }
}
