//! Trailing-punctuation cleanup for raw link matches.
//!
//! The scanner's link branch runs to the next whitespace or delimiter,
//! so it happily swallows a sentence-ending period or the closing half
//! of a bracket pair that opened before the link. Splitting those
//! characters off keeps the navigable address clean while the caller
//! re-emits them as plain text, so no input characters are lost.

/// Characters treated as sentence punctuation when they trail a link.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Splits a raw link match into the cleaned address and the trailing
/// characters that were trimmed off, in their original order.
///
/// Trimming happens in three steps: the whole trailing run of sentence
/// punctuation first, then at most one unbalanced `)`, then at most one
/// unbalanced `]`. A closer only counts as unbalanced when the remainder
/// holds more closers than openers, which protects addresses like
/// `https://example.com/page(2)`. Counting is local to the match string.
pub(crate) fn split_trailing(raw: &str) -> (&str, &str) {
    let mut cleaned = raw.trim_end_matches(TRAILING_PUNCTUATION);
    if cleaned.ends_with(')') && count_char(cleaned, ')') > count_char(cleaned, '(') {
        cleaned = &cleaned[..cleaned.len() - 1];
    }
    if cleaned.ends_with(']') && count_char(cleaned, ']') > count_char(cleaned, '[') {
        cleaned = &cleaned[..cleaned.len() - 1];
    }
    (cleaned, &raw[cleaned.len()..])
}

fn count_char(s: &str, needle: char) -> usize {
    s.chars().filter(|&c| c == needle).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_clean_addresses_alone() {
        assert_eq!(
            split_trailing("https://ragestate.com/shop"),
            ("https://ragestate.com/shop", "")
        );
    }

    #[test]
    fn strips_a_run_of_sentence_punctuation() {
        assert_eq!(split_trailing("https://a.io/b."), ("https://a.io/b", "."));
        assert_eq!(
            split_trailing("https://a.io/b?!;:,."),
            ("https://a.io/b", "?!;:,.")
        );
    }

    #[test]
    fn strips_one_unbalanced_close_paren() {
        assert_eq!(
            split_trailing("https://example.com/page)"),
            ("https://example.com/page", ")")
        );
        // Only one, even when two trail.
        assert_eq!(
            split_trailing("https://example.com/page))"),
            ("https://example.com/page)", ")")
        );
    }

    #[test]
    fn keeps_balanced_parens_in_the_path() {
        assert_eq!(
            split_trailing("https://example.com/page(2)"),
            ("https://example.com/page(2)", "")
        );
    }

    #[test]
    fn strips_one_unbalanced_close_bracket() {
        assert_eq!(split_trailing("https://a.io/b]"), ("https://a.io/b", "]"));
        assert_eq!(
            split_trailing("https://a.io/b[1]"),
            ("https://a.io/b[1]", "")
        );
    }

    #[test]
    fn applies_steps_in_order() {
        // Punctuation run first, then the paren check sees the remainder.
        assert_eq!(
            split_trailing("https://a.io/b)."),
            ("https://a.io/b", ").")
        );
        // Paren strip happens before the bracket check.
        assert_eq!(
            split_trailing("https://a.io/b])"),
            ("https://a.io/b", "])")
        );
    }

    #[test]
    fn balanced_path_with_trailing_period() {
        assert_eq!(
            split_trailing("https://example.com/page(2)."),
            ("https://example.com/page(2)", ".")
        );
    }

    #[test]
    fn bare_scheme_survives_cleaning() {
        // Punctuation-only bodies can trim down to the scheme; that is
        // still a non-empty prefix of the raw match.
        assert_eq!(split_trailing("https://."), ("https://", "."));
    }
}
