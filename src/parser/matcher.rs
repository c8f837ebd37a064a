//! Lexical scan for link, mention, and hashtag tokens.
//!
//! A single combined alternation drives one left-to-right pass, so
//! matches surface in document order without a merge step and the
//! winning branch at any position is fixed by the alternation order
//! (link, then mention, then hashtag).

use std::sync::OnceLock;

use regex::Regex;

use crate::core::constants::{HASHTAG_MAX_LEN, MENTION_MAX_LEN};

/// Token classes recognized by the scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Url,
    Mention,
    Hashtag,
}

/// One raw, non-overlapping match: the exact matched text, its byte
/// offset in the input, and which branch matched it.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RawMatch<'a> {
    pub text: &'a str,
    pub start: usize,
    pub kind: TokenKind,
}

/// Link bodies start with an `http://` or `https://` scheme (any case)
/// and run until whitespace or one of `<`, `>`, `"`. Handles and tags
/// are runs of `[A-Za-z0-9_]` capped at fixed lengths; an `@` or `#`
/// with no word character after it matches nothing.
fn token_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        let pattern = format!(
            r#"(?P<url>(?i:https?)://[^\s<>"]+)|(?P<mention>@[A-Za-z0-9_]{{1,{MENTION_MAX_LEN}}})|(?P<hashtag>#[A-Za-z0-9_]{{1,{HASHTAG_MAX_LEN}}})"#
        );
        Regex::new(&pattern).expect("token pattern is statically valid")
    })
}

/// Scans `text` once and returns every match in ascending start order.
/// Pure: the compiled pattern is immutable and no scan state outlives
/// the call.
pub(crate) fn scan(text: &str) -> Vec<RawMatch<'_>> {
    token_regex()
        .captures_iter(text)
        .filter_map(|caps| {
            let (kind, m) = if let Some(m) = caps.name("url") {
                (TokenKind::Url, m)
            } else if let Some(m) = caps.name("mention") {
                (TokenKind::Mention, m)
            } else if let Some(m) = caps.name("hashtag") {
                (TokenKind::Hashtag, m)
            } else {
                return None;
            };
            Some(RawMatch {
                text: m.as_str(),
                start: m.start(),
                kind,
            })
        })
        .collect()
}
