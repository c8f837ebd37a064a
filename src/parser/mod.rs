//! Scanning pass that splits free-form text into typed segments.
//!
//! [`parse_text`] is the primary entry point: one left-to-right scan
//! over the input interleaves plain-text runs with link, mention, and
//! hashtag segments, in source order, without losing a character. The
//! extractors re-run the parse and project out one field per
//! interactive variant.

mod clean;
mod matcher;

use crate::core::segment::TextSegment;

use self::matcher::TokenKind;

/// Parses text into an ordered segment sequence.
///
/// Every character of the input lands in exactly one segment, in source
/// order; empty input yields an empty vector rather than a single empty
/// text segment. Trailing punctuation trimmed from a link match is
/// re-emitted as a plain-text segment immediately after it, so the
/// segment contents always concatenate back to the input.
///
/// The function is total: any string, including ones with no matches or
/// with unusual Unicode content, produces a well-defined result.
///
/// # Examples
///
/// ```
/// use taptext::core::segment::TextSegment;
/// use taptext::parser::parse_text;
///
/// let segments = parse_text("#RAGE2025 is here");
/// assert_eq!(segments[0], TextSegment::hashtag("#RAGE2025"));
/// assert_eq!(segments[1], TextSegment::text(" is here"));
/// ```
pub fn parse_text(text: &str) -> Vec<TextSegment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for token in matcher::scan(text) {
        if token.start > cursor {
            segments.push(TextSegment::text(&text[cursor..token.start]));
        }
        match token.kind {
            TokenKind::Url => {
                let (address, trimmed) = clean::split_trailing(token.text);
                segments.push(TextSegment::link(address));
                if !trimmed.is_empty() {
                    segments.push(TextSegment::text(trimmed));
                }
            }
            TokenKind::Mention => segments.push(TextSegment::mention(token.text)),
            TokenKind::Hashtag => segments.push(TextSegment::hashtag(token.text)),
        }
        cursor = token.start + token.text.len();
    }

    if cursor < text.len() {
        segments.push(TextSegment::text(&text[cursor..]));
    }

    segments
}

/// Collects the navigable address of every link in the text, in order.
pub fn extract_urls(text: &str) -> Vec<String> {
    parse_text(text)
        .into_iter()
        .filter_map(|segment| match segment {
            TextSegment::Url { url, .. } => Some(url),
            _ => None,
        })
        .collect()
}

/// Collects the bare handle of every mention in the text, in order.
pub fn extract_mentions(text: &str) -> Vec<String> {
    parse_text(text)
        .into_iter()
        .filter_map(|segment| match segment {
            TextSegment::Mention { username, .. } => Some(username),
            _ => None,
        })
        .collect()
}

/// Collects the bare tag of every hashtag in the text, in order.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    parse_text(text)
        .into_iter()
        .filter_map(|segment| match segment {
            TextSegment::Hashtag { tag, .. } => Some(tag),
            _ => None,
        })
        .collect()
}
