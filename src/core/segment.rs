//! Typed segments produced by the text parser.
//!
//! This module defines [`TextSegment`], which classifies each run of
//! parsed text so downstream consumers (feed rows, comment views, link
//! handlers) can decide how to render it without re-scanning the source.
//! Interactive variants carry the data needed to act on a tap: the
//! cleaned address for links, the bare handle for mentions, the bare tag
//! for hashtags.
//!
//! # Examples
//!
//! ```
//! use taptext::core::segment::TextSegment;
//!
//! let seg = TextSegment::mention("@djshadow");
//! assert_eq!(seg.content(), "@djshadow");
//! assert_eq!(seg.username(), Some("djshadow"));
//! assert!(seg.is_mention());
//! ```

use serde::{Deserialize, Serialize};

/// One classified unit of parsed text.
///
/// Concatenating the `content` of every segment in parse order
/// reconstructs the original input exactly; trailing punctuation trimmed
/// from a link match is re-emitted as a separate [`TextSegment::Text`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TextSegment {
    /// A run of characters with no special meaning.
    Text { content: String },
    /// A web link. `content` is the display form; `url` is the cleaned
    /// address a navigation layer should open.
    Url { content: String, url: String },
    /// An `@username` reference. `content` keeps the leading `@`;
    /// `username` is the bare handle.
    Mention { content: String, username: String },
    /// A `#tag` reference. `content` keeps the leading `#`; `tag` is the
    /// bare tag.
    Hashtag { content: String, tag: String },
}

impl TextSegment {
    pub fn text(content: impl Into<String>) -> Self {
        TextSegment::Text {
            content: content.into(),
        }
    }

    /// Builds a link segment from a cleaned address. Display form and
    /// navigable address start out identical; display-only shortening
    /// happens at render time and never feeds back into `url`.
    pub fn link(address: impl Into<String>) -> Self {
        let address = address.into();
        TextSegment::Url {
            content: address.clone(),
            url: address,
        }
    }

    /// Builds a mention segment from matched text including the `@`.
    pub fn mention(content: impl Into<String>) -> Self {
        let content = content.into();
        let username = content.strip_prefix('@').unwrap_or(&content).to_string();
        TextSegment::Mention { content, username }
    }

    /// Builds a hashtag segment from matched text including the `#`.
    pub fn hashtag(content: impl Into<String>) -> Self {
        let content = content.into();
        let tag = content.strip_prefix('#').unwrap_or(&content).to_string();
        TextSegment::Hashtag { content, tag }
    }

    /// The exact characters this segment covers in the source text.
    pub fn content(&self) -> &str {
        match self {
            TextSegment::Text { content }
            | TextSegment::Url { content, .. }
            | TextSegment::Mention { content, .. }
            | TextSegment::Hashtag { content, .. } => content,
        }
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, TextSegment::Text { .. })
    }

    #[inline]
    pub fn is_url(&self) -> bool {
        matches!(self, TextSegment::Url { .. })
    }

    #[inline]
    pub fn is_mention(&self) -> bool {
        matches!(self, TextSegment::Mention { .. })
    }

    #[inline]
    pub fn is_hashtag(&self) -> bool {
        matches!(self, TextSegment::Hashtag { .. })
    }

    /// Navigable address if this segment is a link.
    #[inline]
    pub fn url(&self) -> Option<&str> {
        match self {
            TextSegment::Url { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Bare handle if this segment is a mention.
    #[inline]
    pub fn username(&self) -> Option<&str> {
        match self {
            TextSegment::Mention { username, .. } => Some(username),
            _ => None,
        }
    }

    /// Bare tag if this segment is a hashtag.
    #[inline]
    pub fn tag(&self) -> Option<&str> {
        match self {
            TextSegment::Hashtag { tag, .. } => Some(tag),
            _ => None,
        }
    }
}
