//! Shared constants used across the application

/// Default display width for URLs in plain, line-oriented output.
/// Wide enough to keep the domain and the start of the path readable
/// without letting one link dominate the line.
pub const DEFAULT_URL_DISPLAY_LENGTH: usize = 40;

/// Maximum handle length recognized after the `@` in a mention.
pub const MENTION_MAX_LEN: usize = 30;

/// Maximum tag length recognized after the `#` in a hashtag.
pub const HASHTAG_MAX_LEN: usize = 50;
