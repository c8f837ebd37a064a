//! Plain and JSON renderings of parse results.
//!
//! Builders return strings so tests can assert on them directly; the
//! dispatch layer in [`super`] decides where they go.

use crate::core::segment::TextSegment;
use crate::utils::url::truncate_url;

/// One line per segment: the kind, then the display form. Text contents
/// are quoted so leading and trailing whitespace stay visible. Link
/// lines show the truncated display string and, when it differs, the
/// full navigable address after it.
pub(super) fn render_segments_plain(segments: &[TextSegment], url_width: usize) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            TextSegment::Text { content } => {
                out.push_str(&format!("text     {content:?}\n"));
            }
            TextSegment::Url { url, .. } => {
                let display = truncate_url(url, url_width);
                if display == *url {
                    out.push_str(&format!("url      {url}\n"));
                } else {
                    out.push_str(&format!("url      {display} ({url})\n"));
                }
            }
            TextSegment::Mention { content, .. } => {
                out.push_str(&format!("mention  {content}\n"));
            }
            TextSegment::Hashtag { content, .. } => {
                out.push_str(&format!("hashtag  {content}\n"));
            }
        }
    }
    out
}

pub(super) fn render_segments_json(segments: &[TextSegment]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(segments)
}

pub(super) fn render_list_plain(items: &[String]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(item);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_text;

    #[test]
    fn plain_rendering_lists_one_segment_per_line() {
        let segments = parse_text("Check out https://ragestate.com with @djshadow!");
        let rendered = render_segments_plain(&segments, 40);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "text     \"Check out \"",
                "url      https://ragestate.com",
                "text     \" with \"",
                "mention  @djshadow",
                "text     \"!\"",
            ]
        );
    }

    #[test]
    fn plain_rendering_shows_full_address_when_truncated() {
        let url = "https://ragestate.com/shop/products/very-long-product-handle-name";
        let segments = parse_text(url);
        let rendered = render_segments_plain(&segments, 30);
        assert_eq!(
            rendered,
            format!("url      ragestate.com/shop/products... ({url})\n")
        );
    }

    #[test]
    fn json_rendering_tags_each_segment() {
        let segments = parse_text("#rave at https://a.io");
        let rendered = render_segments_json(&segments).expect("serialize failed");
        let value: serde_json::Value =
            serde_json::from_str(&rendered).expect("output must be valid JSON");
        assert_eq!(value[0]["kind"], "hashtag");
        assert_eq!(value[0]["tag"], "rave");
        assert_eq!(value[2]["kind"], "url");
        assert_eq!(value[2]["url"], "https://a.io");
    }

    #[test]
    fn list_rendering_is_line_per_item() {
        let items = vec!["a".to_string(), "bb".to_string()];
        assert_eq!(render_list_plain(&items), "a\nbb\n");
        assert_eq!(render_list_plain(&[]), "");
    }
}
