//! URL display helpers
//!
//! Parsed link segments always carry the full cleaned address; this
//! module covers the display side: checking that a candidate address is
//! structurally valid before handing it to a navigation layer, and
//! shortening long links for line-oriented output without touching the
//! navigable form.

use url::Url;

/// Returns whether a candidate string parses as a structurally valid URL.
///
/// Callers use this defensively before navigation; it never panics.
///
/// # Examples
///
/// ```
/// use taptext::utils::url::is_valid_url;
///
/// assert!(is_valid_url("https://ragestate.com/shop"));
/// assert!(!is_valid_url("not a url"));
/// ```
pub fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok()
}

/// Shortens a URL for display while preserving the domain.
///
/// Addresses that already fit come back unchanged. Otherwise the host
/// (minus any `www.` prefix) is shown with as much of the path, query,
/// and fragment as fits, then a `...` marker. Addresses that do not
/// parse, or whose host alone overflows the budget, fall back to a flat
/// prefix. The result is display-only; navigation must always use the
/// full address.
///
/// # Examples
///
/// ```
/// use taptext::utils::url::truncate_url;
///
/// assert_eq!(
///     truncate_url("https://ragestate.com/shop", 40),
///     "https://ragestate.com/shop"
/// );
///
/// let short = truncate_url("https://www.ragestate.com/shop/products/long-handle", 24);
/// assert!(short.starts_with("ragestate.com"));
/// assert!(short.ends_with("..."));
/// assert!(short.chars().count() <= 24);
/// ```
pub fn truncate_url(url: &str, max_length: usize) -> String {
    if url.chars().count() <= max_length {
        return url.to_string();
    }

    let budget = max_length.saturating_sub(3);
    if let Some(compact) = host_and_tail(url, budget) {
        return compact;
    }

    let head: String = url.chars().take(budget).collect();
    format!("{head}...")
}

/// Structured truncation: host plus whatever tail fits the budget.
/// Returns `None` when the address does not parse, has no host, or the
/// host alone exceeds the budget.
fn host_and_tail(url: &str, budget: usize) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    let host_len = host.chars().count();
    if host_len > budget {
        return None;
    }

    let mut tail = String::from(parsed.path());
    if let Some(query) = parsed.query() {
        tail.push('?');
        tail.push_str(query);
    }
    if let Some(fragment) = parsed.fragment() {
        tail.push('#');
        tail.push_str(fragment);
    }

    let shown: String = tail.chars().take(budget - host_len).collect();
    Some(format!("{host}{shown}..."))
}
