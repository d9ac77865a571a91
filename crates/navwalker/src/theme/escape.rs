//! HTML escaping for text, attributes, and URLs.

use tracing::warn;

/// URL schemes that are never emitted into an `href`.
const BLOCKED_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

/// Escape text for use in HTML content or a quoted attribute value.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Escape a URL for an `href`, or `None` if it must not be emitted.
pub fn escape_url(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    // Browsers ignore embedded whitespace and control characters in schemes.
    let compact: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();
    if BLOCKED_SCHEMES.iter().any(|scheme| compact.starts_with(scheme)) {
        warn!(url = %url, "dropping menu link with unsafe URL scheme");
        return None;
    }

    Some(html_escape(url))
}
