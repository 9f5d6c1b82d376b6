//! Markup stripping for submitted text.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Remove every `<...>` tag from `text`.
///
/// Tags are dropped verbatim; entities such as `&lt;` are left untouched.
/// Applying this twice yields the same result as applying it once.
pub fn strip_tags(text: &str) -> String {
    TAG_RE.replace_all(text, "").into_owned()
}

/// Trim, strip tags, and trim again so removed markup leaves no edge whitespace.
pub fn normalize(text: &str) -> String {
    strip_tags(text.trim()).trim().to_string()
}
