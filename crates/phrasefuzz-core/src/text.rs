//! Display-string cleanup helpers
//!
//! Small formatting utilities used around the matcher: splitting
//! `MixedCase` enum names into words and stripping embedded HTML from
//! catalog descriptions.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HTML_TAG: Regex = Regex::new(r"<[^>]+>").expect("HTML tag pattern compiles");
}

/// Entities decoded by [`strip_html`], applied in order. "&amp;" is decoded
/// before "&lt;", so "&amp;lt;" ends up as "<".
const HTML_ENTITIES: &[(&str, &str)] = &[
    ("&apos;", "'"),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&ldquo;", "\""),
    ("&rdquo;", "\""),
    ("&bdquo;", "\""),
    ("&lsquo;", "'"),
    ("&rsquo;", "'"),
    ("&sbquo;", "'"),
    ("&nbsp;", " "),
    ("&euro;", "€"),
    ("&pound;", "£"),
    ("&ndash;", "-"),
    ("&reg;", "®"),
    ("&deg;", "°"),
    ("&#38;", "&"),
    ("&#39;", "'"),
];

/// Insert a space before every ASCII upper-case letter, then trim.
///
/// ```rust
/// use phrasefuzz_core::space_mixed_case;
///
/// assert_eq!(space_mixed_case("SouthAfrican"), "South African");
/// ```
pub fn space_mixed_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 4);
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out.trim().to_string()
}

/// Decode a fixed table of HTML entities, then remove tags.
///
/// `None` and empty input pass through unchanged. Entities are decoded
/// first, so an escaped tag such as "&lt;b&gt;" is removed as well.
pub fn strip_html(text: Option<&str>) -> Option<String> {
    match text {
        Some(t) if !t.is_empty() => {
            let decoded = decode_html_entities(t);
            Some(HTML_TAG.replace_all(&decoded, "").into_owned())
        }
        other => other.map(str::to_string),
    }
}

fn decode_html_entities(text: &str) -> String {
    HTML_ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, replacement)| {
            if acc.contains(entity) {
                acc.replace(entity, replacement)
            } else {
                acc
            }
        })
}
