//! Plain-text extraction from the small HTML fragments used in recipes

use regex::{Captures, Regex};
use std::sync::LazyLock;

static PARAGRAPH_THEN_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</p>\s*<br\s*/?>").expect("valid regex"));
static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>|</p>").expect("valid regex"));
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</?[^>]+(>|$)").expect("valid regex"));
static ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);").expect("valid regex"));

/// Convert an HTML fragment to the plain text copied to the clipboard.
///
/// `<br>` and `</p>` become newlines (a paragraph end followed by a break
/// counts once), remaining tags are dropped, entities are decoded and the
/// result is trimmed.
pub fn strip_tags(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }
    let text = PARAGRAPH_THEN_BREAK.replace_all(html, "\n");
    let text = LINE_BREAK.replace_all(&text, "\n");
    let text = TAG.replace_all(&text, "");
    decode_entities(&text).trim().to_string()
}

/// First `max_chars` characters of the recipe's plain text.
pub fn excerpt(html: &str, max_chars: usize) -> String {
    strip_tags(html).chars().take(max_chars).collect()
}

/// Decode the named entities recipes actually use plus numeric references.
/// Unknown entities are left untouched.
pub fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &Captures<'_>| {
            let name = &caps[1];
            decode_entity(name).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn decode_entity(name: &str) -> Option<String> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse().ok()?,
        };
        return char::from_u32(code).map(String::from);
    }
    let decoded = match name {
        "nbsp" => " ",
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "ndash" => "\u{2013}",
        "mdash" => "\u{2014}",
        "hellip" => "\u{2026}",
        "deg" => "\u{b0}",
        _ => return None,
    };
    Some(decoded.to_string())
}
