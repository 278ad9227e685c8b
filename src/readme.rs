// Readme title extraction.
// Decodes the API's base64 readme content and finds its first top-level heading.

use std::sync::LazyLock;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use regex::Regex;

/// Standard alphabet, padding optional.
const CONTENT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// `# Title` at the start of a line. `##` and deeper never match.
static MARKDOWN_H1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#[ \t]+(.+)$").expect("markdown heading pattern is valid"));

/// `<h1 ...>Title</h1>`, any case, may span lines.
static HTML_H1: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<h1(?:\s[^>]*)?>(.*?)</h1\s*>").expect("html heading pattern is valid")
});

/// Decode base64 `content` and return its first top-level heading.
///
/// Markdown headings are preferred over `<h1>` tags. Headings that are empty
/// after trimming are skipped. Returns None on any decoding failure or when
/// no heading exists.
pub fn extract_title(encoded: &str) -> Option<String> {
    let text = decode_content(encoded)?;
    markdown_title(&text).or_else(|| html_title(&text))
}

/// Decode base64 text, ignoring the line wrapping GitHub inserts.
pub fn decode_content(encoded: &str) -> Option<String> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = CONTENT_ENGINE.decode(compact).ok()?;
    Some(String::from_utf8_lossy(&bytes).into_owned())
}

fn markdown_title(text: &str) -> Option<String> {
    first_non_empty(&MARKDOWN_H1, text)
}

fn html_title(text: &str) -> Option<String> {
    first_non_empty(&HTML_H1, text)
}

fn first_non_empty(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .find(|title| !title.is_empty())
        .map(str::to_string)
}
