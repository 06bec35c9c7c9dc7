//! Title and reference derivation from path segments.

use std::sync::LazyLock;

use regex::Regex;

/// Title used when a document has no usable front-matter title.
pub const UNTITLED: &str = "UNTITLED";

static ORDINAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)-").unwrap());
static HYPHEN_CAPITAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-([A-Z])").unwrap());
static SLUG_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+ - ").unwrap());

/// Numeric ordinal prefix of a path segment (`"3-setup"` -> `"3"`).
pub(crate) fn ordinal(segment: &str) -> Option<&str> {
    ORDINAL_RE
        .captures(segment)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Treat `-<Uppercase>` as a word boundary (`"Getting-Started"` -> `"Getting Started"`).
pub(crate) fn normalize_hyphens(title: &str) -> String {
    HYPHEN_CAPITAL_RE.replace_all(title, " ${1}").into_owned()
}

/// Title of a directory node derived from its folder name.
///
/// Strips the `<digits>-` ordinal prefix, then normalizes hyphens.
pub(crate) fn directory_title(segment: &str) -> String {
    let stripped = ORDINAL_RE.replace(segment, "");
    if stripped.is_empty() {
        return UNTITLED.to_owned();
    }
    normalize_hyphens(&stripped)
}

/// Display title with a leading `"slug - "` prefix removed.
pub(crate) fn short_title(title: &str) -> &str {
    match SLUG_PREFIX_RE.find(title) {
        Some(m) => &title[m.end()..],
        None => title,
    }
}

/// Logical file name of a document: its extension rewritten to `.html`.
pub(crate) fn html_name(segment: &str) -> String {
    let stem = match segment.rfind('.') {
        Some(0) | None => segment,
        Some(idx) => &segment[..idx],
    };
    format!("{stem}.html")
}

/// Turn an anchor such as `install-guide` or `installGuide` into `Install Guide`.
pub(crate) fn titleize(text: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in text.chars() {
        if c == '-' || c == '_' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }
        if c.is_uppercase()
            && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit())
            && !current.is_empty()
        {
            words.push(std::mem::take(&mut current));
        }
        current.extend(c.to_lowercase());
        prev = Some(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
